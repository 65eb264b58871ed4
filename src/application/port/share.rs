// SPDX-License-Identifier: MPL-2.0
//! Share flow port definitions: clipboard access and external link opening.
//!
//! Both are side-effect ports the share flow calls without depending on the
//! host platform. Failures are logged by the caller and never shown to the
//! user.

use crate::error::Result;

/// Port for writing text to the system clipboard.
pub trait Clipboard {
    /// Replaces the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns an error when the host clipboard is unavailable.
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Port for opening a URL in a new external browsing context.
pub trait LinkOpener {
    /// Opens `url` externally (new tab, default browser, deep link target).
    ///
    /// # Errors
    ///
    /// Returns an error when no handler could be launched.
    fn open(&self, url: &str) -> Result<()>;
}
