// SPDX-License-Identifier: MPL-2.0
//! System adapters: clipboard and external link opening.

use crate::application::port::{Clipboard, LinkOpener};
use crate::error::{Error, Result};

/// [`Clipboard`] adapter backed by the OS clipboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// Connects to the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error when the host has no clipboard available (e.g. a
    /// headless environment).
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text)
            .map_err(|e| Error::Clipboard(e.to_string()))
    }
}

/// [`LinkOpener`] adapter that hands URLs to the OS default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) -> Result<()> {
        open::that(url)?;
        Ok(())
    }
}
