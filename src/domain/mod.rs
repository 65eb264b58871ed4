// SPDX-License-Identifier: MPL-2.0
//! Domain types shared across the carousel core.

pub mod playback;
pub mod video;
