// SPDX-License-Identifier: MPL-2.0
//! Reference adapters for the application ports.

pub mod http;
pub mod system;
