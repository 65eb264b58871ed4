// SPDX-License-Identifier: MPL-2.0
//! Persistent preference store.
//!
//! A small key-value store backed by one JSON document on disk. It survives
//! page/app reloads and holds the cached video list and the liked-id set
//! under fixed keys. All reducer logic goes through this type; nothing else
//! in the crate touches the storage file directly.
//!
//! The store is shared mutable state across sessions and processes with no
//! cross-instance lock; the last writer wins. Cross-process arbitration is
//! out of scope.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

const STORE_FILE: &str = "preferences.json";
const APP_NAME: &str = "ReelCarousel";

/// Fixed key names for the state this crate persists.
pub mod keys {
    /// Cached video list (JSON array mirroring the Video wire shape).
    pub const VIDEO_DATA: &str = "videoData";
    /// Liked video ids (JSON array of strings).
    pub const LIKED_VIDEOS: &str = "likedVideos";
}

/// File-backed key-value store for locally persisted state.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Opens the store at the platform data directory, or `None` when the
    /// host has no data directory at all.
    #[must_use]
    pub fn open_default() -> Option<Self> {
        dirs::data_dir().map(|mut path| {
            path.push(APP_NAME);
            path.push(STORE_FILE);
            Self { path }
        })
    }

    /// Opens a store at an explicit path (used by tests and embedders).
    #[must_use]
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the value stored under `key`, if present and well-formed.
    ///
    /// A missing file, corrupt JSON document, or a value that does not
    /// deserialize as `T` all read as `None`: corrupt local state is treated
    /// as absent, never as an error.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.read_document().remove(key)?;
        serde_json::from_value(value).ok()
    }

    /// Stores `value` under `key`, creating the file as needed.
    ///
    /// # Errors
    ///
    /// Returns an error when the value cannot be serialized or the file
    /// cannot be written.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let mut document = self.read_document();
        document.insert(key.to_string(), serde_json::to_value(value)?);
        self.write_document(&document)
    }

    /// Stores several entries with a single write.
    ///
    /// Used when one user action updates multiple keys (a like toggle writes
    /// both the video list and the liked set).
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be written.
    pub fn merge(&self, entries: Vec<(&str, Value)>) -> Result<()> {
        let mut document = self.read_document();
        for (key, value) in entries {
            document.insert(key.to_string(), value);
        }
        self.write_document(&document)
    }

    /// Removes `key` from the store. Missing keys are a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be written.
    pub fn remove(&self, key: &str) -> Result<()> {
        let mut document = self.read_document();
        if document.remove(key).is_some() {
            return self.write_document(&document);
        }
        Ok(())
    }

    /// Path of the underlying store file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Map<String, Value> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return Map::new();
        };
        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => map,
            // Corrupt or non-object content reads as an empty store.
            _ => Map::new(),
        }
    }

    fn write_document(&self, document: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string(document)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
