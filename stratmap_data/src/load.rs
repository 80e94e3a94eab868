// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::config::SiteConfig;
use crate::error::LoadError;
use crate::map_data::MapData;

/// A JSON document the viewer loads once per page view.
///
/// Fetching is the embedder's job; these helpers decode what was fetched.
pub trait Document: DeserializeOwned + Sized {
    /// Human-readable document kind, used in logs.
    const KIND: &'static str;

    /// Decodes a document from a string.
    fn from_json_str(text: &str) -> Result<Self, LoadError> {
        let doc = serde_json::from_str(text).inspect_err(|err| {
            tracing::error!(kind = Self::KIND, %err, "failed to decode document");
        })?;
        Ok(doc)
    }

    /// Decodes a document from a reader.
    fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let doc = serde_json::from_reader(reader).inspect_err(|err| {
            tracing::error!(kind = Self::KIND, %err, "failed to decode document");
        })?;
        Ok(doc)
    }

    /// Reads and decodes a document file.
    fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        tracing::debug!(kind = Self::KIND, path = %path.display(), "loading document");
        let file = File::open(path).map_err(|source| {
            tracing::error!(kind = Self::KIND, path = %path.display(), %source, "failed to open document");
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            tracing::error!(kind = Self::KIND, path = %path.display(), %source, "failed to decode document");
            LoadError::JsonFile {
                path: path.to_path_buf(),
                source,
            }
        })
    }
}

impl Document for SiteConfig {
    const KIND: &'static str = "site config";
}

impl Document for MapData {
    const KIND: &'static str = "map data";
}
