// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load a configuration or map document.
///
/// Loading is all-or-nothing: a document that cannot be read or decoded is
/// never partially used.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document file could not be read.
    #[error("failed to read {path:?}: {source}")]
    Io {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not match the expected shape.
    #[error("invalid document: {0}")]
    Json(#[from] serde_json::Error),

    /// A document file is not valid JSON or does not match the expected shape.
    #[error("invalid document {path:?}: {source}")]
    JsonFile {
        /// File that failed to decode.
        path: PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Line and column of a decode error, when known.
    #[must_use]
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            Self::Json(source) | Self::JsonFile { source, .. } if source.line() > 0 => {
                Some((source.line(), source.column()))
            }
            _ => None,
        }
    }
}
