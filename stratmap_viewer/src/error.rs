// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use stratmap_data::LoadError;

/// Errors that prevent a [`MapViewer`](crate::MapViewer) from opening.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    /// The map document could not be read or decoded.
    #[error("failed to load map document")]
    Load(#[from] LoadError),
    /// The map document decoded but has no floors to show.
    #[error("map document has no floors")]
    NoFloors,
}
