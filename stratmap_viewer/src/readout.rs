// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cursor coordinate readout used while authoring map data.

use kurbo::Point;
use stratmap_viewport::{MapCoord, MapViewport};

/// Horizontal distance between the cursor and the readout box, in pixels.
pub const READOUT_CURSOR_OFFSET: f64 = 15.0;

/// A coordinate readout box next to the cursor.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordReadout {
    /// Map position under the cursor.
    pub coord: MapCoord,
    /// Box position in client coordinates.
    pub position: Point,
}

impl CoordReadout {
    /// Computes the readout for a cursor position.
    ///
    /// Returns `None` if the cursor is not over the map (see
    /// [`stratmap_viewport::ReadoutPolicy`]).
    #[must_use]
    pub fn at(viewport: &MapViewport, cursor: Point) -> Option<Self> {
        let coord = viewport.inverse_map(cursor)?;
        Some(Self {
            coord,
            position: Point::new(cursor.x + READOUT_CURSOR_OFFSET, cursor.y),
        })
    }

    /// Text shown in the box, e.g. `X: 12.3%, Y: 45.6%`.
    #[must_use]
    pub fn text(&self) -> String {
        self.coord.to_string()
    }
}
