// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=stratmap_viewport --heading-base-level=0

//! Stratmap Viewport: pan/zoom state for a map layer inside a container.
//!
//! This crate provides a small, headless model of the strategy map view. The
//! map layer is an unscaled image of known size; the container is a rectangle
//! in client (page) coordinates. It focuses on:
//! - The viewport state (uniform scale + translation) and its CSS/affine forms.
//! - Initial-view fitting, either to the whole map or to a region of interest.
//! - Mouse-anchored wheel zoom with scale limits.
//! - Drag panning as a two-state gesture (idle / panning).
//! - Inverse mapping of client points to map coordinates in percent, for
//!   coordinate picking.
//!
//! It does **not** touch the DOM. Callers are expected to:
//! - Measure the container and the map layer and hand the sizes in.
//! - Apply [`ViewportState::css`] (or [`ViewportState::to_affine`]) to their
//!   rendering surface after each operation that returns `true`.
//! - Suppress the host page's default scrolling for wheel events.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use stratmap_viewport::{MapViewport, RegionOfInterest, ZoomDirection};
//!
//! // 800x600 container showing a 1000x1000 map.
//! let mut view = MapViewport::new(Rect::new(0.0, 0.0, 800.0, 600.0), Size::new(1000.0, 1000.0));
//!
//! // Fit the middle quarter of the map, leaving a 5% margin.
//! view.fit_to_view(Some(RegionOfInterest::new(25.0, 25.0, 75.0, 75.0)));
//! assert!((view.scale() - 1.14).abs() < 1e-9);
//!
//! // The map center now sits at the container center.
//! let center = view.inverse_map(Point::new(400.0, 300.0)).unwrap();
//! assert!((center.x - 50.0).abs() < 1e-9);
//!
//! // Zoom in one wheel step around the cursor.
//! view.zoom_at(Point::new(200.0, 150.0), ZoomDirection::In);
//! ```
//!
//! ## Design notes
//!
//! - Transforms are axis-aligned with a **uniform** scale; rotation is left
//!   to individual annotations.
//! - Fitting sets the scale directly and does not clamp it to the zoom
//!   limits; only wheel zoom enforces them.
//! - What the readout reports for points outside the map is a policy
//!   ([`ReadoutPolicy`]), not a hard-coded behavior.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod modes;
mod options;
mod pan;
mod region;
mod viewport;

pub use modes::{FitMode, ReadoutPolicy, ZoomDirection};
pub use options::{
    DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DEFAULT_REGION_MARGIN, DEFAULT_ZOOM_STEP,
    ViewportOptions,
};
pub use pan::{PanGesture, PanPhase, drag_translate};
pub use region::RegionOfInterest;
pub use viewport::{CssTransform, MapCoord, MapViewport, MapViewportDebugInfo, ViewportState};
