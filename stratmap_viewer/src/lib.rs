// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=stratmap_viewer --heading-base-level=0

//! Stratmap Viewer: an interactive strategy map over an injected render target.
//!
//! [`MapViewer`] ties the pieces together:
//! - [`Navigation`] reads the floor and site from the page URL and writes them
//!   back when the user switches.
//! - [`FilterSet`] tracks which strategy types and whether labels are shown.
//! - [`compose_scene`] turns the document into marker and label placements.
//! - [`ModalState`] drives the strategy detail modal and its media slider.
//! - [`stratmap_viewport`] handles pan, zoom and the coordinate readout.
//!
//! Everything visible goes through a [`RenderTarget`]. Hosts translate their
//! input into [`ViewerEvent`]s and act on the returned [`EventOutcome`].
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use stratmap_viewer::{MapViewer, RecordingTarget, ViewerEvent, ViewerOptions, ViewerSetup};
//!
//! let json = r#"{
//!     "floors": { "1f": { "name": "1F", "mapImage": "1f.png" },
//!                 "2f": { "name": "2F", "mapImage": "2f.png" } },
//!     "sites": { "a": { "name": "A" } }
//! }"#;
//! let setup = ViewerSetup {
//!     query: "?floor=2f",
//!     view_rect: Rect::new(0.0, 0.0, 800.0, 600.0),
//!     content_size: Size::new(1600.0, 1200.0),
//!     map: None,
//!     catalog: None,
//! };
//! let mut viewer =
//!     MapViewer::open_json(RecordingTarget::new(), json, setup, ViewerOptions::default()).unwrap();
//! assert_eq!(viewer.selection().floor_id, "2f");
//!
//! let outcome = viewer.handle(ViewerEvent::Wheel { cursor: Point::new(400.0, 300.0), delta_y: -1.0 });
//! assert!(outcome.prevent_default);
//!
//! let outcome = viewer.handle(ViewerEvent::SelectFloor("1f".into()));
//! assert_eq!(outcome.push_query.as_deref(), Some("floor=1f&site=a"));
//! ```

mod catalog;
mod error;
mod filters;
mod modal;
mod navigation;
mod options;
mod readout;
mod render;
mod scene;
mod viewer;

pub use catalog::{CatalogView, MapCard, MapOption, catalog_view, map_cards, map_selector};
pub use error::ViewerError;
pub use filters::{FilterControl, FilterSet, LABELS_FILTER_VALUE};
pub use modal::{ModalState, ModalView, Slide, YOUTUBE_EMBED_PREFIX};
pub use navigation::{FLOOR_PARAM, Navigation, SITE_PARAM, TEST_PARAM, ViewSelection};
pub use options::{
    DEFAULT_CATALOG_FAILURE_MESSAGE, DEFAULT_LABELS_CAPTION, DEFAULT_LOAD_FAILURE_MESSAGE,
    ViewerOptions,
};
pub use readout::{CoordReadout, READOUT_CURSOR_OFFSET};
pub use render::{RecordingTarget, RenderOp, RenderTarget, SelectorButton};
pub use scene::{
    LabelPlacement, MarkerPlacement, Scene, centered_transform, compose_labels, compose_markers,
    compose_scene,
};
pub use viewer::{EventOutcome, MapViewer, ViewerEvent, ViewerSetup};
