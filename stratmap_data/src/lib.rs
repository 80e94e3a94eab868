// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=stratmap_data --heading-base-level=0

//! Stratmap Data: the documents a strategy map viewer loads.
//!
//! Two JSON documents drive the viewer:
//! - [`SiteConfig`] (`config.json`): the catalog of maps, each with a link,
//!   thumbnail and optional initial region of interest.
//! - [`MapData`] (`data.json`): floors (background image + labels), sites
//!   (strategy markers), and the strategy type legend.
//!
//! Both are read-only once loaded. The [`Document`] trait decodes them from a
//! string, a reader or a file; failures are reported as [`LoadError`] and a
//! document is never partially used.
//!
//! ```rust
//! use stratmap_data::{Document, MapData};
//!
//! let data = MapData::from_json_str(r#"{
//!     "floors": { "1f": { "name": "1F", "mapImage": "1f.png" } },
//!     "sites": { "a": { "name": "A", "strategies": [
//!         { "type": "smoke", "pos": { "x": "10%", "y": "20%" }, "floorId": "1f" }
//!     ] } },
//!     "strategyTypes": [ { "id": "smoke", "label": "Smoke", "icon": "smoke.svg" } ]
//! }"#).unwrap();
//!
//! assert_eq!(data.first_floor_id(), Some("1f"));
//! assert_eq!(data.site("a").unwrap().strategies[0].pos.x.value(), 10.0);
//! ```
//!
//! Lookups return `Option`; deciding what to do with a missing floor, site or
//! strategy type is left to the viewer.

mod config;
mod error;
mod load;
mod map_data;
mod ordered;
mod units;

pub use config::{AoiBounds, InitialView, MapEntry, SiteConfig};
pub use error::LoadError;
pub use load::Document;
pub use map_data::{
    DEFAULT_SECTION_ID, Floor, Label, MapData, Media, ModalContent, Position, Site, Strategy,
    StrategyType,
};
pub use ordered::OrderedMap;
pub use units::{CssLength, Percent};
