// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::Deserialize;
use stratmap_viewport::RegionOfInterest;

use crate::units::Percent;

/// The top-level site configuration (`config.json`): the catalog of maps.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SiteConfig {
    /// Maps in catalog order.
    #[serde(default)]
    pub maps: Vec<MapEntry>,
}

impl SiteConfig {
    /// Looks up a map by id.
    #[must_use]
    pub fn map(&self, id: &str) -> Option<&MapEntry> {
        self.maps.iter().find(|m| m.id == id)
    }

    /// Looks up the map whose page lives at `path`.
    #[must_use]
    pub fn map_by_path(&self, path: &str) -> Option<&MapEntry> {
        self.maps.iter().find(|m| m.path == path)
    }
}

/// One map in the catalog.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapEntry {
    /// Stable id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Link to the map's viewer page.
    pub path: String,
    /// Thumbnail image for the catalog card.
    #[serde(default)]
    pub thumbnail: String,
    /// How the map is framed when it opens.
    #[serde(default)]
    pub initial_view: Option<InitialView>,
}

impl MapEntry {
    /// Region of interest to fit on load, if configured.
    #[must_use]
    pub fn initial_region(&self) -> Option<RegionOfInterest> {
        self.initial_view.as_ref()?.aoi.map(AoiBounds::region)
    }
}

/// Initial framing of a map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct InitialView {
    /// Region of interest to fit into the container.
    #[serde(default)]
    pub aoi: Option<AoiBounds>,
}

/// Region of interest corners as written in the configuration, in percent.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct AoiBounds {
    /// Left edge.
    pub x1: Percent,
    /// Top edge.
    pub y1: Percent,
    /// Right edge.
    pub x2: Percent,
    /// Bottom edge.
    pub y2: Percent,
}

impl AoiBounds {
    /// Converts into a normalized viewport region.
    #[must_use]
    pub fn region(self) -> RegionOfInterest {
        RegionOfInterest::new(self.x1.0, self.y1.0, self.x2.0, self.y2.0)
    }
}
