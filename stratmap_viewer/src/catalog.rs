// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The map catalog: cards on the landing page and the in-viewer map selector.

use stratmap_data::{LoadError, SiteConfig};

/// A link card for one map on the landing page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapCard {
    /// Link to the map's viewer page.
    pub href: String,
    /// Thumbnail image URL.
    pub thumbnail: String,
    /// Map name, used as caption and image alt text.
    pub name: String,
}

/// One option of the map selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapOption {
    /// Page to navigate to when chosen.
    pub value: String,
    /// Map name.
    pub label: String,
    /// Whether this is the map being viewed.
    pub selected: bool,
}

/// What the landing page shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogView {
    /// One card per map.
    Cards(Vec<MapCard>),
    /// The configuration could not be used; show this message instead.
    Placeholder(String),
}

/// Builds the landing page from the outcome of loading the configuration.
///
/// A load failure or an empty catalog yields `failure_message`.
#[must_use]
pub fn catalog_view(config: Result<&SiteConfig, &LoadError>, failure_message: &str) -> CatalogView {
    match config {
        Ok(config) if !config.maps.is_empty() => CatalogView::Cards(map_cards(config)),
        Ok(_) => {
            tracing::warn!("site config lists no maps");
            CatalogView::Placeholder(failure_message.to_owned())
        }
        Err(err) => {
            tracing::error!(%err, "site config unavailable");
            CatalogView::Placeholder(failure_message.to_owned())
        }
    }
}

/// One card per map, in catalog order.
#[must_use]
pub fn map_cards(config: &SiteConfig) -> Vec<MapCard> {
    config
        .maps
        .iter()
        .map(|m| MapCard {
            href: m.path.clone(),
            thumbnail: m.thumbnail.clone(),
            name: m.name.clone(),
        })
        .collect()
}

/// Selector options with `current_map_id` pre-selected.
#[must_use]
pub fn map_selector(config: &SiteConfig, current_map_id: &str) -> Vec<MapOption> {
    config
        .maps
        .iter()
        .map(|m| MapOption {
            value: m.path.clone(),
            label: m.name.clone(),
            selected: m.id == current_map_id,
        })
        .collect()
}
