// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene composition: turning the loaded document into overlay placements.
//!
//! Placements carry everything a renderer needs to position an element over
//! the map layer: a percentage offset, CSS sizes, a CSS transform that centers
//! the element on its position (plus an optional rotation), and stacking
//! order. Strategies that reference a type missing from the legend are dropped.

use hashbrown::HashMap;
use stratmap_data::{CssLength, Label, MapData, Percent, Strategy, StrategyType};

use crate::filters::FilterSet;
use crate::navigation::ViewSelection;

/// A strategy icon ready to be placed over the map.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerPlacement {
    /// Index of the strategy within its site, used to route clicks.
    pub strategy_index: usize,
    /// Strategy type id.
    pub type_id: String,
    /// Icon image URL.
    pub icon: String,
    /// Left offset in percent of the map width.
    pub left: Percent,
    /// Top offset in percent of the map height.
    pub top: Percent,
    /// CSS width, from the strategy or else its type.
    pub width: Option<CssLength>,
    /// CSS height, from the strategy or else its type.
    pub height: Option<CssLength>,
    /// CSS transform centering (and rotating) the icon.
    pub transform: String,
    /// CSS stacking order.
    pub z_index: Option<i32>,
    /// Whether clicking the marker opens a modal.
    pub has_details: bool,
}

/// A text label ready to be placed over the map.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelPlacement {
    /// Label text.
    pub text: String,
    /// Left offset in percent of the map width.
    pub left: Percent,
    /// Top offset in percent of the map height.
    pub top: Percent,
    /// CSS font size.
    pub font_size: Option<CssLength>,
    /// CSS transform centering (and rotating) the label.
    pub transform: String,
}

/// Everything drawn for one floor/site selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// Background image URL of the floor.
    pub background: String,
    /// Strategy icons in document order.
    pub markers: Vec<MarkerPlacement>,
    /// Labels in document order; empty while the label layer is hidden.
    pub labels: Vec<LabelPlacement>,
}

/// CSS transform that centers an element on its position, then rotates it.
///
/// A zero or absent rotation adds nothing.
#[must_use]
pub fn centered_transform(rotation: Option<f64>) -> String {
    match rotation {
        Some(deg) if deg != 0.0 && deg.is_finite() => {
            format!("translate(-50%, -50%) rotate({deg}deg)")
        }
        _ => "translate(-50%, -50%)".to_owned(),
    }
}

fn non_empty(length: Option<&CssLength>) -> Option<&CssLength> {
    length.filter(|l| !l.is_empty())
}

/// Places the strategies of one site that belong on the current floor.
///
/// A strategy is kept when:
/// - Its `floorId` matches `floor_id`, or it has none and the document has a
///   single floor.
/// - Its type is active in `filters`.
/// - Its type exists in `types`.
#[must_use]
pub fn compose_markers(
    strategies: &[Strategy],
    types: &[StrategyType],
    filters: &FilterSet,
    floor_id: &str,
    single_floor: bool,
) -> Vec<MarkerPlacement> {
    let by_id: HashMap<&str, &StrategyType> = types.iter().map(|t| (t.id.as_str(), t)).collect();

    strategies
        .iter()
        .enumerate()
        .filter(|(_, s)| match s.floor_id.as_deref() {
            Some(id) => id == floor_id,
            None => single_floor,
        })
        .filter_map(|(index, s)| {
            let Some(kind) = by_id.get(s.kind.as_str()) else {
                tracing::warn!(type_id = %s.kind, index, "dropping strategy with unknown type");
                return None;
            };
            if !filters.is_active(&kind.id) {
                return None;
            }
            Some(MarkerPlacement {
                strategy_index: index,
                type_id: kind.id.clone(),
                icon: kind.icon.clone(),
                left: s.pos.x,
                top: s.pos.y,
                width: non_empty(s.width.as_ref())
                    .or(kind.width.as_ref())
                    .cloned(),
                height: non_empty(s.height.as_ref())
                    .or(kind.height.as_ref())
                    .cloned(),
                transform: centered_transform(s.rotation),
                z_index: s.z_index.filter(|z| *z != 0),
                has_details: s.modal_content.is_some(),
            })
        })
        .collect()
}

/// Places a floor's labels.
#[must_use]
pub fn compose_labels(labels: &[Label]) -> Vec<LabelPlacement> {
    labels
        .iter()
        .map(|l| LabelPlacement {
            text: l.text.clone(),
            left: l.pos.x,
            top: l.pos.y,
            font_size: non_empty(l.font_size.as_ref()).cloned(),
            transform: centered_transform(l.rotation),
        })
        .collect()
}

/// Composes the scene for `selection`.
///
/// Returns `None` if the selected floor does not exist in `data`; a missing
/// site only means no markers.
#[must_use]
pub fn compose_scene(data: &MapData, selection: &ViewSelection, filters: &FilterSet) -> Option<Scene> {
    let floor = data.floor(&selection.floor_id)?;
    let markers = match selection.site_id.as_deref().and_then(|id| data.site(id)) {
        Some(site) => compose_markers(
            &site.strategies,
            &data.strategy_types,
            filters,
            &selection.floor_id,
            !data.is_multi_floor(),
        ),
        None => Vec::new(),
    };
    let labels = if filters.labels_visible() {
        compose_labels(&floor.labels)
    } else {
        Vec::new()
    };
    Some(Scene {
        background: floor.map_image.clone(),
        markers,
        labels,
    })
}
