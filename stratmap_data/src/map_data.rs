// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::Deserialize;

use crate::ordered::OrderedMap;
use crate::units::{CssLength, Percent};

/// Id given to the single floor and site of a flat (single-site) document.
pub const DEFAULT_SECTION_ID: &str = "default";

/// A per-map annotation document (`data.json`).
///
/// Two document shapes are accepted:
/// - The layered shape, with `floors`, `sites` and `strategyTypes` sections.
/// - The flat single-site shape, with `mapImage`, `labels`, `strategies` and
///   `strategyTypes` at the top level. It is normalized into one floor and one
///   site, both with the id [`DEFAULT_SECTION_ID`].
///
/// Missing sections are empty.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "RawMapData")]
pub struct MapData {
    /// Floors keyed by id, in document order.
    pub floors: OrderedMap<Floor>,
    /// Sites keyed by id, in document order.
    pub sites: OrderedMap<Site>,
    /// Legend entries.
    pub strategy_types: Vec<StrategyType>,
}

impl MapData {
    /// Looks up a floor.
    #[must_use]
    pub fn floor(&self, id: &str) -> Option<&Floor> {
        self.floors.get(id)
    }

    /// Looks up a site.
    #[must_use]
    pub fn site(&self, id: &str) -> Option<&Site> {
        self.sites.get(id)
    }

    /// Looks up a strategy type.
    #[must_use]
    pub fn strategy_type(&self, id: &str) -> Option<&StrategyType> {
        self.strategy_types.iter().find(|t| t.id == id)
    }

    /// Id of the first floor in document order.
    #[must_use]
    pub fn first_floor_id(&self) -> Option<&str> {
        self.floors.first().map(|(id, _)| id)
    }

    /// Id of the first site in document order.
    #[must_use]
    pub fn first_site_id(&self) -> Option<&str> {
        self.sites.first().map(|(id, _)| id)
    }

    /// Returns `true` when the document has more than one floor, in which
    /// case strategies are scoped to floors by their `floorId`.
    #[must_use]
    pub fn is_multi_floor(&self) -> bool {
        self.floors.len() > 1
    }
}

/// One floor: a background image plus place-name labels.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Background image URL.
    #[serde(default)]
    pub map_image: String,
    /// Text labels drawn over the background.
    #[serde(default)]
    pub labels: Vec<Label>,
}

/// One site: a set of strategies, possibly spread over several floors.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Site {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Strategy markers.
    #[serde(default)]
    pub strategies: Vec<Strategy>,
}

/// A position on the map in percent of its unscaled size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Position {
    /// Horizontal offset from the left edge.
    pub x: Percent,
    /// Vertical offset from the top edge.
    pub y: Percent,
}

/// A strategy marker.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    /// Id of the [`StrategyType`] this marker belongs to.
    #[serde(rename = "type")]
    pub kind: String,
    /// Center of the marker.
    pub pos: Position,
    /// Clockwise rotation in degrees.
    #[serde(default)]
    pub rotation: Option<f64>,
    /// Width override; falls back to the type's width.
    #[serde(default)]
    pub width: Option<CssLength>,
    /// Height override; falls back to the type's height.
    #[serde(default)]
    pub height: Option<CssLength>,
    /// Stacking order.
    #[serde(default)]
    pub z_index: Option<i32>,
    /// Floor this marker is drawn on.
    #[serde(default)]
    pub floor_id: Option<String>,
    /// Details shown when the marker is clicked.
    #[serde(default)]
    pub modal_content: Option<ModalContent>,
}

/// A place-name label.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    /// Label text.
    pub text: String,
    /// Center of the label.
    pub pos: Position,
    /// Clockwise rotation in degrees.
    #[serde(default)]
    pub rotation: Option<f64>,
    /// CSS font size.
    #[serde(default)]
    pub font_size: Option<CssLength>,
}

/// A legend entry that strategies reference by id.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StrategyType {
    /// Id referenced by [`Strategy::kind`].
    pub id: String,
    /// Legend caption.
    pub label: String,
    /// Icon image URL.
    pub icon: String,
    /// Default marker width.
    #[serde(default)]
    pub width: Option<CssLength>,
    /// Default marker height.
    #[serde(default)]
    pub height: Option<CssLength>,
}

/// Details shown in the modal for a strategy.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ModalContent {
    /// Modal title.
    #[serde(default)]
    pub title: String,
    /// Body text.
    #[serde(default)]
    pub description: String,
    /// Media slides.
    #[serde(default)]
    pub media: Vec<Media>,
}

impl ModalContent {
    /// Slides that can be displayed, skipping unsupported media types.
    pub fn playable_media(&self) -> impl Iterator<Item = &Media> + '_ {
        self.media.iter().filter(|m| !matches!(m, Media::Unsupported))
    }
}

/// One media slide.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Media {
    /// An image by URL.
    Image {
        /// Image URL.
        src: String,
    },
    /// A YouTube video by video id.
    Youtube {
        /// YouTube video id.
        src: String,
    },
    /// Any other media type; never displayed.
    #[serde(other)]
    Unsupported,
}

/// Union of the layered and flat document shapes.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMapData {
    #[serde(default)]
    floors: Option<OrderedMap<Floor>>,
    #[serde(default)]
    sites: Option<OrderedMap<Site>>,
    #[serde(default)]
    strategy_types: Vec<StrategyType>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    map_image: Option<String>,
    #[serde(default)]
    labels: Vec<Label>,
    #[serde(default)]
    strategies: Vec<Strategy>,
}

impl From<RawMapData> for MapData {
    fn from(raw: RawMapData) -> Self {
        let name = raw.name.unwrap_or_default();
        let floors = match raw.floors {
            Some(floors) => floors,
            None if raw.map_image.is_some() || !raw.labels.is_empty() => {
                tracing::debug!("normalizing flat map document into a single floor");
                [(
                    DEFAULT_SECTION_ID,
                    Floor {
                        name: name.clone(),
                        map_image: raw.map_image.unwrap_or_default(),
                        labels: raw.labels,
                    },
                )]
                .into_iter()
                .collect()
            }
            None => OrderedMap::new(),
        };
        let sites = match raw.sites {
            Some(sites) => sites,
            None if !raw.strategies.is_empty() => [(
                DEFAULT_SECTION_ID,
                Site {
                    name,
                    strategies: raw.strategies,
                },
            )]
            .into_iter()
            .collect(),
            None => OrderedMap::new(),
        };
        Self {
            floors,
            sites,
            strategy_types: raw.strategy_types,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{DEFAULT_SECTION_ID, MapData, Media};
    use crate::units::CssLength;

    fn layered() -> serde_json::Value {
        json!({
            "floors": {
                "2f": { "name": "2F", "mapImage": "img/2f.png", "labels": [
                    { "text": "Lobby", "pos": { "x": "40%", "y": "60%" }, "fontSize": "14px" }
                ]},
                "1f": { "name": "1F", "mapImage": "img/1f.png" }
            },
            "sites": {
                "a": { "name": "Site A", "strategies": [
                    {
                        "type": "smoke",
                        "pos": { "x": "10%", "y": "20%" },
                        "rotation": 45,
                        "zIndex": 3,
                        "floorId": "2f",
                        "modalContent": {
                            "title": "Window smoke",
                            "description": "Blocks the window.",
                            "media": [
                                { "type": "image", "src": "img/smoke.png" },
                                { "type": "youtube", "src": "dQw4w9WgXcQ" },
                                { "type": "gif", "src": "img/smoke.gif" }
                            ]
                        }
                    }
                ]}
            },
            "strategyTypes": [
                { "id": "smoke", "label": "Smoke", "icon": "icons/smoke.svg", "width": "40px", "height": 40 }
            ]
        })
    }

    #[test]
    fn decodes_layered_document() {
        let data: MapData = serde_json::from_value(layered()).unwrap();

        assert_eq!(data.floors.keys().collect::<Vec<_>>(), vec!["2f", "1f"]);
        assert_eq!(data.first_floor_id(), Some("2f"));
        assert_eq!(data.first_site_id(), Some("a"));
        assert!(data.is_multi_floor());

        let floor = data.floor("2f").unwrap();
        assert_eq!(floor.labels[0].font_size, Some(CssLength::new("14px")));
        assert!(data.floor("1f").unwrap().labels.is_empty());

        let strategy = &data.site("a").unwrap().strategies[0];
        assert_eq!(strategy.kind, "smoke");
        assert_eq!(strategy.pos.x.value(), 10.0);
        assert_eq!(strategy.rotation, Some(45.0));
        assert_eq!(strategy.z_index, Some(3));
        assert_eq!(strategy.floor_id.as_deref(), Some("2f"));

        let modal = strategy.modal_content.as_ref().unwrap();
        assert_eq!(modal.media.len(), 3);
        assert_eq!(modal.media[2], Media::Unsupported);
        assert_eq!(modal.playable_media().count(), 2);

        let smoke = data.strategy_type("smoke").unwrap();
        assert_eq!(smoke.height, Some(CssLength::new("40px")));
        assert!(data.strategy_type("flash").is_none());
    }

    #[test]
    fn normalizes_flat_document() {
        let data: MapData = serde_json::from_value(json!({
            "name": "Harbor",
            "mapImage": "img/harbor.png",
            "labels": [{ "text": "Dock", "pos": { "x": 5, "y": 5 } }],
            "strategies": [{ "type": "smoke", "pos": { "x": "1%", "y": "2%" } }],
            "strategyTypes": [{ "id": "smoke", "label": "Smoke", "icon": "s.svg" }]
        }))
        .unwrap();

        assert_eq!(data.first_floor_id(), Some(DEFAULT_SECTION_ID));
        assert_eq!(data.first_site_id(), Some(DEFAULT_SECTION_ID));
        let floor = data.floor(DEFAULT_SECTION_ID).unwrap();
        assert_eq!(floor.name, "Harbor");
        assert_eq!(floor.map_image, "img/harbor.png");
        assert_eq!(data.site(DEFAULT_SECTION_ID).unwrap().strategies.len(), 1);
        assert!(!data.is_multi_floor());
    }

    #[test]
    fn value_and_text_decoding_keep_the_same_key_order() {
        let text = r#"{
            "floors": {
                "b2": { "name": "B2", "mapImage": "b2.png" },
                "a1": { "name": "A1", "mapImage": "a1.png" }
            },
            "sites": {
                "zulu": { "name": "Zulu", "strategies": [] },
                "alpha": { "name": "Alpha", "strategies": [] }
            }
        }"#;
        let from_text: MapData = serde_json::from_str(text).unwrap();
        let value: serde_json::Value = serde_json::from_str(text).unwrap();
        let from_value: MapData = serde_json::from_value(value).unwrap();

        for data in [&from_text, &from_value] {
            assert_eq!(data.floors.keys().collect::<Vec<_>>(), ["b2", "a1"]);
            assert_eq!(data.sites.keys().collect::<Vec<_>>(), ["zulu", "alpha"]);
            assert_eq!(data.first_floor_id(), Some("b2"));
            assert_eq!(data.first_site_id(), Some("zulu"));
        }
    }

    #[test]
    fn empty_document_has_empty_sections() {
        let data: MapData = serde_json::from_str("{}").unwrap();
        assert!(data.floors.is_empty());
        assert!(data.sites.is_empty());
        assert!(data.strategy_types.is_empty());
        assert_eq!(data.first_floor_id(), None);
    }

    #[test]
    fn strategy_without_type_is_rejected() {
        let result = serde_json::from_value::<MapData>(json!({
            "sites": { "a": { "name": "A", "strategies": [{ "pos": { "x": 1, "y": 1 } }] } }
        }));
        assert!(result.is_err());
    }
}
