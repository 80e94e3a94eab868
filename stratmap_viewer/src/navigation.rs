// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation state carried in the page URL's query string.
//!
//! The viewer persists the selected floor and site as `floor` and `site`
//! query parameters, and `test=true` turns on the coordinate readout. Ids read
//! from the URL are only hints: [`Navigation::resolve`] falls back to the first
//! floor and site of the document when they are missing or unknown.

use stratmap_data::MapData;
use url::form_urlencoded;

/// Query parameter holding the floor id.
pub const FLOOR_PARAM: &str = "floor";
/// Query parameter holding the site id.
pub const SITE_PARAM: &str = "site";
/// Query parameter enabling the coordinate readout.
pub const TEST_PARAM: &str = "test";

/// Navigation hints parsed from a query string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Navigation {
    /// Requested floor id.
    pub floor: Option<String>,
    /// Requested site id.
    pub site: Option<String>,
    /// Whether the coordinate readout is enabled.
    pub test_mode: bool,
}

/// A floor/site pair that exists in the loaded document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewSelection {
    /// Selected floor id.
    pub floor_id: String,
    /// Selected site id; `None` when the document has no sites.
    pub site_id: Option<String>,
}

impl Navigation {
    /// Parses a query string, with or without its leading `?`.
    ///
    /// Empty values are treated as absent. The first occurrence of a repeated
    /// parameter wins.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut nav = Self::default();
        let mut seen_test = false;
        for (key, value) in form_urlencoded::parse(strip_question_mark(query).as_bytes()) {
            match key.as_ref() {
                FLOOR_PARAM if nav.floor.is_none() && !value.is_empty() => {
                    nav.floor = Some(value.into_owned());
                }
                SITE_PARAM if nav.site.is_none() && !value.is_empty() => {
                    nav.site = Some(value.into_owned());
                }
                TEST_PARAM if !seen_test => {
                    seen_test = true;
                    nav.test_mode = value == "true";
                }
                _ => {}
            }
        }
        nav
    }

    /// Picks the floor and site to show.
    ///
    /// Unknown or missing ids fall back to the first entry in document order.
    /// Returns `None` only when the document has no floors.
    #[must_use]
    pub fn resolve(&self, data: &MapData) -> Option<ViewSelection> {
        let floor_id = match self.floor.as_deref() {
            Some(id) if data.floors.contains_key(id) => id.to_owned(),
            requested => {
                let fallback = data.first_floor_id()?;
                if let Some(id) = requested {
                    tracing::warn!(requested = id, fallback, "unknown floor id, using first floor");
                }
                fallback.to_owned()
            }
        };
        let site_id = match self.site.as_deref() {
            Some(id) if data.sites.contains_key(id) => Some(id.to_owned()),
            requested => {
                let fallback = data.first_site_id();
                if let Some(id) = requested {
                    tracing::warn!(requested = id, ?fallback, "unknown site id, using first site");
                }
                fallback.map(str::to_owned)
            }
        };
        Some(ViewSelection { floor_id, site_id })
    }
}

impl ViewSelection {
    /// Rewrites `query` so it records this selection.
    ///
    /// `floor` and `site` are replaced in place (or appended); every other
    /// parameter is kept in its original order. The result has no leading `?`.
    #[must_use]
    pub fn write_query(&self, query: &str) -> String {
        let mut floor = Some(self.floor_id.as_str());
        let mut site = self.site_id.as_deref();
        let mut out = form_urlencoded::Serializer::new(String::new());
        for (key, value) in form_urlencoded::parse(strip_question_mark(query).as_bytes()) {
            match key.as_ref() {
                FLOOR_PARAM => {
                    if let Some(id) = floor.take() {
                        out.append_pair(FLOOR_PARAM, id);
                    }
                }
                SITE_PARAM if self.site_id.is_some() => {
                    if let Some(id) = site.take() {
                        out.append_pair(SITE_PARAM, id);
                    }
                }
                _ => {
                    out.append_pair(&key, &value);
                }
            }
        }
        if let Some(id) = floor {
            out.append_pair(FLOOR_PARAM, id);
        }
        if let Some(id) = site {
            out.append_pair(SITE_PARAM, id);
        }
        out.finish()
    }
}

fn strip_question_mark(query: &str) -> &str {
    query.strip_prefix('?').unwrap_or(query)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use stratmap_data::MapData;

    use super::{Navigation, ViewSelection};

    fn data() -> MapData {
        serde_json::from_value(json!({
            "floors": { "1f": { "name": "1F" }, "2f": { "name": "2F" } },
            "sites": { "kitchen": { "name": "Kitchen" }, "vault": { "name": "Vault" } }
        }))
        .unwrap()
    }

    #[test]
    fn parses_known_parameters() {
        let nav = Navigation::from_query("?floor=2f&site=vault&test=true&lang=ko");
        assert_eq!(nav.floor.as_deref(), Some("2f"));
        assert_eq!(nav.site.as_deref(), Some("vault"));
        assert!(nav.test_mode);
    }

    #[test]
    fn decodes_and_ignores_empty_values() {
        let nav = Navigation::from_query("floor=B%201&site=&test=1");
        assert_eq!(nav.floor.as_deref(), Some("B 1"));
        assert_eq!(nav.site, None);
        assert!(!nav.test_mode);
        assert_eq!(Navigation::from_query(""), Navigation::default());
    }

    #[test]
    fn resolve_falls_back_to_first_entries() {
        let data = data();
        let nav = Navigation::from_query("floor=9f&site=vault");
        assert_eq!(
            nav.resolve(&data),
            Some(ViewSelection {
                floor_id: "1f".into(),
                site_id: Some("vault".into())
            })
        );
        let nav = Navigation::default();
        assert_eq!(
            nav.resolve(&data).unwrap().site_id.as_deref(),
            Some("kitchen")
        );
    }

    #[test]
    fn resolve_requires_a_floor() {
        let empty = MapData::default();
        assert_eq!(Navigation::default().resolve(&empty), None);
    }

    #[test]
    fn write_query_replaces_in_place_and_keeps_others() {
        let selection = ViewSelection {
            floor_id: "2f".into(),
            site_id: Some("vault".into()),
        };
        assert_eq!(
            selection.write_query("?lang=ko&floor=1f&test=true"),
            "lang=ko&floor=2f&test=true&site=vault"
        );
        assert_eq!(selection.write_query(""), "floor=2f&site=vault");
        assert_eq!(
            selection.write_query("floor=1f&floor=3f"),
            "floor=2f&site=vault"
        );
    }

    #[test]
    fn write_query_without_site_keeps_existing_site_param() {
        let selection = ViewSelection {
            floor_id: "1f".into(),
            site_id: None,
        };
        assert_eq!(selection.write_query("site=x"), "site=x&floor=1f");
    }

    #[test]
    fn written_query_parses_back() {
        let selection = ViewSelection {
            floor_id: "B 1".into(),
            site_id: Some("east&west".into()),
        };
        let nav = Navigation::from_query(&selection.write_query("test=true"));
        assert_eq!(nav.floor.as_deref(), Some("B 1"));
        assert_eq!(nav.site.as_deref(), Some("east&west"));
        assert!(nav.test_mode);
    }
}
