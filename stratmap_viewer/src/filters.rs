// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay filters: which strategy types are shown, and whether labels are.
//!
//! A [`FilterSet`] mirrors the legend's checkboxes. It starts with everything
//! enabled, keeps the legend order, and bumps a revision counter whenever its
//! contents change so callers can skip redundant re-renders.

use stratmap_data::StrategyType;

/// Checkbox value used for the label layer toggle.
pub const LABELS_FILTER_VALUE: &str = "labels";

/// One entry of the legend as a checkbox.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterControl {
    /// Checkbox value: a strategy type id, or [`LABELS_FILTER_VALUE`].
    pub value: String,
    /// Caption shown next to the checkbox.
    pub caption: String,
    /// Whether the checkbox is checked.
    pub checked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct TypeFilter {
    id: String,
    label: String,
    enabled: bool,
}

/// Active strategy types plus the label layer toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterSet {
    types: Vec<TypeFilter>,
    labels_visible: bool,
    revision: u64,
}

impl FilterSet {
    /// Creates a filter set with every type in `types` enabled and labels shown.
    ///
    /// Repeated type ids keep their first entry.
    #[must_use]
    pub fn new<'a>(types: impl IntoIterator<Item = &'a StrategyType>) -> Self {
        let mut filters: Vec<TypeFilter> = Vec::new();
        for t in types {
            if filters.iter().all(|f| f.id != t.id) {
                filters.push(TypeFilter {
                    id: t.id.clone(),
                    label: t.label.clone(),
                    enabled: true,
                });
            }
        }
        Self {
            types: filters,
            labels_visible: true,
            revision: 0,
        }
    }

    /// Returns `true` if markers of `type_id` are shown.
    ///
    /// Ids that are not in the legend are never active.
    #[must_use]
    pub fn is_active(&self, type_id: &str) -> bool {
        self.types.iter().any(|f| f.enabled && f.id == type_id)
    }

    /// Returns `true` if the label layer is shown.
    #[must_use]
    pub fn labels_visible(&self) -> bool {
        self.labels_visible
    }

    /// Ids of the enabled types, in legend order.
    pub fn active_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.types
            .iter()
            .filter(|f| f.enabled)
            .map(|f| f.id.as_str())
    }

    /// Monotonic change counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Enables or disables a strategy type.
    ///
    /// Returns `true` if the set changed. Unknown ids are ignored.
    pub fn set_type(&mut self, type_id: &str, enabled: bool) -> bool {
        let Some(filter) = self.types.iter_mut().find(|f| f.id == type_id) else {
            tracing::debug!(type_id, "ignoring filter toggle for unknown strategy type");
            return false;
        };
        if filter.enabled == enabled {
            return false;
        }
        filter.enabled = enabled;
        self.revision += 1;
        true
    }

    /// Shows or hides the label layer. Returns `true` if the set changed.
    pub fn set_labels_visible(&mut self, visible: bool) -> bool {
        if self.labels_visible == visible {
            return false;
        }
        self.labels_visible = visible;
        self.revision += 1;
        true
    }

    /// Applies a checkbox change by value, routing [`LABELS_FILTER_VALUE`] to
    /// the label layer.
    pub fn set_by_value(&mut self, value: &str, checked: bool) -> bool {
        if value == LABELS_FILTER_VALUE {
            self.set_labels_visible(checked)
        } else {
            self.set_type(value, checked)
        }
    }

    /// The legend as checkboxes: the label toggle first, then each type.
    #[must_use]
    pub fn controls(&self, labels_caption: &str) -> Vec<FilterControl> {
        let mut controls = Vec::with_capacity(self.types.len() + 1);
        controls.push(FilterControl {
            value: LABELS_FILTER_VALUE.to_owned(),
            caption: labels_caption.to_owned(),
            checked: self.labels_visible,
        });
        controls.extend(self.types.iter().map(|f| FilterControl {
            value: f.id.clone(),
            caption: f.label.clone(),
            checked: f.enabled,
        }));
        controls
    }
}
