// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use stratmap_viewport::ViewportOptions;

/// Default caption of the label layer checkbox.
pub const DEFAULT_LABELS_CAPTION: &str = "Labels";

/// Default message shown when the map document cannot be loaded.
pub const DEFAULT_LOAD_FAILURE_MESSAGE: &str = "Failed to load strategy data.";

/// Default message shown when the map catalog cannot be loaded.
pub const DEFAULT_CATALOG_FAILURE_MESSAGE: &str = "Map list is not available.";

/// Configuration for a [`MapViewer`](crate::MapViewer).
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerOptions {
    /// Pan/zoom behavior.
    pub viewport: ViewportOptions,
    /// Caption of the label layer checkbox.
    pub labels_caption: String,
    /// Notice shown when the map document fails to load.
    pub load_failure_message: String,
    /// Placeholder shown when the catalog fails to load or is empty.
    pub catalog_failure_message: String,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            viewport: ViewportOptions::default(),
            labels_caption: DEFAULT_LABELS_CAPTION.to_owned(),
            load_failure_message: DEFAULT_LOAD_FAILURE_MESSAGE.to_owned(),
            catalog_failure_message: DEFAULT_CATALOG_FAILURE_MESSAGE.to_owned(),
        }
    }
}

impl ViewerOptions {
    /// Replaces the viewport options.
    #[must_use]
    pub fn with_viewport(mut self, viewport: ViewportOptions) -> Self {
        self.viewport = viewport;
        self
    }

    /// Sets the label layer checkbox caption.
    #[must_use]
    pub fn with_labels_caption(mut self, caption: impl Into<String>) -> Self {
        self.labels_caption = caption.into();
        self
    }

    /// Sets the notice shown on load failure.
    #[must_use]
    pub fn with_load_failure_message(mut self, message: impl Into<String>) -> Self {
        self.load_failure_message = message.into();
        self
    }

    /// Sets the catalog placeholder message.
    #[must_use]
    pub fn with_catalog_failure_message(mut self, message: impl Into<String>) -> Self {
        self.catalog_failure_message = message.into();
        self
    }
}
