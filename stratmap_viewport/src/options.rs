// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::modes::{FitMode, ReadoutPolicy};

/// Default lower scale bound.
pub const DEFAULT_MIN_SCALE: f64 = 0.5;
/// Default upper scale bound.
pub const DEFAULT_MAX_SCALE: f64 = 8.0;
/// Default relative change of the scale per wheel step.
pub const DEFAULT_ZOOM_STEP: f64 = 0.1;
/// Default margin left around a fitted region of interest (5%).
pub const DEFAULT_REGION_MARGIN: f64 = 0.05;

/// Tunables for a [`crate::MapViewport`].
///
/// All setters normalize their inputs, so an options value is always usable:
/// - Scale limits are reordered so that `min_scale <= max_scale`.
/// - The zoom step is kept in `(0, 1)`.
/// - Margins are kept in `[0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportOptions {
    min_scale: f64,
    max_scale: f64,
    zoom_step: f64,
    fit_mode: FitMode,
    fit_margin: f64,
    region_margin: f64,
    readout_policy: ReadoutPolicy,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            zoom_step: DEFAULT_ZOOM_STEP,
            fit_mode: FitMode::default(),
            fit_margin: 0.0,
            region_margin: DEFAULT_REGION_MARGIN,
            readout_policy: ReadoutPolicy::default(),
        }
    }
}

impl ViewportOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scale limits enforced by wheel zoom.
    ///
    /// The range is normalized so that `min_scale <= max_scale`. Non-positive
    /// or non-finite limits are ignored.
    #[must_use]
    pub fn with_zoom_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        self.set_zoom_limits(min_scale, max_scale);
        self
    }

    /// Sets the scale limits enforced by wheel zoom. See [`Self::with_zoom_limits`].
    pub fn set_zoom_limits(&mut self, min_scale: f64, max_scale: f64) {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(min_scale) || !valid(max_scale) {
            return;
        }
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
    }

    /// Sets the relative scale change per wheel step; values outside `(0, 1)`
    /// are ignored.
    #[must_use]
    pub fn with_zoom_step(mut self, step: f64) -> Self {
        if step > 0.0 && step < 1.0 {
            self.zoom_step = step;
        }
        self
    }

    /// Sets how the whole map is fitted when there is no region of interest.
    #[must_use]
    pub fn with_fit_mode(mut self, mode: FitMode) -> Self {
        self.fit_mode = mode;
        self
    }

    /// Sets the margin left around the whole map when fitting without a region.
    ///
    /// `0.05` shrinks the fitted scale by 5%.
    #[must_use]
    pub fn with_fit_margin(mut self, margin: f64) -> Self {
        self.fit_margin = normalize_margin(margin, self.fit_margin);
        self
    }

    /// Sets the margin left around a fitted region of interest.
    #[must_use]
    pub fn with_region_margin(mut self, margin: f64) -> Self {
        self.region_margin = normalize_margin(margin, self.region_margin);
        self
    }

    /// Sets what the coordinate readout reports outside the map.
    #[must_use]
    pub fn with_readout_policy(mut self, policy: ReadoutPolicy) -> Self {
        self.readout_policy = policy;
        self
    }

    /// Lower scale bound.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Upper scale bound.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Relative scale change per wheel step.
    #[must_use]
    pub fn zoom_step(&self) -> f64 {
        self.zoom_step
    }

    /// Fit mode used without a region of interest.
    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    /// Margin used when fitting the whole map.
    #[must_use]
    pub fn fit_margin(&self) -> f64 {
        self.fit_margin
    }

    /// Margin used when fitting a region of interest.
    #[must_use]
    pub fn region_margin(&self) -> f64 {
        self.region_margin
    }

    /// Coordinate readout policy.
    #[must_use]
    pub fn readout_policy(&self) -> ReadoutPolicy {
        self.readout_policy
    }
}

fn normalize_margin(margin: f64, fallback: f64) -> f64 {
    if (0.0..1.0).contains(&margin) {
        margin
    } else {
        fallback
    }
}
