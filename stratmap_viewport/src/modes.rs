// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How the whole map is fitted when no region of interest is configured.
///
/// Consulted by [`crate::MapViewport::fit_to_view`] only when the region is
/// absent or degenerate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Scale so the map width fills the container width and center the map
    /// vertically. The map may overflow the container vertically.
    #[default]
    FillWidth,
    /// Scale so the whole map is visible (the smaller of the width and height
    /// ratios) and center it on both axes.
    Contain,
}

/// What the coordinate readout reports for points outside the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ReadoutPolicy {
    /// Report nothing when the point falls outside `[0, 100]` on either axis.
    #[default]
    Hide,
    /// Clamp the reported coordinate into `[0, 100]` on both axes.
    Clip,
}

/// Direction of a single wheel zoom step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Magnify the map.
    In,
    /// Shrink the map.
    Out,
}

impl ZoomDirection {
    /// Derives the zoom direction from a wheel event's vertical delta.
    ///
    /// Scrolling up (negative delta) zooms in; anything else zooms out.
    #[must_use]
    pub fn from_wheel_delta(delta_y: f64) -> Self {
        if delta_y < 0.0 { Self::In } else { Self::Out }
    }

    /// Multiplicative scale factor for a zoom step of relative size `step`.
    #[must_use]
    pub fn factor(self, step: f64) -> f64 {
        match self {
            Self::In => 1.0 + step,
            Self::Out => 1.0 - step,
        }
    }
}
