// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

/// A sub-rectangle of the map expressed in percent of the unscaled map size.
///
/// `(0, 0)` is the top-left corner of the map and `(100, 100)` the
/// bottom-right one. Corners are normalized on construction so that
/// `x1 <= x2` and `y1 <= y2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionOfInterest {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl RegionOfInterest {
    /// The whole map.
    pub const FULL: Self = Self {
        x1: 0.0,
        y1: 0.0,
        x2: 100.0,
        y2: 100.0,
    };

    /// Creates a region from two opposite corners given in percent.
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
        }
    }

    /// Left edge in percent.
    #[must_use]
    pub fn x1(&self) -> f64 {
        self.x1
    }

    /// Top edge in percent.
    #[must_use]
    pub fn y1(&self) -> f64 {
        self.y1
    }

    /// Right edge in percent.
    #[must_use]
    pub fn x2(&self) -> f64 {
        self.x2
    }

    /// Bottom edge in percent.
    #[must_use]
    pub fn y2(&self) -> f64 {
        self.y2
    }

    /// Width as a fraction of the map width (`0.0..=1.0` for in-map regions).
    #[must_use]
    pub fn width_ratio(&self) -> f64 {
        (self.x2 - self.x1) / 100.0
    }

    /// Height as a fraction of the map height.
    #[must_use]
    pub fn height_ratio(&self) -> f64 {
        (self.y2 - self.y1) / 100.0
    }

    /// Center of the region as fractions of the map size.
    #[must_use]
    pub fn center_ratio(&self) -> Point {
        Point::new(
            self.x1 / 100.0 + self.width_ratio() / 2.0,
            self.y1 / 100.0 + self.height_ratio() / 2.0,
        )
    }

    /// Returns `true` if the region has no area (or contains NaN edges).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.width_ratio() > 0.0 && self.height_ratio() > 0.0)
    }

    /// The region in content-space pixels for a map of the given unscaled size.
    #[must_use]
    pub fn to_content_rect(&self, content: Size) -> Rect {
        Rect::new(
            self.x1 / 100.0 * content.width,
            self.y1 / 100.0 * content.height,
            self.x2 / 100.0 * content.width,
            self.y2 / 100.0 * content.height,
        )
    }
}

impl Default for RegionOfInterest {
    fn default() -> Self {
        Self::FULL
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::RegionOfInterest;

    #[test]
    fn corners_are_normalized() {
        let region = RegionOfInterest::new(75.0, 80.0, 25.0, 20.0);
        assert_eq!(region, RegionOfInterest::new(25.0, 20.0, 75.0, 80.0));
        assert!((region.width_ratio() - 0.5).abs() < 1e-12);
        assert!((region.height_ratio() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn center_ratio_is_midpoint() {
        let region = RegionOfInterest::new(10.0, 20.0, 30.0, 60.0);
        let center = region.center_ratio();
        assert!((center.x - 0.2).abs() < 1e-12);
        assert!((center.y - 0.4).abs() < 1e-12);
        assert_eq!(RegionOfInterest::FULL.center_ratio(), Point::new(0.5, 0.5));
    }

    #[test]
    fn degenerate_regions() {
        assert!(RegionOfInterest::new(10.0, 10.0, 10.0, 50.0).is_degenerate());
        assert!(RegionOfInterest::new(f64::NAN, 0.0, 10.0, 10.0).is_degenerate());
        assert!(!RegionOfInterest::FULL.is_degenerate());
    }

    #[test]
    fn content_rect_scales_with_map_size() {
        let region = RegionOfInterest::new(25.0, 25.0, 75.0, 75.0);
        let rect = region.to_content_rect(Size::new(1000.0, 800.0));
        assert_eq!(rect, Rect::new(250.0, 200.0, 750.0, 600.0));
    }
}
