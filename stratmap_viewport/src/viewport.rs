// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::modes::{FitMode, ReadoutPolicy, ZoomDirection};
use crate::options::ViewportOptions;
use crate::region::RegionOfInterest;

/// Scale and translation applied to the map layer.
///
/// The map layer is transformed as `translate(translate_x, translate_y)
/// scale(scale)` with the transform origin at its top-left corner, in the
/// container's local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    /// Uniform scale factor.
    pub scale: f64,
    /// Horizontal translation in container pixels.
    pub translate_x: f64,
    /// Vertical translation in container pixels.
    pub translate_y: f64,
}

impl ViewportState {
    /// The untransformed state.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// Translation as a vector.
    #[must_use]
    pub fn translate(&self) -> Vec2 {
        Vec2::new(self.translate_x, self.translate_y)
    }

    /// Content → container-local transform.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translate()) * Affine::scale(self.scale)
    }

    /// Adapter formatting this state as a CSS `transform` value.
    #[must_use]
    pub fn css(&self) -> CssTransform {
        CssTransform(*self)
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Formats a [`ViewportState`] as `translate(Xpx, Ypx) scale(S)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CssTransform(ViewportState);

impl fmt::Display for CssTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}px, {}px) scale({})",
            self.0.translate_x, self.0.translate_y, self.0.scale
        )
    }
}

/// A point on the map in percent of the unscaled map size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapCoord {
    /// Horizontal position, `0` at the left edge and `100` at the right edge.
    pub x: f64,
    /// Vertical position, `0` at the top edge and `100` at the bottom edge.
    pub y: f64,
}

impl fmt::Display for MapCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {:.1}%, Y: {:.1}%", self.x, self.y)
    }
}

/// Pan/zoom controller for a map layer inside a container.
///
/// `MapViewport` tracks:
/// - The container rectangle in client (page) coordinates.
/// - The unscaled size of the map layer.
/// - The current [`ViewportState`].
/// - An optional region of interest used when re-fitting after a resize.
///
/// Operations never fail. Inputs that cannot produce a meaningful view, such
/// as a map layer that has not been laid out yet, leave the state untouched.
#[derive(Clone, Debug)]
pub struct MapViewport {
    view_rect: Rect,
    content_size: Size,
    state: ViewportState,
    initial_region: Option<RegionOfInterest>,
    options: ViewportOptions,
}

impl MapViewport {
    /// Creates a viewport for a container at `view_rect` showing a map layer
    /// of `content_size` with the default options.
    ///
    /// The initial state is the identity; call [`Self::fit_to_view`] or
    /// [`Self::refit`] to compute the first view.
    #[must_use]
    pub fn new(view_rect: Rect, content_size: Size) -> Self {
        Self::with_options(view_rect, content_size, ViewportOptions::default())
    }

    /// Creates a viewport with explicit options.
    #[must_use]
    pub fn with_options(view_rect: Rect, content_size: Size, options: ViewportOptions) -> Self {
        Self {
            view_rect,
            content_size,
            state: ViewportState::IDENTITY,
            initial_region: None,
            options,
        }
    }

    /// Container rectangle in client coordinates.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        self.view_rect
    }

    /// Updates the container rectangle without changing the state.
    pub fn set_view_rect(&mut self, rect: Rect) {
        self.view_rect = rect;
    }

    /// Unscaled size of the map layer.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Updates the unscaled map size without changing the state.
    pub fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &ViewportOptions {
        &self.options
    }

    /// Replaces the options. The current scale is not re-clamped until the
    /// next zoom step.
    pub fn set_options(&mut self, options: ViewportOptions) {
        self.options = options;
    }

    /// Region of interest used by [`Self::refit`].
    #[must_use]
    pub fn initial_region(&self) -> Option<RegionOfInterest> {
        self.initial_region
    }

    /// Sets the region of interest used by [`Self::refit`].
    pub fn set_initial_region(&mut self, region: Option<RegionOfInterest>) {
        self.initial_region = region;
    }

    /// Current scale and translation.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// Current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    /// Current translation in container pixels.
    #[must_use]
    pub fn translate(&self) -> Vec2 {
        self.state.translate()
    }

    /// Moves the map layer to `translate` without touching the scale.
    pub fn set_translate(&mut self, translate: Vec2) {
        self.state.translate_x = translate.x;
        self.state.translate_y = translate.y;
    }

    /// Content → client transform, including the container origin.
    #[must_use]
    pub fn content_to_client(&self) -> Affine {
        Affine::translate(self.view_rect.origin().to_vec2()) * self.state.to_affine()
    }

    /// Client → content transform.
    #[must_use]
    pub fn client_to_content(&self) -> Affine {
        self.content_to_client().inverse()
    }

    /// Fits the view to the stored region of interest, or to the whole map.
    ///
    /// Re-fitting fully recomputes the state from the current measurements,
    /// so it is safe to call on every resize.
    pub fn refit(&mut self) -> bool {
        self.fit_to_view(self.initial_region)
    }

    /// Computes the initial view for the current container and map sizes.
    ///
    /// With a region of interest, the region is scaled to fit the container on
    /// both axes (the smaller axis scale wins so nothing is cropped), shrunk by
    /// the region margin, and centered. Without one, the whole map is fitted
    /// according to [`FitMode`].
    ///
    /// Returns `false` and leaves the state untouched when the container or
    /// map has no area yet.
    pub fn fit_to_view(&mut self, region: Option<RegionOfInterest>) -> bool {
        let area = self.view_rect.size();
        let base = self.content_size;
        if !has_area(area) || !has_area(base) {
            return false;
        }

        self.state = match region.filter(|r| !r.is_degenerate()) {
            Some(region) => {
                let sx = area.width / (region.width_ratio() * base.width);
                let sy = area.height / (region.height_ratio() * base.height);
                let scale = sx.min(sy) * (1.0 - self.options.region_margin());
                let center = region.center_ratio();
                ViewportState {
                    scale,
                    translate_x: area.width / 2.0 - center.x * base.width * scale,
                    translate_y: area.height / 2.0 - center.y * base.height * scale,
                }
            }
            None => {
                let ratio = match self.options.fit_mode() {
                    FitMode::FillWidth => area.width / base.width,
                    FitMode::Contain => (area.width / base.width).min(area.height / base.height),
                };
                let scale = ratio * (1.0 - self.options.fit_margin());
                ViewportState {
                    scale,
                    translate_x: (area.width - base.width * scale) / 2.0,
                    translate_y: (area.height - base.height * scale) / 2.0,
                }
            }
        };
        true
    }

    /// Zooms one wheel step about a cursor given in client coordinates.
    ///
    /// The map point under the cursor stays under the cursor. The new scale is
    /// clamped into the configured limits; returns `false` if the scale did
    /// not change.
    pub fn zoom_at(&mut self, cursor: Point, direction: ZoomDirection) -> bool {
        let factor = direction.factor(self.options.zoom_step());
        let old_scale = self.state.scale;
        let new_scale =
            (old_scale * factor).clamp(self.options.min_scale(), self.options.max_scale());
        if (new_scale - old_scale).abs() < f64::EPSILON || old_scale <= 0.0 {
            return false;
        }

        let local = cursor - self.view_rect.origin();
        let anchor = (local - self.translate()) / old_scale;
        let translate = local - anchor * new_scale;
        self.state = ViewportState {
            scale: new_scale,
            translate_x: translate.x,
            translate_y: translate.y,
        };
        true
    }

    /// Zooms one step in the direction implied by a wheel delta.
    pub fn zoom_with_wheel(&mut self, cursor: Point, delta_y: f64) -> bool {
        self.zoom_at(cursor, ZoomDirection::from_wheel_delta(delta_y))
    }

    /// Returns `true` if `client` lies inside the container.
    #[must_use]
    pub fn contains(&self, client: Point) -> bool {
        let r = self.view_rect;
        client.x >= r.x0 && client.x <= r.x1 && client.y >= r.y0 && client.y <= r.y1
    }

    /// Maps a client point into unscaled map pixels.
    #[must_use]
    pub fn client_to_content_point(&self, client: Point) -> Point {
        let local = client - self.view_rect.origin();
        ((local - self.translate()) / self.state.scale).to_point()
    }

    /// Maps a map point given in percent into client coordinates.
    #[must_use]
    pub fn map_coord_to_client(&self, coord: MapCoord) -> Point {
        let content = Point::new(
            coord.x / 100.0 * self.content_size.width,
            coord.y / 100.0 * self.content_size.height,
        );
        self.content_to_client() * content
    }

    /// Maps a client point to a map coordinate in percent.
    ///
    /// Points outside the map are handled by the configured
    /// [`ReadoutPolicy`]. Returns `None` while the map has no area.
    #[must_use]
    pub fn inverse_map(&self, client: Point) -> Option<MapCoord> {
        if !has_area(self.content_size) || self.state.scale <= 0.0 {
            return None;
        }
        let content = self.client_to_content_point(client);
        let coord = MapCoord {
            x: content.x / self.content_size.width * 100.0,
            y: content.y / self.content_size.height * 100.0,
        };
        let inside = (0.0..=100.0).contains(&coord.x) && (0.0..=100.0).contains(&coord.y);
        match self.options.readout_policy() {
            _ if inside => Some(coord),
            ReadoutPolicy::Hide => None,
            ReadoutPolicy::Clip => Some(MapCoord {
                x: coord.x.clamp(0.0, 100.0),
                y: coord.y.clamp(0.0, 100.0),
            }),
        }
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> MapViewportDebugInfo {
        MapViewportDebugInfo {
            view_rect: self.view_rect,
            content_size: self.content_size,
            state: self.state,
            visible_content_rect: self.visible_content_rect(),
            initial_region: self.initial_region,
            options: self.options,
        }
    }

    /// Unscaled map rectangle currently visible through the container.
    #[must_use]
    pub fn visible_content_rect(&self) -> Rect {
        let inv = self.client_to_content();
        let a = inv * self.view_rect.origin();
        let b = inv * Point::new(self.view_rect.x1, self.view_rect.y1);
        Rect::from_points(a, b)
    }
}

fn has_area(size: Size) -> bool {
    size.width > 0.0 && size.height > 0.0
}

/// Debug snapshot of a [`MapViewport`].
#[derive(Clone, Copy, Debug)]
pub struct MapViewportDebugInfo {
    /// Container rectangle in client coordinates.
    pub view_rect: Rect,
    /// Unscaled map size.
    pub content_size: Size,
    /// Current scale and translation.
    pub state: ViewportState,
    /// Unscaled map rectangle visible through the container.
    pub visible_content_rect: Rect,
    /// Region used when re-fitting.
    pub initial_region: Option<RegionOfInterest>,
    /// Active options.
    pub options: ViewportOptions,
}
