// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag panning: a two-state gesture machine driving [`MapViewport`] translation.
//!
//! ## Usage
//!
//! 1) On pointer-down, call [`PanGesture::begin`]; it snapshots the pointer and
//!    the viewport translation and switches to [`PanPhase::Panning`].
//! 2) On pointer-move, call [`PanGesture::update`]; while idle this is ignored.
//! 3) On pointer-up or pointer-leave, call [`PanGesture::end`].
//!
//! The translation is always recomputed from the snapshot, never accumulated,
//! so returning the pointer to where the drag started restores the starting
//! translation exactly.
//!
//! ```
//! use kurbo::{Point, Rect, Size, Vec2};
//! use stratmap_viewport::{MapViewport, PanGesture};
//!
//! let mut viewport = MapViewport::new(Rect::new(0.0, 0.0, 800.0, 600.0), Size::new(1000.0, 1000.0));
//! let mut pan = PanGesture::new();
//!
//! assert!(pan.begin(Point::new(100.0, 100.0), &viewport));
//! pan.update(Point::new(130.0, 90.0), &mut viewport);
//! assert_eq!(viewport.translate(), Vec2::new(30.0, -10.0));
//! pan.end();
//! assert!(!pan.is_panning());
//! ```

use kurbo::{Point, Vec2};

use crate::viewport::MapViewport;

/// Phase of a [`PanGesture`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PanPhase {
    /// No pointer is held down over the map.
    #[default]
    Idle,
    /// A pointer was pressed inside the container and is being dragged.
    Panning,
}

/// Translation after dragging from `start` to `current`, given the translation
/// at the moment the drag started.
#[must_use]
pub fn drag_translate(translate_at_start: Vec2, start: Point, current: Point) -> Vec2 {
    translate_at_start + (current - start)
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PanOrigin {
    pointer: Point,
    translate: Vec2,
}

/// Tracks a drag-to-pan gesture.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanGesture {
    origin: Option<PanOrigin>,
}

impl PanGesture {
    /// Creates an idle gesture.
    #[must_use]
    pub const fn new() -> Self {
        Self { origin: None }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> PanPhase {
        if self.origin.is_some() {
            PanPhase::Panning
        } else {
            PanPhase::Idle
        }
    }

    /// Returns `true` while panning.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.origin.is_some()
    }

    /// Starts panning if `pointer` lies inside the viewport's container.
    ///
    /// Starting while already panning restarts the gesture from the new
    /// position. Returns whether the gesture is now panning.
    pub fn begin(&mut self, pointer: Point, viewport: &MapViewport) -> bool {
        if !viewport.contains(pointer) {
            return false;
        }
        self.origin = Some(PanOrigin {
            pointer,
            translate: viewport.translate(),
        });
        true
    }

    /// Moves the map so it follows the pointer.
    ///
    /// Ignored while idle; returns whether the viewport changed.
    pub fn update(&mut self, pointer: Point, viewport: &mut MapViewport) -> bool {
        let Some(origin) = self.origin else {
            return false;
        };
        let translate = drag_translate(origin.translate, origin.pointer, pointer);
        if translate == viewport.translate() {
            return false;
        }
        viewport.set_translate(translate);
        true
    }

    /// Offset of `pointer` from where the drag started, while panning.
    #[must_use]
    pub fn total_offset(&self, pointer: Point) -> Option<Vec2> {
        self.origin.map(|origin| pointer - origin.pointer)
    }

    /// Ends the gesture. Returns whether a pan was in progress.
    pub fn end(&mut self) -> bool {
        self.origin.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::{PanGesture, PanPhase, drag_translate};
    use crate::MapViewport;

    fn viewport() -> MapViewport {
        MapViewport::new(Rect::new(0.0, 0.0, 800.0, 600.0), Size::new(1000.0, 1000.0))
    }

    #[test]
    fn new_gesture_is_idle() {
        let pan = PanGesture::new();
        assert_eq!(pan.phase(), PanPhase::Idle);
        assert_eq!(pan.total_offset(Point::ZERO), None);
    }

    #[test]
    fn begin_outside_container_stays_idle() {
        let vp = viewport();
        let mut pan = PanGesture::new();
        assert!(!pan.begin(Point::new(900.0, 10.0), &vp));
        assert_eq!(pan.phase(), PanPhase::Idle);
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let mut vp = viewport();
        let mut pan = PanGesture::new();
        assert!(!pan.update(Point::new(50.0, 50.0), &mut vp));
        assert_eq!(vp.translate(), Vec2::ZERO);
    }

    #[test]
    fn updates_are_relative_to_the_snapshot() {
        let mut vp = viewport();
        vp.set_translate(Vec2::new(-40.0, 10.0));
        let mut pan = PanGesture::new();
        pan.begin(Point::new(100.0, 100.0), &vp);

        pan.update(Point::new(110.0, 120.0), &mut vp);
        assert_eq!(vp.translate(), Vec2::new(-30.0, 30.0));

        pan.update(Point::new(90.0, 95.0), &mut vp);
        assert_eq!(vp.translate(), Vec2::new(-50.0, 5.0));
        assert_eq!(
            pan.total_offset(Point::new(90.0, 95.0)),
            Some(Vec2::new(-10.0, -5.0))
        );

        // Back to the start pointer: the starting translation is restored.
        pan.update(Point::new(100.0, 100.0), &mut vp);
        assert_eq!(vp.translate(), Vec2::new(-40.0, 10.0));
    }

    #[test]
    fn pan_does_not_change_scale() {
        let mut vp = viewport();
        vp.fit_to_view(None);
        let scale = vp.scale();
        let mut pan = PanGesture::new();
        pan.begin(Point::new(10.0, 10.0), &vp);
        pan.update(Point::new(300.0, 200.0), &mut vp);
        assert_eq!(vp.scale(), scale);
    }

    #[test]
    fn end_returns_to_idle() {
        let vp = viewport();
        let mut pan = PanGesture::new();
        assert!(!pan.end());
        pan.begin(Point::new(10.0, 10.0), &vp);
        assert!(pan.end());
        assert_eq!(pan.phase(), PanPhase::Idle);
    }

    #[test]
    fn drag_translate_is_pure() {
        let t = drag_translate(
            Vec2::new(5.0, 5.0),
            Point::new(1.0, 2.0),
            Point::new(4.0, 0.0),
        );
        assert_eq!(t, Vec2::new(8.0, 3.0));
    }
}
