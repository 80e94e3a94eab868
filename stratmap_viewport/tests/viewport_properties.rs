// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Behavioral properties of `MapViewport` and `PanGesture`.
//!
//! These cover the guarantees callers rely on: fitting is idempotent, wheel
//! zoom keeps the point under the cursor fixed and stays within limits, and
//! panning is exactly reversible.

use kurbo::{Point, Rect, Size, Vec2};
use proptest::prelude::*;
use stratmap_viewport::{
    MapViewport, PanGesture, RegionOfInterest, ViewportOptions, ZoomDirection,
};

const EPSILON_PX: f64 = 1e-6;

fn region_fixture() -> MapViewport {
    MapViewport::new(
        Rect::new(0.0, 0.0, 800.0, 600.0),
        Size::new(1000.0, 1000.0),
    )
}

#[test]
fn region_of_interest_fit_matches_reference_numbers() {
    let mut vp = region_fixture();
    let region = RegionOfInterest::new(25.0, 25.0, 75.0, 75.0);
    assert!(vp.fit_to_view(Some(region)));

    // The 500x500 px region fits 800x600 at 1.2 (height-bound); 5% margin.
    let expected_scale = (800.0_f64 / 500.0).min(600.0 / 500.0) * 0.95;
    assert!((vp.scale() - expected_scale).abs() < 1e-12);

    // Region center (500, 500) in map pixels lands on the container center.
    let center = vp.content_to_client() * Point::new(500.0, 500.0);
    assert!((center.x - 400.0).abs() < EPSILON_PX);
    assert!((center.y - 300.0).abs() < EPSILON_PX);

    // The whole region is visible.
    let visible = vp.visible_content_rect();
    let wanted = region.to_content_rect(vp.content_size());
    assert!(visible.x0 <= wanted.x0 && visible.x1 >= wanted.x1);
    assert!(visible.y0 <= wanted.y0 && visible.y1 >= wanted.y1);
}

#[test]
fn fit_is_idempotent() {
    let mut vp = region_fixture();
    vp.set_initial_region(Some(RegionOfInterest::new(10.0, 5.0, 40.0, 90.0)));
    vp.refit();
    let first = vp.state();
    vp.refit();
    assert_eq!(vp.state(), first);

    vp.fit_to_view(None);
    let whole = vp.state();
    vp.fit_to_view(None);
    assert_eq!(vp.state(), whole);
}

#[test]
fn refit_after_resize_recomputes_from_scratch() {
    let mut vp = region_fixture();
    vp.set_initial_region(Some(RegionOfInterest::new(25.0, 25.0, 75.0, 75.0)));
    vp.refit();
    vp.zoom_at(Point::new(10.0, 10.0), ZoomDirection::In);

    vp.set_view_rect(Rect::new(0.0, 0.0, 1600.0, 1200.0));
    vp.refit();

    let mut fresh = MapViewport::new(
        Rect::new(0.0, 0.0, 1600.0, 1200.0),
        Size::new(1000.0, 1000.0),
    );
    fresh.fit_to_view(Some(RegionOfInterest::new(25.0, 25.0, 75.0, 75.0)));
    assert_eq!(vp.state(), fresh.state());
}

#[test]
fn drag_there_and_back_restores_translation_exactly() {
    let mut vp = region_fixture();
    vp.fit_to_view(None);
    let original = vp.translate();
    assert_eq!(original, Vec2::new(0.0, -100.0));
    let mut pan = PanGesture::new();

    pan.begin(Point::new(200.0, 200.0), &vp);
    pan.update(Point::new(237.0, 181.0), &mut vp);
    pan.end();
    assert_eq!(vp.translate(), original + Vec2::new(37.0, -19.0));

    pan.begin(Point::new(500.0, 400.0), &vp);
    pan.update(Point::new(463.0, 419.0), &mut vp);
    pan.end();
    assert_eq!(vp.translate(), original);
}

fn direction() -> impl Strategy<Value = ZoomDirection> {
    prop_oneof![Just(ZoomDirection::In), Just(ZoomDirection::Out)]
}

proptest! {
    #[test]
    fn wheel_zoom_keeps_anchor_under_cursor(
        cx in 0.0_f64..800.0,
        cy in 0.0_f64..600.0,
        tx in -500.0_f64..500.0,
        ty in -500.0_f64..500.0,
        dir in direction(),
    ) {
        let mut vp = region_fixture();
        vp.set_translate(Vec2::new(tx, ty));
        let cursor = Point::new(cx, cy);
        let before = vp.client_to_content_point(cursor);
        vp.zoom_at(cursor, dir);
        let after = vp.client_to_content_point(cursor);
        // Compare in screen pixels: map the old anchor through the new view.
        let anchor_on_screen = vp.content_to_client() * before;
        prop_assert!((anchor_on_screen - cursor).hypot() < 1e-6);
        prop_assert!((after - before).hypot() < 1e-6);
    }

    #[test]
    fn scale_stays_within_limits(
        steps in prop::collection::vec((direction(), 0.0_f64..800.0, 0.0_f64..600.0), 1..200),
        min in 0.1_f64..1.0,
        max in 1.0_f64..10.0,
    ) {
        let options = ViewportOptions::new().with_zoom_limits(min, max);
        let mut vp = MapViewport::with_options(
            Rect::new(0.0, 0.0, 800.0, 600.0),
            Size::new(1000.0, 1000.0),
            options,
        );
        for (dir, x, y) in steps {
            vp.zoom_at(Point::new(x, y), dir);
            prop_assert!(vp.scale() >= min && vp.scale() <= max);
        }
    }

    #[test]
    fn pan_round_trip_within_one_drag(
        sx in 0.0_f64..800.0,
        sy in 0.0_f64..600.0,
        dx in -1000.0_f64..1000.0,
        dy in -1000.0_f64..1000.0,
    ) {
        let mut vp = region_fixture();
        vp.fit_to_view(None);
        let original = vp.state();
        let mut pan = PanGesture::new();
        let start = Point::new(sx, sy);
        prop_assert!(pan.begin(start, &vp));
        pan.update(start + Vec2::new(dx, dy), &mut vp);
        pan.update(start, &mut vp);
        pan.end();
        prop_assert_eq!(vp.state(), original);
    }
}
