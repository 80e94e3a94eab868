// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted viewer session.
//!
//! Opens the sample map in a console render target and replays a short
//! session: zoom, drag, switch floor, toggle a filter, browse a strategy's
//! media, and step back through history.
//!
//! Run:
//! - `cargo run -p stratmap_demos --example viewer_session`
//! - `cargo run -p stratmap_demos --example viewer_session -- "floor=2f&test=true"`
//!
//! Set `RUST_LOG=debug` to see the viewer's own logging.

use std::env;

use kurbo::{Point, Rect, Size};
use stratmap_data::{Document, SiteConfig};
use stratmap_demos::{ConsoleTarget, init_tracing, sample_dir};
use stratmap_viewer::{MapViewer, ViewerEvent, ViewerOptions, ViewerSetup};

fn main() {
    init_tracing();
    let query = env::args().nth(1).unwrap_or_default();
    let dir = sample_dir();

    let config = match SiteConfig::from_path(dir.join("config.json")) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(%err, "cannot read the catalog");
            return;
        }
    };
    let setup = ViewerSetup {
        query: &query,
        view_rect: Rect::new(0.0, 0.0, 960.0, 640.0),
        content_size: Size::new(2048.0, 2048.0),
        map: config.map("embassy"),
        catalog: Some(&config),
    };
    let Ok(mut viewer) = MapViewer::open_path(
        ConsoleTarget::new(),
        dir.join("data.json"),
        setup,
        ViewerOptions::default(),
    ) else {
        return;
    };

    let script = [
        ViewerEvent::Wheel {
            cursor: Point::new(480.0, 320.0),
            delta_y: -100.0,
        },
        ViewerEvent::PointerDown(Point::new(300.0, 300.0)),
        ViewerEvent::PointerMove(Point::new(340.0, 280.0)),
        ViewerEvent::PointerUp,
        ViewerEvent::SelectFloor("2f".into()),
        ViewerEvent::SelectFloor("1f".into()),
        ViewerEvent::FilterChanged {
            value: "camera".into(),
            checked: false,
        },
        ViewerEvent::MarkerClicked(0),
        ViewerEvent::SlideNext,
        ViewerEvent::CloseModal,
        ViewerEvent::HistoryPop("floor=2f&site=kitchen".into()),
        ViewerEvent::PointerLeave,
    ];

    for event in script {
        println!("> {event:?}");
        let outcome = viewer.handle(event);
        if let Some(query) = outcome.push_query {
            println!("  history.pushState(?{query})");
        }
    }

    let target = viewer.target();
    println!(
        "done: {} markers, {} labels on screen",
        target.markers(),
        target.labels()
    );
}
