// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Landing page catalog.
//!
//! Prints the map cards and the in-viewer map selector built from a site
//! configuration, or the placeholder shown when it cannot be loaded.
//!
//! Run:
//! - `cargo run -p stratmap_demos --example catalog`
//! - `cargo run -p stratmap_demos --example catalog -- path/to/config.json`

use std::env;
use std::path::PathBuf;

use stratmap_data::{Document, SiteConfig};
use stratmap_demos::{init_tracing, sample_dir};
use stratmap_viewer::{CatalogView, ViewerOptions, catalog_view, map_selector};

fn main() {
    init_tracing();
    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| sample_dir().join("config.json"));
    let options = ViewerOptions::default();

    let config = SiteConfig::from_path(&path);
    match catalog_view(config.as_ref(), &options.catalog_failure_message) {
        CatalogView::Cards(cards) => {
            for card in cards {
                println!("{:<12} {:<24} {}", card.name, card.href, card.thumbnail);
            }
        }
        CatalogView::Placeholder(message) => println!("{message}"),
    }

    if let Ok(config) = &config {
        if let Some(first) = config.maps.first() {
            println!();
            for option in map_selector(config, &first.id) {
                let mark = if option.selected { "*" } else { " " };
                println!("{mark} {} -> {}", option.label, option.value);
            }
        }
    }
}
