// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Stratmap demos.

use std::path::PathBuf;

use stratmap_viewer::{
    CoordReadout, FilterControl, LabelPlacement, MapOption, MarkerPlacement, ModalView,
    RenderTarget, SelectorButton, Slide,
};
use stratmap_viewport::ViewportState;
use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber. Respects `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .is_err()
    {
        eprintln!("tracing subscriber already installed");
    }
}

/// Directory holding the sample `config.json` and `data.json`.
pub fn sample_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../stratmap_data/tests/fixtures")
}

/// A render target that describes every call on stdout.
#[derive(Debug, Default)]
pub struct ConsoleTarget {
    markers: usize,
    labels: usize,
}

impl ConsoleTarget {
    /// Creates a target with empty overlays.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of markers currently placed.
    pub fn markers(&self) -> usize {
        self.markers
    }

    /// Number of labels currently placed.
    pub fn labels(&self) -> usize {
        self.labels
    }
}

fn buttons(kind: &str, buttons: &[SelectorButton]) {
    let list: Vec<String> = buttons
        .iter()
        .map(|b| {
            if b.selected {
                format!("[{}]", b.caption)
            } else {
                b.caption.clone()
            }
        })
        .collect();
    println!("  {kind}: {}", list.join(" "));
}

impl RenderTarget for ConsoleTarget {
    fn set_title(&mut self, title: &str) {
        println!("# {title}");
    }

    fn set_map_selector(&mut self, options: &[MapOption]) {
        let list: Vec<String> = options
            .iter()
            .map(|o| {
                if o.selected {
                    format!("[{}]", o.label)
                } else {
                    o.label.clone()
                }
            })
            .collect();
        println!("  maps: {}", list.join(" | "));
    }

    fn set_floor_buttons(&mut self, floors: &[SelectorButton]) {
        buttons("floors", floors);
    }

    fn set_site_buttons(&mut self, sites: &[SelectorButton]) {
        buttons("sites", sites);
    }

    fn set_filter_controls(&mut self, controls: &[FilterControl]) {
        let list: Vec<String> = controls
            .iter()
            .map(|c| format!("{} {}", if c.checked { "[x]" } else { "[ ]" }, c.caption))
            .collect();
        println!("  legend: {}", list.join(", "));
    }

    fn set_background(&mut self, src: &str) {
        println!("  background: {src}");
    }

    fn clear_overlays(&mut self) {
        self.markers = 0;
        self.labels = 0;
    }

    fn place_marker(&mut self, marker: &MarkerPlacement) {
        self.markers += 1;
        println!(
            "  marker #{} {} at ({}, {}) {}",
            marker.strategy_index, marker.type_id, marker.left, marker.top, marker.transform
        );
    }

    fn place_label(&mut self, label: &LabelPlacement) {
        self.labels += 1;
        println!("  label {:?} at ({}, {})", label.text, label.left, label.top);
    }

    fn apply_transform(&mut self, state: ViewportState) {
        println!("  transform: {}", state.css());
    }

    fn set_panning(&mut self, panning: bool) {
        println!("  cursor: {}", if panning { "grabbing" } else { "grab" });
    }

    fn show_readout(&mut self, readout: Option<&CoordReadout>) {
        match readout {
            Some(r) => println!(
                "  readout {} at ({:.0}, {:.0})",
                r.text(),
                r.position.x,
                r.position.y
            ),
            None => println!("  readout hidden"),
        }
    }

    fn show_modal(&mut self, modal: &ModalView) {
        println!("  modal: {} ({})", modal.title, modal.description);
        if let Some(slide) = modal.slides.get(modal.current) {
            let what = match slide {
                Slide::Image { src } => src,
                Slide::Video { embed_url } => embed_url,
            };
            println!(
                "    slide {} {}",
                modal.counter.as_deref().unwrap_or(""),
                what
            );
        }
    }

    fn hide_modal(&mut self) {
        println!("  modal closed");
    }

    fn stop_videos(&mut self) {
        println!("  videos stopped");
    }

    fn show_notice(&mut self, message: &str) {
        println!("! {message}");
    }
}
