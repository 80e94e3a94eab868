// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The surface a [`MapViewer`](crate::MapViewer) draws into.
//!
//! The viewer never touches a document tree or a GPU directly. Everything it
//! shows goes through [`RenderTarget`], so a browser binding, a native
//! renderer, and [`RecordingTarget`] in tests all see the same calls.
//!
//! Overlays are drawn in two passes per scene: [`RenderTarget::clear_overlays`]
//! followed by one `place_*` call per element in document order.

use stratmap_viewport::ViewportState;

use crate::catalog::MapOption;
use crate::filters::FilterControl;
use crate::modal::ModalView;
use crate::readout::CoordReadout;
use crate::scene::{LabelPlacement, MarkerPlacement};

/// A floor or site button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorButton {
    /// Floor or site id.
    pub id: String,
    /// Display name.
    pub caption: String,
    /// Whether this is the current selection.
    pub selected: bool,
}

/// Drawing and widget operations used by the viewer.
pub trait RenderTarget {
    /// Sets the map title.
    fn set_title(&mut self, title: &str);

    /// Replaces the options of the map selector dropdown.
    fn set_map_selector(&mut self, options: &[MapOption]);

    /// Replaces the floor buttons.
    fn set_floor_buttons(&mut self, buttons: &[SelectorButton]);

    /// Replaces the site buttons.
    fn set_site_buttons(&mut self, buttons: &[SelectorButton]);

    /// Replaces the legend checkboxes.
    fn set_filter_controls(&mut self, controls: &[FilterControl]);

    /// Sets the map layer's background image.
    fn set_background(&mut self, src: &str);

    /// Removes every marker and label.
    fn clear_overlays(&mut self);

    /// Adds a strategy marker.
    fn place_marker(&mut self, marker: &MarkerPlacement);

    /// Adds a text label.
    fn place_label(&mut self, label: &LabelPlacement);

    /// Applies the pan/zoom transform to the map layer.
    ///
    /// Use [`ViewportState::css`] for a CSS `transform` value with the origin
    /// at the top-left corner.
    fn apply_transform(&mut self, state: ViewportState);

    /// Toggles the "grabbing" look of the container.
    fn set_panning(&mut self, panning: bool);

    /// Shows the coordinate readout, or hides it with `None`.
    fn show_readout(&mut self, readout: Option<&CoordReadout>);

    /// Shows the modal, replacing whatever it showed before.
    fn show_modal(&mut self, modal: &ModalView);

    /// Hides the modal.
    fn hide_modal(&mut self);

    /// Stops every playing video in the modal.
    fn stop_videos(&mut self);

    /// Shows a user-visible message, used for load failures.
    fn show_notice(&mut self, message: &str);
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    fn set_title(&mut self, title: &str) {
        (**self).set_title(title);
    }

    fn set_map_selector(&mut self, options: &[MapOption]) {
        (**self).set_map_selector(options);
    }

    fn set_floor_buttons(&mut self, buttons: &[SelectorButton]) {
        (**self).set_floor_buttons(buttons);
    }

    fn set_site_buttons(&mut self, buttons: &[SelectorButton]) {
        (**self).set_site_buttons(buttons);
    }

    fn set_filter_controls(&mut self, controls: &[FilterControl]) {
        (**self).set_filter_controls(controls);
    }

    fn set_background(&mut self, src: &str) {
        (**self).set_background(src);
    }

    fn clear_overlays(&mut self) {
        (**self).clear_overlays();
    }

    fn place_marker(&mut self, marker: &MarkerPlacement) {
        (**self).place_marker(marker);
    }

    fn place_label(&mut self, label: &LabelPlacement) {
        (**self).place_label(label);
    }

    fn apply_transform(&mut self, state: ViewportState) {
        (**self).apply_transform(state);
    }

    fn set_panning(&mut self, panning: bool) {
        (**self).set_panning(panning);
    }

    fn show_readout(&mut self, readout: Option<&CoordReadout>) {
        (**self).show_readout(readout);
    }

    fn show_modal(&mut self, modal: &ModalView) {
        (**self).show_modal(modal);
    }

    fn hide_modal(&mut self) {
        (**self).hide_modal();
    }

    fn stop_videos(&mut self) {
        (**self).stop_videos();
    }

    fn show_notice(&mut self, message: &str) {
        (**self).show_notice(message);
    }
}

/// One recorded [`RenderTarget`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderOp {
    /// [`RenderTarget::set_title`].
    Title(String),
    /// [`RenderTarget::set_map_selector`].
    MapSelector(Vec<MapOption>),
    /// [`RenderTarget::set_floor_buttons`].
    FloorButtons(Vec<SelectorButton>),
    /// [`RenderTarget::set_site_buttons`].
    SiteButtons(Vec<SelectorButton>),
    /// [`RenderTarget::set_filter_controls`].
    FilterControls(Vec<FilterControl>),
    /// [`RenderTarget::set_background`].
    Background(String),
    /// [`RenderTarget::clear_overlays`].
    ClearOverlays,
    /// [`RenderTarget::place_marker`].
    Marker(MarkerPlacement),
    /// [`RenderTarget::place_label`].
    Label(LabelPlacement),
    /// [`RenderTarget::apply_transform`].
    Transform(ViewportState),
    /// [`RenderTarget::set_panning`].
    Panning(bool),
    /// [`RenderTarget::show_readout`].
    Readout(Option<CoordReadout>),
    /// [`RenderTarget::show_modal`].
    ShowModal(ModalView),
    /// [`RenderTarget::hide_modal`].
    HideModal,
    /// [`RenderTarget::stop_videos`].
    StopVideos,
    /// [`RenderTarget::show_notice`].
    Notice(String),
}

/// In-memory target that records every call, for tests and headless runs.
#[derive(Clone, Debug, Default)]
pub struct RecordingTarget {
    ops: Vec<RenderOp>,
}

impl RecordingTarget {
    /// Creates an empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls so far, oldest first.
    #[must_use]
    pub fn ops(&self) -> &[RenderOp] {
        &self.ops
    }

    /// Removes and returns the recorded calls.
    pub fn take(&mut self) -> Vec<RenderOp> {
        core::mem::take(&mut self.ops)
    }

    /// Markers placed since the last [`RenderOp::ClearOverlays`].
    #[must_use]
    pub fn current_markers(&self) -> Vec<&MarkerPlacement> {
        self.since_last_clear()
            .iter()
            .filter_map(|op| match op {
                RenderOp::Marker(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    /// Labels placed since the last [`RenderOp::ClearOverlays`].
    #[must_use]
    pub fn current_labels(&self) -> Vec<&LabelPlacement> {
        self.since_last_clear()
            .iter()
            .filter_map(|op| match op {
                RenderOp::Label(l) => Some(l),
                _ => None,
            })
            .collect()
    }

    /// The most recently applied transform.
    #[must_use]
    pub fn last_transform(&self) -> Option<ViewportState> {
        self.ops.iter().rev().find_map(|op| match op {
            RenderOp::Transform(state) => Some(*state),
            _ => None,
        })
    }

    fn since_last_clear(&self) -> &[RenderOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, RenderOp::ClearOverlays))
            .map_or(0, |i| i + 1);
        &self.ops[start..]
    }
}

impl RenderTarget for RecordingTarget {
    fn set_title(&mut self, title: &str) {
        self.ops.push(RenderOp::Title(title.to_owned()));
    }

    fn set_map_selector(&mut self, options: &[MapOption]) {
        self.ops.push(RenderOp::MapSelector(options.to_vec()));
    }

    fn set_floor_buttons(&mut self, buttons: &[SelectorButton]) {
        self.ops.push(RenderOp::FloorButtons(buttons.to_vec()));
    }

    fn set_site_buttons(&mut self, buttons: &[SelectorButton]) {
        self.ops.push(RenderOp::SiteButtons(buttons.to_vec()));
    }

    fn set_filter_controls(&mut self, controls: &[FilterControl]) {
        self.ops.push(RenderOp::FilterControls(controls.to_vec()));
    }

    fn set_background(&mut self, src: &str) {
        self.ops.push(RenderOp::Background(src.to_owned()));
    }

    fn clear_overlays(&mut self) {
        self.ops.push(RenderOp::ClearOverlays);
    }

    fn place_marker(&mut self, marker: &MarkerPlacement) {
        self.ops.push(RenderOp::Marker(marker.clone()));
    }

    fn place_label(&mut self, label: &LabelPlacement) {
        self.ops.push(RenderOp::Label(label.clone()));
    }

    fn apply_transform(&mut self, state: ViewportState) {
        self.ops.push(RenderOp::Transform(state));
    }

    fn set_panning(&mut self, panning: bool) {
        self.ops.push(RenderOp::Panning(panning));
    }

    fn show_readout(&mut self, readout: Option<&CoordReadout>) {
        self.ops.push(RenderOp::Readout(readout.cloned()));
    }

    fn show_modal(&mut self, modal: &ModalView) {
        self.ops.push(RenderOp::ShowModal(modal.clone()));
    }

    fn hide_modal(&mut self) {
        self.ops.push(RenderOp::HideModal);
    }

    fn stop_videos(&mut self) {
        self.ops.push(RenderOp::StopVideos);
    }

    fn show_notice(&mut self, message: &str) {
        self.ops.push(RenderOp::Notice(message.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use stratmap_data::Percent;

    use super::{RecordingTarget, RenderOp, RenderTarget};
    use crate::scene::LabelPlacement;

    fn label(text: &str) -> LabelPlacement {
        LabelPlacement {
            text: text.into(),
            left: Percent(1.0),
            top: Percent(2.0),
            font_size: None,
            transform: "translate(-50%, -50%)".into(),
        }
    }

    #[test]
    fn current_overlays_start_after_last_clear() {
        let mut target = RecordingTarget::new();
        target.clear_overlays();
        target.place_label(&label("old"));
        target.clear_overlays();
        target.place_label(&label("new"));
        let texts: Vec<&str> = target
            .current_labels()
            .iter()
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(texts, vec!["new"]);
        assert!(target.current_markers().is_empty());
    }

    fn notify<T: RenderTarget>(mut target: T) {
        target.show_notice("offline");
    }

    #[test]
    fn forwarding_through_mut_ref_records() {
        let mut target = RecordingTarget::new();
        notify(&mut target);
        assert_eq!(target.take(), vec![RenderOp::Notice("offline".into())]);
        assert!(target.ops().is_empty());
    }
}
