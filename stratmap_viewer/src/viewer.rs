// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interactive viewer: state plus event dispatch.

use std::path::Path;

use kurbo::{Point, Rect, Size};
use stratmap_data::{Document, LoadError, MapData, MapEntry, SiteConfig};
use stratmap_viewport::{MapViewport, PanGesture};

use crate::catalog::map_selector;
use crate::error::ViewerError;
use crate::filters::FilterSet;
use crate::modal::ModalState;
use crate::navigation::{Navigation, ViewSelection};
use crate::options::ViewerOptions;
use crate::readout::CoordReadout;
use crate::render::{RenderTarget, SelectorButton};
use crate::scene::compose_scene;

/// Page measurements and URL state needed to open a viewer.
#[derive(Clone, Copy, Debug)]
pub struct ViewerSetup<'a> {
    /// Query string of the page URL, with or without the leading `?`.
    pub query: &'a str,
    /// Container rectangle in client coordinates.
    pub view_rect: Rect,
    /// Unscaled size of the map layer.
    ///
    /// May be zero until the background image has loaded; send
    /// [`ViewerEvent::ContentResized`] once it is known.
    pub content_size: Size,
    /// Catalog entry of the map, for its title and region of interest.
    pub map: Option<&'a MapEntry>,
    /// Site catalog feeding the map selector; the selector is left alone
    /// when absent.
    pub catalog: Option<&'a SiteConfig>,
}

/// Input delivered to [`MapViewer::handle`].
#[derive(Clone, Debug, PartialEq)]
pub enum ViewerEvent {
    /// Mouse wheel over the container.
    Wheel {
        /// Cursor in client coordinates.
        cursor: Point,
        /// Vertical wheel delta; negative zooms in.
        delta_y: f64,
    },
    /// Primary button pressed.
    PointerDown(Point),
    /// Pointer moved.
    PointerMove(Point),
    /// Primary button released.
    PointerUp,
    /// Pointer left the container.
    PointerLeave,
    /// The container moved or changed size.
    Resize(Rect),
    /// The map layer's unscaled size became known or changed.
    ContentResized(Size),
    /// A floor button was clicked.
    SelectFloor(String),
    /// A site button was clicked.
    SelectSite(String),
    /// A legend checkbox changed.
    FilterChanged {
        /// Checkbox value.
        value: String,
        /// New checked state.
        checked: bool,
    },
    /// The browser navigated through history to a URL with this query.
    HistoryPop(String),
    /// A marker was clicked; carries [`MarkerPlacement::strategy_index`].
    ///
    /// [`MarkerPlacement::strategy_index`]: crate::MarkerPlacement::strategy_index
    MarkerClicked(usize),
    /// The modal's "next" button.
    SlideNext,
    /// The modal's "previous" button.
    SlidePrev,
    /// The modal's close button or backdrop.
    CloseModal,
}

/// What the host should do after an event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// Suppress the browser's default action (page scroll, text selection).
    pub prevent_default: bool,
    /// Push a history entry with this query string.
    pub push_query: Option<String>,
}

impl EventOutcome {
    fn consumed() -> Self {
        Self {
            prevent_default: true,
            push_query: None,
        }
    }

    fn push(query: String) -> Self {
        Self {
            prevent_default: false,
            push_query: Some(query),
        }
    }
}

/// A strategy map on screen.
///
/// Owns the document and every piece of interaction state. All drawing goes
/// to the injected [`RenderTarget`].
#[derive(Debug)]
pub struct MapViewer<T: RenderTarget> {
    target: T,
    data: MapData,
    options: ViewerOptions,
    viewport: MapViewport,
    pan: PanGesture,
    filters: FilterSet,
    selection: ViewSelection,
    query: String,
    test_mode: bool,
    modal: Option<ModalState>,
}

impl<T: RenderTarget> MapViewer<T> {
    /// Opens a viewer for an already decoded document and draws it.
    ///
    /// On failure the load-failure notice is shown on `target` before the
    /// error is returned.
    pub fn open(
        mut target: T,
        data: MapData,
        setup: ViewerSetup<'_>,
        options: ViewerOptions,
    ) -> Result<Self, ViewerError> {
        let nav = Navigation::from_query(setup.query);
        let Some(selection) = nav.resolve(&data) else {
            tracing::error!("map document has no floors");
            target.show_notice(&options.load_failure_message);
            return Err(ViewerError::NoFloors);
        };

        let mut viewport =
            MapViewport::with_options(setup.view_rect, setup.content_size, options.viewport);
        viewport.set_initial_region(setup.map.and_then(MapEntry::initial_region));
        viewport.refit();

        let filters = FilterSet::new(&data.strategy_types);
        let mut viewer = Self {
            target,
            data,
            options,
            viewport,
            pan: PanGesture::new(),
            filters,
            query: selection.write_query(setup.query),
            selection,
            test_mode: nav.test_mode,
            modal: None,
        };
        tracing::debug!(
            floor = %viewer.selection.floor_id,
            site = ?viewer.selection.site_id,
            test_mode = viewer.test_mode,
            "opening map viewer"
        );

        if let Some(map) = setup.map {
            viewer.target.set_title(&map.name);
        }
        if let Some(catalog) = setup.catalog {
            let current = setup.map.map_or("", |map| map.id.as_str());
            viewer.target.set_map_selector(&map_selector(catalog, current));
        }
        viewer
            .target
            .set_filter_controls(&viewer.filters.controls(&viewer.options.labels_caption));
        viewer.sync_selectors();
        viewer.render_scene();
        viewer.target.apply_transform(viewer.viewport.state());
        Ok(viewer)
    }

    /// Decodes `json` and opens a viewer for it.
    pub fn open_json(
        target: T,
        json: &str,
        setup: ViewerSetup<'_>,
        options: ViewerOptions,
    ) -> Result<Self, ViewerError> {
        let data = MapData::from_json_str(json);
        Self::open_loaded(target, data, setup, options)
    }

    /// Reads and decodes the document at `path`, then opens a viewer for it.
    pub fn open_path(
        target: T,
        path: impl AsRef<Path>,
        setup: ViewerSetup<'_>,
        options: ViewerOptions,
    ) -> Result<Self, ViewerError> {
        let data = MapData::from_path(path);
        Self::open_loaded(target, data, setup, options)
    }

    fn open_loaded(
        mut target: T,
        data: Result<MapData, LoadError>,
        setup: ViewerSetup<'_>,
        options: ViewerOptions,
    ) -> Result<Self, ViewerError> {
        match data {
            Ok(data) => Self::open(target, data, setup, options),
            Err(err) => {
                target.show_notice(&options.load_failure_message);
                Err(err.into())
            }
        }
    }

    /// The loaded document.
    #[must_use]
    pub fn data(&self) -> &MapData {
        &self.data
    }

    /// The pan/zoom controller.
    #[must_use]
    pub fn viewport(&self) -> &MapViewport {
        &self.viewport
    }

    /// The current floor and site.
    #[must_use]
    pub fn selection(&self) -> &ViewSelection {
        &self.selection
    }

    /// The legend state.
    #[must_use]
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// The query string describing the current selection, without `?`.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the coordinate readout is enabled.
    #[must_use]
    pub fn test_mode(&self) -> bool {
        self.test_mode
    }

    /// The open modal, if any.
    #[must_use]
    pub fn modal(&self) -> Option<&ModalState> {
        self.modal.as_ref()
    }

    /// The render target.
    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }

    /// The render target, mutably.
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Consumes the viewer and returns its render target.
    pub fn into_target(self) -> T {
        self.target
    }

    /// Handles one input event.
    pub fn handle(&mut self, event: ViewerEvent) -> EventOutcome {
        match event {
            ViewerEvent::Wheel { cursor, delta_y } => {
                if self.viewport.zoom_with_wheel(cursor, delta_y) {
                    self.target.apply_transform(self.viewport.state());
                    self.update_readout(cursor);
                }
                EventOutcome::consumed()
            }
            ViewerEvent::PointerDown(pointer) => {
                if self.pan.begin(pointer, &self.viewport) {
                    self.target.set_panning(true);
                    EventOutcome::consumed()
                } else {
                    EventOutcome::default()
                }
            }
            ViewerEvent::PointerMove(pointer) => {
                if self.pan.update(pointer, &mut self.viewport) {
                    self.target.apply_transform(self.viewport.state());
                }
                self.update_readout(pointer);
                EventOutcome::default()
            }
            ViewerEvent::PointerUp => {
                self.end_pan();
                EventOutcome::default()
            }
            ViewerEvent::PointerLeave => {
                self.end_pan();
                if self.test_mode {
                    self.target.show_readout(None);
                }
                EventOutcome::default()
            }
            ViewerEvent::Resize(rect) => {
                self.viewport.set_view_rect(rect);
                self.refit();
                EventOutcome::default()
            }
            ViewerEvent::ContentResized(size) => {
                self.viewport.set_content_size(size);
                self.refit();
                EventOutcome::default()
            }
            ViewerEvent::SelectFloor(id) => self.select_floor(id),
            ViewerEvent::SelectSite(id) => self.select_site(id),
            ViewerEvent::FilterChanged { value, checked } => {
                if self.filters.set_by_value(&value, checked) {
                    tracing::debug!(value = %value, checked, revision = self.filters.revision(), "filter changed");
                    self.render_scene();
                }
                EventOutcome::default()
            }
            ViewerEvent::HistoryPop(query) => {
                self.restore_history(&query);
                EventOutcome::default()
            }
            ViewerEvent::MarkerClicked(index) => {
                self.open_modal(index);
                EventOutcome::default()
            }
            ViewerEvent::SlideNext => {
                self.step_slide(ModalState::next_slide);
                EventOutcome::default()
            }
            ViewerEvent::SlidePrev => {
                self.step_slide(ModalState::prev_slide);
                EventOutcome::default()
            }
            ViewerEvent::CloseModal => {
                if self.modal.take().is_some() {
                    self.target.stop_videos();
                    self.target.hide_modal();
                }
                EventOutcome::default()
            }
        }
    }

    fn end_pan(&mut self) {
        if self.pan.end() {
            self.target.set_panning(false);
        }
    }

    fn refit(&mut self) {
        if self.viewport.refit() {
            self.target.apply_transform(self.viewport.state());
        }
    }

    fn update_readout(&mut self, cursor: Point) {
        if self.test_mode {
            let readout = CoordReadout::at(&self.viewport, cursor);
            self.target.show_readout(readout.as_ref());
        }
    }

    fn select_floor(&mut self, id: String) -> EventOutcome {
        if !self.data.floors.contains_key(&id) {
            tracing::warn!(floor = %id, "ignoring selection of unknown floor");
            return EventOutcome::default();
        }
        if self.selection.floor_id == id {
            return EventOutcome::default();
        }
        self.selection.floor_id = id;
        self.navigated()
    }

    fn select_site(&mut self, id: String) -> EventOutcome {
        if !self.data.sites.contains_key(&id) {
            tracing::warn!(site = %id, "ignoring selection of unknown site");
            return EventOutcome::default();
        }
        if self.selection.site_id.as_deref() == Some(id.as_str()) {
            return EventOutcome::default();
        }
        self.selection.site_id = Some(id);
        self.navigated()
    }

    fn navigated(&mut self) -> EventOutcome {
        tracing::debug!(
            floor = %self.selection.floor_id,
            site = ?self.selection.site_id,
            "navigated"
        );
        self.query = self.selection.write_query(&self.query);
        self.sync_selectors();
        self.render_scene();
        EventOutcome::push(self.query.clone())
    }

    fn restore_history(&mut self, query: &str) {
        let nav = Navigation::from_query(query);
        let Some(selection) = nav.resolve(&self.data) else {
            return;
        };
        tracing::debug!(floor = %selection.floor_id, site = ?selection.site_id, "restoring history entry");
        self.query = selection.write_query(query);
        self.selection = selection;
        self.sync_selectors();
        self.render_scene();
    }

    fn open_modal(&mut self, index: usize) {
        let content = self
            .selection
            .site_id
            .as_deref()
            .and_then(|id| self.data.site(id))
            .and_then(|site| site.strategies.get(index))
            .and_then(|s| s.modal_content.as_ref());
        let Some(content) = content else {
            tracing::debug!(index, "clicked marker has no details");
            return;
        };
        if self.modal.is_some() {
            self.target.stop_videos();
        }
        let modal = ModalState::open(content);
        self.target.show_modal(&modal.view());
        self.modal = Some(modal);
    }

    fn step_slide(&mut self, step: fn(&mut ModalState) -> bool) {
        let Some(modal) = self.modal.as_mut() else {
            return;
        };
        if step(modal) {
            if modal.has_playable_media() {
                self.target.stop_videos();
            }
            self.target.show_modal(&modal.view());
        }
    }

    fn sync_selectors(&mut self) {
        let floors: Vec<SelectorButton> = self
            .data
            .floors
            .iter()
            .map(|(id, floor)| SelectorButton {
                id: id.to_owned(),
                caption: floor.name.clone(),
                selected: *id == self.selection.floor_id,
            })
            .collect();
        let sites: Vec<SelectorButton> = self
            .data
            .sites
            .iter()
            .map(|(id, site)| SelectorButton {
                id: id.to_owned(),
                caption: site.name.clone(),
                selected: self.selection.site_id.as_deref() == Some(id),
            })
            .collect();
        self.target.set_floor_buttons(&floors);
        self.target.set_site_buttons(&sites);
    }

    fn render_scene(&mut self) {
        let Some(scene) = compose_scene(&self.data, &self.selection, &self.filters) else {
            tracing::warn!(floor = %self.selection.floor_id, "selected floor is missing");
            return;
        };
        tracing::debug!(
            markers = scene.markers.len(),
            labels = scene.labels.len(),
            "rendering scene"
        );
        self.target.set_background(&scene.background);
        self.target.clear_overlays();
        for marker in &scene.markers {
            self.target.place_marker(marker);
        }
        for label in &scene.labels {
            self.target.place_label(label);
        }
    }
}
