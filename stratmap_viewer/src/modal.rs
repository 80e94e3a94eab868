// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strategy detail modal with a media slider.

use stratmap_data::{Media, ModalContent};

/// Prefix turning a YouTube video id into an embeddable player URL.
pub const YOUTUBE_EMBED_PREFIX: &str = "https://www.youtube.com/embed/";

/// One slide of the media slider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slide {
    /// A still image.
    Image {
        /// Image URL.
        src: String,
    },
    /// An embedded video player.
    Video {
        /// Player URL.
        embed_url: String,
    },
}

impl Slide {
    fn from_media(media: &Media) -> Option<Self> {
        match media {
            Media::Image { src } => Some(Self::Image { src: src.clone() }),
            Media::Youtube { src } => Some(Self::Video {
                embed_url: format!("{YOUTUBE_EMBED_PREFIX}{src}"),
            }),
            Media::Unsupported => None,
        }
    }

    /// Returns `true` for slides that play media and must be stopped when
    /// hidden.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        matches!(self, Self::Video { .. })
    }
}

/// What the modal currently shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalView {
    /// Modal title.
    pub title: String,
    /// Body text.
    pub description: String,
    /// All slides, in order.
    pub slides: Vec<Slide>,
    /// Index of the visible slide; meaningless when `slides` is empty.
    pub current: usize,
    /// Counter text such as `"2 / 3"`; shown only with more than one slide.
    pub counter: Option<String>,
    /// Whether the "previous" button is shown.
    pub show_prev: bool,
    /// Whether the "next" button is shown.
    pub show_next: bool,
}

impl ModalView {
    /// Returns `true` if the slider area should be visible at all.
    #[must_use]
    pub fn has_media(&self) -> bool {
        !self.slides.is_empty()
    }
}

/// Modal content plus the slider position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalState {
    title: String,
    description: String,
    slides: Vec<Slide>,
    current: usize,
}

impl ModalState {
    /// Opens the modal on the first slide.
    #[must_use]
    pub fn open(content: &ModalContent) -> Self {
        Self {
            title: content.title.clone(),
            description: content.description.clone(),
            slides: content.media.iter().filter_map(Slide::from_media).collect(),
            current: 0,
        }
    }

    /// Index of the visible slide.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Returns `true` if there are no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Advances one slide. Returns `false` on the last slide.
    pub fn next_slide(&mut self) -> bool {
        if self.current + 1 >= self.slides.len() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Goes back one slide. Returns `false` on the first slide.
    pub fn prev_slide(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Returns `true` if any slide plays media.
    #[must_use]
    pub fn has_playable_media(&self) -> bool {
        self.slides.iter().any(Slide::is_playable)
    }

    /// Renderable snapshot.
    #[must_use]
    pub fn view(&self) -> ModalView {
        let total = self.slides.len();
        ModalView {
            title: self.title.clone(),
            description: self.description.clone(),
            slides: self.slides.clone(),
            current: self.current,
            counter: (total > 1).then(|| format!("{} / {}", self.current + 1, total)),
            show_prev: total > 0 && self.current > 0,
            show_next: total > 0 && self.current + 1 < total,
        }
    }
}
