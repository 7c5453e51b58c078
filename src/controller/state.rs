//! Detail view state and its pure transitions.
//!
//! Every transition consumes the current state and returns the next one.
//! Results and rotation ticks carry the generation they were dispatched
//! under; anything from an older generation is ignored, which is what keeps
//! a slow response for a previous object from landing on the current one.

use serde::Serialize;
use stargazer_core::models::{CatalogEntry, DetailResponse};

use super::status::{IMAGE_STATUS_MESSAGES, TEXT_STATUS_MESSAGES};

/// Progress of one track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Track<T> {
    Idle,
    Loading { message_index: usize },
    Resolved(T),
}

impl<T> Default for Track<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> Track<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn resolved(&self) -> Option<&T> {
        match self {
            Self::Resolved(value) => Some(value),
            _ => None,
        }
    }

    pub fn message_index(&self) -> Option<usize> {
        match self {
            Self::Loading { message_index } => Some(*message_index),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackKind {
    Text,
    Image,
}

impl TrackKind {
    pub fn messages(&self) -> &'static [&'static str] {
        match self {
            Self::Text => &TEXT_STATUS_MESSAGES,
            Self::Image => &IMAGE_STATUS_MESSAGES,
        }
    }
}

/// Everything a detail view renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetailViewState {
    /// Bumped on every open, retry and close.
    pub generation: u64,
    /// The object on display, `None` when the view is closed.
    pub entry: Option<CatalogEntry>,
    pub text: Track<DetailResponse>,
    /// Resolves to `None` when no illustration could be generated.
    pub image: Track<Option<String>>,
}

impl DetailViewState {
    pub fn is_open(&self) -> bool {
        self.entry.is_some()
    }

    /// Open `entry`, discarding whatever was on display.
    pub fn open(self, entry: CatalogEntry) -> Self {
        Self {
            generation: self.generation + 1,
            entry: Some(entry),
            text: Track::Loading { message_index: 0 },
            image: Track::Loading { message_index: 0 },
        }
    }

    /// Reload the current object. A closed view stays closed.
    pub fn retry(self) -> Self {
        match self.entry.clone() {
            Some(entry) => self.open(entry),
            None => self,
        }
    }

    pub fn close(self) -> Self {
        Self {
            generation: self.generation + 1,
            ..Self::default()
        }
    }

    /// Whether `kind` is still waiting on a result dispatched under `generation`.
    pub fn awaiting(&self, kind: TrackKind, generation: u64) -> bool {
        generation == self.generation
            && match kind {
                TrackKind::Text => self.text.is_loading(),
                TrackKind::Image => self.image.is_loading(),
            }
    }

    pub fn resolve_text(self, generation: u64, detail: DetailResponse) -> Self {
        if !self.awaiting(TrackKind::Text, generation) {
            return self;
        }
        Self {
            text: Track::Resolved(detail),
            ..self
        }
    }

    pub fn resolve_image(self, generation: u64, image: Option<String>) -> Self {
        if !self.awaiting(TrackKind::Image, generation) {
            return self;
        }
        Self {
            image: Track::Resolved(image),
            ..self
        }
    }

    /// Advance the status message of a loading track.
    pub fn rotate(mut self, kind: TrackKind, generation: u64) -> Self {
        if !self.awaiting(kind, generation) {
            return self;
        }
        let len = kind.messages().len();
        let track_index = match kind {
            TrackKind::Text => self.text.message_index(),
            TrackKind::Image => self.image.message_index(),
        };
        if let Some(index) = track_index {
            let message_index = (index + 1) % len;
            match kind {
                TrackKind::Text => self.text = Track::Loading { message_index },
                TrackKind::Image => self.image = Track::Loading { message_index },
            }
        }
        self
    }

    /// The status message currently shown for `kind`, if it is loading.
    pub fn status_message(&self, kind: TrackKind) -> Option<&'static str> {
        let index = match kind {
            TrackKind::Text => self.text.message_index(),
            TrackKind::Image => self.image.message_index(),
        }?;
        kind.messages().get(index).copied()
    }
}
