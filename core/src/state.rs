//! Building blocks shared by the view loaders.
//!
//! # Design
//! A loader never performs I/O itself. Starting an operation hands back a
//! `Ticket` (a token plus the request to run); the host executes the request
//! and feeds the outcome to the matching `complete_*` method. Tokens come
//! from a `TokenSequence` per channel, so a completion whose token has been
//! superseded is recognised and dropped. The latest user intent wins.

use crate::http::HttpRequest;

/// What a list on screen currently holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState<T> {
    #[default]
    NotLoaded,
    Loading,
    Loaded(T),
    /// Holds the display message for the failure.
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// A request a view wants executed, tagged with the token that will
/// identify its completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub token: u64,
    pub request: HttpRequest,
}

/// Monotonic request tokens for one channel of a view.
#[derive(Debug, Default)]
pub struct TokenSequence {
    latest: u64,
}

impl TokenSequence {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.latest
    }

    /// Make every outstanding token stale without issuing a new request.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient message for the notification surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: &str, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.to_string(),
            description: description.into(),
        }
    }

    pub fn error(title: &str, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.to_string(),
            description: description.into(),
        }
    }
}
