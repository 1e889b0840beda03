//! Error kinds surfaced by listing, playback and the agreement gate.

use thiserror::Error;

/// A section or track enumeration (or a URL resolution inside one) failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ListingError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("storage responded with {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected storage payload: {0}")]
    Decode(String),
    #[error("no download URL available for {0}")]
    NoDownloadUrl(String),
    #[error("section name is empty")]
    InvalidSection,
}

impl From<reqwest::Error> for ListingError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ListingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// The playback surface reported something the sequencer could not use.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaybackError {
    #[error("playback failed: {0}")]
    Surface(String),
    #[error("invalid progress report: {0}")]
    InvalidProgress(&'static str),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GateError {
    #[error("agreement was rejected ({0})")]
    Rejected(u16),
    #[error("agreement request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for GateError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
