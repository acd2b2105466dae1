use crate::event::ActionKind;
use std::io;
use thiserror::Error;

/// Errors raised by the entry store and its presentation-boundary helpers.
///
/// Removing or editing an id that does not exist is deliberately absent here:
/// those are silent no-ops, never errors.
#[derive(Debug, Error)]
pub enum DiaryError {
    /// A tagged action named a kind outside INIT/CREATE/REMOVE/EDIT.
    #[error("unknown action type: {0:?}")]
    UnknownAction(String),

    #[error("action has no \"type\" tag")]
    MissingActionType,

    /// The tag was recognized but the payload did not match its shape.
    #[error("malformed {kind} action: {source}")]
    MalformedAction {
        kind: ActionKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("emotion must be between 1 and 5, got {0}")]
    InvalidEmotion(u8),

    /// Raised by [`validate_edit_content`](crate::validate_edit_content), never by the store.
    #[error("content must be at least {min} characters, got {actual}")]
    ContentTooShort { min: usize, actual: usize },

    #[error("entry store lock poisoned")]
    Poisoned,
}

/// Failure to produce the seed batch.
///
/// Seed failures are surfaced once and never retried; the store stays empty.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("seed request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("seed source answered with status {0}")]
    Status(reqwest::StatusCode),

    #[error("seed response is not a list of records: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("seed source unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Store(#[from] DiaryError),
}

/// Errors loading a [`SeedConfig`](crate::SeedConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] io::Error),

    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}
