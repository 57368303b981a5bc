//! Lottery-specific error types

use thiserror::Error;
use shared::SharedError;

#[derive(Error, Debug)]
pub enum LotteryError {
    #[error("A draw is already in progress")]
    DrawInProgress,

    #[error("Roster size {size} outside {min}..={max}")]
    RosterSize { size: usize, min: usize, max: usize },

    #[error("Roster slot {index} out of range for {len} members")]
    SlotOutOfRange { index: usize, len: usize },

    #[error("Healer count {count} exceeds maximum {max}")]
    HealerCountTooHigh { count: usize, max: usize },

    #[error("Cannot pin more than {quota} healer slots")]
    TooManyPins { quota: usize },

    #[error("Custom option must not be empty")]
    EmptyOption,

    #[error("Preference store failed: {operation} on {path}: {source}")]
    PreferenceStoreError {
        operation: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type LotteryResult<T> = Result<T, LotteryError>;
