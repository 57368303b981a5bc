//! Shared error types for the lottery workspace

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Unknown item id: {id}")]
    UnknownItem { id: String },

    #[error("Unknown draw mode: {input}")]
    UnknownMode { input: String },
}
