//! Shared types for the internal skill lottery
//!
//! Contains the item data model, the static catalog and the logging setup
//! used by every crate in the workspace.

pub mod types;
pub mod errors;
pub mod catalog;
pub mod logging;

pub use types::*;
pub use errors::*;
