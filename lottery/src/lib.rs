//! Internal skill lottery
//!
//! Draws one item for a single player, one item per member of a team under a
//! healer quota, or one label from a free-form list. The engine is a set of
//! pure functions; `DrawSession` keeps the user's configuration between draws.

pub mod config;
pub mod engine;
pub mod error;
pub mod services;
pub mod session;
pub mod traits;

// Re-export commonly used types
pub use config::{LotteryConfig, LotteryConfigBuilder};
pub use engine::TeamDrawRequest;
pub use error::{LotteryError, LotteryResult};
pub use services::RealPreferenceStore;
pub use session::DrawSession;
pub use traits::PreferenceStore;
