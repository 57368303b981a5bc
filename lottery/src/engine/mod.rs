//! Assignment engine
//!
//! Pure draw functions for the three lottery modes. Every entry point comes in
//! two flavours: one that uses the thread-local RNG and a `*_with_rng` variant
//! that accepts any [`rand::Rng`] so callers can seed it.

pub mod sampling;
pub mod single;
pub mod team;

#[cfg(test)]
mod tests;

pub use sampling::draw_from_pool;
pub use single::{custom_result_id, draw_custom, draw_custom_with_rng, draw_single, draw_single_with_rng};
pub use team::{draw_team, draw_team_with_rng, TeamDrawRequest};
