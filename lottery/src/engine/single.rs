//! Single-item and custom-label draws

use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use shared::{DrawResult, Item};

/// Pick one item uniformly, `None` for an empty pool
pub fn draw_single(pool: &[Item]) -> Option<DrawResult> {
    draw_single_with_rng(pool, &mut rand::thread_rng())
}

pub fn draw_single_with_rng<R>(pool: &[Item], rng: &mut R) -> Option<DrawResult>
where
    R: Rng + ?Sized,
{
    pool.choose(rng).map(DrawResult::from_item)
}

/// Pick one free-text label uniformly, `None` for an empty list.
///
/// Each result gets a fresh identifier so two identical labels drawn back to
/// back still compare unequal.
pub fn draw_custom<S: AsRef<str>>(labels: &[S]) -> Option<DrawResult> {
    draw_custom_with_rng(labels, &mut rand::thread_rng())
}

pub fn draw_custom_with_rng<S, R>(labels: &[S], rng: &mut R) -> Option<DrawResult>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let label = labels.choose(rng)?;
    Some(DrawResult {
        id: custom_result_id(),
        name: label.as_ref().to_string(),
        image: None,
        category: None,
        slot: None,
        member: None,
    })
}

/// Identifier for a custom-label result
pub fn custom_result_id() -> String {
    format!("custom-{}", Uuid::new_v4())
}
