//! Test fixtures built from the real catalog

#![allow(dead_code)] // Not every suite uses every fixture

use shared::{catalog, DrawResult, Item, ItemKind};

pub struct TestFixtures;

impl TestFixtures {
    pub const SEEDS: u64 = 500;

    /// Two healers and three non-healers
    pub fn small_pool() -> Vec<Item> {
        catalog::select(&["ysxj", "ljyd", "bxj", "hjy", "axzy"])
    }

    pub fn healers() -> Vec<Item> {
        catalog::by_kind(ItemKind::Healer).into_iter().cloned().collect()
    }

    pub fn roster(len: usize) -> Vec<String> {
        (1..=len).map(|n| format!("Player {n}")).collect()
    }

    pub fn healer_count(results: &[DrawResult]) -> usize {
        results.iter().filter(|r| r.is_healer()).count()
    }

    pub fn healer_pool_size(pool: &[Item]) -> usize {
        pool.iter().filter(|item| item.is_healer()).count()
    }
}
