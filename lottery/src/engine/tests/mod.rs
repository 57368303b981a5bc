//! Tests for the assignment engine
//!
//! All randomized tests use a seeded `StdRng` so failures reproduce.

pub mod single;

use shared::{Item, ItemKind};

pub(crate) fn healer(id: &str) -> Item {
    Item::new(id, id, ItemKind::Healer, &format!("/xinfa/{id}.png"))
}

pub(crate) fn dps(id: &str) -> Item {
    Item::new(id, id, ItemKind::Internal, &format!("/xinfa/{id}.png"))
}

pub(crate) fn roster(len: usize) -> Vec<String> {
    (1..=len).map(|n| format!("Member {n}")).collect()
}
