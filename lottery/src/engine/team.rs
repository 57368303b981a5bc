//! Team draw: one item per roster slot under a healer quota

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use shared::{DrawResult, Item};

use super::sampling::draw_from_pool;

/// Inputs of a team draw
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamDrawRequest {
    /// Slot labels, one per participant
    pub roster: Vec<String>,
    /// Eligible items, already filtered to the user's selection
    pub pool: Vec<Item>,
    /// Desired number of healer items in the result
    pub healer_quota: usize,
    /// Slots that should receive a healer item when one is available
    pub pinned_healer_slots: BTreeSet<usize>,
    pub allow_repeat: bool,
}

impl TeamDrawRequest {
    pub fn new(roster: Vec<String>, pool: Vec<Item>) -> Self {
        Self {
            roster,
            pool,
            ..Self::default()
        }
    }

    pub fn with_healer_quota(mut self, quota: usize) -> Self {
        self.healer_quota = quota;
        self
    }

    pub fn with_pinned_healers<I: IntoIterator<Item = usize>>(mut self, slots: I) -> Self {
        self.pinned_healer_slots = slots.into_iter().collect();
        self
    }

    pub fn with_allow_repeat(mut self, allow_repeat: bool) -> Self {
        self.allow_repeat = allow_repeat;
        self
    }
}

pub fn draw_team(request: &TeamDrawRequest) -> Vec<DrawResult> {
    draw_team_with_rng(request, &mut rand::thread_rng())
}

/// Assign one drawn item to each roster slot.
///
/// Results are ordered by slot index. A slot is missing from the result only
/// when the pool is empty. Pinned indices outside the roster are ignored.
pub fn draw_team_with_rng<R>(request: &TeamDrawRequest, rng: &mut R) -> Vec<DrawResult>
where
    R: Rng + ?Sized,
{
    let roster_len = request.roster.len();
    if roster_len == 0 || request.pool.is_empty() {
        return Vec::new();
    }

    let (healer_pool, other_pool): (Vec<&Item>, Vec<&Item>) =
        request.pool.iter().partition(|item| item.is_healer());

    // Healers beyond the roster size could never be seated.
    let actual_healer_count = request.healer_quota.min(healer_pool.len()).min(roster_len);
    let other_count_needed = roster_len - actual_healer_count;

    debug!(
        roster = roster_len,
        healer_pool = healer_pool.len(),
        other_pool = other_pool.len(),
        healers = actual_healer_count,
        others = other_count_needed,
        "Drawing team"
    );

    let drawn_healers: Vec<&Item> = draw_from_pool(&healer_pool, actual_healer_count, request.allow_repeat, rng)
        .into_iter()
        .copied()
        .collect();

    let drawn_others: Vec<&Item> = if !other_pool.is_empty() {
        draw_from_pool(&other_pool, other_count_needed, request.allow_repeat, rng)
            .into_iter()
            .copied()
            .collect()
    } else if other_count_needed > 0 {
        debug!(missing = other_count_needed, "No non-healer items selected, filling from healer pool");
        draw_from_pool(&healer_pool, other_count_needed, request.allow_repeat, rng)
            .into_iter()
            .copied()
            .collect()
    } else {
        Vec::new()
    };

    let mut assigned: Vec<Option<&Item>> = vec![None; roster_len];
    let mut healers = drawn_healers.into_iter();

    for &slot in &request.pinned_healer_slots {
        if slot >= roster_len {
            warn!(slot, roster = roster_len, "Ignoring pinned healer slot outside roster");
            continue;
        }
        match healers.next() {
            Some(item) => assigned[slot] = Some(item),
            None => break,
        }
    }

    let mut open_slots: Vec<usize> = (0..roster_len).filter(|&slot| assigned[slot].is_none()).collect();
    open_slots.shuffle(rng);

    let mut remaining = healers.chain(drawn_others);
    for slot in open_slots {
        match remaining.next() {
            Some(item) => assigned[slot] = Some(item),
            None => break,
        }
    }

    assigned
        .into_iter()
        .enumerate()
        .filter_map(|(slot, item)| item.map(|item| DrawResult::for_slot(item, slot, &request.roster[slot])))
        .collect()
}
