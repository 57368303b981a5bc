//! Lottery configuration
//!
//! `LotteryConfig` holds every user choice a draw depends on. It is passed
//! explicitly to the engine and is also the persisted preference shape.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use shared::{catalog, DrawMode, Item, SharedError};

use crate::engine::TeamDrawRequest;
use crate::error::{LotteryError, LotteryResult};

pub const MIN_MEMBERS: usize = 1;
pub const MAX_MEMBERS: usize = 10;
pub const MAX_HEALER_COUNT: usize = 5;

/// Default roster label for the member at 1-based position `n`
pub fn member_label(n: usize) -> String {
    format!("Member {n}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LotteryConfig {
    pub mode: DrawMode,
    pub selected_ids: Vec<String>,
    pub members: Vec<String>,
    pub healer_count: usize,
    pub pinned_healers: BTreeSet<usize>,
    pub allow_repeat: bool,
    pub custom_options: Vec<String>,
}

impl Default for LotteryConfig {
    fn default() -> Self {
        Self {
            mode: DrawMode::Single,
            selected_ids: catalog::all_ids(),
            members: (1..=3).map(member_label).collect(),
            healer_count: 1,
            pinned_healers: BTreeSet::new(),
            allow_repeat: false,
            custom_options: vec!["Option 1".to_string(), "Option 2".to_string()],
        }
    }
}

impl LotteryConfig {
    pub fn builder() -> LotteryConfigBuilder {
        LotteryConfigBuilder::new()
    }

    /// Check roster and quota limits and that every selected id is in the catalog
    pub fn validate(&self) -> LotteryResult<()> {
        if !(MIN_MEMBERS..=MAX_MEMBERS).contains(&self.members.len()) {
            return Err(LotteryError::RosterSize {
                size: self.members.len(),
                min: MIN_MEMBERS,
                max: MAX_MEMBERS,
            });
        }
        if self.healer_count > MAX_HEALER_COUNT {
            return Err(LotteryError::HealerCountTooHigh {
                count: self.healer_count,
                max: MAX_HEALER_COUNT,
            });
        }
        if let Some(id) = self.selected_ids.iter().find(|id| catalog::find(id).is_none()) {
            return Err(SharedError::UnknownItem { id: id.clone() }.into());
        }
        Ok(())
    }

    /// Items from `catalog` the user has selected, in catalog order
    pub fn pool(&self, catalog: &[Item]) -> Vec<Item> {
        catalog
            .iter()
            .filter(|item| self.selected_ids.contains(&item.id))
            .cloned()
            .collect()
    }

    /// Inputs for a team draw against `catalog`.
    ///
    /// Pinned slots outside the roster are dropped here.
    pub fn team_request(&self, catalog: &[Item]) -> TeamDrawRequest {
        let roster_len = self.members.len();
        let pinned: BTreeSet<usize> = self
            .pinned_healers
            .iter()
            .copied()
            .filter(|&slot| {
                let in_range = slot < roster_len;
                if !in_range {
                    warn!(slot, roster = roster_len, "Dropping pinned healer slot outside roster");
                }
                in_range
            })
            .collect();

        TeamDrawRequest::new(self.members.clone(), self.pool(catalog))
            .with_healer_quota(self.healer_count)
            .with_pinned_healers(pinned)
            .with_allow_repeat(self.allow_repeat)
    }
}

/// Builder for [`LotteryConfig`]
pub struct LotteryConfigBuilder {
    config: LotteryConfig,
}

impl LotteryConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: LotteryConfig::default(),
        }
    }

    pub fn mode(mut self, mode: DrawMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Replace the item selection
    pub fn selected<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.selected_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.members = members.into_iter().map(Into::into).collect();
        self
    }

    pub fn healer_count(mut self, count: usize) -> Self {
        self.config.healer_count = count;
        self
    }

    pub fn pinned_healers<I: IntoIterator<Item = usize>>(mut self, slots: I) -> Self {
        self.config.pinned_healers = slots.into_iter().collect();
        self
    }

    pub fn allow_repeat(mut self, allow_repeat: bool) -> Self {
        self.config.allow_repeat = allow_repeat;
        self
    }

    pub fn custom_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.custom_options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> LotteryConfig {
        self.config
    }

    /// Build and check limits
    pub fn try_build(self) -> LotteryResult<LotteryConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for LotteryConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
