//! Draw session
//!
//! Owns the configuration a user edits between draws, the last outcome and
//! the spinning flag that keeps two draws from overlapping.

use rand::Rng;

use shared::{catalog, session_debug, session_info, DrawMode, DrawOutcome, Item, ItemKind, SessionId, SharedError};

use crate::config::{member_label, LotteryConfig, MAX_HEALER_COUNT, MAX_MEMBERS, MIN_MEMBERS};
use crate::engine;
use crate::error::{LotteryError, LotteryResult};

pub struct DrawSession {
    id: SessionId,
    config: LotteryConfig,
    catalog: Vec<Item>,
    last_result: Option<DrawOutcome>,
    spinning: bool,
}

impl DrawSession {
    /// Create a session over the built-in catalog
    pub fn new(config: LotteryConfig) -> Self {
        Self::with_catalog(config, catalog::all().to_vec())
    }

    pub fn with_catalog(config: LotteryConfig, catalog: Vec<Item>) -> Self {
        Self {
            id: SessionId::new(),
            config,
            catalog,
            last_result: None,
            spinning: false,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn config(&self) -> &LotteryConfig {
        &self.config
    }

    pub fn catalog(&self) -> &[Item] {
        &self.catalog
    }

    pub fn last_result(&self) -> Option<&DrawOutcome> {
        self.last_result.as_ref()
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    pub fn set_mode(&mut self, mode: DrawMode) {
        self.config.mode = mode;
    }

    // Item selection

    /// Flip selection of one item; ids outside the session catalog are rejected
    pub fn toggle_item(&mut self, id: &str) -> LotteryResult<()> {
        if !self.catalog.iter().any(|item| item.id == id) {
            return Err(SharedError::UnknownItem { id: id.to_string() }.into());
        }

        let ids = &mut self.config.selected_ids;
        if let Some(position) = ids.iter().position(|selected| selected == id) {
            ids.remove(position);
        } else {
            ids.push(id.to_string());
        }
        Ok(())
    }

    /// Select or deselect every catalog item of one kind
    pub fn toggle_kind(&mut self, kind: ItemKind, select: bool) {
        let kind_ids: Vec<String> = self
            .catalog
            .iter()
            .filter(|item| item.kind == kind)
            .map(|item| item.id.clone())
            .collect();

        self.config.selected_ids.retain(|id| !kind_ids.contains(id));
        if select {
            self.config.selected_ids.extend(kind_ids);
        }
    }

    pub fn select_all(&mut self) {
        self.config.selected_ids = self.catalog.iter().map(|item| item.id.clone()).collect();
    }

    pub fn deselect_all(&mut self) {
        self.config.selected_ids.clear();
    }

    // Roster

    pub fn set_members(&mut self, members: Vec<String>) -> LotteryResult<()> {
        if !(MIN_MEMBERS..=MAX_MEMBERS).contains(&members.len()) {
            return Err(LotteryError::RosterSize {
                size: members.len(),
                min: MIN_MEMBERS,
                max: MAX_MEMBERS,
            });
        }
        let len = members.len();
        self.config.members = members;
        self.config.pinned_healers.retain(|&slot| slot < len);
        Ok(())
    }

    /// Append a member with a default label
    pub fn add_member(&mut self) -> LotteryResult<()> {
        let len = self.config.members.len();
        if len >= MAX_MEMBERS {
            return Err(LotteryError::RosterSize {
                size: len + 1,
                min: MIN_MEMBERS,
                max: MAX_MEMBERS,
            });
        }
        self.config.members.push(member_label(len + 1));
        Ok(())
    }

    /// Remove the member at `index`, shifting pinned slots above it down by one
    pub fn remove_member(&mut self, index: usize) -> LotteryResult<()> {
        let len = self.config.members.len();
        if index >= len {
            return Err(LotteryError::SlotOutOfRange { index, len });
        }
        if len <= MIN_MEMBERS {
            return Err(LotteryError::RosterSize {
                size: len - 1,
                min: MIN_MEMBERS,
                max: MAX_MEMBERS,
            });
        }

        self.config.members.remove(index);
        self.config.pinned_healers = self
            .config
            .pinned_healers
            .iter()
            .filter(|&&slot| slot != index)
            .map(|&slot| if slot > index { slot - 1 } else { slot })
            .collect();
        Ok(())
    }

    pub fn rename_member(&mut self, index: usize, label: &str) -> LotteryResult<()> {
        let len = self.config.members.len();
        let member = self
            .config
            .members
            .get_mut(index)
            .ok_or(LotteryError::SlotOutOfRange { index, len })?;
        *member = label.to_string();
        Ok(())
    }

    // Healer quota

    /// Set the healer quota, dropping the highest pinned slots that no longer fit
    pub fn set_healer_count(&mut self, count: usize) -> LotteryResult<()> {
        if count > MAX_HEALER_COUNT {
            return Err(LotteryError::HealerCountTooHigh {
                count,
                max: MAX_HEALER_COUNT,
            });
        }
        self.config.healer_count = count;
        while self.config.pinned_healers.len() > count {
            self.config.pinned_healers.pop_last();
        }
        Ok(())
    }

    pub fn pin_healer(&mut self, slot: usize) -> LotteryResult<()> {
        let len = self.config.members.len();
        if slot >= len {
            return Err(LotteryError::SlotOutOfRange { index: slot, len });
        }
        if self.config.pinned_healers.contains(&slot) {
            return Ok(());
        }
        if self.config.pinned_healers.len() >= self.config.healer_count {
            return Err(LotteryError::TooManyPins {
                quota: self.config.healer_count,
            });
        }
        self.config.pinned_healers.insert(slot);
        Ok(())
    }

    pub fn unpin_healer(&mut self, slot: usize) {
        self.config.pinned_healers.remove(&slot);
    }

    pub fn set_allow_repeat(&mut self, allow_repeat: bool) {
        self.config.allow_repeat = allow_repeat;
    }

    // Custom options

    pub fn add_custom_option(&mut self, label: &str) -> LotteryResult<()> {
        let label = label.trim();
        if label.is_empty() {
            return Err(LotteryError::EmptyOption);
        }
        self.config.custom_options.push(label.to_string());
        Ok(())
    }

    /// Remove every option equal to `label`
    pub fn remove_custom_option(&mut self, label: &str) {
        self.config.custom_options.retain(|option| option != label);
    }

    pub fn set_custom_options(&mut self, options: Vec<String>) {
        self.config.custom_options = options;
    }

    // Drawing

    pub fn start_draw(&mut self) -> LotteryResult<Option<DrawOutcome>> {
        self.start_draw_with_rng(&mut rand::thread_rng())
    }

    /// Run one draw for the current mode.
    ///
    /// Fails only while a previous draw is still spinning. An empty pool or
    /// list gives `Ok(None)`, which also clears the previous result.
    pub fn start_draw_with_rng<R>(&mut self, rng: &mut R) -> LotteryResult<Option<DrawOutcome>>
    where
        R: Rng + ?Sized,
    {
        if self.spinning {
            return Err(LotteryError::DrawInProgress);
        }

        let outcome = match self.config.mode {
            DrawMode::Single => {
                let pool = self.config.pool(&self.catalog);
                engine::draw_single_with_rng(&pool, rng).map(DrawOutcome::Single)
            }
            DrawMode::Team => {
                let request = self.config.team_request(&self.catalog);
                let results = engine::draw_team_with_rng(&request, rng);
                if results.is_empty() {
                    None
                } else {
                    Some(DrawOutcome::Team(results))
                }
            }
            DrawMode::Custom => engine::draw_custom_with_rng(&self.config.custom_options, rng).map(DrawOutcome::Single),
        };

        match &outcome {
            Some(outcome) => {
                self.spinning = true;
                session_info!(
                    self.id,
                    mode = %self.config.mode,
                    results = outcome.results().len(),
                    "🎲 Draw started"
                );
            }
            None => {
                session_info!(self.id, mode = %self.config.mode, "No result: nothing to draw from");
            }
        }

        self.last_result = outcome.clone();
        Ok(outcome)
    }

    /// Mark the presentation of the current draw as finished
    pub fn finish_spin(&mut self) {
        if self.spinning {
            session_debug!(self.id, "Spin finished");
        }
        self.spinning = false;
    }

    pub fn reset_result(&mut self) {
        self.last_result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> DrawSession {
        DrawSession::new(LotteryConfig::default())
    }

    #[test]
    fn test_toggle_item() {
        let mut session = session();
        let before = session.config().selected_ids.len();

        session.toggle_item("xz").unwrap();
        assert_eq!(session.config().selected_ids.len(), before - 1);
        assert!(!session.config().selected_ids.contains(&"xz".to_string()));

        session.toggle_item("xz").unwrap();
        assert_eq!(session.config().selected_ids.len(), before);
    }

    #[test]
    fn test_toggle_unknown_item_is_rejected() {
        let mut session = session();
        let before = session.config().selected_ids.clone();

        let result = session.toggle_item("missing");
        assert!(matches!(
            result,
            Err(LotteryError::SharedError(SharedError::UnknownItem { ref id })) if id == "missing"
        ));
        assert_eq!(session.config().selected_ids, before);
    }

    #[test]
    fn test_toggle_kind() {
        let mut session = session();
        session.toggle_kind(ItemKind::Healer, false);
        let pool = session.config().pool(session.catalog());
        assert!(pool.iter().all(|item| !item.is_healer()));

        session.deselect_all();
        session.toggle_kind(ItemKind::Healer, true);
        assert_eq!(session.config().selected_ids.len(), 5);

        // Selecting twice does not duplicate ids.
        session.toggle_kind(ItemKind::Healer, true);
        assert_eq!(session.config().selected_ids.len(), 5);

        session.select_all();
        assert_eq!(session.config().selected_ids.len(), catalog::all().len());
    }

    #[test]
    fn test_roster_limits() {
        let mut session = session();
        for _ in 3..MAX_MEMBERS {
            session.add_member().unwrap();
        }
        assert_eq!(session.config().members.len(), MAX_MEMBERS);
        assert_eq!(session.config().members.last().unwrap(), "Member 10");
        assert!(matches!(session.add_member(), Err(LotteryError::RosterSize { .. })));

        session.set_members(vec!["Solo".to_string()]).unwrap();
        assert!(matches!(session.remove_member(0), Err(LotteryError::RosterSize { .. })));
        assert!(matches!(session.set_members(Vec::new()), Err(LotteryError::RosterSize { .. })));
    }

    #[test]
    fn test_remove_member_rebases_pins() {
        let mut session = session();
        session.add_member().unwrap();
        session.set_healer_count(3).unwrap();
        session.pin_healer(0).unwrap();
        session.pin_healer(1).unwrap();
        session.pin_healer(3).unwrap();

        session.remove_member(1).unwrap();
        let pinned: Vec<usize> = session.config().pinned_healers.iter().copied().collect();
        assert_eq!(pinned, vec![0, 2]);
        assert_eq!(session.config().members, vec!["Member 1", "Member 3", "Member 4"]);
    }

    #[test]
    fn test_rename_member() {
        let mut session = session();
        session.rename_member(2, "Tank").unwrap();
        assert_eq!(session.config().members[2], "Tank");
        assert!(matches!(
            session.rename_member(9, "Ghost"),
            Err(LotteryError::SlotOutOfRange { index: 9, len: 3 })
        ));
    }

    #[test]
    fn test_pin_limits() {
        let mut session = session();
        session.pin_healer(2).unwrap();
        // Re-pinning the same slot is a no-op.
        session.pin_healer(2).unwrap();
        assert!(matches!(session.pin_healer(0), Err(LotteryError::TooManyPins { quota: 1 })));
        assert!(matches!(session.pin_healer(5), Err(LotteryError::SlotOutOfRange { .. })));

        session.unpin_healer(2);
        assert!(session.config().pinned_healers.is_empty());
    }

    #[test]
    fn test_lower_quota_truncates_pins() {
        let mut session = session();
        session.set_healer_count(3).unwrap();
        session.pin_healer(0).unwrap();
        session.pin_healer(1).unwrap();
        session.pin_healer(2).unwrap();

        session.set_healer_count(1).unwrap();
        let pinned: Vec<usize> = session.config().pinned_healers.iter().copied().collect();
        assert_eq!(pinned, vec![0]);
        assert!(matches!(
            session.set_healer_count(6),
            Err(LotteryError::HealerCountTooHigh { .. })
        ));
    }

    #[test]
    fn test_custom_options() {
        let mut session = session();
        session.add_custom_option("  Pizza  ").unwrap();
        session.add_custom_option("Pizza").unwrap();
        assert!(matches!(session.add_custom_option("   "), Err(LotteryError::EmptyOption)));
        assert_eq!(session.config().custom_options.len(), 4);

        session.remove_custom_option("Pizza");
        assert_eq!(session.config().custom_options, vec!["Option 1", "Option 2"]);
    }

    #[test]
    fn test_draw_blocks_while_spinning() {
        let mut session = session();
        let mut rng = StdRng::seed_from_u64(42);

        let outcome = session.start_draw_with_rng(&mut rng).unwrap();
        assert!(matches!(outcome, Some(DrawOutcome::Single(_))));
        assert!(session.is_spinning());
        assert!(matches!(session.start_draw_with_rng(&mut rng), Err(LotteryError::DrawInProgress)));

        session.finish_spin();
        assert!(!session.is_spinning());
        assert!(session.start_draw_with_rng(&mut rng).is_ok());
    }

    #[test]
    fn test_team_draw_through_session() {
        let mut session = session();
        session.set_mode(DrawMode::Team);
        session.set_healer_count(1).unwrap();
        session.pin_healer(1).unwrap();

        let mut rng = StdRng::seed_from_u64(9);
        let outcome = session.start_draw_with_rng(&mut rng).unwrap().unwrap();
        let results = outcome.results();
        assert_eq!(results.len(), 3);
        assert!(results[1].is_healer());
        assert_eq!(results.iter().filter(|r| r.is_healer()).count(), 1);
        assert_eq!(session.last_result(), Some(&outcome));
    }

    #[test]
    fn test_empty_selection_gives_no_result() {
        let mut session = session();
        session.deselect_all();

        session.set_mode(DrawMode::Single);
        assert!(session.start_draw().unwrap().is_none());
        session.set_mode(DrawMode::Team);
        assert!(session.start_draw().unwrap().is_none());
        assert!(!session.is_spinning());
        assert!(session.last_result().is_none());
    }

    #[test]
    fn test_custom_draw_and_reset() {
        let mut session = session();
        session.set_mode(DrawMode::Custom);
        session.set_custom_options(vec!["Only".to_string()]);

        let first = session.start_draw().unwrap().unwrap();
        session.finish_spin();
        let second = session.start_draw().unwrap().unwrap();

        assert_eq!(first.results()[0].name, "Only");
        assert_ne!(first, second);

        session.reset_result();
        assert!(session.last_result().is_none());

        session.set_custom_options(Vec::new());
        session.finish_spin();
        assert!(session.start_draw().unwrap().is_none());
    }
}
