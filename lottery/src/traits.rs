//! Trait definitions with mockall annotations for testing
//!
//! Service seams used by the binary and mocked in tests.

use shared::logging;

use crate::config::LotteryConfig;
use crate::error::LotteryResult;
use crate::session::DrawSession;

/// Persistence of user preferences across sessions
#[mockall::automock]
#[async_trait::async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Load stored preferences
    ///
    /// # Returns
    /// `Ok(None)` when nothing has been stored yet
    async fn load(&self) -> LotteryResult<Option<LotteryConfig>>;

    /// Store preferences, replacing anything stored before
    async fn save(&self, config: &LotteryConfig) -> LotteryResult<()>;
}

/// Load stored preferences or fall back to defaults.
///
/// Stored preferences that break roster or quota limits are rejected.
pub async fn load_or_default<S: PreferenceStore + ?Sized>(store: &S) -> LotteryResult<LotteryConfig> {
    match store.load().await? {
        Some(config) => {
            config.validate()?;
            Ok(config)
        }
        None => Ok(LotteryConfig::default()),
    }
}

/// Store the configuration of `session`.
///
/// Failures are logged against the session and returned unchanged.
pub async fn save_session<S: PreferenceStore + ?Sized>(store: &S, session: &DrawSession) -> LotteryResult<()> {
    if let Err(e) = store.save(session.config()).await {
        logging::log_error(session.id(), "Saving preferences", &e);
        return Err(e);
    }
    logging::log_success(session.id(), "Preferences saved");
    Ok(())
}
