//! File-backed preference store
//!
//! Preferences are kept as pretty-printed JSON in a single file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::config::LotteryConfig;
use crate::error::{LotteryError, LotteryResult};
use crate::traits::PreferenceStore;

pub const DEFAULT_PREFERENCES_FILE: &str = "./jx3-lottery-storage.json";

pub struct RealPreferenceStore {
    path: PathBuf,
}

impl RealPreferenceStore {
    /// Store backed by the default file in the working directory
    pub fn new() -> Self {
        Self::with_path(PathBuf::from(DEFAULT_PREFERENCES_FILE))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn store_error(&self, operation: &str, source: std::io::Error) -> LotteryError {
        LotteryError::PreferenceStoreError {
            operation: operation.to_string(),
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl Default for RealPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PreferenceStore for RealPreferenceStore {
    async fn load(&self) -> LotteryResult<Option<LotteryConfig>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No stored preferences");
                return Ok(None);
            }
            Err(e) => return Err(self.store_error("read", e)),
        };

        let config: LotteryConfig = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), "Loaded preferences");
        Ok(Some(config))
    }

    async fn save(&self, config: &LotteryConfig) -> LotteryResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| self.store_error("create directory", e))?;
            }
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .await
            .map_err(|e| self.store_error("write", e))?;

        debug!(path = %self.path.display(), "💾 Saved preferences");
        Ok(())
    }
}
