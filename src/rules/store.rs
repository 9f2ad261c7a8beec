//! Shared rule configuration store
//!
//! One store lives for the process lifetime. Learn-attempt evaluations take
//! a cloned snapshot under the read lock; administrative commands mutate
//! under the write lock and then flush to disk. The flush is best-effort:
//! a failed write is logged and swallowed, the in-memory mutation stands.

use crate::core::error::Result;
use crate::core::types::{SimDay, SkillId, UserId};
use crate::rules::config::RequirementsConfig;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Handle to the shared requirement rules, cloneable across threads
#[derive(Debug, Clone)]
pub struct RequirementsStore {
    config: Arc<RwLock<RequirementsConfig>>,
    path: Option<Arc<PathBuf>>,
}

impl RequirementsStore {
    /// Store with no backing file (flushes are no-ops)
    pub fn in_memory(config: RequirementsConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            path: None,
        }
    }

    /// Load from a TOML document, defaulting when the file does not exist.
    /// Missing keys default to empty; invalid entries are dropped with a
    /// warning. A fresh default file is written immediately so admins have
    /// a template to edit.
    pub fn load_or_default(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let config = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let mut config: RequirementsConfig = toml::from_str(&content)?;
            config.normalize();
            config
        } else {
            RequirementsConfig::default()
        };

        let store = Self {
            config: Arc::new(RwLock::new(config)),
            path: Some(Arc::new(path)),
        };
        store.flush();
        Ok(store)
    }

    fn read(&self) -> RwLockReadGuard<'_, RequirementsConfig> {
        self.config.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, RequirementsConfig> {
        self.config.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Momentary consistent view for one evaluation
    pub fn snapshot(&self) -> RequirementsConfig {
        self.read().clone()
    }

    pub fn enabled(&self) -> bool {
        self.read().enabled
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.write().enabled = enabled;
        self.flush();
    }

    pub fn grant_bypass(&self, user: UserId, skill: SkillId) {
        self.write().grant_bypass(user, skill);
        self.flush();
    }

    pub fn revoke_bypass(&self, user: &UserId, skill: &SkillId) {
        self.write().revoke_bypass(user, skill);
        self.flush();
    }

    pub fn set_earliest_day(&self, skill: SkillId, day: SimDay) -> Result<()> {
        self.write().set_earliest_day(skill, day)?;
        self.flush();
        Ok(())
    }

    pub fn set_star_cost(&self, skill: SkillId, stars: u32) -> Result<()> {
        self.write().set_star_cost(skill, stars)?;
        self.flush();
        Ok(())
    }

    pub fn backing_path(&self) -> Option<&Path> {
        self.path.as_deref().map(PathBuf::as_path)
    }

    /// Persist the current config. Failures must not block gameplay-facing
    /// operations: the mutation already committed in memory.
    pub fn flush(&self) {
        let Some(path) = &self.path else {
            return;
        };

        let serialized = {
            let config = self.read();
            toml::to_string_pretty(&*config)
        };

        let result = match serialized {
            Ok(doc) => std::fs::write(path.as_path(), doc).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        if let Err(e) = result {
            tracing::warn!("Failed to persist requirements config to {}: {}", path.display(), e);
        }
    }
}

impl Default for RequirementsStore {
    fn default() -> Self {
        Self::in_memory(RequirementsConfig::default())
    }
}
