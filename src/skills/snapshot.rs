//! Per-actor skill state
//!
//! A snapshot of the skills an actor currently possesses, with levels.
//! Evaluations read a snapshot taken at the moment of the learn attempt.

use crate::core::types::{SkillId, SkillLevel};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Momentary view of one actor's acquired skills
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillSnapshot {
    levels: AHashMap<SkillId, SkillLevel>,
}

impl SkillSnapshot {
    pub fn new() -> Self {
        Self {
            levels: AHashMap::new(),
        }
    }

    /// Builder-style constructor for tests and host adapters
    pub fn with_skill(mut self, skill: impl Into<SkillId>, level: SkillLevel) -> Self {
        self.levels.insert(skill.into(), level);
        self
    }

    pub fn set_level(&mut self, skill: impl Into<SkillId>, level: SkillLevel) {
        self.levels.insert(skill.into(), level);
    }

    pub fn level_of(&self, skill: &SkillId) -> SkillLevel {
        self.levels.get(skill).copied().unwrap_or(0)
    }

    /// An actor "holds" a skill once it reaches level 1. A skill taken but
    /// still at level 0 counts as not held.
    pub fn holds(&self, skill: &SkillId) -> bool {
        self.level_of(skill) >= 1
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
