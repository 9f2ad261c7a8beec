//! Requirement rule configuration
//!
//! Five mappings keyed by target skill plus a global enabled flag. This is
//! the persisted shape: every field defaults to empty/enabled so a partial
//! or missing document loads cleanly.

use crate::core::error::{RequirementsError, Result};
use crate::core::types::{SimDay, SkillId, UserId};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Default star cost when no override is configured
pub const DEFAULT_STAR_COST: u32 = 1;

fn default_enabled() -> bool {
    true
}

/// Rule configuration for skill learn attempts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementsConfig {
    /// Whether the engine is consulted at all (persisted intent)
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Holding any of these at level >= 1 blocks learning the target
    #[serde(default)]
    pub forbidden: AHashMap<SkillId, Vec<SkillId>>,

    /// Missing any of these (or holding at level 0) blocks learning the target
    #[serde(default)]
    pub mandatory: AHashMap<SkillId, Vec<SkillId>>,

    /// Target unlearnable before this simulation day
    #[serde(default)]
    pub earliest_day: AHashMap<SkillId, SimDay>,

    /// Stars required when all constraints pass (absent = 1)
    #[serde(default)]
    pub star_cost: AHashMap<SkillId, u32>,

    /// Per-user skills that skip forbidden/mandatory/day checks
    #[serde(default)]
    pub bypass: AHashMap<UserId, Vec<SkillId>>,
}

impl Default for RequirementsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            forbidden: AHashMap::new(),
            mandatory: AHashMap::new(),
            earliest_day: AHashMap::new(),
            star_cost: AHashMap::new(),
            bypass: AHashMap::new(),
        }
    }
}

impl RequirementsConfig {
    /// Skills that block the target if held. Empty when unconfigured.
    pub fn forbidden_of(&self, skill: &SkillId) -> &[SkillId] {
        self.forbidden.get(skill).map_or(&[], Vec::as_slice)
    }

    /// Skills required before the target can be learned. Empty when unconfigured.
    pub fn mandatory_of(&self, skill: &SkillId) -> &[SkillId] {
        self.mandatory.get(skill).map_or(&[], Vec::as_slice)
    }

    pub fn earliest_day_of(&self, skill: &SkillId) -> Option<SimDay> {
        self.earliest_day.get(skill).copied()
    }

    /// Configured star cost, defaulting to 1 when absent
    pub fn star_cost_of(&self, skill: &SkillId) -> u32 {
        self.star_cost
            .get(skill)
            .copied()
            .unwrap_or(DEFAULT_STAR_COST)
    }

    pub fn bypasses_of(&self, user: &UserId) -> &[SkillId] {
        self.bypass.get(user).map_or(&[], Vec::as_slice)
    }

    pub fn is_bypassed(&self, user: &UserId, skill: &SkillId) -> bool {
        self.bypasses_of(user).contains(skill)
    }

    /// Idempotent: granting an existing bypass is a no-op
    pub fn grant_bypass(&mut self, user: UserId, skill: SkillId) {
        let grants = self.bypass.entry(user).or_default();
        if !grants.contains(&skill) {
            grants.push(skill);
        }
    }

    /// Idempotent: revoking an absent grant is a no-op
    pub fn revoke_bypass(&mut self, user: &UserId, skill: &SkillId) {
        if let Some(grants) = self.bypass.get_mut(user) {
            grants.retain(|s| s != skill);
            if grants.is_empty() {
                self.bypass.remove(user);
            }
        }
    }

    /// Day thresholds must be non-negative
    pub fn set_earliest_day(&mut self, skill: SkillId, day: SimDay) -> Result<()> {
        if day < 0.0 {
            return Err(RequirementsError::InvalidArgument(
                "Day can't be negative".to_string(),
            ));
        }
        self.earliest_day.insert(skill, day);
        Ok(())
    }

    /// Star costs are positive; zero is rejected at write time, never
    /// deferred to evaluation
    pub fn set_star_cost(&mut self, skill: SkillId, stars: u32) -> Result<()> {
        if stars == 0 {
            return Err(RequirementsError::InvalidArgument(
                "Star cost must be at least 1".to_string(),
            ));
        }
        self.star_cost.insert(skill, stars);
        Ok(())
    }

    /// Drop invalid entries that arrived via a hand-edited document
    pub fn normalize(&mut self) {
        self.star_cost.retain(|skill, stars| {
            if *stars == 0 {
                tracing::warn!("Ignoring star cost 0 for skill {} (must be at least 1)", skill);
                false
            } else {
                true
            }
        });
        self.earliest_day.retain(|skill, day| {
            if *day < 0.0 {
                tracing::warn!("Ignoring negative earliest day {} for skill {}", day, skill);
                false
            } else {
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups_default_when_unconfigured() {
        let config = RequirementsConfig::default();
        let skill = SkillId::from("Archery");
        let user = UserId::from("user-1");

        assert!(config.forbidden_of(&skill).is_empty());
        assert!(config.mandatory_of(&skill).is_empty());
        assert_eq!(config.earliest_day_of(&skill), None);
        assert_eq!(config.star_cost_of(&skill), 1);
        assert!(config.bypasses_of(&user).is_empty());
    }

    #[test]
    fn test_grant_bypass_is_idempotent() {
        let mut config = RequirementsConfig::default();
        let user = UserId::from("user-1");
        let skill = SkillId::from("Archery");

        config.grant_bypass(user.clone(), skill.clone());
        config.grant_bypass(user.clone(), skill.clone());

        assert_eq!(config.bypasses_of(&user), &[skill]);
    }

    #[test]
    fn test_revoke_absent_grant_is_noop() {
        let mut config = RequirementsConfig::default();
        let user = UserId::from("user-1");
        config.revoke_bypass(&user, &SkillId::from("Archery"));
        assert!(config.bypasses_of(&user).is_empty());
    }

    #[test]
    fn test_negative_day_rejected() {
        let mut config = RequirementsConfig::default();
        let result = config.set_earliest_day(SkillId::from("Farming"), -1.0);
        assert!(matches!(result, Err(RequirementsError::InvalidArgument(_))));
        assert_eq!(config.earliest_day_of(&SkillId::from("Farming")), None);
    }

    #[test]
    fn test_zero_star_cost_rejected() {
        let mut config = RequirementsConfig::default();
        let result = config.set_star_cost(SkillId::from("Smithing"), 0);
        assert!(matches!(result, Err(RequirementsError::InvalidArgument(_))));
        assert_eq!(config.star_cost_of(&SkillId::from("Smithing")), 1);
    }

    #[test]
    fn test_normalize_drops_zero_costs() {
        let mut config = RequirementsConfig::default();
        config.star_cost.insert(SkillId::from("Smithing"), 0);
        config.star_cost.insert(SkillId::from("Masonry"), 3);
        config.normalize();

        assert_eq!(config.star_cost_of(&SkillId::from("Smithing")), 1);
        assert_eq!(config.star_cost_of(&SkillId::from("Masonry")), 3);
    }

    #[test]
    fn test_partial_document_loads_with_defaults() {
        let doc = r#"
            [mandatory]
            Archery = ["Tracking"]
        "#;
        let config: RequirementsConfig = toml::from_str(doc).unwrap();

        assert!(config.enabled);
        assert_eq!(
            config.mandatory_of(&SkillId::from("Archery")),
            &[SkillId::from("Tracking")]
        );
        assert!(config.forbidden.is_empty());
        assert!(config.bypass.is_empty());
    }
}
