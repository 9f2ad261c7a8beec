//! Administrative command surface
//!
//! Bodies of the admin chat commands, minus the chat framework: each
//! validates its target against the skill catalog, mutates the store (which
//! flushes), and returns the confirmation line for the invoking admin.
//! Validation failures abort the command with no mutation.

use crate::core::calendar::WorldClock;
use crate::core::error::Result;
use crate::core::types::UserId;
use crate::gate::LearnGate;
use crate::rules::store::RequirementsStore;
use crate::skills::catalog::SkillCatalog;

/// Flip the gate; with `save`, also persist the resulting state as the
/// `enabled` flag so it survives restart
pub fn toggle(gate: &mut LearnGate, save: bool) -> String {
    let active = gate.toggle();

    if save {
        gate.store().set_enabled(active);
    }

    format!(
        "Skill requirements are now {}.",
        if active { "enabled" } else { "disabled" }
    )
}

/// Grant `target` a bypass for one skill. The grant skips requirement
/// checks but never a configured star cost.
pub fn allow_bypass(
    store: &RequirementsStore,
    catalog: &SkillCatalog,
    target: &UserId,
    skill_name: &str,
) -> Result<String> {
    let skill = catalog.resolve(skill_name)?;
    store.grant_bypass(target.clone(), skill.clone());

    tracing::info!("Granted {} a requirements bypass for {}", target, skill);
    Ok(format!(
        "{target} will be allowed to learn {skill} without requirements."
    ))
}

/// Revoke a bypass grant. Revoking a grant the user never had still
/// succeeds (idempotent remove).
pub fn disallow_bypass(
    store: &RequirementsStore,
    catalog: &SkillCatalog,
    target: &UserId,
    skill_name: &str,
) -> Result<String> {
    let skill = catalog.resolve(skill_name)?;
    store.revoke_bypass(target, &skill);

    tracing::info!("Revoked {}'s requirements bypass for {}", target, skill);
    Ok(format!(
        "{target} will not be allowed anymore to learn {skill} without requirements."
    ))
}

/// Set the earliest simulation day a skill may be learned
pub fn set_earliest_day(
    store: &RequirementsStore,
    catalog: &SkillCatalog,
    clock: &WorldClock,
    skill_name: &str,
    day: f64,
) -> Result<String> {
    let skill = catalog.resolve(skill_name)?;
    store.set_earliest_day(skill.clone(), day)?;

    Ok(format!(
        "{skill} can now be learned only once day {day} is reached. Current day is {}.",
        clock.current_day()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::RequirementsError;
    use crate::core::types::SkillId;

    fn catalog() -> SkillCatalog {
        SkillCatalog::with_skills(["Archery", "Farming", "Smithing"])
    }

    #[test]
    fn test_unknown_skill_aborts_without_mutation() {
        let store = RequirementsStore::default();
        let err = allow_bypass(&store, &catalog(), &UserId::from("u"), "Basketweaving")
            .unwrap_err();

        assert!(matches!(err, RequirementsError::UnknownSkill(_)));
        assert!(store.snapshot().bypass.is_empty());
    }

    #[test]
    fn test_bypass_grant_and_revoke_round_trip() {
        let store = RequirementsStore::default();
        let user = UserId::from("u");

        allow_bypass(&store, &catalog(), &user, " Archery ").unwrap();
        assert!(store
            .snapshot()
            .is_bypassed(&user, &SkillId::from("Archery")));

        disallow_bypass(&store, &catalog(), &user, "Archery").unwrap();
        assert!(!store
            .snapshot()
            .is_bypassed(&user, &SkillId::from("Archery")));
    }

    #[test]
    fn test_negative_day_aborts_without_mutation() {
        let store = RequirementsStore::default();
        let clock = WorldClock::default();
        let err = set_earliest_day(&store, &catalog(), &clock, "Farming", -1.0).unwrap_err();

        assert!(matches!(err, RequirementsError::InvalidArgument(_)));
        assert!(store.snapshot().earliest_day.is_empty());
    }

    #[test]
    fn test_set_earliest_day_confirmation_names_current_day() {
        let store = RequirementsStore::default();
        let clock = WorldClock::at_day(2.0, 1000);
        let msg = set_earliest_day(&store, &catalog(), &clock, "Farming", 3.5).unwrap();

        assert_eq!(
            msg,
            "Farming can now be learned only once day 3.5 is reached. Current day is 2."
        );
        assert_eq!(
            store.snapshot().earliest_day_of(&SkillId::from("Farming")),
            Some(3.5)
        );
    }

    #[test]
    fn test_toggle_with_save_persists_flag() {
        let mut gate = LearnGate::new(RequirementsStore::default());
        assert!(gate.is_active());

        let msg = toggle(&mut gate, true);
        assert_eq!(msg, "Skill requirements are now disabled.");
        assert!(!gate.store().enabled());

        // Without save, the persisted flag keeps its last saved value
        let msg = toggle(&mut gate, false);
        assert_eq!(msg, "Skill requirements are now enabled.");
        assert!(!gate.store().enabled());
    }
}
