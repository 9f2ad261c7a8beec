//! Property tests for the requirement evaluator's universal guarantees

use proptest::prelude::*;
use skill_requirements::core::types::{SkillId, UserId};
use skill_requirements::gate::{evaluate, Verdict};
use skill_requirements::rules::RequirementsConfig;
use skill_requirements::skills::SkillSnapshot;

fn arb_skill_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9]{0,15}"
}

fn arb_snapshot() -> impl Strategy<Value = SkillSnapshot> {
    proptest::collection::vec((arb_skill_name(), 0u32..10), 0..8).prop_map(|skills| {
        let mut snapshot = SkillSnapshot::new();
        for (name, level) in skills {
            snapshot.set_level(name.as_str(), level);
        }
        snapshot
    })
}

proptest! {
    /// With no configuration at all, any actor learns any skill at cost 1
    /// on any day.
    #[test]
    fn prop_empty_config_always_admits_at_one(
        skill in arb_skill_name(),
        user in arb_skill_name(),
        snapshot in arb_snapshot(),
        now in 0.0f64..1000.0,
    ) {
        let config = RequirementsConfig::default();
        let verdict = evaluate(
            &UserId::from(user.as_str()),
            &snapshot,
            &SkillId::from(skill.as_str()),
            now,
            &config,
        );
        prop_assert_eq!(verdict, Verdict::Admit { stars: 1, bypassed: false });
    }

    /// A held forbidden skill denies no matter what the other mappings say.
    #[test]
    fn prop_held_forbidden_skill_always_denies(
        target in arb_skill_name(),
        held in arb_skill_name(),
        level in 1u32..10,
        day in proptest::option::of(0.0f64..100.0),
        cost in 1u32..20,
        now in 0.0f64..100.0,
    ) {
        let mut config = RequirementsConfig::default();
        config.forbidden.insert(
            SkillId::from(target.as_str()),
            vec![SkillId::from(held.as_str())],
        );
        if let Some(day) = day {
            config.earliest_day.insert(SkillId::from(target.as_str()), day);
        }
        config.star_cost.insert(SkillId::from(target.as_str()), cost);

        let snapshot = SkillSnapshot::new().with_skill(held.as_str(), level);
        let verdict = evaluate(
            &UserId::from("actor"),
            &snapshot,
            &SkillId::from(target.as_str()),
            now,
            &config,
        );
        prop_assert!(!verdict.is_admitted());
    }

    /// The day gate boundary: strictly before denies, at or after admits.
    #[test]
    fn prop_day_gate_boundary(
        target in arb_skill_name(),
        unlock_day in 0.0f64..100.0,
        offset in 0.0f64..50.0,
    ) {
        let mut config = RequirementsConfig::default();
        config.earliest_day.insert(SkillId::from(target.as_str()), unlock_day);

        let actor = UserId::from("actor");
        let snapshot = SkillSnapshot::new();
        let skill = SkillId::from(target.as_str());

        let at_or_after = evaluate(&actor, &snapshot, &skill, unlock_day + offset, &config);
        prop_assert!(at_or_after.is_admitted());

        if offset > 0.0 && unlock_day - offset < unlock_day {
            let before = evaluate(&actor, &snapshot, &skill, unlock_day - offset, &config);
            prop_assert!(!before.is_admitted());
        }
    }

    /// A bypassed (user, skill) pair is never denied, and always pays the
    /// configured cost.
    #[test]
    fn prop_bypass_never_denies(
        target in arb_skill_name(),
        blocker in arb_skill_name(),
        cost in 1u32..20,
        snapshot in arb_snapshot(),
        now in 0.0f64..100.0,
    ) {
        let mut config = RequirementsConfig::default();
        config.forbidden.insert(
            SkillId::from(target.as_str()),
            vec![SkillId::from(blocker.as_str())],
        );
        config.mandatory.insert(
            SkillId::from(target.as_str()),
            vec![SkillId::from(blocker.as_str())],
        );
        config.earliest_day.insert(SkillId::from(target.as_str()), 1000.0);
        config.star_cost.insert(SkillId::from(target.as_str()), cost);
        config.grant_bypass(UserId::from("actor"), SkillId::from(target.as_str()));

        let verdict = evaluate(
            &UserId::from("actor"),
            &snapshot,
            &SkillId::from(target.as_str()),
            now,
            &config,
        );
        prop_assert_eq!(verdict, Verdict::Admit { stars: cost, bypassed: true });
    }
}
