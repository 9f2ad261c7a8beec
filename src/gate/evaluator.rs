//! Requirement evaluation
//!
//! Pure decision function: actor snapshot + current day + rule config in,
//! verdict out. Holds no state and never touches disk, so concurrent learn
//! attempts evaluate independently over their own config snapshots.
//!
//! Every violated rule is collected into the verdict, not just the first,
//! so the host can surface one message per violation.

use crate::core::types::{SimDay, SkillId, UserId};
use crate::rules::config::RequirementsConfig;
use crate::skills::snapshot::SkillSnapshot;

/// One violated constraint, carrying enough to render a user-facing message
#[derive(Debug, Clone, PartialEq)]
pub enum DenyReason {
    /// Actor holds a skill that blocks the target
    ForbiddenSkillHeld(SkillId),
    /// Actor is missing (or holds at level 0) a required skill
    MandatorySkillMissing(SkillId),
    /// Learn attempt before the skill's unlock day
    TooEarly { unlock_day: SimDay, now: SimDay },
}

impl DenyReason {
    /// Human-readable message for the learning actor
    pub fn message(&self, skill: &SkillId) -> String {
        match self {
            DenyReason::ForbiddenSkillHeld(held) => {
                format!("You can't learn skill {skill} because you have the skill {held}!")
            }
            DenyReason::MandatorySkillMissing(missing) => {
                format!("You can't learn skill {skill} because you don't have the skill {missing}!")
            }
            DenyReason::TooEarly { unlock_day, now } => {
                format!("You can't learn skill {skill} before day {unlock_day}. It is currently day {now}.")
            }
        }
    }
}

/// Outcome of a learn-attempt evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// Learning admitted at the given star cost
    Admit { stars: u32, bypassed: bool },
    /// Learning blocked; one reason per violated rule
    Deny { reasons: Vec<DenyReason> },
}

impl Verdict {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Verdict::Admit { .. })
    }

    /// Informational lines for an admitted attempt: the bypass notice and,
    /// for costs above the default, the star-cost notice. A cost of 1 is
    /// "no special cost" and stays silent.
    pub fn notices(&self, skill: &SkillId) -> Vec<String> {
        let Verdict::Admit { stars, bypassed } = self else {
            return Vec::new();
        };

        let mut notices = Vec::new();
        if *bypassed {
            notices.push(format!("You can bypass requirements for skill {skill}!"));
        }
        if *stars > 1 {
            notices.push(format!("The skill {skill} requires {stars} stars."));
        }
        notices
    }
}

/// Evaluate whether `actor` may begin learning `skill` at day `now`.
///
/// A bypass grant for (actor, skill) skips the forbidden/mandatory/day
/// checks entirely but never the cost lookup. A skill with no entries in
/// any mapping admits at cost 1 for any actor.
pub fn evaluate(
    actor: &UserId,
    snapshot: &SkillSnapshot,
    skill: &SkillId,
    now: SimDay,
    config: &RequirementsConfig,
) -> Verdict {
    let bypassed = config.is_bypassed(actor, skill);

    if !bypassed {
        let mut reasons = Vec::new();

        for held in config.forbidden_of(skill) {
            if snapshot.holds(held) {
                reasons.push(DenyReason::ForbiddenSkillHeld(held.clone()));
            }
        }

        for required in config.mandatory_of(skill) {
            if !snapshot.holds(required) {
                reasons.push(DenyReason::MandatorySkillMissing(required.clone()));
            }
        }

        if let Some(unlock_day) = config.earliest_day_of(skill) {
            // Strictly before the threshold denies; exactly at it admits
            if now < unlock_day {
                reasons.push(DenyReason::TooEarly { unlock_day, now });
            }
        }

        if !reasons.is_empty() {
            return Verdict::Deny { reasons };
        }
    }

    Verdict::Admit {
        stars: config.star_cost_of(skill),
        bypassed,
    }
}
