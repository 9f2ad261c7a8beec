//! Checkpoint adapter
//!
//! The host's learn hook asks for a bare star count and admits or denies on
//! magnitude alone. Denial is therefore encoded as a cost no legitimate
//! configuration can reach. That sentinel convention lives here and nowhere
//! else; the evaluator only ever speaks in `Verdict`s.

use crate::core::types::{SimDay, SkillId, UserId};
use crate::gate::evaluator::{evaluate, Verdict};
use crate::rules::store::RequirementsStore;
use crate::skills::snapshot::SkillSnapshot;

/// Cost returned to the host hook on denial, larger than any real cost
pub const DENIED_STARS: u32 = u32::MAX;

/// Convert a verdict to the host hook's cost convention
pub fn stars_for(verdict: &Verdict) -> u32 {
    match verdict {
        Verdict::Admit { stars, .. } => *stars,
        Verdict::Deny { .. } => DENIED_STARS,
    }
}

/// Strategy installed at the learn checkpoint
pub trait StarCostCalculator: Send + Sync {
    fn stars_needed(
        &self,
        actor: &UserId,
        snapshot: &SkillSnapshot,
        skill: &SkillId,
        now: SimDay,
    ) -> u32;
}

/// Real calculator: evaluates the configured rules on every attempt
pub struct RequirementCalculator {
    store: RequirementsStore,
}

impl RequirementCalculator {
    pub fn new(store: RequirementsStore) -> Self {
        Self { store }
    }
}

impl StarCostCalculator for RequirementCalculator {
    fn stars_needed(
        &self,
        actor: &UserId,
        snapshot: &SkillSnapshot,
        skill: &SkillId,
        now: SimDay,
    ) -> u32 {
        let config = self.store.snapshot();
        stars_for(&evaluate(actor, snapshot, skill, now, &config))
    }
}

/// No-op calculator installed while the gate is inactive: every attempt
/// costs 1 star, no constraints apply
pub struct PermissiveCalculator;

impl StarCostCalculator for PermissiveCalculator {
    fn stars_needed(
        &self,
        _actor: &UserId,
        _snapshot: &SkillSnapshot,
        _skill: &SkillId,
        _now: SimDay,
    ) -> u32 {
        1
    }
}
