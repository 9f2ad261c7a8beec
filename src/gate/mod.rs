//! Learn-attempt gate
//!
//! Two-state machine deciding whether the requirement evaluator is consulted
//! at all. Activating installs the real calculator at the checkpoint,
//! deactivating installs the permissive no-op. Initial state comes from the
//! persisted `enabled` flag.

pub mod checkpoint;
pub mod evaluator;

pub use checkpoint::{stars_for, PermissiveCalculator, RequirementCalculator, StarCostCalculator, DENIED_STARS};
pub use evaluator::{evaluate, DenyReason, Verdict};

use crate::core::types::{SimDay, SkillId, UserId};
use crate::rules::store::RequirementsStore;
use crate::skills::snapshot::SkillSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Inactive,
    Active,
}

/// Activation gate owning the calculator installed at the learn checkpoint
pub struct LearnGate {
    store: RequirementsStore,
    state: GateState,
    calculator: Box<dyn StarCostCalculator>,
}

impl LearnGate {
    /// Gate reconciled with the store's persisted `enabled` flag
    pub fn new(store: RequirementsStore) -> Self {
        let mut gate = Self {
            store: store.clone(),
            state: GateState::Inactive,
            calculator: Box::new(PermissiveCalculator),
        };
        if store.enabled() {
            gate.activate();
        }
        gate
    }

    pub fn is_active(&self) -> bool {
        self.state == GateState::Active
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Install the requirement calculator. No-op while already active.
    pub fn activate(&mut self) {
        if self.state == GateState::Active {
            return;
        }
        tracing::info!("Installing skill requirements calculator at learn checkpoint");
        self.calculator = Box::new(RequirementCalculator::new(self.store.clone()));
        self.state = GateState::Active;
    }

    /// Install the permissive no-op calculator. No-op while already inactive.
    pub fn deactivate(&mut self) {
        if self.state == GateState::Inactive {
            return;
        }
        tracing::info!("Removing skill requirements calculator from learn checkpoint");
        self.calculator = Box::new(PermissiveCalculator);
        self.state = GateState::Inactive;
    }

    /// Flip between active and inactive, returning the resulting state
    pub fn toggle(&mut self) -> bool {
        match self.state {
            GateState::Active => self.deactivate(),
            GateState::Inactive => self.activate(),
        }
        self.is_active()
    }

    /// Cost for the host's learn hook: configured stars to admit, the
    /// unreachable sentinel to deny
    pub fn stars_needed(
        &self,
        actor: &UserId,
        snapshot: &SkillSnapshot,
        skill: &SkillId,
        now: SimDay,
    ) -> u32 {
        self.calculator.stars_needed(actor, snapshot, skill, now)
    }

    /// Structured verdict, for callers that want per-violation reasons.
    /// While inactive this is always a plain cost-1 admission.
    pub fn evaluate(
        &self,
        actor: &UserId,
        snapshot: &SkillSnapshot,
        skill: &SkillId,
        now: SimDay,
    ) -> Verdict {
        if self.state == GateState::Inactive {
            return Verdict::Admit {
                stars: 1,
                bypassed: false,
            };
        }
        let config = self.store.snapshot();
        evaluate(actor, snapshot, skill, now, &config)
    }

    pub fn store(&self) -> &RequirementsStore {
        &self.store
    }
}
