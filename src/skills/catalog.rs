//! Known-skill catalog
//!
//! Administrative mutations must name a skill the host actually defines;
//! the catalog is the lookup surface for that validation. The evaluator
//! never consults it - an id missing from every rule mapping simply has
//! no constraints.

use crate::core::error::{RequirementsError, Result};
use crate::core::types::SkillId;
use ahash::AHashSet;

/// Catalog of skill definitions known to the host server
#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    skills: AHashSet<SkillId>,
}

impl SkillCatalog {
    pub fn new() -> Self {
        Self {
            skills: AHashSet::new(),
        }
    }

    pub fn with_skills<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SkillId>,
    {
        Self {
            skills: skills.into_iter().map(Into::into).collect(),
        }
    }

    pub fn add(&mut self, skill: impl Into<SkillId>) {
        self.skills.insert(skill.into());
    }

    pub fn contains(&self, skill: &SkillId) -> bool {
        self.skills.contains(skill)
    }

    /// Resolve a user-typed skill name, trimming surrounding whitespace.
    /// Fails with `UnknownSkill` when the catalog has no such definition.
    pub fn resolve(&self, name: &str) -> Result<SkillId> {
        let id = SkillId::new(name.trim());
        if self.skills.contains(&id) {
            Ok(id)
        } else {
            Err(RequirementsError::UnknownSkill(id))
        }
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}
