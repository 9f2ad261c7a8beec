//! Skill catalog and per-actor skill state
//!
//! The engine itself never owns skill definitions or progression; it only
//! reads what the host exposes: which skills exist (catalog) and what an
//! actor currently holds (snapshot).

pub mod catalog;
pub mod snapshot;

pub use catalog::SkillCatalog;
pub use snapshot::SkillSnapshot;
