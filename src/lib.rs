//! Skill Requirements - learn-attempt gating engine
//!
//! Server admins define requirements an actor must meet before learning a
//! skill: forbidden skills, mandatory skills, earliest unlock day, custom
//! star costs, and per-user bypass grants. The engine evaluates each learn
//! attempt against those rules and answers with a star cost (or an
//! unreachable cost to deny, per the host checkpoint's convention).

pub mod commands;
pub mod core;
pub mod gate;
pub mod rules;
pub mod skills;
