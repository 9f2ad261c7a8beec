pub mod calendar;
pub mod error;
pub mod types;

pub use calendar::WorldClock;
pub use error::{RequirementsError, Result};
pub use types::{SimDay, SkillId, SkillLevel, UserId};
