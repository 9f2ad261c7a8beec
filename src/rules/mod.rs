//! Rule configuration: persisted shape and the shared store

pub mod config;
pub mod store;

pub use config::{RequirementsConfig, DEFAULT_STAR_COST};
pub use store::RequirementsStore;
