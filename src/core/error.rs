use crate::core::types::SkillId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RequirementsError {
    #[error("Can't find skill {0}")]
    UnknownSkill(SkillId),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, RequirementsError>;
