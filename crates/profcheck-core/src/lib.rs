mod app_config;
mod config;
mod profile;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use profile::{
    merge_profile, ClassificationVerdict, ExtractionResult, FieldOverrides, ProfileData,
    RawOverrides, Verdict,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid literal for {field}: '{value}' is not a non-negative integer")]
    InvalidOverride { field: &'static str, value: String },
}
