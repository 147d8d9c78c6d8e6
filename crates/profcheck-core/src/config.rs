use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every setting has a default, so an empty environment yields a usable
/// development config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("PROFCHECK_ENV", "development"))?;
    let bind_addr = parse_addr("PROFCHECK_BIND_ADDR", "0.0.0.0:5000")?;
    let log_level = or_default("PROFCHECK_LOG_LEVEL", "info");
    let tesseract_bin = PathBuf::from(or_default("PROFCHECK_TESSERACT_BIN", "tesseract"));

    let ocr_lang = or_default("PROFCHECK_OCR_LANG", "eng");
    if ocr_lang.trim().is_empty() {
        return Err(invalid(
            "PROFCHECK_OCR_LANG",
            "language must be non-empty".to_string(),
        ));
    }

    let ocr_timeout_secs = parse_u64("PROFCHECK_OCR_TIMEOUT_SECS", "30")?;
    if ocr_timeout_secs == 0 {
        return Err(invalid(
            "PROFCHECK_OCR_TIMEOUT_SECS",
            "timeout must be at least 1 second".to_string(),
        ));
    }

    let max_upload_bytes = parse_usize("PROFCHECK_MAX_UPLOAD_BYTES", "10485760")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        tesseract_bin,
        ocr_lang,
        ocr_timeout_secs,
        max_upload_bytes,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PROFCHECK_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
