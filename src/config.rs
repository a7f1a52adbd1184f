//! Configuration for satlens
//!
//! Settings load from environment variables with defaults; CLI flags override
//! them afterwards.
//!
//! # Environment Variables
//!
//! - `SATLENS_VIEWS_DIR`: views directory the generator works in - default: "src/views"
//! - `SATLENS_STRICT_ANCHORS`: fail a spec on a missing or ambiguous anchor (true|false) - default: "false"
//! - `SATLENS_DUPLICATE_POLICY`: what registering a taken id does (reject|overwrite) - default: "reject"
//! - `SATLENS_LOG_LEVEL`: logging level - default: "info"
//!
//! # Example
//!
//! ```no_run
//! use satlens::SatlensConfig;
//!
//! let config = SatlensConfig::default();
//! config.validate().expect("Invalid configuration");
//! println!("{}", config);
//! ```

use crate::registry::DuplicatePolicy;
use std::env;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_VIEWS_DIR: &str = "src/views";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid duplicate policy: {0}. Valid options: reject, overwrite")]
    InvalidDuplicatePolicy(String),

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SatlensConfig {
    /// Directory holding `base/` and `generated/`
    pub views_dir: PathBuf,

    pub strict_anchors: bool,

    pub duplicate_policy: DuplicatePolicy,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for SatlensConfig {
    /// Loads from `SATLENS_*` environment variables. An unparseable duplicate
    /// policy falls back to `reject`; use [`SatlensConfig::from_env`] to see
    /// the error instead.
    fn default() -> Self {
        let duplicate_policy = env::var("SATLENS_DUPLICATE_POLICY")
            .ok()
            .and_then(|v| parse_duplicate_policy(&v).ok())
            .unwrap_or_default();
        Self::load(duplicate_policy)
    }
}

impl SatlensConfig {
    /// Like `default()`, but rejects an unknown `SATLENS_DUPLICATE_POLICY`
    pub fn from_env() -> Result<Self, ConfigError> {
        let duplicate_policy = match env::var("SATLENS_DUPLICATE_POLICY") {
            Ok(value) => parse_duplicate_policy(&value)?,
            Err(_) => DuplicatePolicy::default(),
        };
        Ok(Self::load(duplicate_policy))
    }

    fn load(duplicate_policy: DuplicatePolicy) -> Self {
        let views_dir = env::var("SATLENS_VIEWS_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_VIEWS_DIR));

        let strict_anchors = env::var("SATLENS_STRICT_ANCHORS")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        let log_level = env::var("SATLENS_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            views_dir,
            strict_anchors,
            duplicate_policy,
            log_level,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.views_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Views directory must not be empty".to_string(),
            ));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }
}

pub fn parse_duplicate_policy(value: &str) -> Result<DuplicatePolicy, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "reject" => Ok(DuplicatePolicy::Reject),
        "overwrite" => Ok(DuplicatePolicy::Overwrite),
        _ => Err(ConfigError::InvalidDuplicatePolicy(value.to_string())),
    }
}

impl fmt::Display for SatlensConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Satlens Configuration:")?;
        writeln!(f, "  Views Dir: {}", self.views_dir.display())?;
        writeln!(f, "  Strict Anchors: {}", self.strict_anchors)?;
        writeln!(f, "  Duplicate Policy: {:?}", self.duplicate_policy)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}
