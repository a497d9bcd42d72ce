//! Configuration for Kinship.
//!
//! The pipeline itself never touches the environment: hosts build a
//! [`KinshipConfig`] (usually via [`KinshipConfig::from_env`] at startup) and
//! hand it to [`crate::Pipeline::new`].

pub(crate) mod helpers;

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::rationale::DEFAULT_MAX_WORDS;

pub use crate::observability::ObservabilityConfig;

use self::helpers::parse_optional_env;

/// Main configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KinshipConfig {
    pub rationale: RationaleConfig,
    pub observability: ObservabilityConfig,
}

impl KinshipConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file first if one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        report_dotenv(dotenvy::dotenv());

        Ok(Self {
            rationale: RationaleConfig::resolve()?,
            observability: ObservabilityConfig::resolve()?,
        })
    }
}

/// A missing `.env` is normal; anything else is logged.
fn report_dotenv(result: Result<PathBuf, dotenvy::Error>) -> bool {
    match result {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Loaded .env file");
            true
        }
        Err(e) if e.not_found() => false,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load .env file");
            false
        }
    }
}

/// Rationale generation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RationaleConfig {
    /// Hard ceiling on rationale length, in whitespace-delimited words.
    pub max_words: usize,
}

impl Default for RationaleConfig {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
        }
    }
}

impl RationaleConfig {
    pub(crate) fn resolve() -> Result<Self, ConfigError> {
        let max_words = parse_optional_env("KINSHIP_RATIONALE_MAX_WORDS", DEFAULT_MAX_WORDS)?;
        if max_words == 0 {
            return Err(ConfigError::InvalidValue {
                key: "KINSHIP_RATIONALE_MAX_WORDS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(Self { max_words })
    }
}
