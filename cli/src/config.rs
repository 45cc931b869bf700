//! Auditor configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use mint_auditor_types::AuditorError;

/// Configuration for a `mint-auditor` run.
///
/// Loaded from a TOML file via [`AuditorConfig::from_toml_file`]; CLI flags
/// and environment variables are layered on top in `main`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditorConfig {
    /// Treat warning-level findings as failures.
    #[serde(default)]
    pub strict: bool,

    /// Fail the check when any pair is still unconfirmed.
    #[serde(default)]
    pub fail_on_pending: bool,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl AuditorConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, AuditorError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            AuditorError::Config(format!("{}: {e}", path.as_ref().display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, AuditorError> {
        toml::from_str(s).map_err(|e| AuditorError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, AuditorError> {
        toml::to_string_pretty(self).map_err(|e| AuditorError::Config(e.to_string()))
    }
}

impl Default for AuditorConfig {
    fn default() -> Self {
        Self {
            strict: false,
            fail_on_pending: false,
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}
