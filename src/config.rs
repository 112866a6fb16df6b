//! Scan configuration
//!
//! Read from a TOML document such as:
//!
//! ```toml
//! owner_key = "CodeOwner"
//! strict = false
//!
//! [limits]
//! max_input_bytes = 1048576
//! binary_sniff_bytes = 512
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};
use crate::owner::DEFAULT_OWNER_KEY;

/// Settings applied by `FileScanner`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Annotation key whose value lists owners
    #[serde(default = "default_owner_key")]
    pub owner_key: String,

    /// Treat an unterminated construct as a failed scan instead of a
    /// degraded result
    #[serde(default)]
    pub strict: bool,

    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Input limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Inputs larger than this are refused
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,

    /// Leading bytes inspected for a NUL byte; 0 disables the check
    #[serde(default = "default_binary_sniff_bytes")]
    pub binary_sniff_bytes: usize,
}

fn default_owner_key() -> String {
    DEFAULT_OWNER_KEY.to_string()
}

fn default_max_input_bytes() -> usize {
    1 << 20
}

fn default_binary_sniff_bytes() -> usize {
    512
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            owner_key: default_owner_key(),
            strict: false,
            limits: LimitsConfig::default(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: default_max_input_bytes(),
            binary_sniff_bytes: default_binary_sniff_bytes(),
        }
    }
}

impl ScanConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ScanError::Config {
            message: format!("Failed to parse config: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file, falling back to defaults when the
    /// file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no scan config, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ScanError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_toml_str(&content)
    }

    /// Serialize configuration back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ScanError::Config {
            message: format!("Failed to serialize config: {}", e),
        })
    }

    fn validate(&self) -> Result<()> {
        if self.owner_key.trim().is_empty() {
            return Err(ScanError::Config {
                message: "owner_key must not be empty".to_string(),
            });
        }
        if self.limits.max_input_bytes == 0 {
            return Err(ScanError::Config {
                message: "limits.max_input_bytes must be positive".to_string(),
            });
        }
        Ok(())
    }
}
