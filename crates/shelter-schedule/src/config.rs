//! Runtime configuration loaded from TOML.
//!
//! ```toml
//! [logging]
//! level = "shelter_schedule=debug,info"
//! format = "json"
//!
//! [week_start]
//! lookback_months = 1
//! lookahead_years = 1
//! ```
//!
//! Every table and key is optional; missing values fall back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::query::WeekStartPolicy;

/// Output format of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive string, e.g. `"info"` or
    /// `"shelter_schedule=debug,info"`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub logging: LoggingConfig,
    pub week_start: WeekStartPolicy,
}

impl ScheduleConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScheduleError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ScheduleConfig = toml::from_str(content)
            .map_err(|e| ScheduleError::Config(format!("TOML parsing error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(ScheduleError::Config(
                "logging.level must not be empty".to_string(),
            ));
        }
        if self.week_start.lookahead_years == 0 && self.week_start.lookback_months == 0 {
            return Err(ScheduleError::Config(
                "week_start window is empty: set lookback_months or lookahead_years".to_string(),
            ));
        }
        Ok(())
    }
}
