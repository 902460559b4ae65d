//! Engine configuration declaration and validation.
//!
//! # Responsibility
//! - Declare the tunable knobs of the filtering engine and their defaults.
//! - Parse and validate configuration delivered as JSON.
//!
//! # Invariants
//! - Defaults reproduce the historical behavior: first-parent ancestry,
//!   2000 ms poll period, "All items" / "Unknown topic" labels.
//! - Every field is optional in the JSON shape; absent fields fall back to
//!   defaults.

use crate::engine::path::ParentPolicy;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEFAULT_ALL_ITEMS_LABEL: &str = "All items";
const DEFAULT_UNKNOWN_TOPIC_LABEL: &str = "Unknown topic";
const DEFAULT_REFRESH_PERIOD_MS: u64 = 2000;

/// Configuration for recomputation and refresh scheduling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct PortfolioConfig {
    /// Ancestry policy applied to multi-parent topics.
    pub parent_policy: ParentPolicy,
    /// Status label shown when the selection is empty.
    pub all_items_label: String,
    /// Placeholder label for selected ids the graph does not know.
    pub unknown_topic_label: String,
    /// Poll period handed to the external refresh scheduler.
    pub refresh_period_ms: u64,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            parent_policy: ParentPolicy::default(),
            all_items_label: DEFAULT_ALL_ITEMS_LABEL.to_string(),
            unknown_topic_label: DEFAULT_UNKNOWN_TOPIC_LABEL.to_string(),
            refresh_period_ms: DEFAULT_REFRESH_PERIOD_MS,
        }
    }
}

/// Declaration-level configuration error.
#[derive(Debug)]
pub enum ConfigError {
    /// JSON payload did not parse into the configuration shape.
    Parse(serde_json::Error),
    /// A label is blank after trim.
    BlankLabel(&'static str),
    /// The refresh period is zero.
    ZeroRefreshPeriod,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "config payload did not parse: {err}"),
            Self::BlankLabel(field) => write!(f, "config label must not be blank: {field}"),
            Self::ZeroRefreshPeriod => write!(f, "refresh_period_ms must be greater than zero"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl PortfolioConfig {
    /// Parses and validates a JSON configuration payload.
    ///
    /// # Errors
    /// - [`ConfigError::Parse`] when the payload is not valid JSON for the
    ///   configuration shape.
    /// - [`ConfigError::BlankLabel`] when a label is blank after trim.
    /// - [`ConfigError::ZeroRefreshPeriod`] when the poll period is zero.
    pub fn from_json(payload: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(payload).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates declaration-level invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.all_items_label.trim().is_empty() {
            return Err(ConfigError::BlankLabel("all_items_label"));
        }
        if self.unknown_topic_label.trim().is_empty() {
            return Err(ConfigError::BlankLabel("unknown_topic_label"));
        }
        if self.refresh_period_ms == 0 {
            return Err(ConfigError::ZeroRefreshPeriod);
        }
        Ok(())
    }
}
