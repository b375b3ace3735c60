//! Quoting policy configuration loaded from environment variables.

use serde::Deserialize;

use crate::quote::{PartialFillPolicy, QuotePolicy};
use crate::units::RoundingMode;

/// Quoting configuration loaded from environment variables.
///
/// The core computations are pure; configuration only selects the policy
/// knobs the quoter applies when finalizing amounts.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteConfig {
    /// Rounding for final base-unit amounts: floor or nearest.
    #[serde(default)]
    pub quote_rounding: RoundingMode,

    /// Whether quotes may reflect a partial fill when liquidity runs out.
    #[serde(default = "default_true")]
    pub allow_partial_fills: bool,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            quote_rounding: RoundingMode::default(),
            allow_partial_fills: default_true(),
            rust_log: default_log_level(),
        }
    }
}

impl QuoteConfig {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> crate::error::Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check that the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

        if self.rust_log.is_empty() {
            return Err("RUST_LOG must not be empty".to_string());
        }
        if !LEVELS.contains(&self.rust_log.to_lowercase().as_str()) {
            return Err(format!("RUST_LOG must be one of {}", LEVELS.join(", ")));
        }

        Ok(())
    }

    /// The quoting policy this configuration selects.
    pub fn policy(&self) -> QuotePolicy {
        QuotePolicy {
            rounding: self.quote_rounding,
            partial_fills: if self.allow_partial_fills {
                PartialFillPolicy::Allow
            } else {
                PartialFillPolicy::Reject
            },
        }
    }
}
