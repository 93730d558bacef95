//! # Balancer Configuration
//!
//! Tuning knobs for a balancing run, loadable from JSON.
//!
//! ```rust
//! use tb_core::config::{BalanceMode, BalancerConfig};
//!
//! let config = BalancerConfig::default();
//! assert_eq!(config.mode, BalanceMode::Optimized);
//! let quick = BalancerConfig::alternating();
//! assert_eq!(quick.mode, BalanceMode::Alternating);
//! ```

use crate::balance::refinement::DEFAULT_MAX_PASSES;
use crate::error::{BalanceError, Result};
use crate::player::MAX_NAME_LEN;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

pub const DEFAULT_LOCALE: &str = "es-AR";

/// Which distribution pipeline to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BalanceMode {
    /// Greedy placement followed by same-position swap refinement.
    #[default]
    Optimized,
    /// Alternate A/B over the grouped order, no refinement.
    Alternating,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BalancerConfig {
    pub mode: BalanceMode,
    /// Ceiling on refinement passes (at least 1).
    pub max_passes: u32,
    /// BCP 47 tag used for default team names and labels.
    pub locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_a_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_b_name: Option<String>,
}

impl Default for BalancerConfig {
    fn default() -> Self {
        Self {
            mode: BalanceMode::Optimized,
            max_passes: DEFAULT_MAX_PASSES,
            locale: DEFAULT_LOCALE.to_string(),
            team_a_name: None,
            team_b_name: None,
        }
    }
}

impl BalancerConfig {
    pub fn optimized() -> Self {
        Self::default()
    }

    pub fn alternating() -> Self {
        Self { mode: BalanceMode::Alternating, ..Self::default() }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_team_names(mut self, team_a: impl Into<String>, team_b: impl Into<String>) -> Self {
        self.team_a_name = Some(team_a.into());
        self.team_b_name = Some(team_b.into());
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_passes == 0 {
            return Err(BalanceError::Config("max_passes must be at least 1".into()));
        }

        if self.locale.parse::<LanguageIdentifier>().is_err() {
            return Err(BalanceError::Config(format!("invalid locale '{}'", self.locale)));
        }

        for name in [&self.team_a_name, &self.team_b_name].into_iter().flatten() {
            let trimmed = name.trim();
            if trimmed.is_empty() || trimmed.chars().count() > MAX_NAME_LEN {
                return Err(BalanceError::Config(format!(
                    "team name must be 1-{} characters, got '{}'",
                    MAX_NAME_LEN, name
                )));
            }
        }

        Ok(())
    }
}
