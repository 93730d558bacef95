//! Team Balancer CLI library
//!
//! Roster file loading and request assembly, kept out of `main.rs` so it can
//! be tested.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use tb_core::{BalanceMode, BalanceRequest, BalanceResponse, BalancerConfig, PlayerData};

/// Fewest players worth balancing. The core accepts smaller rosters; this
/// front end does not.
pub const MIN_PLAYERS: usize = 2;

/// Command-line settings that win over whatever the roster file says.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub seed: Option<u64>,
    pub mode: Option<BalanceMode>,
    pub locale: Option<String>,
    pub max_passes: Option<u32>,
}

impl Overrides {
    fn touches_config(&self) -> bool {
        self.mode.is_some() || self.locale.is_some() || self.max_passes.is_some()
    }
}

/// Parse a roster file: either a bare array of players or a full request.
pub fn parse_request(content: &str) -> Result<BalanceRequest> {
    let value: serde_json::Value =
        serde_json::from_str(content).context("Failed to parse roster JSON")?;

    if value.is_array() {
        let players: Vec<PlayerData> =
            serde_json::from_value(value).context("Invalid player list")?;
        Ok(BalanceRequest::new(players))
    } else {
        serde_json::from_value(value).context("Invalid balance request")
    }
}

pub fn load_request(path: &Path) -> Result<BalanceRequest> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file: {}", path.display()))?;
    parse_request(&content)
}

pub fn apply_overrides(request: &mut BalanceRequest, overrides: &Overrides) {
    if let Some(seed) = overrides.seed {
        request.seed = Some(seed);
    }

    if overrides.touches_config() {
        let mut config = request.config.take().unwrap_or_else(BalancerConfig::default);
        if let Some(mode) = overrides.mode {
            config.mode = mode;
        }
        if let Some(locale) = &overrides.locale {
            config.locale = locale.clone();
        }
        if let Some(max_passes) = overrides.max_passes {
            config.max_passes = max_passes;
        }
        request.config = Some(config);
    }
}

pub fn ensure_min_players(request: &BalanceRequest) -> Result<()> {
    if request.players.len() < MIN_PLAYERS {
        bail!(
            "At least {} players are needed to pick teams, got {}",
            MIN_PLAYERS,
            request.players.len()
        );
    }
    Ok(())
}

/// Load, adjust, check and balance a roster file.
pub fn run_balance(path: &Path, overrides: &Overrides) -> Result<BalanceResponse> {
    let mut request = load_request(path)?;
    apply_overrides(&mut request, overrides);
    ensure_min_players(&request)?;

    tb_core::balance_request(request).context("Balancing failed")
}
