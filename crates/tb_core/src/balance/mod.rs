//! Team balancing pipeline
//!
//! 1. group the roster by position and shuffle each group
//! 2. greedy placement in spine order (GK, DEF, MID, FWD)
//! 3. same-position swap refinement
//! 4. averages and result assembly
//!
//! The run owns its working copies only, so one `TeamBalancer` can be shared
//! across threads and called for independent rosters at the same time.

pub mod distribution;
pub mod grouping;
pub mod refinement;
pub mod stats;

pub use distribution::Distribution;
pub use grouping::PositionGroups;
pub use refinement::{refine, RefinementReport, DEFAULT_MAX_PASSES};

use crate::config::{BalanceMode, BalancerConfig};
use crate::error::Result;
use crate::localization::{BalancerLocalizer, ResultLabels};
use crate::models::{MatchResult, Player, Team};
use once_cell::sync::Lazy;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of one balancing run plus refinement diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceOutcome {
    pub result: MatchResult,
    /// `None` in alternating mode, where no refinement runs.
    pub report: Option<RefinementReport>,
    /// Seed the shuffle was derived from. `None` when the caller supplied the RNG.
    pub seed: Option<u64>,
}

/// Default-config balancer behind the free functions, so the FTL bundles are
/// parsed once per process. Callers with their own config should hold a
/// `TeamBalancer` the same way.
static DEFAULT_BALANCER: Lazy<TeamBalancer> = Lazy::new(TeamBalancer::default);

#[derive(Debug, Clone)]
pub struct TeamBalancer {
    config: BalancerConfig,
    labels: ResultLabels,
}

impl Default for TeamBalancer {
    fn default() -> Self {
        Self::build(BalancerConfig::default())
    }
}

impl TeamBalancer {
    pub fn new(config: BalancerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: BalancerConfig) -> Self {
        let mut localizer = BalancerLocalizer::new();
        localizer.select_locale(&config.locale);

        let mut labels = localizer.result_labels(config.mode);
        if let Some(name) = &config.team_a_name {
            labels.team_a_name = name.trim().to_string();
        }
        if let Some(name) = &config.team_b_name {
            labels.team_b_name = name.trim().to_string();
        }

        Self { config, labels }
    }

    pub fn config(&self) -> &BalancerConfig {
        &self.config
    }

    pub fn labels(&self) -> &ResultLabels {
        &self.labels
    }

    /// Split `players` into two teams. Tie order within each position comes
    /// from `rng`.
    pub fn balance<R: Rng + ?Sized>(&self, players: &[Player], rng: &mut R) -> BalanceOutcome {
        let groups = PositionGroups::shuffled(players, rng);

        let (mut dist, report) = match self.config.mode {
            BalanceMode::Optimized => {
                let mut dist = distribution::greedy(&groups);
                let report = refine(&mut dist.team_a, &mut dist.team_b, self.config.max_passes);
                (dist, Some(report))
            }
            BalanceMode::Alternating => (distribution::alternating(&groups), None),
        };

        let team_a = Team::new(self.labels.team_a_name.clone(), std::mem::take(&mut dist.team_a));
        let team_b = Team::new(self.labels.team_b_name.clone(), std::mem::take(&mut dist.team_b));
        let result = MatchResult::new(team_a, team_b, self.labels.analysis.clone());

        debug!(
            "balanced {} players ({:?}): {} vs {}, cost {}",
            players.len(),
            self.config.mode,
            result.team_a.len(),
            result.team_b.len(),
            result.cost()
        );

        BalanceOutcome { result, report, seed: None }
    }

    /// Same roster and seed always give the same outcome.
    pub fn balance_seeded(&self, players: &[Player], seed: u64) -> BalanceOutcome {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        BalanceOutcome { seed: Some(seed), ..self.balance(players, &mut rng) }
    }
}

/// Balance with default settings and an entropy-seeded shuffle.
pub fn balance_teams(players: &[Player]) -> MatchResult {
    balance_teams_with_rng(players, &mut rand::thread_rng())
}

pub fn balance_teams_with_rng<R: Rng + ?Sized>(players: &[Player], rng: &mut R) -> MatchResult {
    DEFAULT_BALANCER.balance(players, rng).result
}

pub fn balance_teams_seeded(players: &[Player], seed: u64) -> MatchResult {
    DEFAULT_BALANCER.balance_seeded(players, seed).result
}
