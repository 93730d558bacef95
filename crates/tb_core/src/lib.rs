//! # tb_core - Position-aware Team Balancer
//!
//! Splits a roster of rated players (1-5 stars, one of four positions) into
//! two evenly matched teams.
//!
//! ## Features
//! - Greedy placement in GK, DEF, MID, FWD order, then same-position swap
//!   refinement that minimizes the star-sum gap
//! - Deterministic runs from a seed (same seed = same teams)
//! - es-AR / en-US team names and position labels
//! - JSON API for UI hosts

pub mod api;
pub mod balance;
pub mod config;
pub mod error;
pub mod localization;
pub mod models;
pub mod player;
pub mod share;

// Re-export main API functions
pub use api::{
    balance_request, balance_request_schema_json, balance_teams_envelope_json,
    balance_teams_json, BalanceRequest, BalanceResponse,
};
pub use balance::{
    balance_teams, balance_teams_seeded, balance_teams_with_rng, BalanceOutcome,
    RefinementReport, TeamBalancer,
};
pub use config::{BalanceMode, BalancerConfig};
pub use error::{BalanceError, Result};
pub use localization::BalancerLocalizer;
pub use models::{MatchResult, Player, PlayerData, PlayerId, Position, Roster, Team, TeamSide};
pub use player::{PlayerValidator, ValidationError};
pub use share::share_text;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
