//! JSON API for team balancing
//!
//! String-in/string-out entry points for UI hosts, plus the typed
//! `balance_request` used by the CLI.

use super::config_env;
use crate::balance::{RefinementReport, TeamBalancer};
use crate::config::BalancerConfig;
use crate::error::{BalanceError, Result};
use crate::models::{MatchResult, PlayerData, Roster};
use crate::player::ValidationError;
use crate::share::share_text;
use crate::SCHEMA_VERSION;
use chrono::{DateTime, Utc};
use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

/// API version for envelope compatibility
pub const API_VERSION: &str = "v1";

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BalanceRequest {
    pub schema_version: u8,
    /// Shuffle seed; drawn at random and echoed back when missing.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Overrides the `TB_CONFIG_PATH` file and the built-in defaults.
    #[serde(default)]
    pub config: Option<BalancerConfig>,
    pub players: Vec<PlayerData>,
}

impl BalanceRequest {
    pub fn new(players: Vec<PlayerData>) -> Self {
        Self { schema_version: SCHEMA_VERSION, seed: None, config: None, players }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub schema_version: u8,
    pub seed: u64,
    pub result: MatchResult,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub report: Option<RefinementReport>,
    pub share_text: String,
}

/// Standard response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: &str, message: &str) -> Self {
        Self { code: code.to_string(), message: message.to_string() }
    }

    pub fn from_balance_error(error: &BalanceError) -> Self {
        let code = match error {
            BalanceError::Validation(validation) => match validation {
                ValidationError::InvalidName(_) => "INVALID_NAME",
                ValidationError::InvalidId(_) => "INVALID_ID",
                ValidationError::InvalidRating(_) => "INVALID_RATING",
                ValidationError::InvalidPosition(_) => "INVALID_POSITION",
                ValidationError::DuplicateId(_) => "DUPLICATE_ID",
            },
            other => other.code(),
        };
        Self::new(code, &error.to_string())
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Validate and balance a typed request.
pub fn balance_request(request: BalanceRequest) -> Result<BalanceResponse> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(BalanceError::UnsupportedSchemaVersion {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let config = match request.config {
        Some(config) => config,
        None => config_env::config_from_env().map_err(BalanceError::Config)?.unwrap_or_default(),
    };
    let balancer = TeamBalancer::new(config)?;

    let roster = Roster::from_data(request.players)?;
    let seed = request.seed.unwrap_or_else(|| rand::thread_rng().gen());

    let outcome = balancer.balance_seeded(roster.players(), seed);
    let share_text = share_text(&outcome.result);

    Ok(BalanceResponse {
        schema_version: SCHEMA_VERSION,
        seed,
        result: outcome.result,
        report: outcome.report,
        share_text,
    })
}

fn parse_and_balance(request_json: &str) -> Result<BalanceResponse> {
    let request: BalanceRequest = serde_json::from_str(request_json)?;
    balance_request(request)
}

/// Balance a JSON `BalanceRequest` and return the `BalanceResponse` JSON.
pub fn balance_teams_json(request_json: &str) -> std::result::Result<String, String> {
    let request: BalanceRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;

    info!("Processing balance request with {} players", request.players.len());

    let response = balance_request(request).map_err(|e| {
        warn!("Balance request rejected: {}", e);
        e.to_string()
    })?;

    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize response: {}", e))
}

/// Same as `balance_teams_json`, wrapped in an `ApiResponse` envelope.
/// Never fails; errors are reported inside the envelope.
pub fn balance_teams_envelope_json(request_json: &str) -> String {
    let response = match parse_and_balance(request_json) {
        Ok(data) => {
            info!(
                "Balanced {} players with seed {}",
                data.result.total_players(),
                data.seed
            );
            ApiResponse::success(data)
        }
        Err(e) => {
            if e.is_input_error() {
                warn!("Balance request rejected: {}", e);
            } else {
                error!("Balance request failed: {}", e);
            }
            ApiResponse::<BalanceResponse>::error(ApiError::from_balance_error(&e))
        }
    };
    serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
}

/// JSON Schema of `BalanceRequest`, for hosts that validate before calling.
pub fn balance_request_schema_json() -> String {
    let schema = schemars::schema_for!(BalanceRequest);
    serde_json::to_string_pretty(&schema).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;
    use serde_json::{json, Value};

    fn sample_players() -> Value {
        json!([
            {"id": "1", "name": "Ana", "position": "GK", "stars": 3},
            {"id": "2", "name": "Beto", "position": "GK", "stars": 4},
            {"id": "3", "name": "Caro", "position": "MID", "stars": 5},
            {"id": "4", "name": "Dani", "position": "MID", "stars": 5},
            {"id": "5", "name": "Eze", "position": "MID", "stars": 1},
            {"id": "6", "name": "Fede", "position": "MID", "stars": 1},
            {"id": "7", "name": "Gabi", "position": "FWD", "stars": 2}
        ])
    }

    #[test]
    fn test_basic_request() {
        let request = json!({
            "schema_version": 1,
            "seed": 42,
            "config": {},
            "players": sample_players()
        });

        let output = balance_teams_json(&request.to_string()).unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["seed"], 42);
        assert_eq!(parsed["result"]["team_a"]["name"], "Equipo Pan");
        let a = parsed["result"]["team_a"]["players"].as_array().unwrap().len();
        let b = parsed["result"]["team_b"]["players"].as_array().unwrap().len();
        assert_eq!(a + b, 7);
        assert!(parsed["report"]["converged"].as_bool().unwrap());
        assert!(parsed["share_text"].as_str().unwrap().starts_with("*Equipo Pan*"));
    }

    #[test]
    fn test_same_seed_same_json() {
        let request = json!({
            "schema_version": 1,
            "seed": 999,
            "config": {},
            "players": sample_players()
        })
        .to_string();

        assert_eq!(balance_teams_json(&request).unwrap(), balance_teams_json(&request).unwrap());
    }

    #[test]
    fn test_missing_seed_is_echoed() {
        let request = BalanceRequest {
            config: Some(BalancerConfig::default()),
            ..BalanceRequest::new(vec![PlayerData::new("Solo", Position::MID, 3)])
        };
        let response = balance_request(request.clone()).unwrap();

        let replay = BalanceRequest { seed: Some(response.seed), ..request };
        let again = balance_request(replay).unwrap();
        assert_eq!(again.seed, response.seed);
        assert_eq!(again.result.team_a.players.len(), 1);
    }

    #[test]
    fn test_unsupported_schema_version() {
        let request = json!({"schema_version": 2, "config": {}, "players": []});
        let err = balance_teams_json(&request.to_string()).unwrap_err();
        assert!(err.contains("Unsupported schema version"));
    }

    #[test]
    fn test_invalid_json() {
        let err = balance_teams_json("{not json").unwrap_err();
        assert!(err.starts_with("Invalid JSON request"));
    }

    #[test]
    fn test_envelope_success() {
        let request = json!({
            "schema_version": 1,
            "seed": 7,
            "config": {"mode": "alternating", "locale": "en-US"},
            "players": sample_players()
        });
        let envelope: Value =
            serde_json::from_str(&balance_teams_envelope_json(&request.to_string())).unwrap();

        assert_eq!(envelope["success"], true);
        assert_eq!(envelope["schema_version"], "v1");
        assert!(envelope["error"].is_null());
        assert_eq!(envelope["data"]["result"]["team_b"]["name"], "Team Cheese");
        assert!(envelope["data"].get("report").is_none());
    }

    #[test]
    fn test_envelope_error_codes() {
        let cases = [
            (json!({"id": "1", "name": "X", "position": "LIBERO", "stars": 3}), "INVALID_POSITION"),
            (json!({"id": "1", "name": "X", "position": "GK", "stars": 0}), "INVALID_RATING"),
            (json!({"id": "1", "name": "  ", "position": "GK", "stars": 3}), "INVALID_NAME"),
            (json!({"id": "", "name": "X", "position": "GK", "stars": 3}), "INVALID_ID"),
        ];

        for (player, code) in cases {
            let request = json!({"schema_version": 1, "config": {}, "players": [player]});
            let envelope: Value =
                serde_json::from_str(&balance_teams_envelope_json(&request.to_string())).unwrap();
            assert_eq!(envelope["success"], false);
            assert_eq!(envelope["error"]["code"], code);
            assert!(envelope["data"].is_null());
        }
    }

    #[test]
    fn test_envelope_duplicate_ids_and_bad_json() {
        let request = json!({
            "schema_version": 1,
            "config": {},
            "players": [
                {"id": "1", "name": "A", "position": "GK", "stars": 3},
                {"id": "1", "name": "B", "position": "GK", "stars": 3}
            ]
        });
        let envelope: Value =
            serde_json::from_str(&balance_teams_envelope_json(&request.to_string())).unwrap();
        assert_eq!(envelope["error"]["code"], "DUPLICATE_ID");

        let envelope: Value = serde_json::from_str(&balance_teams_envelope_json("[")).unwrap();
        assert_eq!(envelope["error"]["code"], "INVALID_JSON");
    }

    #[test]
    fn test_invalid_config_in_request() {
        let request = json!({"schema_version": 1, "config": {"max_passes": 0}, "players": []});
        let envelope: Value =
            serde_json::from_str(&balance_teams_envelope_json(&request.to_string())).unwrap();
        assert_eq!(envelope["error"]["code"], "CONFIG_ERROR");
    }

    #[test]
    fn test_schema_accepts_valid_requests() {
        let schema: Value = serde_json::from_str(&balance_request_schema_json()).unwrap();
        let compiled = jsonschema::JSONSchema::compile(&schema).unwrap();

        let good = json!({"schema_version": 1, "seed": 3, "players": sample_players()});
        assert!(compiled.is_valid(&good));

        let missing_players = json!({"schema_version": 1});
        assert!(!compiled.is_valid(&missing_players));

        let wrong_stars_type = json!({
            "schema_version": 1,
            "players": [{"name": "A", "position": "GK", "stars": "five"}]
        });
        assert!(!compiled.is_valid(&wrong_stars_type));
    }
}
