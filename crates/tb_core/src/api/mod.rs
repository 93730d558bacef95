pub mod json_api;

mod config_env;

pub use json_api::{
    balance_request, balance_request_schema_json, balance_teams_envelope_json,
    balance_teams_json, ApiError, ApiResponse, BalanceRequest, BalanceResponse, API_VERSION,
};
