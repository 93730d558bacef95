use crate::player::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BalanceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchemaVersion { found: u8, expected: u8 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Localization error: {0}")]
    Localization(String),
}

impl BalanceError {
    /// Stable machine-readable code used by the JSON envelope.
    pub fn code(&self) -> &'static str {
        match self {
            BalanceError::Validation(_) => "VALIDATION_ERROR",
            BalanceError::Config(_) => "CONFIG_ERROR",
            BalanceError::UnsupportedSchemaVersion { .. } => "UNSUPPORTED_SCHEMA_VERSION",
            BalanceError::Json(_) => "INVALID_JSON",
            BalanceError::Localization(_) => "LOCALIZATION_ERROR",
        }
    }

    /// Errors caused by the caller's input, as opposed to our own resources.
    pub fn is_input_error(&self) -> bool {
        match self {
            BalanceError::Validation(_) => true,
            BalanceError::UnsupportedSchemaVersion { .. } => true,
            BalanceError::Json(_) => true,
            BalanceError::Config(_) => true,
            BalanceError::Localization(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, BalanceError>;
