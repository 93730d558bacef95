//! Validation module for player data
//!
//! Every `Player` is built through these checks, so the balancer itself
//! never has to deal with malformed input.

use crate::models::player::{Player, Position, MAX_STARS, MIN_STARS};
use std::collections::HashSet;
use thiserror::Error;

/// Longest accepted display name, in characters.
pub const MAX_NAME_LEN: usize = 50;

/// Error types for player validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Invalid player id: {0}")]
    InvalidId(String),

    #[error("Invalid rating: {0}. Must be between 1 and 5")]
    InvalidRating(i64),

    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    #[error("Duplicate player id: {0}")]
    DuplicateId(String),
}

/// Player validation utility
pub struct PlayerValidator;

impl PlayerValidator {
    /// Ids are opaque, but must carry something.
    pub fn validate_id(id: &str) -> Result<(), ValidationError> {
        if id.trim().is_empty() {
            return Err(ValidationError::InvalidId("Id cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Validate a display name and return it trimmed.
    pub fn validate_name(name: &str) -> Result<String, ValidationError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::InvalidName("Name cannot be empty".to_string()));
        }

        if trimmed.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::InvalidName(format!(
                "Name cannot exceed {} characters",
                MAX_NAME_LEN
            )));
        }

        Ok(trimmed.to_string())
    }

    /// Validate a star rating (1-5). Takes a wide integer so that negative or
    /// oversized values coming from JSON are reported as they were sent.
    pub fn validate_stars(stars: i64) -> Result<u8, ValidationError> {
        if !(MIN_STARS as i64..=MAX_STARS as i64).contains(&stars) {
            return Err(ValidationError::InvalidRating(stars));
        }
        Ok(stars as u8)
    }

    /// Validate position string
    pub fn validate_position_string(position: &str) -> Result<Position, ValidationError> {
        position.parse()
    }

    /// A roster must not contain the same id twice.
    pub fn validate_unique_ids(players: &[Player]) -> Result<(), ValidationError> {
        let mut seen = HashSet::with_capacity(players.len());
        for player in players {
            if !seen.insert(player.id()) {
                return Err(ValidationError::DuplicateId(player.id().to_string()));
            }
        }
        Ok(())
    }
}
