use crate::player::validation::{PlayerValidator, ValidationError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub const MIN_STARS: u8 = 1;
pub const MAX_STARS: u8 = 5;

/// Opaque player identity. Callers may bring their own ids; the only rule is
/// that they are not blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        PlayerValidator::validate_id(&id)?;
        Ok(Self(id))
    }

    /// Fresh random (v4 UUID) id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Position category. Closed set: the balancer only ever swaps players that
/// share one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    #[serde(alias = "GOALKEEPER")]
    GK,
    #[serde(alias = "DEFENDER")]
    DEF,
    #[serde(alias = "MIDFIELDER")]
    MID,
    #[serde(alias = "FORWARD")]
    FWD,
}

impl Position {
    /// Visiting order for distribution: goalkeepers first, then the rest of
    /// the spine front to back.
    pub const SPINE: [Position; 4] = [Position::GK, Position::DEF, Position::MID, Position::FWD];

    pub fn code(&self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::DEF => "DEF",
            Position::MID => "MID",
            Position::FWD => "FWD",
        }
    }

    /// Slot in `SPINE`.
    pub fn index(&self) -> usize {
        match self {
            Position::GK => 0,
            Position::DEF => 1,
            Position::MID => 2,
            Position::FWD => 3,
        }
    }

    /// Fluent message id of the short display label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Position::GK => "position-gk",
            Position::DEF => "position-def",
            Position::MID => "position-mid",
            Position::FWD => "position-fwd",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Position {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GK" | "GOALKEEPER" => Ok(Position::GK),
            "DEF" | "DEFENDER" => Ok(Position::DEF),
            "MID" | "MIDFIELDER" => Ok(Position::MID),
            "FWD" | "FORWARD" => Ok(Position::FWD),
            _ => Err(ValidationError::InvalidPosition(s.to_string())),
        }
    }
}

/// Raw, unvalidated player as it arrives from JSON or a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlayerData {
    /// Generated when missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// GK, DEF, MID or FWD (long names accepted, case-insensitive).
    pub position: String,
    /// Skill rating, 1 to 5.
    pub stars: i64,
}

impl PlayerData {
    pub fn new(name: impl Into<String>, position: Position, stars: u8) -> Self {
        Self {
            id: None,
            name: name.into(),
            position: position.code().to_string(),
            stars: stars as i64,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// A rated player. Fields are private so every instance has passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PlayerData")]
pub struct Player {
    id: PlayerId,
    name: String,
    position: Position,
    stars: u8,
}

impl Player {
    pub fn new(
        id: PlayerId,
        name: impl AsRef<str>,
        position: Position,
        stars: u8,
    ) -> Result<Self, ValidationError> {
        let name = PlayerValidator::validate_name(name.as_ref())?;
        let stars = PlayerValidator::validate_stars(stars as i64)?;
        Ok(Self { id, name, position, stars })
    }

    /// Same as `new` with a freshly generated id.
    pub fn create(
        name: impl AsRef<str>,
        position: Position,
        stars: u8,
    ) -> Result<Self, ValidationError> {
        Self::new(PlayerId::generate(), name, position, stars)
    }

    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn stars(&self) -> u8 {
        self.stars
    }

    /// Edited copy keeping the same identity, e.g. after a position change
    /// made on the field view.
    pub fn with_position(&self, position: Position) -> Self {
        Self { position, ..self.clone() }
    }

    pub fn with_stars(&self, stars: u8) -> Result<Self, ValidationError> {
        let stars = PlayerValidator::validate_stars(stars as i64)?;
        Ok(Self { stars, ..self.clone() })
    }
}

impl TryFrom<PlayerData> for Player {
    type Error = ValidationError;

    fn try_from(data: PlayerData) -> Result<Self, Self::Error> {
        let id = match data.id {
            Some(id) => PlayerId::new(id)?,
            None => PlayerId::generate(),
        };
        let name = PlayerValidator::validate_name(&data.name)?;
        let position = PlayerValidator::validate_position_string(&data.position)?;
        let stars = PlayerValidator::validate_stars(data.stars)?;

        Ok(Self { id, name, position, stars })
    }
}

impl From<&Player> for PlayerData {
    fn from(player: &Player) -> Self {
        Self {
            id: Some(player.id.to_string()),
            name: player.name.clone(),
            position: player.position.code().to_string(),
            stars: player.stars as i64,
        }
    }
}
