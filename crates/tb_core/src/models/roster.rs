use super::{Player, PlayerData, Position};
use crate::player::{PlayerValidator, ValidationError};
use std::collections::BTreeMap;

/// Validated list of players with unique ids, ready to be balanced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Result<Self, ValidationError> {
        PlayerValidator::validate_unique_ids(&players)?;
        Ok(Self { players })
    }

    /// Validate raw player data; the first bad entry fails the whole roster.
    pub fn from_data(data: Vec<PlayerData>) -> Result<Self, ValidationError> {
        let players = data.into_iter().map(Player::try_from).collect::<Result<Vec<_>, _>>()?;
        Self::new(players)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn into_players(self) -> Vec<Player> {
        self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn count_by_position(&self) -> BTreeMap<Position, usize> {
        let mut counts = BTreeMap::new();
        for player in &self.players {
            *counts.entry(player.position()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data() {
        let roster = Roster::from_data(vec![
            PlayerData::new("Ana", Position::GK, 3).with_id("1"),
            PlayerData::new("Beto", Position::DEF, 4).with_id("2"),
            PlayerData::new("Caro", Position::DEF, 2),
        ])
        .unwrap();

        assert_eq!(roster.len(), 3);
        assert_eq!(roster.count_by_position().get(&Position::DEF), Some(&2));
    }

    #[test]
    fn test_rejects_duplicates_and_bad_entries() {
        let dup = Roster::from_data(vec![
            PlayerData::new("Ana", Position::GK, 3).with_id("1"),
            PlayerData::new("Beto", Position::DEF, 4).with_id("1"),
        ]);
        assert_eq!(dup, Err(ValidationError::DuplicateId("1".to_string())));

        let mut bad = PlayerData::new("Caro", Position::MID, 3);
        bad.stars = 0;
        assert_eq!(Roster::from_data(vec![bad]), Err(ValidationError::InvalidRating(0)));
    }

    #[test]
    fn test_empty_roster_is_valid() {
        let roster = Roster::new(Vec::new()).unwrap();
        assert!(roster.is_empty());
    }
}
