use super::{Player, Position};
use crate::balance::stats;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    /// Insertion order from the balancer; carries no meaning.
    pub players: Vec<Player>,
    /// Mean rating, one decimal, 0 when empty.
    pub average_skill: f64,
}

impl Team {
    pub fn new(name: impl Into<String>, players: Vec<Player>) -> Self {
        let average_skill = stats::average_skill(&players);
        Self { name: name.into(), players, average_skill }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn total_stars(&self) -> u32 {
        stats::total_stars(&self.players)
    }

    /// Recompute the cached average after the player list was edited.
    pub fn refresh_average(&mut self) {
        self.average_skill = stats::average_skill(&self.players);
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
    fn test_team_stats() {
        let team = Team::new(
            "Pan",
            vec![
                Player::create("A", Position::GK, 3).unwrap(),
                Player::create("B", Position::MID, 4).unwrap(),
                Player::create("C", Position::MID, 4).unwrap(),
            ],
        );

        assert_eq!(team.len(), 3);
        assert_eq!(team.total_stars(), 11);
        assert_eq!(team.average_skill, 3.7);

        let counts = team.count_by_position();
        assert_eq!(counts.get(&Position::GK), Some(&1));
        assert_eq!(counts.get(&Position::MID), Some(&2));
        assert_eq!(counts.get(&Position::FWD), None);
    }

    #[test]
    fn test_empty_team() {
        let team = Team::new("Queso", Vec::new());
        assert!(team.is_empty());
        assert_eq!(team.average_skill, 0.0);
    }
}
