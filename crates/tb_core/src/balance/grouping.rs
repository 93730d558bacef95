//! Position grouping with randomized tie order.

use crate::models::{Player, Position};
use rand::seq::SliceRandom;
use rand::Rng;

/// Roster split into one sequence per position category, indexed by
/// `Position::index`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionGroups {
    groups: [Vec<Player>; 4],
}

impl PositionGroups {
    /// Partition without reordering. The input slice is not touched.
    pub fn from_players(players: &[Player]) -> Self {
        let mut groups: [Vec<Player>; 4] = Default::default();
        for player in players {
            groups[player.position().index()].push(player.clone());
        }
        Self { groups }
    }

    /// Partition, then shuffle each group so that players tied on rating are
    /// not placed by input order. Groups are shuffled in spine order, one
    /// after another, from the same source.
    pub fn shuffled<R: Rng + ?Sized>(players: &[Player], rng: &mut R) -> Self {
        let mut groups = Self::from_players(players);
        groups.shuffle(rng);
        groups
    }

    /// Fisher-Yates over each group.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for group in self.groups.iter_mut() {
            group.shuffle(rng);
        }
    }

    pub fn group(&self, position: Position) -> &[Player] {
        &self.groups[position.index()]
    }

    /// All players, goalkeepers first, then defenders, midfielders, forwards.
    /// Empty groups contribute nothing.
    pub fn spine_order(&self) -> impl Iterator<Item = &Player> {
        Position::SPINE.into_iter().flat_map(move |position| self.group(position).iter())
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
