use super::{Player, PlayerId, Team};
use crate::balance::stats;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    A,
    B,
}

impl TeamSide {
    pub fn other(&self) -> TeamSide {
        match self {
            TeamSide::A => TeamSide::B,
            TeamSide::B => TeamSide::A,
        }
    }
}

/// Two-team partition of a roster.
///
/// Every input player appears in exactly one of `team_a` / `team_b`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub team_a: Team,
    pub team_b: Team,
    pub analysis: String,
}

impl MatchResult {
    pub fn new(team_a: Team, team_b: Team, analysis: impl Into<String>) -> Self {
        Self { team_a, team_b, analysis: analysis.into() }
    }

    pub fn team(&self, side: TeamSide) -> &Team {
        match side {
            TeamSide::A => &self.team_a,
            TeamSide::B => &self.team_b,
        }
    }

    /// |sum(A) - sum(B)|
    pub fn cost(&self) -> u32 {
        stats::cost(&self.team_a.players, &self.team_b.players)
    }

    pub fn total_players(&self) -> usize {
        self.team_a.len() + self.team_b.len()
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.team_a.players.iter().chain(self.team_b.players.iter())
    }

    pub fn player_ids(&self) -> Vec<&PlayerId> {
        self.players().map(|p| p.id()).collect()
    }

    pub fn side_of(&self, id: &PlayerId) -> Option<TeamSide> {
        if self.team_a.players.iter().any(|p| p.id() == id) {
            Some(TeamSide::A)
        } else if self.team_b.players.iter().any(|p| p.id() == id) {
            Some(TeamSide::B)
        } else {
            None
        }
    }

    pub fn contains_player(&self, id: &PlayerId) -> bool {
        self.side_of(id).is_some()
    }

    /// Copy of this result where the stored copy of `player` (matched by id)
    /// is replaced and averages are recomputed. Team membership is untouched;
    /// an unknown id leaves the result as is.
    pub fn with_player_replaced(&self, player: &Player) -> MatchResult {
        let mut updated = self.clone();
        for team in [&mut updated.team_a, &mut updated.team_b] {
            if let Some(slot) = team.players.iter_mut().find(|p| p.id() == player.id()) {
                *slot = player.clone();
                team.refresh_average();
            }
        }
        updated
    }

    /// Roster players that are in neither team, e.g. added after the last
    /// balance. Roster order is kept.
    pub fn waiting_players<'a>(&self, roster: &'a [Player]) -> Vec<&'a Player> {
        let placed: HashSet<&PlayerId> = self.players().map(|p| p.id()).collect();
        roster.iter().filter(|p| !placed.contains(p.id())).collect()
    }
}
