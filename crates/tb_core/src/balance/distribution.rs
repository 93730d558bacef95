//! Initial assignment of grouped players to the two teams.

use super::grouping::PositionGroups;
use crate::models::Player;

/// Working pair of team lists before names and averages are attached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distribution {
    pub team_a: Vec<Player>,
    pub team_b: Vec<Player>,
}

impl Distribution {
    pub fn size_gap(&self) -> usize {
        self.team_a.len().abs_diff(self.team_b.len())
    }
}

/// Greedy placement in spine order.
///
/// Each player goes to the team with fewer members; on equal size, to the team
/// with the lower (or equal) rating sum, team A winning exact ties.
pub fn greedy(groups: &PositionGroups) -> Distribution {
    let mut dist = Distribution::default();
    let mut stars_a: u32 = 0;
    let mut stars_b: u32 = 0;

    for player in groups.spine_order() {
        let to_a = match dist.team_a.len().cmp(&dist.team_b.len()) {
            std::cmp::Ordering::Less => true,
            std::cmp::Ordering::Greater => false,
            std::cmp::Ordering::Equal => stars_a <= stars_b,
        };

        if to_a {
            stars_a += player.stars() as u32;
            dist.team_a.push(player.clone());
        } else {
            stars_b += player.stars() as u32;
            dist.team_b.push(player.clone());
        }
    }

    dist
}

/// Plain A, B, A, B... over the spine order, ignoring ratings.
pub fn alternating(groups: &PositionGroups) -> Distribution {
    let mut dist = Distribution::default();
    for (i, player) in groups.spine_order().enumerate() {
        if i % 2 == 0 {
            dist.team_a.push(player.clone());
        } else {
            dist.team_b.push(player.clone());
        }
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::stats;
    use crate::models::Position;

    fn player(name: &str, position: Position, stars: u8) -> Player {
        Player::create(name, position, stars).unwrap()
    }

    #[test]
    fn test_greedy_empty_roster() {
        let dist = greedy(&PositionGroups::default());
        assert!(dist.team_a.is_empty());
        assert!(dist.team_b.is_empty());
    }

    #[test]
    fn test_greedy_single_player_goes_to_a() {
        let groups = PositionGroups::from_players(&[player("Solo", Position::MID, 4)]);
        let dist = greedy(&groups);
        assert_eq!(dist.team_a.len(), 1);
        assert!(dist.team_b.is_empty());
    }

    #[test]
    fn test_greedy_follows_count_then_stars() {
        // unshuffled order: GK 5, GK 2, MID 1, MID 4, MID 3
        let groups = PositionGroups::from_players(&[
            player("G1", Position::GK, 5),
            player("G2", Position::GK, 2),
            player("M1", Position::MID, 1),
            player("M2", Position::MID, 4),
            player("M3", Position::MID, 3),
        ]);
        let dist = greedy(&groups);

        // G1 -> A (tie, A preferred), G2 -> B (fewer), M1 -> B (equal size, B lower 2 < 5),
        // M2 -> A (fewer), M3 -> B (equal size, B 3 < A 9)
        let names = |team: &[Player]| team.iter().map(|p| p.name().to_string()).collect::<Vec<_>>();
        assert_eq!(names(&dist.team_a), vec!["G1", "M2"]);
        assert_eq!(names(&dist.team_b), vec!["G2", "M1", "M3"]);
    }

    #[test]
    fn test_greedy_goalkeepers_placed_first() {
        let groups = PositionGroups::from_players(&[
            player("F1", Position::FWD, 5),
            player("G1", Position::GK, 1),
        ]);
        let dist = greedy(&groups);
        assert_eq!(dist.team_a[0].name(), "G1");
        assert_eq!(dist.team_b[0].name(), "F1");
    }

    #[test]
    fn test_greedy_size_balance() {
        let roster: Vec<Player> = (0..11)
            .map(|i| {
                let position = Position::SPINE[i % 4];
                player(&format!("P{}", i), position, (i % 5) as u8 + 1)
            })
            .collect();
        let dist = greedy(&PositionGroups::from_players(&roster));
        assert!(dist.size_gap() <= 1);
        assert_eq!(dist.team_a.len() + dist.team_b.len(), 11);
    }

    #[test]
    fn test_alternating() {
        let groups = PositionGroups::from_players(&[
            player("G1", Position::GK, 5),
            player("D1", Position::DEF, 5),
            player("D2", Position::DEF, 1),
        ]);
        let dist = alternating(&groups);
        assert_eq!(dist.team_a.len(), 2);
        assert_eq!(dist.team_b.len(), 1);
        assert_eq!(stats::total_stars(&dist.team_a), 6);
        assert_eq!(dist.team_b[0].name(), "D1");
    }
}
