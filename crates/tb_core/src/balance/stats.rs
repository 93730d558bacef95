//! Team statistics shared by the distribution, refinement and result layers.

use crate::models::player::Player;

pub fn total_stars(players: &[Player]) -> u32 {
    players.iter().map(|p| p.stars() as u32).sum()
}

/// Mean rating rounded to one decimal; an empty team averages 0.
pub fn average_skill(players: &[Player]) -> f64 {
    if players.is_empty() {
        return 0.0;
    }
    let mean = total_stars(players) as f64 / players.len() as f64;
    round_to_tenth(mean)
}

/// Absolute difference between the two teams' rating sums.
pub fn cost(team_a: &[Player], team_b: &[Player]) -> u32 {
    total_stars(team_a).abs_diff(total_stars(team_b))
}

/// Half away from zero, one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
