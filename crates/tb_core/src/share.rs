//! Plain-text lineup for messaging apps.

use crate::models::{MatchResult, Team};

/// Bold team name (`*name*`) followed by one player name per line, team A
/// first, a blank line between teams. The header line always ends in a
/// newline, so an empty team still leaves one.
pub fn share_text(result: &MatchResult) -> String {
    format!("{}\n\n{}", team_block(&result.team_a), team_block(&result.team_b))
}

fn team_block(team: &Team) -> String {
    let names: Vec<&str> = team.players.iter().map(|p| p.name()).collect();
    format!("*{}*\n{}", team.name, names.join("\n"))
}
