pub mod match_result;
pub mod player;
pub mod roster;
pub mod team;

pub use match_result::{MatchResult, TeamSide};
pub use player::{Player, PlayerData, PlayerId, Position, MAX_STARS, MIN_STARS};
pub use roster::Roster;
pub use team::Team;
