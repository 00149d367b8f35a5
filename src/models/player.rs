//! Player and Standing data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in matches, histories and brackets).
pub type PlayerId = Uuid;

/// A player in the tournament.
///
/// The cumulative counters are owned by the score-entry side (see
/// [`apply_match_result`](crate::apply_match_result)). The engine only reads them.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
    #[serde(default)]
    pub points_for: u32,
    #[serde(default)]
    pub points_against: u32,
    /// Secondary tiebreak counter.
    #[serde(default)]
    pub twenties: u32,
    /// Rounds this player has sat out.
    #[serde(default)]
    pub byes: u32,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Player {
    /// Create a new active player with the given name. Counters start at zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            wins: 0,
            losses: 0,
            ties: 0,
            points_for: 0,
            points_against: 0,
            twenties: 0,
            byes: 0,
            active: true,
        }
    }
}

/// One row of the ranked standings, derived fresh from the match log.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: u32,
    pub points_against: u32,
    pub twenties: u32,
    /// Byes found in the match log.
    pub byes: u32,
    /// wins × points_per_win + ties × points_per_tie.
    pub score: u32,
}

impl Standing {
    pub fn for_player(p: &Player) -> Self {
        Self {
            player_id: p.id,
            name: p.name.clone(),
            ..Self::default()
        }
    }

    pub fn point_differential(&self) -> i64 {
        i64::from(self.points_for) - i64::from(self.points_against)
    }
}
