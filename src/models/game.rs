//! Round match, table and team key types.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a round match.
pub type MatchId = Uuid;

/// Canonical key for a 2-player team: ids sorted and joined with `_`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamKey(String);

impl TeamKey {
    pub fn new(ids: &[PlayerId]) -> Self {
        let mut sorted = ids.to_vec();
        sorted.sort();
        let parts: Vec<String> = sorted.iter().map(|id| id.to_string()).collect();
        Self(parts.join("_"))
    }
}

impl fmt::Display for TeamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A playing table. Tables are handed out in `(order, name)` order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub order: u32,
}

/// A single round-robin match: two doubles teams, or one player on a bye.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub round: u32,
    /// Two player ids, or one for a bye.
    pub team_1: Vec<PlayerId>,
    /// None for a bye.
    pub team_2: Option<Vec<PlayerId>>,
    /// None until played.
    pub score_1: Option<u32>,
    pub score_2: Option<u32>,
    #[serde(default)]
    pub twenties_1: u32,
    #[serde(default)]
    pub twenties_2: u32,
    #[serde(default)]
    pub table: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub is_bye: bool,
}

impl GameMatch {
    /// New unplayed match between two teams.
    pub fn new(round: u32, team_1: [PlayerId; 2], team_2: [PlayerId; 2], table: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            round,
            team_1: team_1.to_vec(),
            team_2: Some(team_2.to_vec()),
            score_1: None,
            score_2: None,
            twenties_1: 0,
            twenties_2: 0,
            table,
            completed: false,
            is_bye: false,
        }
    }

    /// Bye match: completed on creation with the nominal bye score.
    pub fn bye(round: u32, player: PlayerId, points_for: u32, points_against: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            round,
            team_1: vec![player],
            team_2: None,
            score_1: Some(points_for),
            score_2: Some(points_against),
            twenties_1: 0,
            twenties_2: 0,
            table: None,
            completed: true,
            is_bye: true,
        }
    }

    /// Record a played score (what the score-entry side does).
    pub fn record_score(&mut self, score_1: u32, score_2: u32, twenties_1: u32, twenties_2: u32) {
        self.score_1 = Some(score_1);
        self.score_2 = Some(score_2);
        self.twenties_1 = twenties_1;
        self.twenties_2 = twenties_2;
        self.completed = true;
    }

    /// Both teams of a regular 2v2 match.
    pub fn teams(&self) -> Option<(&[PlayerId], &[PlayerId])> {
        if self.is_bye {
            return None;
        }
        self.team_2
            .as_deref()
            .map(|team_2| (self.team_1.as_slice(), team_2))
    }

    pub fn involves(&self, player: PlayerId) -> bool {
        self.team_1.contains(&player)
            || self.team_2.as_ref().is_some_and(|t| t.contains(&player))
    }
}
