//! Elimination bracket: pool configuration, round tags and linked bracket matches.

use crate::models::game::TeamKey;
use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// Bracket match ids are readable and stable: `{pool}-{round}-{slot}`.
pub type BracketMatchId = String;

/// Requested bracket for a pool.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketShape {
    #[default]
    None,
    /// 4 players, 2 teams.
    Final,
    /// 8 players, 4 teams.
    Semifinals,
    /// 16 players, 8 teams.
    Quarterfinals,
}

impl BracketShape {
    pub fn team_count(self) -> usize {
        match self {
            BracketShape::None => 0,
            BracketShape::Final => 2,
            BracketShape::Semifinals => 4,
            BracketShape::Quarterfinals => 8,
        }
    }

    pub fn player_count(self) -> usize {
        self.team_count() * 2
    }
}

/// Stage label of a bracket match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketRound {
    Quarterfinal,
    Semifinal,
    Final,
    ThirdPlace,
}

impl BracketRound {
    /// Tag for a main-tree round holding `matches` matches.
    pub fn for_round_size(matches: usize) -> Option<Self> {
        match matches {
            1 => Some(BracketRound::Final),
            2 => Some(BracketRound::Semifinal),
            4 => Some(BracketRound::Quarterfinal),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BracketRound::Quarterfinal => "quarterfinal",
            BracketRound::Semifinal => "semifinal",
            BracketRound::Final => "final",
            BracketRound::ThirdPlace => "third_place",
        }
    }
}

/// One pool's bracket request.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PoolBracketConfig {
    pub pool_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub shape: BracketShape,
    /// Best standing first.
    pub player_ids: Vec<PlayerId>,
    #[serde(default)]
    pub third_place: bool,
    /// Replaces snake seeding when present. Best seed first.
    #[serde(default)]
    pub manual_teams: Option<Vec<[PlayerId; 2]>>,
}

/// A single elimination match, linked to the matches around it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketMatch {
    pub id: BracketMatchId,
    pub pool_id: String,
    pub round: BracketRound,
    /// 1-based position within its round.
    pub slot: u32,
    /// None until decided (TBD).
    pub team_1: Option<[PlayerId; 2]>,
    pub team_2: Option<[PlayerId; 2]>,
    pub score_1: Option<u32>,
    pub score_2: Option<u32>,
    #[serde(default)]
    pub twenties_1: u32,
    #[serde(default)]
    pub twenties_2: u32,
    #[serde(default)]
    pub completed: bool,
    pub winner: Option<TeamKey>,
    /// Where the winner goes.
    pub next_match: Option<BracketMatchId>,
    /// Match feeding team_1.
    pub source_1: Option<BracketMatchId>,
    /// Match feeding team_2.
    pub source_2: Option<BracketMatchId>,
}

impl BracketMatch {
    pub fn new(pool_id: &str, round: BracketRound, slot: u32) -> Self {
        Self {
            id: format!("{}-{}-{}", pool_id, round.as_str(), slot),
            pool_id: pool_id.to_string(),
            round,
            slot,
            team_1: None,
            team_2: None,
            score_1: None,
            score_2: None,
            twenties_1: 0,
            twenties_2: 0,
            completed: false,
            winner: None,
            next_match: None,
            source_1: None,
            source_2: None,
        }
    }
}
