//! Round options, scoring rules, and the result of generating a round.

use crate::models::game::{GameMatch, TeamKey};
use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// How sit-outs are picked.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ByeMode {
    /// Random in round 1; afterwards the lowest-ranked player among those with the fewest byes.
    #[default]
    Fair,
    /// Uniform random every round.
    Random,
}

/// Points used when deriving standings.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoringRules {
    #[serde(default = "default_points_per_win")]
    pub points_per_win: u32,
    #[serde(default = "default_points_per_tie")]
    pub points_per_tie: u32,
    /// Nominal points-for credited on a bye (a bye counts as a tie).
    #[serde(default = "default_bye_points")]
    pub bye_points_for: u32,
    #[serde(default = "default_bye_points")]
    pub bye_points_against: u32,
}

fn default_points_per_win() -> u32 {
    2
}

fn default_points_per_tie() -> u32 {
    1
}

fn default_bye_points() -> u32 {
    4
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            points_per_win: default_points_per_win(),
            points_per_tie: default_points_per_tie(),
            bye_points_for: default_bye_points(),
            bye_points_against: default_bye_points(),
        }
    }
}

/// Per-call options for [`generate_round_pairings`](crate::generate_round_pairings).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundOptions {
    #[serde(default)]
    pub assign_tables: bool,
    #[serde(default)]
    pub bye_mode: ByeMode,
    #[serde(default)]
    pub scoring: ScoringRules,
}

/// Something noteworthy that happened while pairing a round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PairingEvent {
    Bye { player_id: PlayerId, previous_byes: u32 },
    /// Fewer than 4 players were left, so all of them sit out.
    DegenerateByes { player_ids: Vec<PlayerId> },
    /// No unused partner was available further down the order.
    ForcedPartnerRepeat { player_1: PlayerId, player_2: PlayerId },
    /// No fresh opponent was available further down the order.
    ForcedRematch { team_1: TeamKey, team_2: TeamKey },
}

/// Trace of one pairing call. Built per call and returned with the result.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PairingLog {
    pub events: Vec<PairingEvent>,
}

impl PairingLog {
    pub fn push(&mut self, event: PairingEvent) {
        self.events.push(event);
    }

    pub fn forced_partner_repeats(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, PairingEvent::ForcedPartnerRepeat { .. }))
            .count()
    }

    pub fn forced_rematches(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, PairingEvent::ForcedRematch { .. }))
            .count()
    }
}

/// Output of one round: new matches (regular and bye), who sat out, and the trace.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundPairings {
    pub matches: Vec<GameMatch>,
    pub byes: Vec<PlayerId>,
    pub log: PairingLog,
}
