//! Partner and matchup history, replayed from the match log.

use crate::models::game::{GameMatch, TeamKey};
use crate::models::player::PlayerId;
use std::collections::{HashMap, HashSet};

/// Who has partnered with whom. Only grows as matches are replayed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PartnerHistory {
    partners: HashMap<PlayerId, HashSet<PlayerId>>,
}

impl PartnerHistory {
    /// Replay every non-bye match in the log.
    pub fn from_matches(matches: &[GameMatch]) -> Self {
        let mut history = Self::default();
        for m in matches {
            if let Some((team_1, team_2)) = m.teams() {
                history.record_team(team_1);
                history.record_team(team_2);
            }
        }
        history
    }

    pub fn record_team(&mut self, team: &[PlayerId]) {
        for &a in team {
            for &b in team {
                if a != b {
                    self.partners.entry(a).or_default().insert(b);
                }
            }
        }
    }

    pub fn has_partnered(&self, a: PlayerId, b: PlayerId) -> bool {
        self.partners.get(&a).is_some_and(|set| set.contains(&b))
    }
}

/// Which team keys have faced which. Only grows as matches are replayed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MatchHistory {
    opponents: HashMap<TeamKey, HashSet<TeamKey>>,
}

impl MatchHistory {
    /// Replay every non-bye match in the log.
    pub fn from_matches(matches: &[GameMatch]) -> Self {
        let mut history = Self::default();
        for m in matches {
            if let Some((team_1, team_2)) = m.teams() {
                history.record(TeamKey::new(team_1), TeamKey::new(team_2));
            }
        }
        history
    }

    pub fn record(&mut self, a: TeamKey, b: TeamKey) {
        self.opponents.entry(a.clone()).or_default().insert(b.clone());
        self.opponents.entry(b).or_default().insert(a);
    }

    pub fn have_met(&self, a: &TeamKey, b: &TeamKey) -> bool {
        self.opponents.get(a).is_some_and(|set| set.contains(b))
    }
}
