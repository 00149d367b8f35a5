//! Bye selection: who sits out so the rest splits into 2v2 matches.

use crate::logic::standings::{rank_index, sort_by_rank};
use crate::models::{ByeMode, PairingEvent, PairingLog, Player, PlayerId, Standing};
use rand::Rng;
use std::collections::HashMap;

/// Players split into those who play this round and those who sit out.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ByeSelection {
    pub playing: Vec<PlayerId>,
    pub byes: Vec<PlayerId>,
}

/// Remove players one at a time until the remaining count is divisible by 4.
///
/// Round 1 (and [`ByeMode::Random`]) draws uniformly. Later rounds scan from the
/// worst-ranked player upward and take the first one holding the minimum bye
/// count, so nobody gets a second bye before everyone has had one.
/// With fewer than 4 players everyone sits out.
///
/// Bye counts come from each [`Player::byes`], not the log: callers must keep it
/// current (see [`apply_match_result`](crate::apply_match_result)).
pub fn select_byes<R: Rng>(
    players: &[Player],
    standings: &[Standing],
    round: u32,
    mode: ByeMode,
    rng: &mut R,
    log: &mut PairingLog,
) -> ByeSelection {
    let bye_counts: HashMap<PlayerId, u32> = players.iter().map(|p| (p.id, p.byes)).collect();
    let mut remaining: Vec<PlayerId> = players.iter().map(|p| p.id).collect();

    if remaining.len() < 4 {
        log::warn!(
            "Only {} player(s) available in round {}; all sit out",
            remaining.len(),
            round
        );
        log.push(PairingEvent::DegenerateByes {
            player_ids: remaining.clone(),
        });
        return ByeSelection {
            playing: Vec::new(),
            byes: remaining,
        };
    }

    let by_standing = round > 1 && mode == ByeMode::Fair;
    if by_standing {
        sort_by_rank(&mut remaining, &rank_index(standings));
    }

    let mut byes = Vec::new();
    while remaining.len() % 4 != 0 {
        let idx = if by_standing {
            lowest_ranked_with_fewest_byes(&remaining, &bye_counts)
        } else {
            rng.gen_range(0..remaining.len())
        };
        let pid = remaining.remove(idx);
        let previous_byes = bye_counts.get(&pid).copied().unwrap_or(0);
        log::debug!("Round {}: {} sits out (had {} byes)", round, pid, previous_byes);
        log.push(PairingEvent::Bye {
            player_id: pid,
            previous_byes,
        });
        byes.push(pid);
    }

    ByeSelection {
        playing: remaining,
        byes,
    }
}

/// `ranked` is best first; returns the index of the worst-ranked player with the minimum bye count.
fn lowest_ranked_with_fewest_byes(ranked: &[PlayerId], bye_counts: &HashMap<PlayerId, u32>) -> usize {
    let count = |pid: &PlayerId| bye_counts.get(pid).copied().unwrap_or(0);
    let min = ranked.iter().map(count).min().unwrap_or(0);
    ranked
        .iter()
        .rposition(|pid| count(pid) == min)
        .unwrap_or(ranked.len() - 1)
}
