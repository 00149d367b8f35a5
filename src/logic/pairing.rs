//! Match pairing: put teams against each other and hand out tables.

use crate::logic::greedy::pair_in_order;
use crate::models::{MatchHistory, PairingEvent, PairingLog, PlayerId, Standing, Table, TeamKey};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// Pair teams into matches.
///
/// Round 1 shuffles. Later rounds sort teams by (summed wins, summed point
/// differential) descending and avoid rematches the same way partner
/// assignment avoids repeat partners.
pub fn pair_teams<R: Rng>(
    teams: &[[PlayerId; 2]],
    standings: &[Standing],
    round: u32,
    history: &MatchHistory,
    rng: &mut R,
    log: &mut PairingLog,
) -> Vec<([PlayerId; 2], [PlayerId; 2])> {
    let mut ordered = teams.to_vec();
    if round <= 1 {
        ordered.shuffle(rng);
        return ordered.chunks_exact(2).map(|c| (c[0], c[1])).collect();
    }

    let by_id: HashMap<PlayerId, &Standing> = standings.iter().map(|s| (s.player_id, s)).collect();
    let strength = |team: &[PlayerId; 2]| {
        team.iter().fold((0u32, 0i64), |(wins, diff), pid| match by_id.get(pid) {
            Some(s) => (wins + s.wins, diff + s.point_differential()),
            None => (wins, diff),
        })
    };
    ordered.sort_by(|a, b| strength(b).cmp(&strength(a)));

    let (pairs, leftover) = pair_in_order(ordered, |a, b| {
        history.have_met(&TeamKey::new(a), &TeamKey::new(b))
    });
    if let Some(team) = leftover {
        log::warn!("Round {}: team {} left without an opponent", round, TeamKey::new(&team));
    }

    pairs
        .into_iter()
        .map(|p| {
            if p.forced {
                let (team_1, team_2) = (TeamKey::new(&p.first), TeamKey::new(&p.second));
                log::warn!("Round {}: forced rematch {} vs {}", round, team_1, team_2);
                log.push(PairingEvent::ForcedRematch { team_1, team_2 });
            }
            (p.first, p.second)
        })
        .collect()
}

/// Table for each of `match_count` matches, in `(order, name)` order. Matches past the last table get none.
pub fn assign_tables(match_count: usize, tables: &[Table]) -> Vec<Option<String>> {
    let mut sorted: Vec<&Table> = tables.iter().collect();
    sorted.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)));
    (0..match_count)
        .map(|i| sorted.get(i).map(|t| t.id.clone()))
        .collect()
}
