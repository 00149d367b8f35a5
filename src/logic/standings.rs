//! Standings: ranked players derived from the match log.

use crate::models::{GameMatch, Player, PlayerId, ScoringRules, Standing};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Rank players by replaying every completed match in the log.
///
/// The stored counters on [`Player`] are ignored so the ranking can never drift
/// from the actual results. Order: score desc, points-for desc,
/// points-against asc, twenties desc. Anything still equal keeps roster order.
pub fn compute_standings(
    players: &[Player],
    match_log: &[GameMatch],
    rules: &ScoringRules,
) -> Vec<Standing> {
    let mut standings: Vec<Standing> = players.iter().map(Standing::for_player).collect();
    let index: HashMap<PlayerId, usize> = players
        .iter()
        .enumerate()
        .map(|(i, p)| (p.id, i))
        .collect();

    for m in match_log.iter().filter(|m| m.completed) {
        if m.is_bye {
            for pid in &m.team_1 {
                if let Some(&i) = index.get(pid) {
                    let s = &mut standings[i];
                    s.ties = s.ties.saturating_add(1);
                    s.byes = s.byes.saturating_add(1);
                    s.points_for = s.points_for.saturating_add(rules.bye_points_for);
                    s.points_against = s.points_against.saturating_add(rules.bye_points_against);
                }
            }
            continue;
        }
        let (Some((team_1, team_2)), Some(score_1), Some(score_2)) = (m.teams(), m.score_1, m.score_2)
        else {
            continue;
        };
        let sides = [
            (team_1, score_1, score_2, m.twenties_1),
            (team_2, score_2, score_1, m.twenties_2),
        ];
        for (team, own, other, twenties) in sides {
            for pid in team {
                let Some(&i) = index.get(pid) else { continue };
                let s = &mut standings[i];
                match own.cmp(&other) {
                    Ordering::Greater => s.wins = s.wins.saturating_add(1),
                    Ordering::Less => s.losses = s.losses.saturating_add(1),
                    Ordering::Equal => s.ties = s.ties.saturating_add(1),
                }
                s.points_for = s.points_for.saturating_add(own);
                s.points_against = s.points_against.saturating_add(other);
                s.twenties = s.twenties.saturating_add(twenties);
            }
        }
    }

    for s in &mut standings {
        s.score = s
            .wins
            .saturating_mul(rules.points_per_win)
            .saturating_add(s.ties.saturating_mul(rules.points_per_tie));
    }
    standings.sort_by(compare_standings);
    standings
}

fn compare_standings(a: &Standing, b: &Standing) -> Ordering {
    b.score
        .cmp(&a.score)
        .then(b.points_for.cmp(&a.points_for))
        .then(a.points_against.cmp(&b.points_against))
        .then(b.twenties.cmp(&a.twenties))
}

/// Player id -> position in the ranked standings (0 = best).
pub(crate) fn rank_index(standings: &[Standing]) -> HashMap<PlayerId, usize> {
    standings
        .iter()
        .enumerate()
        .map(|(rank, s)| (s.player_id, rank))
        .collect()
}

/// Sort ids best-ranked first. Ids missing from the standings go last.
pub(crate) fn sort_by_rank(ids: &mut [PlayerId], ranks: &HashMap<PlayerId, usize>) {
    ids.sort_by_key(|id| ranks.get(id).copied().unwrap_or(usize::MAX));
}
