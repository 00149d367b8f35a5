//! Partner assignment: form 2-player teams for a round.

use crate::logic::greedy::pair_in_order;
use crate::logic::standings::{rank_index, sort_by_rank};
use crate::models::{PairingEvent, PairingLog, PartnerHistory, PlayerId, Standing};
use rand::seq::SliceRandom;
use rand::Rng;

/// Form teams from the players left after byes.
///
/// Round 1 shuffles and pairs neighbours. Later rounds go best-ranked first and
/// give each player the nearest lower-ranked player they have not partnered yet,
/// falling back to a repeat (logged) when nobody fresh is left.
pub fn assign_partners<R: Rng>(
    playing: &[PlayerId],
    standings: &[Standing],
    round: u32,
    history: &PartnerHistory,
    rng: &mut R,
    log: &mut PairingLog,
) -> Vec<[PlayerId; 2]> {
    let mut ordered = playing.to_vec();
    if round <= 1 {
        ordered.shuffle(rng);
        return ordered.chunks_exact(2).map(|c| [c[0], c[1]]).collect();
    }

    sort_by_rank(&mut ordered, &rank_index(standings));
    let (pairs, leftover) = pair_in_order(ordered, |a, b| history.has_partnered(*a, *b));
    if let Some(pid) = leftover {
        log::warn!("Round {}: {} left without a partner", round, pid);
    }

    pairs
        .into_iter()
        .map(|p| {
            if p.forced {
                log::warn!("Round {}: forced repeat partnership {} + {}", round, p.first, p.second);
                log.push(PairingEvent::ForcedPartnerRepeat {
                    player_1: p.first,
                    player_2: p.second,
                });
            }
            [p.first, p.second]
        })
        .collect()
}
