//! Round generation: byes, then teams, then matches.

use crate::logic::byes::select_byes;
use crate::logic::pairing::{assign_tables, pair_teams};
use crate::logic::partners::assign_partners;
use crate::logic::standings::compute_standings;
use crate::models::{
    GameMatch, MatchHistory, PairingLog, PartnerHistory, Player, RoundOptions, RoundPairings, Table,
};
use rand::Rng;

/// Generate the matches for `round`.
///
/// 1. Rank every player from the match log.
/// 2. Take active players and pick byes until the rest divides by 4.
/// 3. Form teams, avoiding repeat partners (round 2+).
/// 4. Pair teams, avoiding rematches (round 2+), and attach tables if enabled.
///
/// Returns regular matches followed by one completed bye match per sit-out.
/// Nothing is mutated; the caller stores and broadcasts the result.
pub fn generate_round_pairings<R: Rng>(
    players: &[Player],
    match_log: &[GameMatch],
    round: u32,
    tables: &[Table],
    options: &RoundOptions,
    rng: &mut R,
) -> RoundPairings {
    let mut log = PairingLog::default();
    let standings = compute_standings(players, match_log, &options.scoring);
    let active: Vec<Player> = players.iter().filter(|p| p.active).cloned().collect();

    let selection = select_byes(&active, &standings, round, options.bye_mode, rng, &mut log);

    let partner_history = PartnerHistory::from_matches(match_log);
    let teams = assign_partners(&selection.playing, &standings, round, &partner_history, rng, &mut log);

    let match_history = MatchHistory::from_matches(match_log);
    let pairs = pair_teams(&teams, &standings, round, &match_history, rng, &mut log);

    let table_ids = if options.assign_tables {
        assign_tables(pairs.len(), tables)
    } else {
        vec![None; pairs.len()]
    };

    let mut matches: Vec<GameMatch> = pairs
        .into_iter()
        .zip(table_ids)
        .map(|((team_1, team_2), table)| GameMatch::new(round, team_1, team_2, table))
        .collect();
    matches.extend(selection.byes.iter().map(|&pid| {
        GameMatch::bye(
            round,
            pid,
            options.scoring.bye_points_for,
            options.scoring.bye_points_against,
        )
    }));

    log::info!(
        "Round {}: {} match(es), {} bye(s), {} forced repeat(s)",
        round,
        matches.len() - selection.byes.len(),
        selection.byes.len(),
        log.forced_partner_repeats() + log.forced_rematches()
    );

    RoundPairings {
        matches,
        byes: selection.byes,
        log,
    }
}
