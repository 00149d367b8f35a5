//! Bracket score submission and winner/loser propagation along the match links.

use crate::models::{BracketMatch, BracketRound, EngineError, PlayerId, TeamKey};

/// Record a bracket result and push the teams downstream.
///
/// The winner is the higher score; callers must reject ties beforehand (a tie
/// goes to team 2). The winner fills the slot of `next_match` whose source names
/// this match, and the loser fills the matching slot of any third-place match
/// fed by it. Re-submitting overwrites those slots again but does not reset
/// downstream matches that were already played.
pub fn submit_bracket_score(
    matches: &mut [BracketMatch],
    match_id: &str,
    score_1: u32,
    score_2: u32,
    twenties_1: u32,
    twenties_2: u32,
) -> Result<(), EngineError> {
    let m = matches
        .iter_mut()
        .find(|m| m.id == match_id)
        .ok_or_else(|| EngineError::BracketMatchNotFound(match_id.to_string()))?;
    let (Some(team_1), Some(team_2)) = (m.team_1, m.team_2) else {
        return Err(EngineError::BracketMatchNotReady(match_id.to_string()));
    };

    let (winner, loser) = if score_1 > score_2 {
        (team_1, team_2)
    } else {
        (team_2, team_1)
    };
    if m.completed {
        log::info!("Bracket match {} edited; re-propagating", match_id);
    }
    m.score_1 = Some(score_1);
    m.score_2 = Some(score_2);
    m.twenties_1 = twenties_1;
    m.twenties_2 = twenties_2;
    m.completed = true;
    m.winner = Some(TeamKey::new(&winner));
    let next = m.next_match.clone();

    if let Some(next_id) = next {
        if let Some(target) = matches.iter_mut().find(|t| t.id == next_id) {
            place_team(target, match_id, winner);
        }
    }
    for target in matches
        .iter_mut()
        .filter(|t| t.round == BracketRound::ThirdPlace)
    {
        place_team(target, match_id, loser);
    }

    Ok(())
}

/// Write `team` into whichever slot of `target` is sourced from `source_id`.
fn place_team(target: &mut BracketMatch, source_id: &str, team: [PlayerId; 2]) {
    let slot = if target.source_1.as_deref() == Some(source_id) {
        &mut target.team_1
    } else if target.source_2.as_deref() == Some(source_id) {
        &mut target.team_2
    } else {
        return;
    };
    if target.completed && *slot != Some(team) {
        log::warn!(
            "Bracket match {} was already played with a different team from {}; not reset",
            target.id,
            source_id
        );
    }
    *slot = Some(team);
    log::debug!("{} -> {} ({})", source_id, target.id, TeamKey::new(&team));
}
