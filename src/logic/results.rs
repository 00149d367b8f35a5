//! Applying a completed round match to the players' cumulative counters.

use crate::models::{EngineError, GameMatch, Player, PlayerId, ScoringRules};
use std::cmp::Ordering;

/// Fold one completed match into the players' stored counters.
///
/// This is the score-entry side of the contract: the pairing engine never calls
/// it, but bye fairness reads the `byes` counter it maintains.
/// Every player is looked up before anything changes, so on `Err` the roster is untouched.
pub fn apply_match_result(
    players: &mut [Player],
    game: &GameMatch,
    rules: &ScoringRules,
) -> Result<(), EngineError> {
    if !game.completed {
        return Err(EngineError::IncompleteResult);
    }

    if game.is_bye {
        let indices = player_indices(players, &game.team_1)?;
        for i in indices {
            let p = &mut players[i];
            p.ties = p.ties.saturating_add(1);
            p.byes = p.byes.saturating_add(1);
            p.points_for = p.points_for.saturating_add(rules.bye_points_for);
            p.points_against = p.points_against.saturating_add(rules.bye_points_against);
        }
        return Ok(());
    }

    let (team_1, team_2) = game.teams().ok_or(EngineError::IncompleteResult)?;
    let (score_1, score_2) = match (game.score_1, game.score_2) {
        (Some(a), Some(b)) => (a, b),
        _ => return Err(EngineError::IncompleteResult),
    };

    let sides = [
        (player_indices(players, team_1)?, score_1, score_2, game.twenties_1),
        (player_indices(players, team_2)?, score_2, score_1, game.twenties_2),
    ];
    for (indices, own, other, twenties) in sides {
        for i in indices {
            let p = &mut players[i];
            match own.cmp(&other) {
                Ordering::Greater => p.wins = p.wins.saturating_add(1),
                Ordering::Less => p.losses = p.losses.saturating_add(1),
                Ordering::Equal => p.ties = p.ties.saturating_add(1),
            }
            p.points_for = p.points_for.saturating_add(own);
            p.points_against = p.points_against.saturating_add(other);
            p.twenties = p.twenties.saturating_add(twenties);
        }
    }
    Ok(())
}

fn player_indices(players: &[Player], ids: &[PlayerId]) -> Result<Vec<usize>, EngineError> {
    ids.iter()
        .map(|&id| {
            players
                .iter()
                .position(|p| p.id == id)
                .ok_or(EngineError::PlayerNotFound(id))
        })
        .collect()
}
