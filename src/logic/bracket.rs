//! Bracket construction: seed pool teams into a linked single-elimination tree.

use crate::models::{
    BracketMatch, BracketMatchId, BracketRound, BracketShape, EngineError, Player, PlayerId,
    PoolBracketConfig,
};
use std::collections::HashSet;

/// Build the bracket matches for every pool that asks for one.
///
/// Matches come out pool by pool, earliest round first, with the third-place
/// match (if any) last. Every match carries its forward and backward links, so
/// score propagation never needs to know the shape.
pub fn build_bracket(
    pools: &[PoolBracketConfig],
    players: &[Player],
) -> Result<Vec<BracketMatch>, EngineError> {
    let roster: HashSet<PlayerId> = players.iter().map(|p| p.id).collect();
    let mut matches = Vec::new();

    for pool in pools {
        if pool.shape == BracketShape::None {
            continue;
        }
        let teams = pool_teams(pool)?;
        if let Some(&missing) = teams.iter().flatten().find(|id| !roster.contains(*id)) {
            return Err(EngineError::PlayerNotFound(missing));
        }
        let expected = pool.shape.team_count();
        if teams.len() != expected {
            return Err(EngineError::WrongPoolSize {
                pool: pool.pool_id.clone(),
                expected,
                actual: teams.len(),
            });
        }

        let mut tree = build_tree(&pool.pool_id, &teams)?;
        if pool.third_place {
            match third_place_match(&pool.pool_id, &tree) {
                Some(m) => tree.push(m),
                None => log::warn!(
                    "Pool {}: third-place match needs semifinals; ignored",
                    pool.pool_id
                ),
            }
        }
        log::info!(
            "Pool {}: built {:?} bracket with {} match(es)",
            pool.pool_id,
            pool.shape,
            tree.len()
        );
        matches.extend(tree);
    }

    Ok(matches)
}

/// Manual teams if given, else snake seeding over the ranked player list.
fn pool_teams(pool: &PoolBracketConfig) -> Result<Vec<[PlayerId; 2]>, EngineError> {
    if let Some(manual) = &pool.manual_teams {
        return Ok(manual.clone());
    }
    let expected = pool.shape.player_count();
    if pool.player_ids.len() != expected {
        return Err(EngineError::WrongPoolSize {
            pool: pool.pool_id.clone(),
            expected: pool.shape.team_count(),
            actual: pool.player_ids.len() / 2,
        });
    }
    Ok(snake_teams(&pool.player_ids))
}

/// Pair rank i with rank (n - 1 - i): best with worst, second with second-worst, ...
pub fn snake_teams(ranked: &[PlayerId]) -> Vec<[PlayerId; 2]> {
    let n = ranked.len();
    (0..n / 2).map(|i| [ranked[i], ranked[n - 1 - i]]).collect()
}

/// Seed positions for the first round, 0-based: 2 -> [0, 1], 4 -> [0, 3, 1, 2],
/// 8 -> [0, 7, 3, 4, 1, 6, 2, 5]. Consecutive entries meet.
fn seed_order(team_count: usize) -> Vec<usize> {
    let mut order = vec![0];
    while order.len() < team_count {
        let size = order.len() * 2;
        order = order.iter().flat_map(|&s| [s, size - 1 - s]).collect();
    }
    order
}

fn build_tree(pool_id: &str, teams: &[[PlayerId; 2]]) -> Result<Vec<BracketMatch>, EngineError> {
    let team_count = teams.len();
    if team_count < 2 || !team_count.is_power_of_two() {
        return Err(EngineError::UnsupportedBracket(team_count));
    }

    let round_tag = |size: usize| {
        BracketRound::for_round_size(size).ok_or(EngineError::UnsupportedBracket(team_count))
    };

    let mut all: Vec<BracketMatch> = Vec::with_capacity(team_count);
    let order = seed_order(team_count);
    let first_round = round_tag(team_count / 2)?;
    let mut previous: Vec<usize> = Vec::new();
    for (slot, seeds) in order.chunks_exact(2).enumerate() {
        let mut m = BracketMatch::new(pool_id, first_round, slot as u32 + 1);
        m.team_1 = Some(teams[seeds[0]]);
        m.team_2 = Some(teams[seeds[1]]);
        previous.push(all.len());
        all.push(m);
    }

    while previous.len() > 1 {
        let tag = round_tag(previous.len() / 2)?;
        let mut current = Vec::with_capacity(previous.len() / 2);
        for (slot, feeders) in previous.chunks_exact(2).enumerate() {
            let mut m = BracketMatch::new(pool_id, tag, slot as u32 + 1);
            m.source_1 = Some(all[feeders[0]].id.clone());
            m.source_2 = Some(all[feeders[1]].id.clone());
            for &f in feeders {
                all[f].next_match = Some(m.id.clone());
            }
            current.push(all.len());
            all.push(m);
        }
        previous = current;
    }

    Ok(all)
}

/// Third-place match fed by the losers of the two semifinals.
fn third_place_match(pool_id: &str, tree: &[BracketMatch]) -> Option<BracketMatch> {
    let semis: Vec<BracketMatchId> = tree
        .iter()
        .filter(|m| m.round == BracketRound::Semifinal)
        .map(|m| m.id.clone())
        .collect();
    let [semi_a, semi_b] = <[BracketMatchId; 2]>::try_from(semis).ok()?;
    let mut m = BracketMatch::new(pool_id, BracketRound::ThirdPlace, 1);
    m.source_1 = Some(semi_a);
    m.source_2 = Some(semi_b);
    Some(m)
}
