//! Integration tests for bracket construction and score propagation.

use doubles_swiss::{
    build_bracket, submit_bracket_score, BracketMatch, BracketRound, BracketShape, EngineError,
    Player, PlayerId, PoolBracketConfig, TeamKey,
};

fn roster(n: usize) -> Vec<Player> {
    (0..n).map(|i| Player::new(format!("P{i}"))).collect()
}

fn pool(players: &[Player], shape: BracketShape, third_place: bool) -> PoolBracketConfig {
    PoolBracketConfig {
        pool_id: "gold".to_string(),
        name: "Gold".to_string(),
        shape,
        player_ids: players.iter().map(|p| p.id).collect(),
        third_place,
        manual_teams: None,
    }
}

fn find<'a>(matches: &'a [BracketMatch], id: &str) -> &'a BracketMatch {
    matches.iter().find(|m| m.id == id).expect("match exists")
}

/// Snake-seeded teams for a ranked roster: [0, n-1], [1, n-2], ...
fn snake(players: &[Player]) -> Vec<[PlayerId; 2]> {
    let n = players.len();
    (0..n / 2).map(|i| [players[i].id, players[n - 1 - i].id]).collect()
}

#[test]
fn final_shape_is_a_single_match_of_the_two_teams() {
    let players = roster(4);
    let matches = build_bracket(&[pool(&players, BracketShape::Final, false)], &players).unwrap();
    let teams = snake(&players);

    assert_eq!(matches.len(), 1);
    let f = &matches[0];
    assert_eq!(f.id, "gold-final-1");
    assert_eq!(f.round, BracketRound::Final);
    assert_eq!(f.team_1, Some(teams[0]));
    assert_eq!(f.team_2, Some(teams[1]));
    assert!(f.next_match.is_none() && f.source_1.is_none() && f.source_2.is_none());
}

#[test]
fn semifinals_with_third_place_links_both_downstream_matches() {
    let players = roster(8);
    let matches = build_bracket(&[pool(&players, BracketShape::Semifinals, true)], &players).unwrap();
    let teams = snake(&players);

    assert_eq!(matches.len(), 4);
    let semi_a = find(&matches, "gold-semifinal-1");
    let semi_b = find(&matches, "gold-semifinal-2");
    let fin = find(&matches, "gold-final-1");
    let third = find(&matches, "gold-third_place-1");

    assert_eq!((semi_a.team_1, semi_a.team_2), (Some(teams[0]), Some(teams[3])));
    assert_eq!((semi_b.team_1, semi_b.team_2), (Some(teams[1]), Some(teams[2])));
    assert_eq!(semi_a.next_match.as_deref(), Some(fin.id.as_str()));
    assert_eq!(semi_b.next_match.as_deref(), Some(fin.id.as_str()));

    assert_eq!(fin.source_1.as_deref(), Some(semi_a.id.as_str()));
    assert_eq!(fin.source_2.as_deref(), Some(semi_b.id.as_str()));
    assert_eq!(third.round, BracketRound::ThirdPlace);
    assert_eq!(third.source_1.as_deref(), Some(semi_a.id.as_str()));
    assert_eq!(third.source_2.as_deref(), Some(semi_b.id.as_str()));
    assert!(fin.team_1.is_none() && third.team_1.is_none());
}

#[test]
fn quarterfinals_seed_one_against_eight_and_feed_the_right_semis() {
    let players = roster(16);
    let matches =
        build_bracket(&[pool(&players, BracketShape::Quarterfinals, true)], &players).unwrap();
    let t = snake(&players);

    assert_eq!(matches.len(), 8);
    let expected = [(1, 0, 7, 1), (2, 3, 4, 1), (3, 1, 6, 2), (4, 2, 5, 2)];
    for (slot, a, b, semi) in expected {
        let qf = find(&matches, &format!("gold-quarterfinal-{slot}"));
        assert_eq!((qf.team_1, qf.team_2), (Some(t[a]), Some(t[b])));
        assert_eq!(qf.next_match, Some(format!("gold-semifinal-{semi}")));
    }
    let semi_a = find(&matches, "gold-semifinal-1");
    assert_eq!(semi_a.source_1.as_deref(), Some("gold-quarterfinal-1"));
    assert_eq!(semi_a.source_2.as_deref(), Some("gold-quarterfinal-2"));
    assert_eq!(
        find(&matches, "gold-semifinal-2").next_match.as_deref(),
        Some("gold-final-1")
    );
}

#[test]
fn semifinal_result_moves_winner_to_final_and_loser_to_third_place() {
    let players = roster(8);
    let mut matches =
        build_bracket(&[pool(&players, BracketShape::Semifinals, true)], &players).unwrap();
    let teams = snake(&players);

    submit_bracket_score(&mut matches, "gold-semifinal-1", 5, 3, 1, 0).unwrap();
    let semi_a = find(&matches, "gold-semifinal-1");
    assert!(semi_a.completed);
    assert_eq!((semi_a.score_1, semi_a.score_2), (Some(5), Some(3)));
    assert_eq!(semi_a.twenties_1, 1);
    assert_eq!(semi_a.winner, Some(TeamKey::new(&teams[0])));
    assert_eq!(find(&matches, "gold-final-1").team_1, Some(teams[0]));
    assert_eq!(find(&matches, "gold-third_place-1").team_1, Some(teams[3]));

    submit_bracket_score(&mut matches, "gold-semifinal-2", 2, 6, 0, 0).unwrap();
    assert_eq!(find(&matches, "gold-final-1").team_2, Some(teams[2]));
    assert_eq!(find(&matches, "gold-third_place-1").team_2, Some(teams[1]));

    submit_bracket_score(&mut matches, "gold-final-1", 7, 1, 0, 0).unwrap();
    let fin = find(&matches, "gold-final-1");
    assert!(fin.completed);
    assert_eq!(fin.winner, Some(TeamKey::new(&teams[0])));
}

#[test]
fn editing_a_semifinal_overwrites_downstream_slots_without_resetting_them() {
    let players = roster(8);
    let mut matches =
        build_bracket(&[pool(&players, BracketShape::Semifinals, true)], &players).unwrap();
    let teams = snake(&players);

    submit_bracket_score(&mut matches, "gold-semifinal-1", 5, 3, 0, 0).unwrap();
    submit_bracket_score(&mut matches, "gold-semifinal-2", 5, 3, 0, 0).unwrap();
    submit_bracket_score(&mut matches, "gold-final-1", 5, 3, 0, 0).unwrap();

    submit_bracket_score(&mut matches, "gold-semifinal-1", 1, 4, 0, 0).unwrap();
    let fin = find(&matches, "gold-final-1");
    assert_eq!(fin.team_1, Some(teams[3]));
    assert!(fin.completed);
    assert_eq!(fin.winner, Some(TeamKey::new(&teams[0])));
    assert_eq!(find(&matches, "gold-third_place-1").team_1, Some(teams[0]));
}

#[test]
fn scores_for_unknown_or_undecided_matches_are_rejected() {
    let players = roster(8);
    let mut matches =
        build_bracket(&[pool(&players, BracketShape::Semifinals, false)], &players).unwrap();

    assert_eq!(
        submit_bracket_score(&mut matches, "gold-final-9", 5, 3, 0, 0),
        Err(EngineError::BracketMatchNotFound("gold-final-9".to_string()))
    );
    assert_eq!(
        submit_bracket_score(&mut matches, "gold-final-1", 5, 3, 0, 0),
        Err(EngineError::BracketMatchNotReady("gold-final-1".to_string()))
    );
}

#[test]
fn manual_teams_replace_snake_seeding() {
    let players = roster(8);
    let manual: Vec<[PlayerId; 2]> = players.chunks(2).map(|c| [c[0].id, c[1].id]).collect();
    let mut config = pool(&players, BracketShape::Semifinals, false);
    config.manual_teams = Some(manual.clone());

    let matches = build_bracket(&[config], &players).unwrap();
    assert_eq!(matches.len(), 3);
    let semi_a = find(&matches, "gold-semifinal-1");
    assert_eq!((semi_a.team_1, semi_a.team_2), (Some(manual[0]), Some(manual[3])));
}

#[test]
fn pools_are_built_independently_and_none_is_skipped() {
    let players = roster(12);
    let gold = PoolBracketConfig {
        pool_id: "gold".to_string(),
        ..pool(&players[..8], BracketShape::Semifinals, false)
    };
    let silver = PoolBracketConfig {
        pool_id: "silver".to_string(),
        ..pool(&players[8..], BracketShape::Final, true)
    };
    let wood = PoolBracketConfig {
        pool_id: "wood".to_string(),
        ..pool(&[], BracketShape::None, false)
    };

    let matches = build_bracket(&[gold, silver, wood], &players).unwrap();
    assert_eq!(matches.len(), 4);
    assert_eq!(matches.iter().filter(|m| m.pool_id == "silver").count(), 1);
    assert!(matches.iter().all(|m| m.pool_id != "wood"));
}

#[test]
fn wrong_pool_size_and_unknown_players_are_errors() {
    let players = roster(6);
    assert_eq!(
        build_bracket(&[pool(&players, BracketShape::Semifinals, false)], &players),
        Err(EngineError::WrongPoolSize {
            pool: "gold".to_string(),
            expected: 4,
            actual: 3
        })
    );

    let outsiders = roster(4);
    assert_eq!(
        build_bracket(&[pool(&outsiders, BracketShape::Final, false)], &players),
        Err(EngineError::PlayerNotFound(outsiders[0].id))
    );
}
