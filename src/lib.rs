//! Doubles Swiss engine: round pairing with partner/rematch avoidance and fair byes,
//! plus single-elimination brackets built from pool standings.

pub mod logic;
pub mod models;

pub use logic::{
    apply_match_result, assign_partners, assign_tables, build_bracket, compute_standings,
    generate_round_pairings, pair_teams, select_byes, snake_teams, submit_bracket_score,
    write_standings_csv, ByeSelection,
};
pub use models::{
    BracketMatch, BracketMatchId, BracketRound, BracketShape, ByeMode, EngineError, GameMatch,
    MatchHistory, MatchId, PairingEvent, PairingLog, PartnerHistory, Player, PlayerId,
    PoolBracketConfig, RoundOptions, RoundPairings, ScoringRules, Standing, Table, TeamKey,
};
