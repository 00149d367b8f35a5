//! Data structures for the doubles engine: players, round matches, brackets, options.

mod bracket;
mod error;
mod game;
mod history;
mod player;
mod round;

pub use bracket::{BracketMatch, BracketMatchId, BracketRound, BracketShape, PoolBracketConfig};
pub use error::EngineError;
pub use game::{GameMatch, MatchId, Table, TeamKey};
pub use history::{MatchHistory, PartnerHistory};
pub use player::{Player, PlayerId, Standing};
pub use round::{ByeMode, PairingEvent, PairingLog, RoundOptions, RoundPairings, ScoringRules};
