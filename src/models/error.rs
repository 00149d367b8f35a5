//! Engine errors.

use crate::models::player::PlayerId;

/// Errors returned by bracket, result and export operations.
/// Pairing itself degrades instead of failing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EngineError {
    /// A referenced player is not in the roster.
    PlayerNotFound(PlayerId),
    /// No bracket match with this id.
    BracketMatchNotFound(String),
    /// The bracket match still has a TBD team.
    BracketMatchNotReady(String),
    /// Pool does not hold the number of teams its bracket shape needs.
    WrongPoolSize { pool: String, expected: usize, actual: usize },
    /// Team count is not one the bracket builder supports.
    UnsupportedBracket(usize),
    /// The match has no final score yet.
    IncompleteResult,
    /// Writing an export failed.
    Export(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::PlayerNotFound(id) => write!(f, "Player {} not found", id),
            EngineError::BracketMatchNotFound(id) => write!(f, "Bracket match {} not found", id),
            EngineError::BracketMatchNotReady(id) => {
                write!(f, "Bracket match {} does not have both teams yet", id)
            }
            EngineError::WrongPoolSize { pool, expected, actual } => write!(
                f,
                "Pool {} needs {} teams for its bracket (has {})",
                pool, expected, actual
            ),
            EngineError::UnsupportedBracket(teams) => {
                write!(f, "Cannot build a bracket for {} teams", teams)
            }
            EngineError::IncompleteResult => write!(f, "Match has no final score"),
            EngineError::Export(msg) => write!(f, "Export failed: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<csv::Error> for EngineError {
    fn from(e: csv::Error) -> Self {
        EngineError::Export(e.to_string())
    }
}

impl From<std::io::Error> for EngineError {
    fn from(e: std::io::Error) -> Self {
        EngineError::Export(e.to_string())
    }
}
