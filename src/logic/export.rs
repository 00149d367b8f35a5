//! CSV export of ranked standings.

use crate::models::{EngineError, Standing};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct StandingRow<'a> {
    rank: usize,
    name: &'a str,
    wins: u32,
    losses: u32,
    ties: u32,
    score: u32,
    points_for: u32,
    points_against: u32,
    differential: i64,
    twenties: u32,
    byes: u32,
}

/// Write standings (already ranked) as CSV with a header row. Rank starts at 1.
pub fn write_standings_csv<W: Write>(standings: &[Standing], writer: W) -> Result<(), EngineError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (i, s) in standings.iter().enumerate() {
        csv_writer.serialize(StandingRow {
            rank: i + 1,
            name: &s.name,
            wins: s.wins,
            losses: s.losses,
            ties: s.ties,
            score: s.score,
            points_for: s.points_for,
            points_against: s.points_against,
            differential: s.point_differential(),
            twenties: s.twenties,
            byes: s.byes,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}
