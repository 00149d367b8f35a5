//! Engine logic: standings, byes, partners, match pairing, brackets, propagation.

mod bracket;
mod byes;
mod export;
mod greedy;
mod pairing;
mod partners;
mod propagation;
mod results;
mod round;
mod standings;

pub use bracket::{build_bracket, snake_teams};
pub use byes::{select_byes, ByeSelection};
pub use export::write_standings_csv;
pub use pairing::{assign_tables, pair_teams};
pub use partners::assign_partners;
pub use propagation::submit_bracket_score;
pub use results::apply_match_result;
pub use round::generate_round_pairings;
pub use standings::compute_standings;
