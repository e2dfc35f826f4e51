//! Prize ladder domain.
//!
//! - [`ladder::PrizeLadder`]: ordinal → amount / checkpoint lookup
//! - [`scoreboard::ScoreboardRow`]: ladder rows for display

pub mod ladder;
pub mod scoreboard;
