//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod answer_resolver;
pub mod game_controller;
pub mod resolution;
pub mod start_game;

#[cfg(test)]
pub(crate) mod test_support;
