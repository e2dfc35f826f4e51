//! Lifeline domain.
//!
//! - [`value_objects::Lifeline`]: the three single-use aids and their payloads
//! - [`engine::LifelineEngine`]: applies a lifeline to a session

pub mod engine;
pub mod value_objects;
