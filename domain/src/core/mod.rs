//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a validated multiple-choice question
//! - [`error::DomainError`]: domain-level construction errors

pub mod error;
pub mod question;
