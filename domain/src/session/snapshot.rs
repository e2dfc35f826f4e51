//! Persisted shape of a session

use crate::core::question::Question;
use crate::lifeline::value_objects::Lifeline;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Plain structured copy of a [`Session`](super::entities::Session).
///
/// Storage adapters serialize this as-is. It carries no invariants of its
/// own; [`Session::resume`](super::entities::Session::resume) validates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub score: u64,
    pub is_finished: bool,
    pub unused_lifelines: BTreeSet<Lifeline>,
    pub forgiveness_active: bool,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub disabled_answers: BTreeSet<String>,
}

impl SessionSnapshot {
    /// Starting position for a new game
    pub fn fresh(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current_index: 0,
            score: 0,
            is_finished: false,
            unused_lifelines: Lifeline::all(),
            forgiveness_active: false,
            disabled_answers: BTreeSet::new(),
        }
    }
}
