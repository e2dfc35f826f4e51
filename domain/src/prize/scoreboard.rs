//! Ladder rows for display

use super::ladder::PrizeLadder;
use serde::{Deserialize, Serialize};

/// How a ladder row should be highlighted
///
/// When several apply, the first in declaration order wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowKind {
    Current,
    Top,
    Checkpoint,
    Regular,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreboardRow {
    pub ordinal: usize,
    pub amount: u64,
    pub kind: RowKind,
}

impl PrizeLadder {
    /// Rows from the top prize down, marking `current_ordinal`
    pub fn scoreboard(&self, current_ordinal: Option<usize>) -> Vec<ScoreboardRow> {
        let top = self.rungs().len();
        self.rungs()
            .iter()
            .rev()
            .map(|rung| {
                let kind = if Some(rung.ordinal) == current_ordinal {
                    RowKind::Current
                } else if rung.ordinal == top {
                    RowKind::Top
                } else if rung.is_checkpoint {
                    RowKind::Checkpoint
                } else {
                    RowKind::Regular
                };
                ScoreboardRow {
                    ordinal: rung.ordinal,
                    amount: rung.amount,
                    kind,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_ordered_top_down() {
        let rows = PrizeLadder::standard().scoreboard(None);
        assert_eq!(rows.len(), 15);
        assert_eq!(rows[0].ordinal, 15);
        assert_eq!(rows[0].kind, RowKind::Top);
        assert_eq!(rows[14].ordinal, 1);
    }

    #[test]
    fn test_current_takes_precedence() {
        let rows = PrizeLadder::standard().scoreboard(Some(5));
        let row = rows.iter().find(|r| r.ordinal == 5).unwrap();
        assert_eq!(row.kind, RowKind::Current);
        let row = rows.iter().find(|r| r.ordinal == 10).unwrap();
        assert_eq!(row.kind, RowKind::Checkpoint);
        let row = rows.iter().find(|r| r.ordinal == 7).unwrap();
        assert_eq!(row.kind, RowKind::Regular);
    }
}
