use thiserror::Error;

use crate::builder::BuilderInvalidReason;

/// Everything that can go wrong when handing malformed input to this crate.
///
/// "No match" and "no stones" are not errors; they come back as empty or all-zero results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The target string for [`locate`](crate::locate()) was empty.
    #[error("target string must not be empty")]
    EmptyTarget,

    /// A tree node was given both text and children.
    #[error("element <{element}> has both text and children")]
    MixedContent {
        /// Name of the offending element.
        element: String,
    },

    /// A board had no rows or no columns.
    #[error("board must have at least one row and one column")]
    EmptyBoard,

    /// A board row did not have the same length as the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of this row.
        found: usize,
    },

    /// An integer cell value outside `-1..=1`.
    #[error("unknown cell value {0}, expected -1, 0 or 1")]
    UnknownCell(i8),

    /// A diagram character other than `.`, `X` or `O`.
    #[error("unknown board symbol {0:?}")]
    UnknownSymbol(char),

    /// Liberties were requested for the empty "color".
    #[error("liberties are only defined for stones, not empty cells")]
    EmptyColor,

    /// A board builder was in an invalid state when built.
    #[error("invalid board: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "))]
    InvalidBoard(Vec<BuilderInvalidReason>),
}
