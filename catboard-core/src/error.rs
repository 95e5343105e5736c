//! Error types for board operations

use std::fmt;
use std::num::ParseIntError;

use crate::hex::Hex;

/// Which precondition of a move was violated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidMoveReason {
    OutOfBounds,
    AlreadyBlocked,
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMoveReason::OutOfBounds => f.write_str("outside the board"),
            InvalidMoveReason::AlreadyBlocked => f.write_str("already blocked"),
        }
    }
}

/// Errors raised by [`Board`](crate::Board) mutations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid move at {pos}: {reason}")]
    InvalidMove { pos: Hex, reason: InvalidMoveReason },
}

/// Errors from parsing a [`Hex`] out of text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseHexError {
    #[error("expected a coordinate like \"q,r\", got {0:?}")]
    Malformed(String),

    #[error("invalid axis value {text:?}: {source}")]
    InvalidAxis {
        text: String,
        #[source]
        source: ParseIntError,
    },
}
