//! CATBOARD Core - Board state for the hex trap-the-cat puzzle
//!
//! This crate provides:
//! - Hex geometry (axial coordinates with derived cube `s`)
//! - The board: bounds, blocked cells, adjacency and predicate scans
//! - Move validation and execution
//!
//! Turn order, the cat's strategy and win detection live with the caller.

pub mod board;
pub mod error;
pub mod hex;

// Re-exports for convenient access
pub use board::{Board, DEFAULT_BOARD_SIZE};
pub use error::{BoardError, InvalidMoveReason, ParseHexError};
pub use hex::{Hex, DIRECTIONS};
