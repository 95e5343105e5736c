//! ASCII rendering of a board

use anyhow::{bail, Result};

use catboard_core::{Board, Hex};

/// Largest board radius that still fits a terminal
pub const MAX_RENDER_SIZE: u32 = 64;

const FREE: char = '.';
const BLOCKED: char = '#';
const MARKED: char = '@';

/// Draw the board as a hexagon, one row per `r`, shifted so that
/// neighboring cells line up.
pub fn render_board(board: &Board, marks: &[Hex]) -> Result<String> {
    if board.size() > MAX_RENDER_SIZE {
        bail!(
            "Board size {} is too large to render (max {})",
            board.size(),
            MAX_RENDER_SIZE
        );
    }

    let n = board.size() as i32;
    let mut out = String::new();

    for r in -n..=n {
        let row: Vec<String> = (-n..=n)
            .map(|q| Hex::new(q, r))
            .filter(|&hex| board.is_in_bounds(hex))
            .map(|hex| cell_char(board, marks, hex).to_string())
            .collect();

        out.push_str(&" ".repeat(r.unsigned_abs() as usize));
        out.push_str(&row.join(" "));
        out.push('\n');
    }

    Ok(out)
}

fn cell_char(board: &Board, marks: &[Hex], hex: Hex) -> char {
    if marks.contains(&hex) {
        MARKED
    } else if board.is_blocked(hex) {
        BLOCKED
    } else {
        FREE
    }
}
