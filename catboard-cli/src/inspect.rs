//! Inspection commands - build a board from the command line and query it
//!
//! ## Architecture
//!
//! - run_*(): one entry point per subcommand
//! - build_board(): applies `--block` moves through the core
//! - report helpers: text or JSON output

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;

use catboard_core::{Board, BoardError, Hex};

use crate::render::render_board;

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct RenderArgs {
    /// Highlight a cell (e.g. the cat), repeatable
    #[arg(long, value_name = "Q,R", allow_hyphen_values = true)]
    pub mark: Vec<Hex>,
}

#[derive(Args)]
pub struct NeighborsArgs {
    /// Cell whose free neighbors are listed
    #[arg(long, value_name = "Q,R", allow_hyphen_values = true)]
    pub at: Hex,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CellsArgs {
    /// Which cells to list
    #[arg(long, value_enum, default_value_t = CellFilter::All)]
    pub filter: CellFilter,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Cell to validate as a blocking move
    #[arg(long, value_name = "Q,R", allow_hyphen_values = true)]
    pub at: Hex,
}

/// Predicate handed to `Board::positions_where`
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellFilter {
    All,
    Free,
    Blocked,
    Edge,
}

impl CellFilter {
    fn matches(self, board: &Board, hex: Hex) -> bool {
        match self {
            CellFilter::All => true,
            CellFilter::Free => !board.is_blocked(hex),
            CellFilter::Blocked => board.is_blocked(hex),
            CellFilter::Edge => board.is_on_edge(hex),
        }
    }
}

#[derive(Serialize)]
struct NeighborsReport {
    at: Hex,
    neighbors: Vec<Hex>,
}

#[derive(Serialize)]
struct CellsReport {
    size: u32,
    filter: CellFilter,
    count: usize,
    cells: Vec<Hex>,
}

// ============================================================================
// BOARD SETUP
// ============================================================================

/// Create a fresh board and block `blocks` in order.
///
/// Stops at the first rejected move.
pub fn build_board(size: u32, blocks: &[Hex]) -> Result<Board> {
    let mut board = Board::new(size);
    board.initialize();

    for &pos in blocks {
        board
            .execute_move(pos)
            .with_context(|| format!("Failed to block {}", pos))?;
        tracing::debug!("Blocked {}", pos);
    }

    tracing::info!(
        "Board ready: size={}, blocked={}/{}",
        board.size(),
        board.blocked_count(),
        board.cell_count()
    );

    Ok(board)
}

// ============================================================================
// COMMANDS
// ============================================================================

pub fn run_render(board: &Board, args: RenderArgs) -> Result<()> {
    for mark in args.mark.iter().filter(|&&m| !board.is_in_bounds(m)) {
        tracing::warn!("Mark {} is outside the board and will not be shown", mark);
    }

    print!("{}", render_board(board, &args.mark)?);
    Ok(())
}

pub fn run_neighbors(board: &Board, args: NeighborsArgs) -> Result<()> {
    if !board.is_in_bounds(args.at) {
        tracing::warn!("{} is outside the board", args.at);
    }

    let report = NeighborsReport {
        at: args.at,
        neighbors: board.adjacent_positions(args.at),
    };

    if args.json {
        print_json(&report)
    } else {
        println!("Free neighbors of {}: {}", report.at, report.neighbors.len());
        for hex in &report.neighbors {
            println!("  {}", hex);
        }
        Ok(())
    }
}

pub fn run_cells(board: &Board, args: CellsArgs) -> Result<()> {
    let report = collect_cells(board, args.filter);

    if args.json {
        print_json(&report)
    } else {
        println!(
            "{} cells matching '{:?}' on a board of size {}",
            report.count, report.filter, report.size
        );
        for hex in &report.cells {
            println!("  {}", hex);
        }
        Ok(())
    }
}

pub fn run_check(board: &Board, args: CheckArgs) -> Result<()> {
    match board.check_move(args.at) {
        Ok(()) => println!("{}: valid move", args.at),
        Err(BoardError::InvalidMove { reason, .. }) => {
            println!("{}: invalid move ({})", args.at, reason)
        }
    }
    Ok(())
}

// ============================================================================
// HELPERS
// ============================================================================

fn collect_cells(board: &Board, filter: CellFilter) -> CellsReport {
    let cells = board.positions_where(|&hex| filter.matches(board, hex));
    CellsReport {
        size: board.size(),
        filter,
        count: cells.len(),
        cells,
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize report")?;
    println!("{}", json);
    Ok(())
}
