//! CATBOARD CLI - Board inspection tool
//!
//! Commands:
//! - render: Draw the board
//! - neighbors: List the free neighbors of a cell
//! - cells: List cells matching a filter
//! - check: Validate a blocking move

mod inspect;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use catboard_core::{Hex, DEFAULT_BOARD_SIZE};

use inspect::{CellsArgs, CheckArgs, NeighborsArgs, RenderArgs};

#[derive(Parser)]
#[command(name = "catboard")]
#[command(about = "Inspect a trap-the-cat hex board")]
struct Cli {
    /// Board radius
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: u32,

    /// Block a cell before running the command, repeatable
    #[arg(long = "block", value_name = "Q,R", allow_hyphen_values = true)]
    blocks: Vec<Hex>,

    /// Log board setup (overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw the board
    Render(RenderArgs),
    /// List the free neighbors of a cell
    Neighbors(NeighborsArgs),
    /// List cells matching a filter
    Cells(CellsArgs),
    /// Check whether a cell can be blocked
    Check(CheckArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let board = inspect::build_board(cli.size, &cli.blocks)?;

    match cli.command {
        Commands::Render(args) => inspect::run_render(&board, args),
        Commands::Neighbors(args) => inspect::run_neighbors(&board, args),
        Commands::Cells(args) => inspect::run_cells(&board, args),
        Commands::Check(args) => inspect::run_check(&board, args),
    }
}

/// Log to stderr so that stdout stays clean for `--json`
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "catboard", "--size", "3", "--block", "-1,2", "--block", "0,-3", "neighbors", "--at", "-1,1",
        ])
        .unwrap();

        assert_eq!(cli.size, 3);
        assert_eq!(cli.blocks, vec![Hex::new(-1, 2), Hex::new(0, -3)]);
        match cli.command {
            Commands::Neighbors(args) => assert_eq!(args.at, Hex::new(-1, 1)),
            _ => panic!("expected neighbors command"),
        }
    }

    #[test]
    fn test_parse_defaults_and_bad_coordinate() {
        let cli = Cli::try_parse_from(["catboard", "cells"]).unwrap();
        assert_eq!(cli.size, DEFAULT_BOARD_SIZE);
        assert!(cli.blocks.is_empty());

        assert!(Cli::try_parse_from(["catboard", "check", "--at", "1;2"]).is_err());
    }
}
