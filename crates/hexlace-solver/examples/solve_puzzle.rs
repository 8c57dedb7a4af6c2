//! Example demonstrating basic puzzle solving.
//!
//! This example shows how to:
//! - Parse a puzzle from the command line (or fall back to a built-in
//!   sample board)
//! - Pick the box shape
//! - Solve and display the solution together with search statistics
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_puzzle
//! ```
//!
//! Pass a puzzle as six whitespace-separated rows of six cells, with
//! `1`-`6` for clues and `_`, `.`, or `0` for empty cells:
//!
//! ```sh
//! cargo run --example solve_puzzle -- "1___6_ ______ __25__ ______ ______ _4____"
//! ```
//!
//! Select a different box shape (rows × cols must be 6):
//!
//! ```sh
//! cargo run --example solve_puzzle -- --box-rows 3 --box-cols 2
//! ```

use std::process;

use clap::Parser;
use hexlace_core::{BoxShape, DigitGrid};
use hexlace_solver::{SearchStats, Solver};

const SAMPLE: &str = "
    ___ _6_
    ___ 4__
    _5_ __2
    __2 ___
    __6 ___
    3__ ___
";

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle as six rows of six cells (`1`-`6` clues; `_`, `.`, `0`
    /// empty). Uses a built-in sample board when omitted.
    #[arg(value_name = "GRID")]
    puzzle: Option<String>,

    /// Box height in rows.
    #[arg(long, value_name = "ROWS", default_value_t = 2)]
    box_rows: u8,

    /// Box width in columns.
    #[arg(long, value_name = "COLS", default_value_t = 3)]
    box_cols: u8,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let source = args
        .puzzle
        .as_deref()
        .map_or_else(|| SAMPLE.to_owned(), |s| {
            s.split_whitespace().collect::<Vec<_>>().join("\n")
        });
    let puzzle: DigitGrid = match source.parse() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Invalid puzzle: {err}");
            process::exit(2);
        }
    };

    let shape = match BoxShape::new(args.box_rows, args.box_cols) {
        Ok(shape) => shape,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let solver = Solver::new(shape);
    let mut stats = SearchStats::default();
    match solver.solve_with_stats(&puzzle, &mut stats) {
        Ok(Some(solution)) => {
            println!("Puzzle:");
            println!("{puzzle}");
            println!();
            println!("Solution:");
            println!("{solution}");
            println!();
            print_stats(&stats);
        }
        Ok(None) => {
            println!("Puzzle:");
            println!("{puzzle}");
            println!();
            println!("No solution.");
            println!();
            print_stats(&stats);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn print_stats(stats: &SearchStats) {
    println!("Stats:");
    println!("  nodes: {}", stats.nodes());
    println!("  forced placements: {}", stats.forced_placements());
    println!("  backtracks: {}", stats.backtracks());
    println!("  max depth: {}", stats.max_depth());
}
