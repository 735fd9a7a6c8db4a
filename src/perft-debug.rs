use std::env;

use anyhow::{Context, Result};

use arcade_ai::core::utils::perf_test;
use arcade_ai::{CheckersBoard, Position, Side};

fn main() -> Result<()> {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    let depth: usize = args
        .get(1)
        .context("usage: perft-debug <depth> [expected]")?
        .parse()
        .context("failed to parse depth")?;
    let board = CheckersBoard::new();

    let mut total = 0;
    for _move in board.moves_for_side(Side::Player) {
        let mut child = board.clone();
        child.apply(&_move, Side::Player);
        let result = if depth > 0 {
            perf_test(&child, Side::Ai, depth - 1)
        } else {
            0
        };
        println!(" {_move} : {result}");
        total += result;
    }
    println!("+ total: {total}");

    if let Some(expected) = args.get(2) {
        let expected: usize = expected.parse().context("failed to parse expected count")?;
        anyhow::ensure!(total == expected, "found {total} paths, expected {expected}");
    }
    Ok(())
}
