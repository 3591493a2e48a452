//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for validating and benchmarking the rules engine.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::rules;
use crate::{Board, Player};

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), Player::default(), depth, false)
}

fn leaves_below(board: Board, to_move: Player, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = rules::legal_moves(&board, to_move);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !to_move, depth - 1, true);
    }

    all_moves
        .into_iter()
        .map(|mv| {
            let mut child = board;
            rules::apply_move(&mut child, to_move, mv).expect("generated move must apply");
            leaves_below(child, !to_move, depth - 1, false)
        })
        .sum()
}
