//! Recycling bin cluster scoring.
//!
//! The end-of-game score rewards the largest cluster of adjacent recycling
//! bins. Two bins are adjacent when they sit directly beside each other in
//! one of the four directions.

use std::collections::{HashSet, VecDeque};

use crate::game::board::GameBoard;
use crate::game::types::{Direction, Position};

/// Size of the largest cluster of recycling bins connected through shared
/// edges (diagonals do not count). 0 when the board has no bins.
///
/// Breadth-first traversal per unvisited bin: expand one connected
/// component at a time, remove it from the pool, and keep the largest size
/// seen.
pub fn adjacent_bin_score(board: &GameBoard) -> u32 {
    let mut remaining: HashSet<Position> = board
        .recycling_bin_ids()
        .iter()
        .map(|&id| board.entity(id).pos())
        .collect();

    let mut best = 0;
    while let Some(&start) = remaining.iter().next() {
        remaining.remove(&start);
        let mut queue = VecDeque::from([start]);
        let mut size = 0;
        while let Some(pos) = queue.pop_front() {
            size += 1;
            for direction in Direction::ALL {
                if let Some(next) = board.neighbour(pos, direction) {
                    if remaining.remove(&next) {
                        queue.push_back(next);
                    }
                }
            }
        }
        best = best.max(size);
    }
    best
}
