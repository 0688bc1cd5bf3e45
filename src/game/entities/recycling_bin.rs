//! Recycling bin entity logic.
//!
//! Bins only move when pushed, and a push propagates down a line of
//! adjacent bins like dominoes: the whole line shifts one tile, or nothing
//! moves at all.

use crate::game::board::GameBoard;
use crate::game::types::{Direction, Entity, EntityId};

/// Push the bin `id` one tile in `direction`.
///
/// The chain of consecutive bins starting at `id` all shift one step, but
/// only if the tile past the last bin is on the board and empty. Any other
/// tile there (or the board edge) fails the whole push.
pub fn move_bin(board: &mut GameBoard, id: EntityId, direction: Direction) -> bool {
    let mut chain = vec![id];
    let mut scan = board.entity(id).pos();
    loop {
        let Some(next) = board.neighbour(scan, direction) else {
            break;
        };
        match board.at(next.x, next.y).as_slice() {
            [other] if matches!(board.entity(*other), Entity::RecyclingBin(_)) => {
                chain.push(*other);
                scan = next;
            }
            _ => break,
        }
    }

    // `scan` is the last bin's tile; the chain needs the tile past it.
    let Some(final_tile) = board.neighbour(scan, direction) else {
        return false;
    };
    if !board.at(final_tile.x, final_tile.y).is_empty() {
        return false;
    }

    for &bin in &chain {
        let pos = board.entity(bin).pos();
        if let Some(next) = board.neighbour(pos, direction) {
            board.entity_mut(bin).set_pos(next);
        }
    }
    true
}
