//! Player entity logic.
//!
//! The player moves once per turn, in the direction of the last recorded
//! input event.

use crate::game::board::GameBoard;
use crate::game::entities::{garbage_can, recycling_bin};
use crate::game::types::{Direction, Entity, EntityId};

/// Record the latest requested direction; it is consumed on the player's
/// next turn, and a newer event overwrites an unconsumed one.
pub fn record_event(board: &mut GameBoard, id: EntityId, direction: Direction) {
    if let Entity::Player(player) = board.entity_mut(id) {
        player.last_event = Some(direction);
    }
}

/// Consume the pending input event, if any, and attempt the move. Without a
/// pending event the player does nothing this turn.
pub fn take_turn(board: &mut GameBoard, id: EntityId) {
    let pending = match board.entity_mut(id) {
        Entity::Player(player) => player.last_event.take(),
        _ => None,
    };
    if let Some(direction) = pending {
        move_player(board, id, direction);
    }
}

/// Attempt to move the player one tile in `direction`.
///
/// - An empty tile: the player moves there.
/// - A recycling bin: the bin (and any chain behind it) is pushed; the
///   player follows into the vacated tile if the push succeeds.
/// - An open garbage can standing alone: the can becomes locked and the
///   player stays put; this still counts as a successful action.
/// - Anything else (off-board, a raccoon, a locked can, a raccoon inside a
///   can): no effect.
pub fn move_player(board: &mut GameBoard, id: EntityId, direction: Direction) -> bool {
    let pos = board.entity(id).pos();
    let Some(next) = board.neighbour(pos, direction) else {
        return false;
    };

    let occupants = board.at(next.x, next.y);
    let other = match occupants.as_slice() {
        [] => {
            board.entity_mut(id).set_pos(next);
            return true;
        }
        [other] => *other,
        // Two characters means a raccoon in a can; that tile blocks.
        _ => return false,
    };

    if matches!(board.entity(other), Entity::RecyclingBin(_)) {
        if recycling_bin::move_bin(board, other, direction) {
            board.entity_mut(id).set_pos(next);
            return true;
        }
        return false;
    }
    if matches!(board.entity(other), Entity::GarbageCan(_)) && !garbage_can::is_locked(board, other)
    {
        garbage_can::set_locked(board, other, true);
        return true;
    }
    false
}
