//! Garbage can entity logic.
//!
//! Garbage cans never change position. Their lock state flips only through
//! explicit interaction: the player locks an open can shut, a raccoon spends
//! a turn unlocking a locked one.

use crate::game::board::GameBoard;
use crate::game::types::{Entity, EntityId};

/// Whether the can `id` is locked. False for ids that are not cans.
pub fn is_locked(board: &GameBoard, id: EntityId) -> bool {
    matches!(board.entity(id), Entity::GarbageCan(can) if can.locked)
}

/// Set the lock state of can `id`. No-op for ids that are not cans.
pub fn set_locked(board: &mut GameBoard, id: EntityId, locked: bool) {
    if let Entity::GarbageCan(can) = board.entity_mut(id) {
        can.locked = locked;
    }
}
