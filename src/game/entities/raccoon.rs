//! Raccoon entity logic.
//!
//! Covers both raccoon kinds: the plain raccoon wanders in a random legal
//! direction, the smart raccoon homes in on the nearest open garbage can in
//! its line of sight. Both act only every `RACCOON_TURN_FREQUENCY` turns
//! (the board's scheduler handles the cadence).

use rand::seq::IndexedRandom;

use crate::game::board::GameBoard;
use crate::game::entities::garbage_can;
use crate::game::types::{Direction, Entity, EntityId, Position, RaccoonKind};

/// Return whether the raccoon has nowhere left to go: every adjacent tile
/// is off the board or blocked. A tile holding exactly one open garbage can
/// is the only occupied tile that does not block, since the raccoon could
/// still climb in.
///
/// Also refreshes the raccoon's `inside_can` flag from its current tile.
pub fn check_trapped(board: &mut GameBoard, id: EntityId) -> bool {
    let pos = board.entity(id).pos();
    if board.at(pos.x, pos.y).len() == 2 {
        if let Entity::Raccoon(raccoon) = board.entity_mut(id) {
            raccoon.inside_can = true;
        }
    }
    for direction in Direction::ALL {
        let Some(next) = board.neighbour(pos, direction) else {
            continue;
        };
        match board.at(next.x, next.y).as_slice() {
            [] => return false,
            [other] => {
                if matches!(board.entity(*other), Entity::GarbageCan(can) if !can.locked) {
                    return false;
                }
            }
            _ => {}
        }
    }
    true
}

/// Attempt to move the raccoon one tile in `direction`.
///
/// A trapped raccoon, or one inside a can, stays put. Moving toward a
/// locked can spends the turn unlocking it (the raccoon does not move);
/// moving onto an open, unoccupied can climbs inside. The player, bins,
/// other raccoons, and the board edge all block.
pub fn move_raccoon(board: &mut GameBoard, id: EntityId, direction: Direction) -> bool {
    if check_trapped(board, id) || is_inside_can(board, id) {
        return false;
    }
    let pos = board.entity(id).pos();
    let Some(next) = board.neighbour(pos, direction) else {
        return false;
    };

    match board.at(next.x, next.y).as_slice() {
        [] => {
            board.entity_mut(id).set_pos(next);
            true
        }
        [other] => {
            let other = *other;
            if !matches!(board.entity(other), Entity::GarbageCan(_)) {
                return false;
            }
            if garbage_can::is_locked(board, other) {
                garbage_can::set_locked(board, other, false);
            } else {
                board.entity_mut(id).set_pos(next);
                if let Entity::Raccoon(raccoon) = board.entity_mut(id) {
                    raccoon.inside_can = true;
                }
            }
            true
        }
        _ => false,
    }
}

/// Give the raccoon its turn, dispatching on its kind.
pub fn take_turn(board: &mut GameBoard, id: EntityId) {
    let kind = match board.entity(id) {
        Entity::Raccoon(raccoon) => raccoon.kind,
        _ => return,
    };
    match kind {
        RaccoonKind::Plain => take_turn_wander(board, id),
        RaccoonKind::Smart => take_turn_homing(board, id),
    }
}

fn is_inside_can(board: &GameBoard, id: EntityId) -> bool {
    matches!(board.entity(id), Entity::Raccoon(raccoon) if raccoon.inside_can)
}

/// Base behavior: pick uniformly at random among the immediately legal
/// directions (an empty tile, or a garbage can in either lock state).
fn take_turn_wander(board: &mut GameBoard, id: EntityId) {
    if check_trapped(board, id) || is_inside_can(board, id) {
        return;
    }
    let pos = board.entity(id).pos();
    let mut legal = Vec::new();
    for direction in Direction::ALL {
        let Some(next) = board.neighbour(pos, direction) else {
            continue;
        };
        match board.at(next.x, next.y).as_slice() {
            [] => legal.push(direction),
            [other] if matches!(board.entity(*other), Entity::GarbageCan(_)) => {
                legal.push(direction);
            }
            _ => {}
        }
    }
    if let Some(&direction) = legal.choose(board.rng_mut()) {
        move_raccoon(board, id, direction);
    }
}

/// Smart behavior: scan each direction for the closest open can with
/// nothing but empty tiles or the player in between, and step one tile
/// toward it. The nearest can wins; ties break by the scan order of
/// [`Direction::ALL`]. With no can in sight, fall back to wandering.
fn take_turn_homing(board: &mut GameBoard, id: EntityId) {
    if check_trapped(board, id) || is_inside_can(board, id) {
        return;
    }
    let pos = board.entity(id).pos();
    let mut best: Option<(u32, Direction)> = None;
    for direction in Direction::ALL {
        let Some(distance) = scan_for_open_can(board, pos, direction) else {
            continue;
        };
        // Strictly-less keeps the earlier direction on a tie.
        if best.is_none_or(|(closest, _)| distance < closest) {
            best = Some((distance, direction));
        }
    }
    match best {
        Some((_, direction)) => {
            // The homing step is unconditional along the sighted line. The
            // player can stand on the first tile of it; the raccoon steps
            // there anyway and the player is not displaced.
            if let Some(next) = board.neighbour(pos, direction) {
                board.entity_mut(id).set_pos(next);
            }
        }
        None => take_turn_wander(board, id),
    }
}

/// Distance to the first open, unoccupied garbage can visible from `pos` in
/// `direction`, looking through empty tiles and the player only. `None`
/// when the line of sight ends at the board edge or at anything else.
fn scan_for_open_can(board: &GameBoard, pos: Position, direction: Direction) -> Option<u32> {
    let mut next = board.neighbour(pos, direction)?;
    let mut distance = 1;
    loop {
        match board.at(next.x, next.y).as_slice() {
            [] => {}
            [other] if matches!(board.entity(*other), Entity::Player(_)) => {}
            [other] => {
                return matches!(board.entity(*other), Entity::GarbageCan(can) if !can.locked)
                    .then_some(distance);
            }
            _ => return None,
        }
        next = board.neighbour(next, direction)?;
        distance += 1;
    }
}
