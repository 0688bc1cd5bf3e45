//! Game entities module.
//!
//! Per-variant movement and turn rules. Each submodule operates on the
//! board's registry through [`EntityId`](crate::game::types::EntityId)
//! handles, so the board stays the single owner of all game state.

pub mod garbage_can;
pub mod player;
pub mod raccoon;
pub mod recycling_bin;
