//! Core game engine: board, entities, movement rules, turn scheduling,
//! and scoring.

pub mod board;
pub mod entities;
pub mod error;
pub mod game_loop;
pub mod grid;
pub mod systems;
pub mod types;
