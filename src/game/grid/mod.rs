//! Text grid import/export for the game board.

pub mod grid;

pub use grid::*;
