//! Structured error types for the game engine.
//!
//! Rule-blocked moves are not errors: move attempts return `bool`. Errors
//! are reserved for contract violations (bad placement, missing player) and
//! for malformed grid text.

use thiserror::Error;

/// Errors surfaced by the board's public operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Tried to place a character outside the board boundaries.
    #[error("position ({x}, {y}) is outside the board")]
    OffBoard { x: usize, y: usize },

    /// Tried to place a character on a tile whose occupants don't allow it.
    /// The only legal double occupancy is a raccoon together with an open
    /// garbage can.
    #[error("tile ({x}, {y}) is already occupied")]
    TileOccupied { x: usize, y: usize },

    /// The board supports a single player.
    #[error("a player is already on the board")]
    PlayerAlreadyPlaced,

    /// Turn advancement and input submission require a player on the board.
    #[error("no player has been placed on the board")]
    NoPlayer,

    /// Grid text could not be parsed; the board is left unchanged.
    #[error("invalid grid text: {0}")]
    Parse(#[from] ParseGridError),
}

/// Reasons a grid string is rejected by `GameBoard::setup_from_grid`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseGridError {
    #[error("grid text is empty")]
    Empty,

    #[error("row {row} has {len} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("unknown symbol '{symbol}' at row {row}, column {col}")]
    UnknownSymbol { symbol: char, row: usize, col: usize },
}
