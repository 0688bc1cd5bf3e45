//! Row-major character grid representation of a board.
//!
//! One character per tile, rows separated by `'\n'`, no trailing newline:
//!
//! | Symbol | Meaning                              |
//! |--------|--------------------------------------|
//! | `-`    | empty tile                           |
//! | `P`    | player                               |
//! | `R`    | raccoon (not in a can)               |
//! | `S`    | smart raccoon (not in a can)         |
//! | `B`    | recycling bin                        |
//! | `C`    | closed (locked) garbage can          |
//! | `O`    | open garbage can                     |
//! | `@`    | raccoon inside an open garbage can   |
//!
//! `@` is lossy on purpose: export writes it for either raccoon kind, and
//! import always instantiates a plain raccoon for it. A smart raccoon that
//! climbs into a can therefore comes back plain after a round trip.

use std::fmt;
use std::fmt::Write;

use log::debug;

use crate::game::board::GameBoard;
use crate::game::error::{GameError, ParseGridError};

pub const EMPTY: char = '-';
pub const PLAYER: char = 'P';
pub const RACCOON: char = 'R';
pub const SMART_RACCOON: char = 'S';
pub const RECYCLING_BIN: char = 'B';
pub const CLOSED_CAN: char = 'C';
pub const OPEN_CAN: char = 'O';
pub const RACCOON_IN_CAN: char = '@';

fn is_symbol(c: char) -> bool {
    matches!(
        c,
        EMPTY | PLAYER | RACCOON | SMART_RACCOON | RECYCLING_BIN | CLOSED_CAN | OPEN_CAN
            | RACCOON_IN_CAN
    )
}

impl GameBoard {
    /// The display character for tile (x, y).
    fn tile_symbol(&self, x: usize, y: usize) -> char {
        match self.at(x, y).as_slice() {
            [] => EMPTY,
            [only] => self.entity(*only).symbol(),
            // The only supported double occupancy is a raccoon in a can.
            _ => RACCOON_IN_CAN,
        }
    }

    /// Return the game state as a row-major matrix of display characters.
    pub fn to_grid(&self) -> Vec<Vec<char>> {
        (0..self.height)
            .map(|y| (0..self.width).map(|x| self.tile_symbol(x, y)).collect())
            .collect()
    }

    /// Reset this board to the state described by `grid`.
    ///
    /// Dimensions are taken from the text. The whole text is validated
    /// before the board is touched, so a parse error leaves the previous
    /// state intact. `@` places the raccoon first and its open can second,
    /// which is the order the placement invariant allows.
    pub fn setup_from_grid(&mut self, grid: &str) -> Result<(), GameError> {
        let rows: Vec<&str> = grid.lines().collect();
        if rows.is_empty() || rows[0].is_empty() {
            return Err(ParseGridError::Empty.into());
        }
        let width = rows[0].chars().count();
        for (y, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != width {
                return Err(ParseGridError::RaggedRow {
                    row: y,
                    len,
                    expected: width,
                }
                .into());
            }
            for (x, symbol) in row.chars().enumerate() {
                if !is_symbol(symbol) {
                    return Err(ParseGridError::UnknownSymbol {
                        symbol,
                        row: y,
                        col: x,
                    }
                    .into());
                }
            }
        }

        self.reset(width, rows.len());
        debug!("board reset from grid text, {}x{}", self.width, self.height);
        for (y, row) in rows.iter().enumerate() {
            for (x, symbol) in row.chars().enumerate() {
                match symbol {
                    PLAYER => {
                        self.place_player(x, y)?;
                    }
                    RACCOON => {
                        self.place_raccoon(x, y)?;
                    }
                    SMART_RACCOON => {
                        self.place_smart_raccoon(x, y)?;
                    }
                    RECYCLING_BIN => {
                        self.place_recycling_bin(x, y)?;
                    }
                    CLOSED_CAN => {
                        self.place_garbage_can(x, y, true)?;
                    }
                    OPEN_CAN => {
                        self.place_garbage_can(x, y, false)?;
                    }
                    RACCOON_IN_CAN => {
                        self.place_raccoon(x, y)?;
                        self.place_garbage_can(x, y, false)?;
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for GameBoard {
    /// The same format `setup_from_grid` expects.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                f.write_char('\n')?;
            }
            for x in 0..self.width {
                f.write_char(self.tile_symbol(x, y))?;
            }
        }
        Ok(())
    }
}
