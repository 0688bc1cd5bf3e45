//! Game configuration constants.
//!
//! This module defines the main gameplay parameters such as the raccoon
//! turn period and the starting layout for the demo game.

/// Each raccoon takes a turn every time the board's turn counter reaches a
/// multiple of this value.
pub const RACCOON_TURN_FREQUENCY: u32 = 20;

/// Starting layout for the demo game loop, in the text grid format
/// documented in `game::grid`.
pub const DEMO_GRID: &str = "P-B---C-\n--B--B--\n-R-B--S-\n---B--B-\n-B----O-\n------B-";
