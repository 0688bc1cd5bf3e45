//! Game rendering system (terminal).
//!
//! This module provides functions to print the board and game state for
//! debugging/demo. The display reuses the grid symbol table.

use crate::game::board::GameBoard;

/// Print the board to the terminal, one symbol per tile.
pub fn print_grid(board: &GameBoard) {
    for row in board.to_grid() {
        let line: String = row.into_iter().collect();
        println!("{line}");
    }
    println!();
}

/// Print the turn counter and the raccoon tally.
pub fn print_game_state(board: &GameBoard) {
    let raccoons = board.raccoon_ids().len();
    println!("--- Turn {} ---", board.turns);
    println!("Raccoons on the loose: {raccoons}");
    println!();
}
