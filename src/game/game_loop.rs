//! Standalone game loop for local testing/demo.
//!
//! This module provides an interactive loop for playing the game in the
//! terminal. It is a driver over the engine's public operations: record an
//! input direction, advance the turn clock, print the grid.

use std::io::{self, Write};

use crate::config::game::DEMO_GRID;
use crate::game::board::GameBoard;
use crate::game::error::GameError;
use crate::game::systems::render::{print_game_state, print_grid};
use crate::game::types::Direction;

/// Prompt the user for a movement direction. `None` means wait in place.
fn get_player_input() -> Option<Direction> {
    print!("Enter direction (← ↑ ↓ → then Enter, empty to wait): ");
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).ok()?;

    match input.trim() {
        "\x1b[D" => Some(Direction::Left),
        "\x1b[C" => Some(Direction::Right),
        "\x1b[A" => Some(Direction::Up),
        "\x1b[B" => Some(Direction::Down),
        _ => None,
    }
}

/// Run the interactive game on the demo layout until every raccoon is
/// trapped or inside a can.
pub fn run_game_loop() -> Result<(), GameError> {
    let mut board = GameBoard::new(1, 1);
    board.setup_from_grid(DEMO_GRID)?;

    println!("Game start!");
    print_grid(&board);

    loop {
        if let Some(direction) = get_player_input() {
            board.handle_event(direction)?;
        }
        let score = board.give_turns()?;

        print_game_state(&board);
        print_grid(&board);

        if let Some(score) = score {
            println!("All raccoons contained! Final score: {score}");
            // Machine-readable result line for scripts.
            let result = serde_json::json!({
                "turns": board.turns,
                "score": score,
                "grid": board.to_string(),
            });
            println!("{result}");
            return Ok(());
        }
    }
}
