//! Main entry point for the terminal demo.
//!
//! Initializes logging and runs the interactive game loop against the demo
//! board layout.

use raccoon_grid::game::game_loop::run_game_loop;

fn main() {
    // Initialize logger from environment variable (default to info level).
    env_logger::init();

    if let Err(err) = run_game_loop() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
