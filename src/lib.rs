//! # Raccoon Grid
//!
//! A turn-based grid game engine: a player tries to trap raccoons by pushing
//! recycling bins around a rectangular board, while the raccoons roam and try
//! to climb into open garbage cans.
//!
//! The crate is the simulation core only. Rendering, input capture, and the
//! program entry point are external drivers that call into
//! [`game::board::GameBoard`]: place entities, submit a direction, advance
//! the turn clock, and read back
//! the grid and the final score.
//!
//! ## Modules
//!
//! - [`game`] — Board, entities, movement rules, turn scheduling, scoring
//! - [`config`] — Gameplay constants (raccoon turn period, demo board layout)

pub mod config;
pub mod game;
