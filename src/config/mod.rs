//! Main configuration module.

pub mod game;
