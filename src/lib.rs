//! Jungle Run - Terminal Side-Scrolling Arcade Game Library
//!
//! This module exposes the game logic for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod build_info;
pub mod constants;
pub mod game;
pub mod input;
pub mod persistence;
pub mod records;

// UI is tightly coupled to the terminal; only the binary should touch it
pub mod ui;

pub use game::{process_input, tick_run, Difficulty, RunOutcome, RunnerGame, RunnerInput};
pub use records::Records;
