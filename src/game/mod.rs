//! The jungle run simulation: data model and per-tick update logic.

pub mod logic;
pub mod types;

pub use logic::{process_input, tick_run, RunnerInput, PHYSICS_TICK_MS};
pub use types::{
    Collectible, CollectibleKind, Difficulty, GoalActor, Obstacle, Rect, RunOutcome, RunnerGame,
};
