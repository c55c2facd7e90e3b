//! Terminal UI scenes. Tightly coupled to ratatui; the simulation never
//! depends on anything in here.

pub mod game_common;
pub mod home_scene;
pub mod run_scene;

pub use home_scene::render_home_scene;
pub use run_scene::render_run_scene;
