//! Core game state and logic.

pub mod auto_clicker;
pub mod constants;
pub mod engine;
pub mod events;
pub mod game_state;

pub use auto_clicker::AutoClicker;
pub use engine::{compute_click_value, ClickResult, PrestigeResult, ProgressionEngine, UpgradeResult};
pub use events::{GameEvent, TimerCommand};
pub use game_state::{GameState, Settings, Theme};
