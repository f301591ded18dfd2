//! Achievement system module.
//!
//! Achievements belong to the current run: they are stored with the rest of
//! the game state and cleared by prestige and full reset.

pub mod data;
pub mod types;

pub use data::{get_achievement_def, qualifies, ALL_ACHIEVEMENTS};
pub use types::{AchievementDef, AchievementId, AchievementKind, Achievements};
