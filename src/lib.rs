//! Sprout - an incremental plant-growing game library
//!
//! The progression engine, rule tables, achievements and persistence, kept
//! free of any terminal code so they can be tested and embedded directly.

pub mod achievements;
pub mod build_info;
pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod rules;

pub use crate::core::{
    AutoClicker, ClickResult, GameEvent, GameState, PrestigeResult, ProgressionEngine,
    TimerCommand, UpgradeResult,
};
pub use error::{DeclineReason, PersistenceError};
pub use rules::{RuleTables, UpgradeCost, UpgradeType};
