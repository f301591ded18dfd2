//! Error and decline types shared by the engine and persistence layer.

use std::io;
use thiserror::Error;

/// Failure reading or writing the key-value store.
///
/// Never fatal: on load the affected fields fall back to defaults, on save
/// the engine logs a warning and emits a `SaveFailed` event.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("save file checksum mismatch")]
    Checksum,

    #[error("unsupported save version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("store unavailable")]
    Unavailable,
}

/// Why a command was declined. These are expected outcomes, not errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeclineReason {
    #[error("upgrade is already at max level")]
    MaxLevel,

    #[error("not enough clicks: need {cost}, have {available}")]
    InsufficientClicks { cost: f64, available: f64 },

    #[error("plant must reach stage {required} to prestige (currently {stage})")]
    NotEligible { stage: u32, required: u32 },
}
