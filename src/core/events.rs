//! Signals the engine emits for the presentation layer.
//!
//! The engine queues a [`GameEvent`] for everything a UI might want to
//! show or react to; the host drains the queue after each command. The
//! engine never touches UI types directly.

use crate::achievements::AchievementId;
use crate::core::game_state::Theme;
use crate::error::DeclineReason;
use crate::rules::UpgradeType;
use std::time::Duration;

/// What the host should do with its auto-click timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Cancel any running schedule and start one at this cadence.
    Start(Duration),
    /// Cancel any running schedule.
    Stop,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    // ── Clicks ──────────────────────────────────────────────────
    /// A click added `value` to progress and currency.
    ClickApplied {
        value: f64,
        critical: bool,
        auto: bool,
    },

    /// `clicks_in_stage` landed exactly on a milestone.
    MilestoneReached { value: f64 },

    AchievementUnlocked { id: AchievementId },

    // ── Growth ──────────────────────────────────────────────────
    /// The plant finished a stage; `stage` is the new stage index.
    StageCompleted { stage: u32 },

    /// Emitted on the click that finishes the last stage, and on every
    /// click after that.
    FullyGrown,

    // ── Shop and prestige ───────────────────────────────────────
    UpgradePurchased { kind: UpgradeType, level: u32 },

    UpgradeDeclined {
        kind: UpgradeType,
        reason: DeclineReason,
    },

    PrestigePerformed { level: u32, multiplier: f64 },

    PrestigeDeclined { reason: DeclineReason },

    /// Host should apply this timer command.
    AutoClicker(TimerCommand),

    Reset,

    // ── Settings ────────────────────────────────────────────────
    ThemeChanged { theme: Theme },

    SoundToggled { enabled: bool },

    /// Saving failed. The operation itself still took effect.
    SaveFailed { message: String },
}
