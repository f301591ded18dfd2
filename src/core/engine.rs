//! The progression engine: clicks, upgrades, prestige and resets.
//!
//! [`ProgressionEngine`] owns the [`GameState`], consults the
//! [`RuleTables`], saves the full state after every mutating command and
//! queues [`GameEvent`]s for the presentation layer. Time and randomness
//! are passed in by the caller so every command is deterministic under test.

use super::constants::{
    CRITICAL_CHANCE_PER_LEVEL, CRITICAL_MULTIPLIER, RAPID_CLICK_BASE_BONUS,
    RAPID_CLICK_BONUS_PER_STREAK_LEVEL, RAPID_CLICK_WINDOW_MS,
};
use super::events::{GameEvent, TimerCommand};
use super::game_state::{GameState, Theme};
use crate::achievements::AchievementId;
use crate::error::DeclineReason;
use crate::persistence::{load_state, save_state, KeyValueStore};
use crate::rules::{auto_click_interval, RuleTables, UpgradeCost, UpgradeType};
use rand::Rng;
use std::time::Duration;

/// Everything that happened during one click.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClickResult {
    pub value_gained: f64,
    pub critical: bool,
    /// Streak after the click
    pub streak: u32,
    pub milestones: Vec<f64>,
    pub achievements_unlocked: Vec<AchievementId>,
    pub stage_advanced: bool,
    /// Stage after the click
    pub stage: u32,
    pub fully_grown: bool,
    /// The plant was already grown; nothing changed
    pub already_complete: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpgradeResult {
    Purchased {
        kind: UpgradeType,
        level: u32,
        cost: f64,
        /// Set when the auto-clicker cadence changed
        timer: Option<TimerCommand>,
    },
    Declined {
        kind: UpgradeType,
        reason: DeclineReason,
    },
}

impl UpgradeResult {
    pub fn is_success(&self) -> bool {
        matches!(self, UpgradeResult::Purchased { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PrestigeResult {
    Performed {
        level: u32,
        multiplier: f64,
        timer: TimerCommand,
    },
    Declined {
        reason: DeclineReason,
    },
}

impl PrestigeResult {
    pub fn is_success(&self) -> bool {
        matches!(self, PrestigeResult::Performed { .. })
    }
}

/// Value of a click against `state` at `now_ms`, and whether it was critical.
///
/// The rapid-click window is measured from the last *manual* click, so an
/// auto-click landing within it also gets the bonus.
pub fn compute_click_value(state: &GameState, now_ms: i64, rng: &mut impl Rng) -> (f64, bool) {
    let time_diff = now_ms.saturating_sub(state.last_click_time);
    let rapid_bonus = if time_diff < RAPID_CLICK_WINDOW_MS {
        RAPID_CLICK_BASE_BONUS + state.streak_bonus_level as f64 * RAPID_CLICK_BONUS_PER_STREAK_LEVEL
    } else {
        1.0
    };

    let mut value = state.click_power as f64 * rapid_bonus * state.prestige_multiplier;

    let crit_chance = state.critical_click_level as f64 * CRITICAL_CHANCE_PER_LEVEL;
    let critical = rng.gen::<f64>() < crit_chance;
    if critical {
        value *= CRITICAL_MULTIPLIER;
    }

    (value, critical)
}

pub struct ProgressionEngine<S: KeyValueStore> {
    state: GameState,
    rules: RuleTables,
    store: S,
    events: Vec<GameEvent>,
}

impl<S: KeyValueStore> ProgressionEngine<S> {
    /// Load state from `store`, falling back to defaults per field.
    pub fn load(store: S, rules: RuleTables) -> Self {
        let state = load_state(&store, &rules);
        tracing::info!(
            stage = state.stage,
            total_clicks = state.total_clicks,
            prestige_level = state.prestige_level,
            "game state loaded"
        );
        Self::with_state(state, rules, store)
    }

    /// Start from an explicit state. Nothing is saved until the first command.
    pub fn with_state(state: GameState, rules: RuleTables, store: S) -> Self {
        Self {
            state,
            rules,
            store,
            events: Vec::new(),
        }
    }

    // === Commands ===

    /// Apply one click. `is_auto` marks clicks from the auto-clicker, which
    /// neither extend the streak nor move the rapid-click window.
    pub fn apply_click(&mut self, is_auto: bool, now_ms: i64, rng: &mut impl Rng) -> ClickResult {
        if self.is_fully_grown() {
            self.events.push(GameEvent::FullyGrown);
            return ClickResult {
                streak: self.state.click_streak,
                stage: self.state.stage,
                fully_grown: true,
                already_complete: true,
                ..Default::default()
            };
        }

        let (value, critical) = compute_click_value(&self.state, now_ms, rng);

        self.state.clicks_in_stage += value;
        self.state.total_clicks += value;
        if !is_auto {
            self.state.click_streak += 1;
            self.state.last_click_time = now_ms;
        }
        self.events.push(GameEvent::ClickApplied {
            value,
            critical,
            auto: is_auto,
        });
        tracing::debug!(value, critical, auto = is_auto, "click applied");

        let milestones = self.rules.milestones_hit(self.state.clicks_in_stage);
        for &milestone in &milestones {
            self.events.push(GameEvent::MilestoneReached { value: milestone });
        }

        // Evaluated before the stage check; a stage achievement unlocks on
        // the first click made at that stage.
        let achievements_unlocked = self.unlock_qualified_achievements();

        let mut stage_advanced = false;
        if self.state.clicks_in_stage >= self.rules.threshold_for(self.state.stage) {
            self.state.stage += 1;
            self.state.clicks_in_stage = 0.0;
            stage_advanced = true;
            self.events.push(GameEvent::StageCompleted {
                stage: self.state.stage,
            });
            tracing::info!(stage = self.state.stage, "stage completed");

            if self.is_fully_grown() {
                self.events.push(GameEvent::FullyGrown);
                tracing::info!("plant fully grown");
            }
        }

        self.persist();

        ClickResult {
            value_gained: value,
            critical,
            streak: self.state.click_streak,
            milestones,
            achievements_unlocked,
            stage_advanced,
            stage: self.state.stage,
            fully_grown: self.is_fully_grown(),
            already_complete: false,
        }
    }

    /// Buy the next level of `kind` with accumulated clicks.
    pub fn buy_upgrade(&mut self, kind: UpgradeType) -> UpgradeResult {
        let current = kind.level(&self.state);
        let cost = match self.rules.cost_for(kind, current) {
            UpgradeCost::Max => return self.decline_upgrade(kind, DeclineReason::MaxLevel),
            UpgradeCost::Price(price) => price,
        };
        if self.state.total_clicks < cost {
            let reason = DeclineReason::InsufficientClicks {
                cost,
                available: self.state.total_clicks,
            };
            return self.decline_upgrade(kind, reason);
        }

        self.state.total_clicks -= cost;
        let level = {
            let level = kind.level_mut(&mut self.state);
            *level += 1;
            *level
        };

        let timer = match kind {
            UpgradeType::AutoClicker => auto_click_interval(level).map(TimerCommand::Start),
            _ => None,
        };

        self.events.push(GameEvent::UpgradePurchased { kind, level });
        if let Some(command) = timer {
            self.events.push(GameEvent::AutoClicker(command));
        }
        tracing::info!(upgrade = kind.name(), level, cost, "upgrade purchased");

        self.persist();

        UpgradeResult::Purchased {
            kind,
            level,
            cost,
            timer,
        }
    }

    /// Reset progression for a permanent doubling of click value.
    /// Requires the plant to have reached the final stage.
    pub fn prestige(&mut self) -> PrestigeResult {
        let required = self.rules.final_stage();
        if self.state.stage < required {
            let reason = DeclineReason::NotEligible {
                stage: self.state.stage,
                required,
            };
            tracing::debug!(%reason, "prestige declined");
            self.events.push(GameEvent::PrestigeDeclined {
                reason: reason.clone(),
            });
            return PrestigeResult::Declined { reason };
        }

        self.state.increment_prestige();
        self.state.reset_progression();

        let level = self.state.prestige_level;
        let multiplier = self.state.prestige_multiplier;
        self.events
            .push(GameEvent::PrestigePerformed { level, multiplier });
        self.events
            .push(GameEvent::AutoClicker(TimerCommand::Stop));
        tracing::info!(level, multiplier, "prestige performed");

        self.persist();

        PrestigeResult::Performed {
            level,
            multiplier,
            timer: TimerCommand::Stop,
        }
    }

    /// Wipe all progress including prestige. Settings are kept.
    /// Confirmation is the caller's job.
    pub fn reset_all(&mut self) {
        self.state.reset_all();
        self.events
            .push(GameEvent::AutoClicker(TimerCommand::Stop));
        self.events.push(GameEvent::Reset);
        tracing::info!("game reset");
        self.persist();
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.state.settings.theme.toggled();
        self.state.settings.theme = theme;
        self.events.push(GameEvent::ThemeChanged { theme });
        self.persist();
        theme
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.state.settings.sound_enabled = enabled;
        self.events.push(GameEvent::SoundToggled { enabled });
        self.persist();
    }

    // === Queries ===

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for tools and tests. Changes are saved with the
    /// next command.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn rules(&self) -> &RuleTables {
        &self.rules
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Take all queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_fully_grown(&self) -> bool {
        self.rules.is_fully_grown(self.state.stage)
    }

    pub fn can_prestige(&self) -> bool {
        self.state.stage >= self.rules.final_stage()
    }

    /// Percent of the current stage threshold reached, 0-100.
    pub fn stage_progress(&self) -> f64 {
        if self.is_fully_grown() {
            return 100.0;
        }
        let threshold = self.rules.threshold_for(self.state.stage);
        (self.state.clicks_in_stage / threshold * 100.0).min(100.0)
    }

    pub fn upgrade_cost(&self, kind: UpgradeType) -> UpgradeCost {
        self.rules.cost_for(kind, kind.level(&self.state))
    }

    pub fn can_afford(&self, kind: UpgradeType) -> bool {
        self.upgrade_cost(kind)
            .price()
            .is_some_and(|price| self.state.total_clicks >= price)
    }

    /// Multiplier the next prestige would grant.
    pub fn next_prestige_multiplier(&self) -> f64 {
        GameState::multiplier_for_level(self.state.prestige_level + 1)
    }

    /// (unlocked, total) achievement counts.
    pub fn achievement_counts(&self) -> (usize, usize) {
        (
            self.state.achievements.unlocked_count(),
            self.rules.achievements().len(),
        )
    }

    /// Cadence the auto-clicker should run at, if it is owned at all.
    pub fn auto_click_interval(&self) -> Option<Duration> {
        auto_click_interval(self.state.auto_clicker_level)
    }

    // === Internals ===

    fn unlock_qualified_achievements(&mut self) -> Vec<AchievementId> {
        let ids: Vec<AchievementId> = self
            .rules
            .newly_qualified(&self.state)
            .iter()
            .map(|def| def.id)
            .collect();
        for &id in &ids {
            self.state.achievements.unlock(id);
            self.events.push(GameEvent::AchievementUnlocked { id });
            tracing::info!(achievement = id.key(), "achievement unlocked");
        }
        ids
    }

    fn decline_upgrade(&mut self, kind: UpgradeType, reason: DeclineReason) -> UpgradeResult {
        tracing::debug!(upgrade = kind.name(), %reason, "upgrade declined");
        self.events.push(GameEvent::UpgradeDeclined {
            kind,
            reason: reason.clone(),
        });
        UpgradeResult::Declined { kind, reason }
    }

    fn persist(&mut self) {
        if let Err(e) = save_state(&mut self.store, &self.state) {
            tracing::warn!(error = %e, "failed to save game state");
            self.events.push(GameEvent::SaveFailed {
                message: e.to_string(),
            });
        }
    }
}
