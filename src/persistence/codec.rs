//! Field-by-field mapping between [`GameState`] and the key-value store.
//!
//! Every field lives under its own key. Scalars are decimal strings; the
//! achievement set and settings are JSON. Loading never fails: a missing
//! or unparsable key falls back to that field's default.

use super::store::KeyValueStore;
use crate::achievements::{AchievementId, Achievements};
use crate::core::game_state::{GameState, Settings};
use crate::error::PersistenceError;
use crate::rules::{RuleTables, UpgradeType};
use std::str::FromStr;

pub const KEY_STAGE: &str = "plantStage";
pub const KEY_CLICKS_IN_STAGE: &str = "clicksInStage";
pub const KEY_TOTAL_CLICKS: &str = "totalClicks";
pub const KEY_CLICK_STREAK: &str = "clickStreak";
pub const KEY_AUTO_CLICKER_LEVEL: &str = "autoClickerLevel";
pub const KEY_CLICK_POWER: &str = "clickPower";
pub const KEY_CRITICAL_CLICK_LEVEL: &str = "criticalClickLevel";
pub const KEY_STREAK_BONUS_LEVEL: &str = "streakBonusLevel";
pub const KEY_ACHIEVEMENTS: &str = "achievements";
pub const KEY_LAST_CLICK_TIME: &str = "lastClickTime";
pub const KEY_PRESTIGE_LEVEL: &str = "prestigeLevel";
pub const KEY_PRESTIGE_MULTIPLIER: &str = "prestigeMultiplier";
pub const KEY_SETTINGS: &str = "settings";

/// Every key written by [`save_state`].
pub const ALL_KEYS: [&str; 13] = [
    KEY_STAGE,
    KEY_CLICKS_IN_STAGE,
    KEY_TOTAL_CLICKS,
    KEY_CLICK_STREAK,
    KEY_AUTO_CLICKER_LEVEL,
    KEY_CLICK_POWER,
    KEY_CRITICAL_CLICK_LEVEL,
    KEY_STREAK_BONUS_LEVEL,
    KEY_ACHIEVEMENTS,
    KEY_LAST_CLICK_TIME,
    KEY_PRESTIGE_LEVEL,
    KEY_PRESTIGE_MULTIPLIER,
    KEY_SETTINGS,
];

fn load_parsed<T: FromStr>(store: &impl KeyValueStore, key: &str, default: T) -> T {
    match store.get(key) {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(key, value = %raw, "corrupt value, using default");
                default
            }
        },
    }
}

/// Non-negative finite real.
fn load_amount(store: &impl KeyValueStore, key: &str) -> f64 {
    let value: f64 = load_parsed(store, key, 0.0);
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        tracing::warn!(key, value, "out of range amount, using default");
        0.0
    }
}

fn load_achievements(store: &impl KeyValueStore) -> Achievements {
    let Some(raw) = store.get(KEY_ACHIEVEMENTS) else {
        return Achievements::default();
    };
    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(keys) => keys
            .iter()
            .filter_map(|k| {
                let id = AchievementId::from_key(k);
                if id.is_none() {
                    tracing::warn!(id = %k, "dropping unknown achievement id");
                }
                id
            })
            .collect(),
        Err(e) => {
            tracing::warn!(error = %e, "corrupt achievements, using default");
            Achievements::default()
        }
    }
}

fn load_settings(store: &impl KeyValueStore) -> Settings {
    let Some(raw) = store.get(KEY_SETTINGS) else {
        return Settings::default();
    };
    serde_json::from_str(&raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "corrupt settings, using default");
        Settings::default()
    })
}

/// Build a [`GameState`] from the store, clamping values into the ranges
/// `rules` allows.
pub fn load_state(store: &impl KeyValueStore, rules: &RuleTables) -> GameState {
    let defaults = GameState::default();

    let mut state = GameState {
        stage: load_parsed(store, KEY_STAGE, defaults.stage),
        clicks_in_stage: load_amount(store, KEY_CLICKS_IN_STAGE),
        total_clicks: load_amount(store, KEY_TOTAL_CLICKS),
        click_streak: load_parsed(store, KEY_CLICK_STREAK, defaults.click_streak),
        last_click_time: load_parsed(store, KEY_LAST_CLICK_TIME, defaults.last_click_time),
        auto_clicker_level: load_parsed(store, KEY_AUTO_CLICKER_LEVEL, defaults.auto_clicker_level),
        click_power: load_parsed(store, KEY_CLICK_POWER, defaults.click_power),
        critical_click_level: load_parsed(
            store,
            KEY_CRITICAL_CLICK_LEVEL,
            defaults.critical_click_level,
        ),
        streak_bonus_level: load_parsed(store, KEY_STREAK_BONUS_LEVEL, defaults.streak_bonus_level),
        prestige_level: load_parsed(store, KEY_PRESTIGE_LEVEL, defaults.prestige_level),
        prestige_multiplier: defaults.prestige_multiplier,
        achievements: load_achievements(store),
        settings: load_settings(store),
    };

    state.stage = state.stage.min(rules.total_stages());
    for kind in UpgradeType::ALL {
        let level = kind.level_mut(&mut state);
        *level = (*level).clamp(kind.base_level(), kind.max_level());
    }
    // The stored multiplier is informational; the level is authoritative.
    state.prestige_multiplier = GameState::multiplier_for_level(state.prestige_level);

    state
}

/// Write every field of `state`, then flush.
///
/// All keys are attempted even if one fails; the first error is returned.
pub fn save_state(store: &mut impl KeyValueStore, state: &GameState) -> Result<(), PersistenceError> {
    let entries = [
        (KEY_STAGE, state.stage.to_string()),
        (KEY_CLICKS_IN_STAGE, state.clicks_in_stage.to_string()),
        (KEY_TOTAL_CLICKS, state.total_clicks.to_string()),
        (KEY_CLICK_STREAK, state.click_streak.to_string()),
        (KEY_AUTO_CLICKER_LEVEL, state.auto_clicker_level.to_string()),
        (KEY_CLICK_POWER, state.click_power.to_string()),
        (KEY_CRITICAL_CLICK_LEVEL, state.critical_click_level.to_string()),
        (KEY_STREAK_BONUS_LEVEL, state.streak_bonus_level.to_string()),
        (KEY_ACHIEVEMENTS, serde_json::to_string(&state.achievements)?),
        (KEY_LAST_CLICK_TIME, state.last_click_time.to_string()),
        (KEY_PRESTIGE_LEVEL, state.prestige_level.to_string()),
        (KEY_PRESTIGE_MULTIPLIER, state.prestige_multiplier.to_string()),
        (KEY_SETTINGS, serde_json::to_string(&state.settings)?),
    ];

    let mut first_error = None;
    for (key, value) in entries {
        if let Err(e) = store.set(key, value) {
            first_error.get_or_insert(e);
        }
    }
    if let Err(e) = store.flush() {
        first_error.get_or_insert(e);
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game_state::Theme;
    use crate::persistence::store::MemoryStore;

    #[test]
    fn test_empty_store_loads_defaults() {
        let store = MemoryStore::new();
        let state = load_state(&store, &RuleTables::standard());
        assert_eq!(state, GameState::default());
    }

    #[test]
    fn test_save_then_load() {
        let rules = RuleTables::standard();
        let mut state = GameState::default();
        state.stage = 3;
        state.clicks_in_stage = 12.5;
        state.total_clicks = 30_000.25;
        state.click_streak = 77;
        state.last_click_time = 1_700_000_000_123;
        state.auto_clicker_level = 2;
        state.click_power = 4;
        state.critical_click_level = 1;
        state.streak_bonus_level = 3;
        state.prestige_level = 2;
        state.prestige_multiplier = 4.0;
        state.achievements.unlock(AchievementId::Clicker100);
        state.achievements.unlock(AchievementId::Stage3);
        state.settings.theme = Theme::Dark;
        state.settings.sound_enabled = false;

        let mut store = MemoryStore::new();
        save_state(&mut store, &state).unwrap();
        assert_eq!(store.len(), ALL_KEYS.len());

        let loaded = load_state(&store, &rules);
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_scalars_use_decimal_strings() {
        let mut state = GameState::default();
        state.stage = 2;
        state.total_clicks = 2.5;
        let mut store = MemoryStore::new();
        save_state(&mut store, &state).unwrap();

        assert_eq!(store.get(KEY_STAGE).as_deref(), Some("2"));
        assert_eq!(store.get(KEY_TOTAL_CLICKS).as_deref(), Some("2.5"));
        assert_eq!(store.get(KEY_ACHIEVEMENTS).as_deref(), Some("[]"));
    }

    #[test]
    fn test_corrupt_fields_fall_back_individually() {
        let mut store = MemoryStore::new();
        store.insert(KEY_STAGE, "two");
        store.insert(KEY_TOTAL_CLICKS, "150");
        store.insert(KEY_CLICK_POWER, "-3");
        store.insert(KEY_ACHIEVEMENTS, "{not json");
        store.insert(KEY_SETTINGS, r#"{"soundEnabled":false,"theme":"dark"}"#);

        let state = load_state(&store, &RuleTables::standard());
        assert_eq!(state.stage, 0);
        assert_eq!(state.total_clicks, 150.0);
        assert_eq!(state.click_power, 1);
        assert!(state.achievements.is_empty());
        assert_eq!(state.settings.theme, Theme::Dark);
        assert!(!state.settings.sound_enabled);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let mut store = MemoryStore::new();
        store.insert(KEY_STAGE, "42");
        store.insert(KEY_AUTO_CLICKER_LEVEL, "9");
        store.insert(KEY_CLICK_POWER, "0");
        store.insert(KEY_CLICKS_IN_STAGE, "-5");
        store.insert(KEY_TOTAL_CLICKS, "NaN");

        let state = load_state(&store, &RuleTables::standard());
        assert_eq!(state.stage, 5);
        assert_eq!(state.auto_clicker_level, 4);
        assert_eq!(state.click_power, 1);
        assert_eq!(state.clicks_in_stage, 0.0);
        assert_eq!(state.total_clicks, 0.0);
    }

    #[test]
    fn test_multiplier_is_derived_from_level() {
        let mut store = MemoryStore::new();
        store.insert(KEY_PRESTIGE_LEVEL, "3");
        store.insert(KEY_PRESTIGE_MULTIPLIER, "1");

        let state = load_state(&store, &RuleTables::standard());
        assert_eq!(state.prestige_level, 3);
        assert_eq!(state.prestige_multiplier, 8.0);
    }

    #[test]
    fn test_unknown_achievement_ids_are_dropped() {
        let mut store = MemoryStore::new();
        store.insert(KEY_ACHIEVEMENTS, r#"["clicker_100","retired_id","stage_3"]"#);

        let state = load_state(&store, &RuleTables::standard());
        assert_eq!(state.achievements.unlocked_count(), 2);
        assert!(state.achievements.is_unlocked(AchievementId::Stage3));
    }

    #[test]
    fn test_save_reports_store_failure() {
        let mut store = MemoryStore::new();
        store.set_fail_writes(true);
        let result = save_state(&mut store, &GameState::default());
        assert!(matches!(result, Err(PersistenceError::Unavailable)));
    }
}
