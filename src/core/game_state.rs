use super::constants::PRESTIGE_BASE;
use crate::achievements::Achievements;
use serde::{Deserialize, Serialize};

/// Color theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Player preferences. No effect on the economy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub sound_enabled: bool,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            theme: Theme::Light,
        }
    }
}

/// Main game state containing all player progress
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Current growth stage index
    pub stage: u32,
    /// Click value accumulated toward the current stage threshold
    pub clicks_in_stage: f64,
    /// Lifetime click value, also spent on upgrades
    pub total_clicks: f64,
    /// Consecutive manual clicks
    pub click_streak: u32,
    /// Epoch millis of the last manual click
    pub last_click_time: i64,
    pub auto_clicker_level: u32,
    pub click_power: u32,
    pub critical_click_level: u32,
    pub streak_bonus_level: u32,
    pub prestige_level: u32,
    /// Always `2^prestige_level`
    pub prestige_multiplier: f64,
    pub achievements: Achievements,
    pub settings: Settings,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            stage: 0,
            clicks_in_stage: 0.0,
            total_clicks: 0.0,
            click_streak: 0,
            last_click_time: 0,
            auto_clicker_level: 0,
            click_power: 1,
            critical_click_level: 0,
            streak_bonus_level: 0,
            prestige_level: 0,
            prestige_multiplier: 1.0,
            achievements: Achievements::default(),
            settings: Settings::default(),
        }
    }
}

impl GameState {
    /// Multiplier granted by a given prestige level.
    pub fn multiplier_for_level(level: u32) -> f64 {
        PRESTIGE_BASE.powi(level as i32)
    }

    /// Reset everything a prestige wipes. Prestige fields, lifetime clicks
    /// and settings are kept.
    pub fn reset_progression(&mut self) {
        self.stage = 0;
        self.clicks_in_stage = 0.0;
        self.click_streak = 0;
        self.auto_clicker_level = 0;
        self.click_power = 1;
        self.critical_click_level = 0;
        self.streak_bonus_level = 0;
        self.last_click_time = 0;
        self.achievements.clear();
    }

    /// Reset every field except settings.
    pub fn reset_all(&mut self) {
        let settings = self.settings;
        *self = Self {
            settings,
            ..Self::default()
        };
    }

    /// Raise the prestige level by one and recompute the multiplier.
    pub fn increment_prestige(&mut self) {
        self.prestige_level += 1;
        self.prestige_multiplier = Self::multiplier_for_level(self.prestige_level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::AchievementId;

    #[test]
    fn test_new_game_state() {
        let state = GameState::default();
        assert_eq!(state.stage, 0);
        assert_eq!(state.click_power, 1);
        assert_eq!(state.prestige_multiplier, 1.0);
        assert!(state.achievements.is_empty());
        assert!(state.settings.sound_enabled);
        assert_eq!(state.settings.theme, Theme::Light);
    }

    #[test]
    fn test_multiplier_for_level() {
        assert_eq!(GameState::multiplier_for_level(0), 1.0);
        assert_eq!(GameState::multiplier_for_level(1), 2.0);
        assert_eq!(GameState::multiplier_for_level(5), 32.0);
    }

    #[test]
    fn test_reset_progression_keeps_prestige_and_settings() {
        let mut state = GameState {
            stage: 4,
            clicks_in_stage: 100.0,
            total_clicks: 5_000.0,
            click_streak: 42,
            last_click_time: 99,
            auto_clicker_level: 3,
            click_power: 4,
            critical_click_level: 2,
            streak_bonus_level: 1,
            prestige_level: 2,
            prestige_multiplier: 4.0,
            achievements: [AchievementId::Stage3].into_iter().collect(),
            settings: Settings {
                sound_enabled: false,
                theme: Theme::Dark,
            },
        };
        state.reset_progression();

        assert_eq!(state.stage, 0);
        assert_eq!(state.click_power, 1);
        assert_eq!(state.auto_clicker_level, 0);
        assert!(state.achievements.is_empty());
        assert_eq!(state.prestige_level, 2);
        assert_eq!(state.prestige_multiplier, 4.0);
        assert_eq!(state.total_clicks, 5_000.0);
        assert_eq!(state.settings.theme, Theme::Dark);
    }

    #[test]
    fn test_reset_all_keeps_only_settings() {
        let mut state = GameState::default();
        state.prestige_level = 3;
        state.prestige_multiplier = 8.0;
        state.total_clicks = 12.0;
        state.settings.theme = Theme::Dark;
        state.reset_all();

        assert_eq!(state.prestige_level, 0);
        assert_eq!(state.prestige_multiplier, 1.0);
        assert_eq!(state.total_clicks, 0.0);
        assert_eq!(state.settings.theme, Theme::Dark);
    }

    #[test]
    fn test_settings_json_shape() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert_eq!(json, r#"{"soundEnabled":true,"theme":"light"}"#);
    }
}
