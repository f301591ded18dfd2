//! Upgrade kinds and their price lookup.

use crate::core::constants::{MAX_CLICK_POWER, MAX_UPGRADE_LEVEL};
use crate::core::game_state::GameState;

/// The four purchasable upgrades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpgradeType {
    AutoClicker,
    ClickPower,
    CriticalClick,
    StreakBonus,
}

impl UpgradeType {
    /// All upgrade kinds in shop order.
    pub const ALL: [UpgradeType; 4] = [
        UpgradeType::AutoClicker,
        UpgradeType::ClickPower,
        UpgradeType::CriticalClick,
        UpgradeType::StreakBonus,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            UpgradeType::AutoClicker => "Auto-clicker",
            UpgradeType::ClickPower => "Click Power",
            UpgradeType::CriticalClick => "Critical Click",
            UpgradeType::StreakBonus => "Streak Bonus",
        }
    }

    /// Level a fresh game starts at.
    pub fn base_level(&self) -> u32 {
        match self {
            UpgradeType::ClickPower => 1,
            _ => 0,
        }
    }

    /// Highest level that can be bought.
    pub fn max_level(&self) -> u32 {
        match self {
            UpgradeType::ClickPower => MAX_CLICK_POWER,
            _ => MAX_UPGRADE_LEVEL,
        }
    }

    /// Current level of this upgrade in `state`.
    pub fn level(&self, state: &GameState) -> u32 {
        match self {
            UpgradeType::AutoClicker => state.auto_clicker_level,
            UpgradeType::ClickPower => state.click_power,
            UpgradeType::CriticalClick => state.critical_click_level,
            UpgradeType::StreakBonus => state.streak_bonus_level,
        }
    }

    pub(crate) fn level_mut<'a>(&self, state: &'a mut GameState) -> &'a mut u32 {
        match self {
            UpgradeType::AutoClicker => &mut state.auto_clicker_level,
            UpgradeType::ClickPower => &mut state.click_power,
            UpgradeType::CriticalClick => &mut state.critical_click_level,
            UpgradeType::StreakBonus => &mut state.streak_bonus_level,
        }
    }
}

/// Price of the next level, or `Max` once the tier cap is reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpgradeCost {
    Price(f64),
    Max,
}

impl UpgradeCost {
    pub fn price(&self) -> Option<f64> {
        match self {
            UpgradeCost::Price(p) => Some(*p),
            UpgradeCost::Max => None,
        }
    }

    pub fn is_max(&self) -> bool {
        matches!(self, UpgradeCost::Max)
    }
}
