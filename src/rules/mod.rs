//! Static rule tables consulted by the engine.
//!
//! Stage thresholds, milestones, upgrade price curves and the achievement
//! catalogue. The tables never change during a session; tests may build
//! their own with [`RuleTables::new`].

pub mod upgrades;

pub use upgrades::{UpgradeCost, UpgradeType};

use crate::achievements::{qualifies, AchievementDef, ALL_ACHIEVEMENTS};
use crate::core::constants::{
    AUTO_CLICKER_COSTS, AUTO_CLICK_BASE_INTERVAL_MS, AUTO_CLICK_INTERVAL_STEP_MS,
    AUTO_CLICK_MIN_INTERVAL_MS, CLICK_POWER_COSTS, CRITICAL_CLICK_COSTS, MILESTONES,
    STAGE_THRESHOLDS, STREAK_BONUS_COSTS,
};
use crate::core::game_state::GameState;
use std::time::Duration;

/// Per-upgrade price arrays, indexed by levels already bought.
#[derive(Debug, Clone, Copy)]
pub struct CostTables {
    pub auto_clicker: &'static [f64],
    pub click_power: &'static [f64],
    pub critical_click: &'static [f64],
    pub streak_bonus: &'static [f64],
}

impl CostTables {
    fn for_kind(&self, kind: UpgradeType) -> &'static [f64] {
        match kind {
            UpgradeType::AutoClicker => self.auto_clicker,
            UpgradeType::ClickPower => self.click_power,
            UpgradeType::CriticalClick => self.critical_click,
            UpgradeType::StreakBonus => self.streak_bonus,
        }
    }
}

/// Immutable game configuration.
#[derive(Debug, Clone, Copy)]
pub struct RuleTables {
    stage_thresholds: &'static [f64],
    milestones: &'static [f64],
    costs: CostTables,
    achievements: &'static [AchievementDef],
}

impl Default for RuleTables {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleTables {
    /// The tables the game ships with.
    pub fn standard() -> Self {
        Self {
            stage_thresholds: &STAGE_THRESHOLDS,
            milestones: &MILESTONES,
            costs: CostTables {
                auto_clicker: &AUTO_CLICKER_COSTS,
                click_power: &CLICK_POWER_COSTS,
                critical_click: &CRITICAL_CLICK_COSTS,
                streak_bonus: &STREAK_BONUS_COSTS,
            },
            achievements: ALL_ACHIEVEMENTS,
        }
    }

    /// Custom tables. Returns `None` when `stage_thresholds` is empty.
    pub fn new(
        stage_thresholds: &'static [f64],
        milestones: &'static [f64],
        costs: CostTables,
        achievements: &'static [AchievementDef],
    ) -> Option<Self> {
        if stage_thresholds.is_empty() {
            return None;
        }
        Some(Self {
            stage_thresholds,
            milestones,
            costs,
            achievements,
        })
    }

    /// Number of growth stages. A plant at this stage is fully grown.
    pub fn total_stages(&self) -> u32 {
        self.stage_thresholds.len() as u32
    }

    /// Last stage index, the one from which prestige is allowed.
    pub fn final_stage(&self) -> u32 {
        self.total_stages() - 1
    }

    pub fn is_fully_grown(&self, stage: u32) -> bool {
        stage >= self.total_stages()
    }

    /// Clicks needed to finish `stage`. Stages past the table reuse the
    /// last threshold.
    pub fn threshold_for(&self, stage: u32) -> f64 {
        let idx = (stage as usize).min(self.stage_thresholds.len() - 1);
        self.stage_thresholds[idx]
    }

    /// Milestones whose value exactly equals `clicks_in_stage`.
    ///
    /// A click that jumps over a milestone does not trigger it.
    pub fn milestones_hit(&self, clicks_in_stage: f64) -> Vec<f64> {
        self.milestones
            .iter()
            .copied()
            .filter(|m| *m == clicks_in_stage)
            .collect()
    }

    /// Price of the next level of `kind` when currently at `current_level`.
    pub fn cost_for(&self, kind: UpgradeType, current_level: u32) -> UpgradeCost {
        if current_level >= kind.max_level() {
            return UpgradeCost::Max;
        }
        let idx = current_level.saturating_sub(kind.base_level()) as usize;
        match self.costs.for_kind(kind).get(idx) {
            Some(price) => UpgradeCost::Price(*price),
            None => UpgradeCost::Max,
        }
    }

    pub fn achievements(&self) -> &'static [AchievementDef] {
        self.achievements
    }

    /// Achievements not yet unlocked whose predicate holds for `state`.
    pub fn newly_qualified(&self, state: &GameState) -> Vec<&'static AchievementDef> {
        self.achievements
            .iter()
            .filter(|def| !state.achievements.is_unlocked(def.id))
            .filter(|def| qualifies(def, state))
            .collect()
    }
}

/// Auto-click cadence for a given auto-clicker level. `None` at level 0.
pub fn auto_click_interval(level: u32) -> Option<Duration> {
    if level == 0 {
        return None;
    }
    let ms = AUTO_CLICK_BASE_INTERVAL_MS
        .saturating_sub(level as u64 * AUTO_CLICK_INTERVAL_STEP_MS)
        .max(AUTO_CLICK_MIN_INTERVAL_MS);
    Some(Duration::from_millis(ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::AchievementId;

    #[test]
    fn test_threshold_clamps_past_last_stage() {
        let rules = RuleTables::standard();
        assert_eq!(rules.threshold_for(0), 25.0);
        assert_eq!(rules.threshold_for(4), 250_000.0);
        assert_eq!(rules.threshold_for(5), 250_000.0);
        assert_eq!(rules.threshold_for(99), 250_000.0);
    }

    #[test]
    fn test_stage_counts() {
        let rules = RuleTables::standard();
        assert_eq!(rules.total_stages(), 5);
        assert_eq!(rules.final_stage(), 4);
        assert!(!rules.is_fully_grown(4));
        assert!(rules.is_fully_grown(5));
    }

    #[test]
    fn test_cost_for_regular_upgrades() {
        let rules = RuleTables::standard();
        assert_eq!(
            rules.cost_for(UpgradeType::AutoClicker, 0),
            UpgradeCost::Price(200.0)
        );
        assert_eq!(
            rules.cost_for(UpgradeType::AutoClicker, 2),
            UpgradeCost::Price(8_000.0)
        );
        assert_eq!(
            rules.cost_for(UpgradeType::StreakBonus, 3),
            UpgradeCost::Price(300_000.0)
        );
        assert_eq!(rules.cost_for(UpgradeType::CriticalClick, 4), UpgradeCost::Max);
        assert_eq!(rules.cost_for(UpgradeType::CriticalClick, 7), UpgradeCost::Max);
    }

    #[test]
    fn test_click_power_is_indexed_from_one() {
        let rules = RuleTables::standard();
        assert_eq!(
            rules.cost_for(UpgradeType::ClickPower, 1),
            UpgradeCost::Price(500.0)
        );
        assert_eq!(
            rules.cost_for(UpgradeType::ClickPower, 4),
            UpgradeCost::Price(80_000.0)
        );
        assert_eq!(rules.cost_for(UpgradeType::ClickPower, 5), UpgradeCost::Max);
    }

    #[test]
    fn test_milestones_require_exact_match() {
        let rules = RuleTables::standard();
        assert_eq!(rules.milestones_hit(10.0), vec![10.0]);
        assert!(rules.milestones_hit(11.0).is_empty());
        assert!(rules.milestones_hit(10.5).is_empty());
    }

    #[test]
    fn test_newly_qualified_skips_unlocked() {
        let rules = RuleTables::standard();
        let mut state = GameState::default();
        state.total_clicks = 1_500.0;

        let ids: Vec<_> = rules.newly_qualified(&state).iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![AchievementId::Clicker100, AchievementId::Clicker1000]);

        state.achievements.unlock(AchievementId::Clicker100);
        let ids: Vec<_> = rules.newly_qualified(&state).iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![AchievementId::Clicker1000]);
    }

    #[test]
    fn test_auto_click_interval() {
        assert_eq!(auto_click_interval(0), None);
        assert_eq!(auto_click_interval(1), Some(Duration::from_millis(850)));
        assert_eq!(auto_click_interval(4), Some(Duration::from_millis(400)));
        // Floor at 200ms
        assert_eq!(auto_click_interval(6), Some(Duration::from_millis(200)));
        assert_eq!(auto_click_interval(50), Some(Duration::from_millis(200)));
    }

    #[test]
    fn test_custom_tables() {
        static THRESHOLDS: [f64; 2] = [5.0, 10.0];
        static MILES: [f64; 1] = [3.0];
        static PRICES: [f64; 1] = [1.0];
        let rules = RuleTables::new(
            &THRESHOLDS,
            &MILES,
            CostTables {
                auto_clicker: &PRICES,
                click_power: &PRICES,
                critical_click: &PRICES,
                streak_bonus: &PRICES,
            },
            &[],
        )
        .unwrap();
        assert_eq!(rules.total_stages(), 2);
        // Short price table reports Max once exhausted
        assert_eq!(rules.cost_for(UpgradeType::AutoClicker, 1), UpgradeCost::Max);
        assert!(rules.newly_qualified(&GameState::default()).is_empty());
    }

    #[test]
    fn test_custom_tables_need_a_stage() {
        static PRICES: [f64; 1] = [1.0];
        let costs = CostTables {
            auto_clicker: &PRICES,
            click_power: &PRICES,
            critical_click: &PRICES,
            streak_bonus: &PRICES,
        };
        assert!(RuleTables::new(&[], &[], costs, &[]).is_none());
    }
}
