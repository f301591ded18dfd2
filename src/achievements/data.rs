//! Static achievement definitions.

use super::types::{AchievementDef, AchievementId, AchievementKind};
use crate::core::game_state::GameState;

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // TOTAL CLICKS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::Clicker100,
        name: "Clicker Novice",
        description: "100 total clicks",
        threshold: 100.0,
        kind: AchievementKind::TotalClicks,
    },
    AchievementDef {
        id: AchievementId::Clicker1000,
        name: "Clicker Expert",
        description: "1,000 total clicks",
        threshold: 1_000.0,
        kind: AchievementKind::TotalClicks,
    },
    AchievementDef {
        id: AchievementId::Clicker5000,
        name: "Clicker Master",
        description: "5,000 total clicks",
        threshold: 5_000.0,
        kind: AchievementKind::TotalClicks,
    },
    AchievementDef {
        id: AchievementId::Clicker25000,
        name: "Clicker Legend",
        description: "25,000 total clicks",
        threshold: 25_000.0,
        kind: AchievementKind::TotalClicks,
    },
    // ═══════════════════════════════════════════════════════════════
    // STREAKS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::Streak50,
        name: "Hot Streak",
        description: "50 clicks in a row",
        threshold: 50.0,
        kind: AchievementKind::Streak,
    },
    AchievementDef {
        id: AchievementId::Streak200,
        name: "Legendary Streak",
        description: "200 clicks in a row",
        threshold: 200.0,
        kind: AchievementKind::Streak,
    },
    // ═══════════════════════════════════════════════════════════════
    // GROWTH
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::Stage3,
        name: "Cultivator",
        description: "Reach stage 3",
        threshold: 3.0,
        kind: AchievementKind::Stage,
    },
    AchievementDef {
        id: AchievementId::Stage5,
        name: "Master Gardener",
        description: "Fully grown lily!",
        threshold: 5.0,
        kind: AchievementKind::Stage,
    },
];

/// Look up the definition for an achievement id.
pub fn get_achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|def| def.id == id)
}

/// Whether `state` meets the achievement's threshold.
pub fn qualifies(def: &AchievementDef, state: &GameState) -> bool {
    let value = match def.kind {
        AchievementKind::TotalClicks => state.total_clicks,
        AchievementKind::Streak => state.click_streak as f64,
        AchievementKind::Stage => state.stage as f64,
    };
    value >= def.threshold
}
