//! Achievement system types and data structures.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which state field an achievement threshold is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementKind {
    TotalClicks,
    Streak,
    Stage,
}

/// Unique identifier for each achievement.
///
/// Serialized as the string ids used in save data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AchievementId {
    #[serde(rename = "clicker_100")]
    Clicker100,
    #[serde(rename = "clicker_1000")]
    Clicker1000,
    #[serde(rename = "clicker_5000")]
    Clicker5000,
    #[serde(rename = "clicker_25000")]
    Clicker25000,
    #[serde(rename = "streak_50")]
    Streak50,
    #[serde(rename = "streak_200")]
    Streak200,
    #[serde(rename = "stage_3")]
    Stage3,
    #[serde(rename = "stage_5")]
    Stage5,
}

impl AchievementId {
    /// The id string stored in save data.
    pub fn key(&self) -> &'static str {
        match self {
            AchievementId::Clicker100 => "clicker_100",
            AchievementId::Clicker1000 => "clicker_1000",
            AchievementId::Clicker5000 => "clicker_5000",
            AchievementId::Clicker25000 => "clicker_25000",
            AchievementId::Streak50 => "streak_50",
            AchievementId::Streak200 => "streak_200",
            AchievementId::Stage3 => "stage_3",
            AchievementId::Stage5 => "stage_5",
        }
    }

    /// Parse a stored id string. Unknown ids return `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "clicker_100" => Some(AchievementId::Clicker100),
            "clicker_1000" => Some(AchievementId::Clicker1000),
            "clicker_5000" => Some(AchievementId::Clicker5000),
            "clicker_25000" => Some(AchievementId::Clicker25000),
            "streak_50" => Some(AchievementId::Streak50),
            "streak_200" => Some(AchievementId::Streak200),
            "stage_3" => Some(AchievementId::Stage3),
            "stage_5" => Some(AchievementId::Stage5),
            _ => None,
        }
    }
}

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub threshold: f64,
    pub kind: AchievementKind,
}

/// Unlocked achievements for the current run.
///
/// Only grows; cleared by prestige and full reset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Achievements {
    unlocked: BTreeSet<AchievementId>,
}

impl Achievements {
    /// Check if an achievement is unlocked.
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains(&id)
    }

    /// Unlock an achievement. Returns true if newly unlocked.
    pub fn unlock(&mut self, id: AchievementId) -> bool {
        self.unlocked.insert(id)
    }

    /// Get the number of unlocked achievements.
    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unlocked.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = AchievementId> + '_ {
        self.unlocked.iter().copied()
    }

    pub fn clear(&mut self) {
        self.unlocked.clear();
    }
}

impl FromIterator<AchievementId> for Achievements {
    fn from_iter<I: IntoIterator<Item = AchievementId>>(iter: I) -> Self {
        Self {
            unlocked: iter.into_iter().collect(),
        }
    }
}
