//! Maps [`GameEvent`]s to short on-screen notifications.

use sprout::achievements::get_achievement_def;
use sprout::core::constants::MAX_NOTIFICATIONS;
use sprout::{DeclineReason, GameEvent};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Celebration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub text: String,
    pub tone: Tone,
}

/// Newest-last feed of recent notifications.
#[derive(Debug, Default)]
pub struct Notifications {
    entries: VecDeque<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>, tone: Tone) {
        self.entries.push_back(Notification {
            text: text.into(),
            tone,
        });
        while self.entries.len() > MAX_NOTIFICATIONS {
            self.entries.pop_front();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// Add notifications for a batch of drained events.
    pub fn extend_from_events(&mut self, events: &[GameEvent]) {
        for event in events {
            if let Some((text, tone)) = describe_event(event) {
                self.push(text, tone);
            }
        }
    }
}

fn decline_text(reason: &DeclineReason) -> String {
    match reason {
        DeclineReason::MaxLevel => "Already at max level".to_string(),
        DeclineReason::InsufficientClicks { cost, .. } => {
            format!("Need {} clicks", cost)
        }
        DeclineReason::NotEligible { .. } => "Grow your plant fully first".to_string(),
    }
}

/// Text and tone for an event, or None when it is not worth a line.
pub fn describe_event(event: &GameEvent) -> Option<(String, Tone)> {
    match event {
        GameEvent::ClickApplied { value, critical, .. } if *critical => {
            Some((format!("CRITICAL! +{}", value), Tone::Celebration))
        }
        GameEvent::ClickApplied { .. } => None,
        GameEvent::MilestoneReached { value } => {
            Some((format!("{} clicks!", value), Tone::Success))
        }
        GameEvent::AchievementUnlocked { id } => {
            let name = get_achievement_def(*id).map_or("Achievement", |def| def.name);
            Some((format!("Achievement unlocked: {}", name), Tone::Celebration))
        }
        GameEvent::StageCompleted { stage } => {
            Some((format!("Stage {} reached!", stage + 1), Tone::Success))
        }
        GameEvent::FullyGrown => Some((
            "Your lily is fully grown! Prestige to grow again.".to_string(),
            Tone::Info,
        )),
        GameEvent::UpgradePurchased { kind, level } => Some((
            format!("{} upgraded to level {}!", kind.name(), level),
            Tone::Success,
        )),
        GameEvent::UpgradeDeclined { reason, .. } => Some((decline_text(reason), Tone::Warning)),
        GameEvent::PrestigePerformed { level, multiplier } => Some((
            format!("Prestige {}! Clicks now worth {}x", level, multiplier),
            Tone::Celebration,
        )),
        GameEvent::PrestigeDeclined { reason } => Some((decline_text(reason), Tone::Warning)),
        GameEvent::AutoClicker(_) => None,
        GameEvent::Reset => Some(("All progress reset".to_string(), Tone::Info)),
        GameEvent::ThemeChanged { theme } => {
            Some((format!("Theme: {}", theme.name()), Tone::Info))
        }
        GameEvent::SoundToggled { enabled } => Some((
            format!("Sound {}", if *enabled { "on" } else { "off" }),
            Tone::Info,
        )),
        GameEvent::SaveFailed { message } => {
            Some((format!("Save failed: {}", message), Tone::Warning))
        }
    }
}
