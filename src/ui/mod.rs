//! Terminal presentation: the garden screen and the notification feed.
//!
//! Binary-only. The engine reports `GameEvent`s; this module turns them
//! into short notifications and draws the current state.

mod notifications;

pub use notifications::{Notifications, Tone};

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};
use sprout::achievements::get_achievement_def;
use sprout::core::Theme;
use sprout::persistence::KeyValueStore;
use sprout::{ProgressionEngine, UpgradeCost, UpgradeType};

const PLANT_ART: [&[&str]; 5] = [
    &["", "", "", "   .   ", "  _|_  "],
    &["", "", "   ,   ", "  \\|/  ", "  _|_  "],
    &["", "  \\ /  ", "  -o-  ", "  /|\\  ", "  _|_  "],
    &["  .-.  ", " (   ) ", "  '|'  ", " \\_|_/ ", "  _|_  "],
    &[" .*^*. ", "(  @  )", " '*|*' ", " \\_|_/ ", "  _|_  "],
];

struct Palette {
    accent: Color,
    text: Color,
    muted: Color,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            accent: Color::Green,
            text: Color::Reset,
            muted: Color::DarkGray,
        },
        Theme::Dark => Palette {
            accent: Color::LightMagenta,
            text: Color::White,
            muted: Color::Gray,
        },
    }
}

fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Draw the whole screen.
pub fn draw<S: KeyValueStore>(
    frame: &mut Frame,
    engine: &ProgressionEngine<S>,
    notifications: &Notifications,
    auto_paused: bool,
    confirm_reset: bool,
) {
    let state = engine.state();
    let colors = palette(state.settings.theme);
    let total_stages = engine.rules().total_stages();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Length(8),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.size());

    // Plant
    let art_index = (state.stage as usize).min(PLANT_ART.len() - 1);
    let art: Vec<Line> = PLANT_ART[art_index]
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(colors.accent))))
        .collect();
    let stage_label = if engine.is_fully_grown() {
        " Fully grown! ".to_string()
    } else {
        format!(" Stage {} of {} ", state.stage + 1, total_stages)
    };
    frame.render_widget(
        Paragraph::new(art)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(stage_label)),
        chunks[0],
    );

    // Progress
    let threshold = engine.rules().threshold_for(state.stage);
    let label = if engine.is_fully_grown() {
        format!("Complete! {} total clicks", format_amount(state.total_clicks))
    } else {
        format!(
            "{}/{}",
            format_amount(state.clicks_in_stage),
            format_amount(threshold)
        )
    };
    frame.render_widget(
        Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" Growth "))
            .gauge_style(Style::default().fg(colors.accent))
            .percent(engine.stage_progress().round() as u16)
            .label(label),
        chunks[1],
    );

    // Stats
    let (unlocked, total_achievements) = engine.achievement_counts();
    let auto_line = match engine.auto_click_interval() {
        None => "Auto-clicker: none".to_string(),
        Some(_) if auto_paused => "Auto-clicker: paused".to_string(),
        Some(interval) => format!("Auto-clicker: every {}ms", interval.as_millis()),
    };
    let badges: Vec<&str> = state
        .achievements
        .iter()
        .filter_map(get_achievement_def)
        .map(|def| def.name)
        .collect();
    let badge_line = if badges.is_empty() {
        "No achievements yet".to_string()
    } else {
        badges.join(", ")
    };
    let stats = vec![
        Line::from(format!(
            "Total: {}   Streak: {}   Power: {}x",
            format_amount(state.total_clicks),
            state.click_streak,
            state.click_power
        )),
        Line::from(format!(
            "Prestige: {} ({}x)   Achievements: {}/{}",
            state.prestige_level,
            format_amount(state.prestige_multiplier),
            unlocked,
            total_achievements
        )),
        Line::from(auto_line),
        Line::from(Span::styled(badge_line, Style::default().fg(colors.accent))),
        Line::from(Span::styled(
            format!(
                "Sound: {}   Theme: {}",
                if state.settings.sound_enabled { "on" } else { "off" },
                state.settings.theme.name()
            ),
            Style::default().fg(colors.muted),
        )),
    ];
    frame.render_widget(
        Paragraph::new(stats)
            .style(Style::default().fg(colors.text))
            .block(Block::default().borders(Borders::ALL).title(" Garden ")),
        chunks[2],
    );

    // Shop
    let mut shop: Vec<Line> = UpgradeType::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let level = kind.level(state);
            let (price, style) = match engine.upgrade_cost(*kind) {
                UpgradeCost::Max => ("MAX".to_string(), Style::default().fg(colors.muted)),
                UpgradeCost::Price(p) if engine.can_afford(*kind) => (
                    format!("{} clicks", format_amount(p)),
                    Style::default().fg(colors.accent),
                ),
                UpgradeCost::Price(p) => (
                    format!("{} clicks", format_amount(p)),
                    Style::default().fg(colors.muted),
                ),
            };
            Line::from(vec![
                Span::raw(format!("[{}] ", i + 1)),
                Span::styled(
                    format!("{:<15} {}/{}  ", kind.name(), level, kind.max_level()),
                    style,
                ),
                Span::styled(price, style),
            ])
        })
        .collect();
    if engine.can_prestige() {
        shop.push(Line::from(""));
        shop.push(Line::from(Span::styled(
            format!(
                "[p] PRESTIGE - multiplier {}x",
                format_amount(engine.next_prestige_multiplier())
            ),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )));
    }
    frame.render_widget(
        Paragraph::new(shop).block(Block::default().borders(Borders::ALL).title(" Shop ")),
        chunks[3],
    );

    // Notifications
    let feed: Vec<Line> = notifications
        .iter()
        .map(|n| {
            let color = match n.tone {
                Tone::Info => colors.text,
                Tone::Success => Color::Green,
                Tone::Warning => Color::Yellow,
                Tone::Celebration => Color::Magenta,
            };
            Line::from(Span::styled(n.text.clone(), Style::default().fg(color)))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(feed).block(Block::default().borders(Borders::ALL).title(" News ")),
        chunks[4],
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "[space] click  [1-4] buy  [p] prestige  [t] theme  [s] sound  [r] reset  [q] quit",
            Style::default().fg(colors.muted),
        ))),
        chunks[5],
    );

    if confirm_reset {
        draw_reset_confirm(frame);
    }
}

fn draw_reset_confirm(frame: &mut Frame) {
    let size = frame.size();
    let width = 44.min(size.width.saturating_sub(4));
    let height = 5.min(size.height.saturating_sub(2));
    let area = Rect::new(
        size.width.saturating_sub(width) / 2,
        size.height.saturating_sub(height) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from(Span::styled(
            "Reset ALL progress, including prestige?",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("[y] yes    [n] no"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Confirm Reset ")),
        area,
    );
}
