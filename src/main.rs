mod ui;

use chrono::Utc;
use crossterm::event::{self, DisableFocusChange, EnableFocusChange, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use sprout::build_info;
use sprout::config::{self, AppConfig, CliCommand};
use sprout::core::constants::INPUT_POLL_MS;
use sprout::persistence::FileStore;
use sprout::{AutoClicker, GameEvent, ProgressionEngine, RuleTables, UpgradeType};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;
use ui::{Notifications, Tone};

fn main() -> io::Result<()> {
    let config = match config::parse_args(std::env::args().skip(1), |key| std::env::var(key).ok())
    {
        Ok(CliCommand::Run(config)) => config,
        Ok(CliCommand::Version) => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Ok(CliCommand::Help) => {
            println!("{}", config::HELP_TEXT);
            return Ok(());
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'sprout --help' for usage.");
            std::process::exit(1);
        }
    };

    fs::create_dir_all(&config.data_dir)?;
    init_logging(&config)?;
    tracing::info!(version = %build_info::version_line(), "starting");

    let store = FileStore::open(&config.data_dir).map_err(io::Error::other)?;
    tracing::info!(path = %store.path().display(), "save file opened");
    let mut engine = ProgressionEngine::load(store, RuleTables::standard());

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut engine, &mut rng);

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableFocusChange)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(
        total_clicks = engine.state().total_clicks,
        stage = engine.state().stage,
        "exiting"
    );
    result
}

fn init_logging(config: &AppConfig) -> io::Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_path())?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    engine: &mut ProgressionEngine<FileStore>,
    rng: &mut StdRng,
) -> io::Result<()> {
    let mut notifications = Notifications::new();
    let mut auto_clicker = AutoClicker::new();
    let mut confirm_reset = false;

    if let Some(interval) = engine.auto_click_interval() {
        auto_clicker.start(interval, Instant::now());
    }
    notifications.push("Press space to help your lily grow", Tone::Info);

    loop {
        let auto_paused = auto_clicker.is_paused();
        terminal.draw(|frame| {
            ui::draw(frame, engine, &notifications, auto_paused, confirm_reset)
        })?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if confirm_reset {
                        match key.code {
                            KeyCode::Char('y') | KeyCode::Char('Y') => {
                                engine.reset_all();
                                confirm_reset = false;
                            }
                            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                                confirm_reset = false;
                            }
                            _ => {}
                        }
                    } else {
                        match key.code {
                            KeyCode::Char(' ') | KeyCode::Enter => {
                                engine.apply_click(false, now_ms(), rng);
                            }
                            KeyCode::Char(c @ '1'..='4') => {
                                let index = c as usize - '1' as usize;
                                engine.buy_upgrade(UpgradeType::ALL[index]);
                            }
                            KeyCode::Char('p') | KeyCode::Char('P') => {
                                engine.prestige();
                            }
                            KeyCode::Char('t') | KeyCode::Char('T') => {
                                engine.toggle_theme();
                            }
                            KeyCode::Char('s') | KeyCode::Char('S') => {
                                let enabled = !engine.state().settings.sound_enabled;
                                engine.set_sound_enabled(enabled);
                            }
                            KeyCode::Char('r') | KeyCode::Char('R') => {
                                confirm_reset = true;
                            }
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                            _ => {}
                        }
                    }
                }
                Event::FocusLost => {
                    tracing::debug!("focus lost, pausing auto-clicker");
                    auto_clicker.pause();
                }
                Event::FocusGained => auto_clicker.resume(Instant::now()),
                _ => {}
            }
        }

        let due = auto_clicker.poll(Instant::now());
        for _ in 0..due {
            if engine.is_fully_grown() {
                break;
            }
            engine.apply_click(true, now_ms(), rng);
        }

        let events = engine.drain_events();
        let mut chime = false;
        for event in &events {
            match event {
                GameEvent::AutoClicker(command) => auto_clicker.apply(*command, Instant::now()),
                GameEvent::ClickApplied { critical: true, .. }
                | GameEvent::AchievementUnlocked { .. }
                | GameEvent::StageCompleted { .. }
                | GameEvent::PrestigePerformed { .. } => chime = true,
                _ => {}
            }
        }
        notifications.extend_from_events(&events);

        if chime && engine.state().settings.sound_enabled {
            // Terminal bell
            let mut out = io::stdout();
            out.write_all(b"\x07")?;
            out.flush()?;
        }
    }

    Ok(())
}
