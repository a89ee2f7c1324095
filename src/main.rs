mod app;
mod clipboard;
mod config;
mod embed;
mod preview;
mod ui;
mod widget;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tokio::time::MissedTickBehavior;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use config::Config;

#[derive(Parser, Debug)]
#[command(name = "widgetforge")]
#[command(about = "TUI configurator for embeddable clock, weather, and countdown widgets")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(long, default_value = "~/.config/widgetforge/config.toml")]
    config: String,

    /// Theme preset override (forge, paper)
    #[arg(long)]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "widgetforge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    // Load config
    let mut config = Config::load(&cli.config)?;
    if let Some(theme) = cli.theme {
        config.appearance.theme = theme;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config);

    // Run main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Event loop: redraw after every key event and once per preview tick.
///
/// The tick interval lives on this stack frame and is dropped when the
/// loop returns, so no tick can fire after teardown. Ticks and key events
/// are processed one at a time on this task; they never overlap.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut ticks = tokio::time::interval(app.tick_rate());
    // Late ticks are skipped, never bunched up.
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        tokio::select! {
            _ = ticks.tick() => app.on_tick(),
            Some(event) = events.next() => {
                let Event::Key(key) = event? else { continue };
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if app.is_editing() {
                    match key.code {
                        KeyCode::Enter | KeyCode::Esc => app.stop_editing(),
                        KeyCode::Backspace => app.pop_edit_char(),
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Char(c) => app.push_edit_char(c),
                        _ => {}
                    }
                    continue;
                }

                match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    KeyCode::Tab => app.next_kind(),
                    KeyCode::BackTab => app.prev_kind(),
                    KeyCode::Up | KeyCode::Char('k') => app.previous_field(),
                    KeyCode::Down | KeyCode::Char('j') => app.next_field(),
                    KeyCode::Left | KeyCode::Char('h') => app.cycle_left(),
                    KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => app.cycle_right(),
                    KeyCode::Enter => app.activate(),
                    KeyCode::Char('g') => app.generate(),
                    KeyCode::Char('y') => app.copy_url(),
                    _ => {}
                }
            }
        }
    }
}
