use pulse::app::{App, Screen};
use pulse::cli::{parse_args, CliCommand};
use pulse::config::Config;
use pulse::data::{self, Dataset};
use pulse::terminal::{setup_panic_hook, TerminalManager};
use pulse::ui;
use pulse::ui::interaction::handle_click_action;

use color_eyre::Result;
use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Stdout;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Rows scrolled per mouse wheel notch.
const WHEEL_SCROLL_ROWS: u16 = 3;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("pulse {}", VERSION);
            Ok(())
        }
        CliCommand::Run(screen_override) => run(screen_override).await,
    }
}

async fn run(screen_override: Option<Screen>) -> Result<()> {
    let mut config = Config::from_env();
    if let Some(screen) = screen_override {
        config.start_screen = screen;
    }
    init_tracing(&config)?;

    let dataset = load_dataset(&config)?;

    setup_panic_hook();
    let mut manager = TerminalManager::new(config.mouse_enabled)?;

    let mut app = App::new(config, dataset);

    // Read the real terminal size before the first frame; no resize
    // event arrives until the user actually resizes
    let size = manager.terminal().size()?;
    app.update_terminal_dimensions(size.width, size.height);

    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore();
    result
}

/// Route tracing to a file when configured; the terminal itself is busy
/// drawing the UI.
fn init_tracing(config: &Config) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_dataset(config: &Config) -> Result<Dataset> {
    match &config.data_path {
        Some(path) => {
            let dataset = Dataset::from_json_file(path)?;
            tracing::info!(path = %path.display(), "loaded dataset from file");
            Ok(dataset)
        }
        None => Ok(data::demo()),
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut event_stream = EventStream::new();
    let tick = std::time::Duration::from_millis(app.config.tick_ms);

    loop {
        // Draw only when something changed or an animation is running
        if app.needs_redraw || app.has_active_motion() {
            terminal.draw(|frame| ui::render(frame, app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(tick);

        tokio::select! {
            // Animation tick: counters, the magnetic spring
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(width, height) => {
                            app.update_terminal_dimensions(width, height);
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            handle_key(app, key);
                        }
                        Event::Mouse(mouse) => {
                            handle_mouse(app, mouse);
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keybinds
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return;
        }
        KeyCode::Char('q') => {
            app.quit();
            return;
        }
        _ => {}
    }

    app.mark_dirty();

    match app.screen {
        Screen::Launch => handle_launch_key(app, key),
        Screen::Admin => handle_admin_key(app, key),
    }
}

fn handle_launch_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('a') => app.navigate_to_admin(),
        KeyCode::Down | KeyCode::Char('j') => app.launch_scroll.scroll_down(1),
        KeyCode::Up | KeyCode::Char('k') => app.launch_scroll.scroll_up(1),
        KeyCode::PageDown => app.launch_scroll.page_down(),
        KeyCode::PageUp => app.launch_scroll.page_up(),
        KeyCode::Char('g') | KeyCode::Home => app.launch_scroll.to_top(),
        KeyCode::Char('G') | KeyCode::End => app.launch_scroll.to_bottom(),
        _ => {}
    }
}

fn handle_admin_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.navigate_to_launch(),
        KeyCode::Char('b') => app.sidebar.toggle(),
        KeyCode::Tab => app.next_page(),
        KeyCode::BackTab => app.prev_page(),
        KeyCode::Char(c @ '1'..='6') => {
            if let Some(page) = pulse::app::AdminPage::from_index(c as usize - '0' as usize) {
                app.select_page(page);
            }
        }
        KeyCode::Down | KeyCode::Char('j') => app.admin_scroll.scroll_down(1),
        KeyCode::Up | KeyCode::Char('k') => app.admin_scroll.scroll_up(1),
        KeyCode::PageDown => app.admin_scroll.page_down(),
        KeyCode::PageUp => app.admin_scroll.page_up(),
        KeyCode::Char('g') | KeyCode::Home => app.admin_scroll.to_top(),
        KeyCode::Char('G') | KeyCode::End => app.admin_scroll.to_bottom(),
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Moved => {
            let hover_changed = app.registry.update_hover(mouse.column, mouse.row);
            let magnet_active = app.pointer_moved(mouse.column, mouse.row);
            if hover_changed || magnet_active {
                app.mark_dirty();
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(action) = app.registry.hit_test(mouse.column, mouse.row) {
                handle_click_action(app, action);
            }
        }
        MouseEventKind::ScrollDown => {
            app.active_scroll_mut().scroll_down(WHEEL_SCROLL_ROWS);
            app.mark_dirty();
        }
        MouseEventKind::ScrollUp => {
            app.active_scroll_mut().scroll_up(WHEEL_SCROLL_ROWS);
            app.mark_dirty();
        }
        _ => {}
    }
}
