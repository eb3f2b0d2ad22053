//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the widget,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Fetch Lifecycle
//!
//! `update()` answers `Action::FetchJoke` with `Effect::SpawnFetch`. The
//! adapter spawns a tokio task that calls the provider and sends the outcome
//! back as `Action::JokeLoaded` over a std mpsc channel, drained once per
//! loop iteration. The reducer refuses a second fetch while one is in
//! flight, so at most one task exists at a time.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or fetch results.

mod component;
mod components;
pub mod event;
pub mod theme;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::jokes::{Category, JokeProvider, OfficialJokeApi};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::{Hit, WidgetAreas};

/// TUI-specific presentation state (not part of core business logic)
#[derive(Debug, Default)]
pub struct TuiState {
    /// Control areas from the last draw, for mouse hit testing.
    pub areas: WidgetAreas,
    /// Current spinner animation frame.
    pub spinner_frame: usize,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Build the joke provider for the resolved endpoint.
pub fn build_provider(config: &ResolvedConfig) -> Arc<dyn JokeProvider> {
    Arc::new(OfficialJokeApi::new(config.base_url.clone()))
}

/// Translate a terminal event into a core action.
///
/// `Resize` and clicks on empty space produce nothing.
pub fn event_to_action(event: TuiEvent, app: &App, areas: &WidgetAreas) -> Option<Action> {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Fetch => Some(Action::FetchJoke),
        TuiEvent::ToggleTheme => Some(Action::ToggleTheme),
        TuiEvent::NextCategory => Some(Action::CycleCategory),
        TuiEvent::PrevCategory => Some(Action::SelectCategory(app.category.prev())),
        TuiEvent::SelectCategory(category) => Some(Action::SelectCategory(category)),
        TuiEvent::MouseClick(column, row) => match ui::hit_test(column, row, areas)? {
            Hit::ThemeToggle => Some(Action::ToggleTheme),
            Hit::Category(category) => Some(Action::SelectCategory(category)),
            // Clicks on a disabled button are swallowed by the reducer
            Hit::FetchButton => Some(Action::FetchJoke),
        },
        TuiEvent::Resize => None,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let provider = build_provider(&config);
    info!("Using joke provider: {}", provider.name());
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::try_init()?;
    let terminal_mode_guard = TerminalModeGuard::new()
        .inspect_err(|e| warn!("Mouse capture unavailable: {}", e))
        .ok();

    let result = run_loop(&mut terminal, &mut app, &mut tui, provider);

    drop(terminal_mode_guard);
    ratatui::restore();
    result
}

fn run_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    provider: Arc<dyn JokeProvider>,
) -> std::io::Result<()> {
    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    mount(app, provider.clone(), &tx);

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.is_loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            tui.spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = event_to_action(event, app, &tui.areas) else {
                continue;
            };
            debug!("Dispatching {:?}", action);
            match update(app, action) {
                Effect::Quit => should_quit = true,
                Effect::SpawnFetch(category) => {
                    spawn_fetch(provider.clone(), category, tx.clone());
                }
                Effect::None => {}
            }
        }

        if should_quit {
            info!("Quitting");
            return Ok(());
        }

        // Handle fetch results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if update(app, action) == Effect::Quit {
                return Ok(());
            }
        }
    }
}

/// Start-up step: the widget fetches one joke as soon as it is shown.
fn mount(app: &mut App, provider: Arc<dyn JokeProvider>, tx: &mpsc::Sender<Action>) -> Effect {
    let effect = update(app, Action::FetchJoke);
    if let Effect::SpawnFetch(category) = effect {
        spawn_fetch(provider, category, tx.clone());
    }
    effect
}

/// Fetch one joke and wrap the outcome as an action for the reducer.
pub async fn fetch_joke(provider: Arc<dyn JokeProvider>, category: Category) -> Action {
    Action::JokeLoaded(provider.random_joke(category).await)
}

fn spawn_fetch(provider: Arc<dyn JokeProvider>, category: Category, tx: mpsc::Sender<Action>) {
    info!("Spawning joke fetch (category={})", category.as_str());
    tokio::spawn(async move {
        let action = fetch_joke(provider, category).await;
        if tx.send(action).is_err() {
            warn!("Failed to deliver fetch result: receiver dropped");
        }
    });
}
