//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! keystroke ─► SearchBox ─► Action::InputChanged ─┐
//! Enter     ─► SearchBox ─► Action::Submit ───────┤
//!                                                 ▼
//!                                   update(&mut App, action) ─► Effect
//!                                                 ▲                 │
//! lookup task ─► mpsc ─► Action::Lookup{Succeeded,Failed}   SpawnLookup
//!      ▲                                                            │
//!      └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Redraw Strategy
//!
//! The loop redraws when `App::revision()` differs from the last drawn
//! revision, after any terminal event, and every ~80ms while a lookup is in
//! flight (spinner). Otherwise it sleeps up to 500ms per poll.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::lookup::{GithubLookup, LookupError, ProfileLookup};
use crate::tui::component::EventHandler;
use crate::tui::components::{ProfileListState, SearchBox, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const ANIMATION_POLL: Duration = Duration::from_millis(80);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search_box: SearchBox,
    pub profile_list: ProfileListState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search_box: SearchBox::new(),
            profile_list: ProfileListState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste, Hide);
    }
}

/// Build the profile lookup client from the resolved config.
pub fn build_lookup(config: &ResolvedConfig) -> Result<Arc<dyn ProfileLookup>, LookupError> {
    let lookup = GithubLookup::new(
        &config.base_url,
        config.token.clone(),
        Duration::from_secs(config.timeout_secs),
    )?;
    info!(
        "Profile lookup via {} (authenticated: {})",
        config.base_url,
        config.token.is_some()
    );
    Ok(Arc::new(lookup))
}

/// Runs the UI until the user quits. Must be called inside a tokio runtime.
pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let lookup = build_lookup(&config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    let mut app = App::from_config(lookup, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from lookup tasks
    let (tx, rx) = mpsc::channel();
    let mut active_lookup: Option<tokio::task::AbortHandle> = None;

    let start_time = Instant::now();
    let mut drawn_revision: Option<u64> = None;
    let mut needs_redraw = true;

    loop {
        // Core owns the input text; pick up changes such as the clear after success
        tui.search_box.sync(app.form().input());

        let animating = app.form().is_submitting();
        if animating || drawn_revision != Some(app.revision()) {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_millis() / ANIMATION_POLL.as_millis()) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            drawn_revision = Some(app.revision());
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATION_POLL } else { IDLE_POLL };
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
            match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}
                TuiEvent::ForceQuit => {
                    should_quit |= dispatch(&mut app, Action::Quit, &tx, &mut active_lookup);
                }
                // Esc while a lookup is in flight → cancel it, keep the input
                TuiEvent::Escape if app.form().is_submitting() => {
                    if let Some(handle) = active_lookup.take() {
                        handle.abort();
                    }
                    dispatch(&mut app, Action::CancelLookup, &tx, &mut active_lookup);
                }
                TuiEvent::Escape => {
                    should_quit |= dispatch(&mut app, Action::Quit, &tx, &mut active_lookup);
                }
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown
                | TuiEvent::ScrollToBottom => {
                    tui.profile_list.handle_event(&event);
                }
                _ => {
                    if let Some(search_event) = tui.search_box.handle_event(&event) {
                        let action = match search_event {
                            SearchEvent::Changed(text) => Action::InputChanged(text),
                            SearchEvent::Submit => Action::Submit,
                        };
                        should_quit |= dispatch(&mut app, action, &tx, &mut active_lookup);
                    }
                }
            }
        }

        // Handle lookup results
        while let Ok(action) = rx.try_recv() {
            debug!("Event loop received: {:?}", action);
            should_quit |= dispatch(&mut app, action, &tx, &mut active_lookup);
            if !app.form().is_submitting() {
                active_lookup = None;
            }
        }

        if should_quit {
            break;
        }
    }

    if let Some(handle) = active_lookup.take() {
        handle.abort();
    }
    info!("Exiting with {} cards", app.profiles().len());

    ratatui::restore();
    Ok(())
}

/// Apply an action and perform its effect. Returns `true` if the app should quit.
fn dispatch(
    app: &mut App,
    action: Action,
    tx: &mpsc::Sender<Action>,
    active_lookup: &mut Option<tokio::task::AbortHandle>,
) -> bool {
    match update(app, action) {
        Effect::None => false,
        Effect::SpawnLookup {
            request_id,
            username,
        } => {
            *active_lookup = Some(spawn_lookup(app.lookup.clone(), request_id, username, tx.clone()));
            false
        }
        Effect::Quit => true,
    }
}

fn spawn_lookup(
    lookup: Arc<dyn ProfileLookup>,
    request_id: u64,
    username: String,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    info!(
        "Spawning lookup #{} for '{}' via {}",
        request_id,
        username,
        lookup.name()
    );
    let handle = tokio::spawn(async move {
        let action = match lookup.fetch_profile(&username).await {
            Ok(profile) => Action::LookupSucceeded {
                request_id,
                profile,
            },
            Err(error) => Action::LookupFailed { request_id, error },
        };
        if tx.send(action).is_err() {
            warn!(
                "Failed to deliver lookup #{} result: receiver dropped",
                request_id
            );
        }
    });
    handle.abort_handle()
}
