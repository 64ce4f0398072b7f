//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The profile service answers? That's `Action::LookupSucceeded { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` describing the I/O the caller must perform.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::profile::ProfileRecord;
use crate::core::search::{FormPhase, SubmitRejected};
use crate::core::state::App;
use crate::lookup::LookupError;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The input field now holds this text.
    InputChanged(String),
    /// The user submitted the form.
    Submit,
    LookupSucceeded {
        request_id: u64,
        profile: ProfileRecord,
    },
    LookupFailed {
        request_id: u64,
        error: LookupError,
    },
    /// The user abandoned the in-flight lookup.
    CancelLookup,
    Quit,
}

/// Side effects requested by `update()`, performed by the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Start a lookup for `username`, reporting back under `request_id`.
    SpawnLookup { request_id: u64, username: String },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::InputChanged(text) => {
            if app.form.set_input(text) {
                app.error = None;
                app.touch();
            }
            Effect::None
        }

        Action::Submit => {
            let request_id = app.next_request_id;
            match app.form.begin_submit(request_id) {
                Ok(username) => {
                    app.next_request_id += 1;
                    app.error = None;
                    app.status_message = format!("Looking up {username}...");
                    app.touch();
                    info!("Submit: lookup #{} for '{}'", request_id, username);
                    Effect::SpawnLookup {
                        request_id,
                        username,
                    }
                }
                Err(SubmitRejected::EmptyInput) => {
                    app.status_message = SubmitRejected::EmptyInput.to_string();
                    app.touch();
                    Effect::None
                }
                Err(SubmitRejected::InFlight) => {
                    debug!("Submit ignored: lookup already in flight");
                    Effect::None
                }
            }
        }

        Action::LookupSucceeded {
            request_id,
            profile,
        } => {
            if !app.form.complete(request_id) {
                debug!("Discarding stale lookup result #{}", request_id);
                return Effect::None;
            }
            app.status_message = format!("Added {}", display_name(&profile));
            app.add_profile(profile);
            Effect::None
        }

        Action::LookupFailed { request_id, error } => {
            let username = match app.form.phase() {
                FormPhase::Submitting {
                    request_id: pending,
                    username,
                } if *pending == request_id => username.clone(),
                _ => {
                    debug!("Discarding stale lookup failure #{}: {}", request_id, error);
                    return Effect::None;
                }
            };
            // Input and collection stay exactly as they were at submit time.
            app.form.abandon(request_id);
            warn!("Lookup #{} for '{}' failed: {}", request_id, username, error);
            app.error = Some(format!("Lookup failed for '{username}': {error}"));
            app.status_message.clear();
            app.touch();
            Effect::None
        }

        Action::CancelLookup => {
            if let Some(request_id) = app.form.cancel() {
                info!("Lookup #{} cancelled", request_id);
                app.status_message = "Lookup cancelled".to_string();
                app.touch();
            }
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}

fn display_name(profile: &ProfileRecord) -> &str {
    if profile.name.is_empty() {
        &profile.login
    } else {
        &profile.name
    }
}
