//! # Search Form State
//!
//! The username input and its submit lifecycle, as a two-state machine:
//!
//! ```text
//!            keystroke (replace input)
//!              ┌──────┐
//!              ▼      │
//!          ┌────────────┐   submit (input non-empty)   ┌──────────────┐
//!          │    Idle    │ ───────────────────────────► │  Submitting  │
//!          └────────────┘                              └──────────────┘
//!              ▲    ▲        success: clear input              │
//!              │    └──────────────────────────────────────────┤
//!              │             failure / cancel: keep input      │
//!              └───────────────────────────────────────────────┘
//! ```
//!
//! Input is frozen while a lookup is in flight, so there is never more than
//! one outstanding request per form.

use std::fmt;

/// Where the form is in its submit lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    /// A lookup for `username` is in flight under `request_id`.
    Submitting { request_id: u64, username: String },
}

/// Why a submit did not start a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    /// The field is required; an empty string cannot be submitted.
    EmptyInput,
    /// A lookup is already in flight.
    InFlight,
}

impl fmt::Display for SubmitRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitRejected::EmptyInput => write!(f, "Please enter a Github username"),
            SubmitRejected::InFlight => write!(f, "A lookup is already in progress"),
        }
    }
}

/// The search form's private state: the in-progress username and the phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    input: String,
    phase: FormPhase,
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting { .. })
    }

    /// The id of the in-flight lookup, if any.
    pub fn pending_request(&self) -> Option<u64> {
        match self.phase {
            FormPhase::Submitting { request_id, .. } => Some(request_id),
            FormPhase::Idle => None,
        }
    }

    /// Replaces the input with the field's new text.
    ///
    /// Ignored while submitting. Returns `true` if the input changed.
    pub fn set_input(&mut self, text: String) -> bool {
        if self.is_submitting() || self.input == text {
            return false;
        }
        self.input = text;
        true
    }

    /// Idle → Submitting. Returns the username to look up.
    pub fn begin_submit(&mut self, request_id: u64) -> Result<String, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::InFlight);
        }
        if self.input.is_empty() {
            return Err(SubmitRejected::EmptyInput);
        }
        let username = self.input.clone();
        self.phase = FormPhase::Submitting {
            request_id,
            username: username.clone(),
        };
        Ok(username)
    }

    /// Submitting → Idle on success: clears the input.
    ///
    /// Returns `false` (and changes nothing) if `request_id` is not the
    /// in-flight request.
    pub fn complete(&mut self, request_id: u64) -> bool {
        if self.pending_request() != Some(request_id) {
            return false;
        }
        self.phase = FormPhase::Idle;
        self.input.clear();
        true
    }

    /// Submitting → Idle on failure: the input keeps what was typed.
    pub fn abandon(&mut self, request_id: u64) -> bool {
        if self.pending_request() != Some(request_id) {
            return false;
        }
        self.phase = FormPhase::Idle;
        true
    }

    /// Drops the in-flight lookup, if any, keeping the input.
    pub fn cancel(&mut self) -> Option<u64> {
        let request_id = self.pending_request()?;
        self.phase = FormPhase::Idle;
        Some(request_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> SearchForm {
        let mut form = SearchForm::new();
        form.set_input(text.to_string());
        form
    }

    #[test]
    fn test_keystrokes_replace_input() {
        let mut form = SearchForm::new();
        assert!(form.set_input("oct".to_string()));
        assert!(form.set_input("octo".to_string()));
        assert_eq!(form.input(), "octo");
        assert!(!form.set_input("octo".to_string()), "same text is not a change");
    }

    #[test]
    fn test_empty_input_cannot_be_submitted() {
        let mut form = SearchForm::new();
        assert_eq!(form.begin_submit(1), Err(SubmitRejected::EmptyInput));
        assert_eq!(form.phase(), &FormPhase::Idle);
    }

    #[test]
    fn test_whitespace_is_submitted_verbatim() {
        let mut form = typed(" octocat ");
        assert_eq!(form.begin_submit(1).as_deref(), Ok(" octocat "));
    }

    #[test]
    fn test_submit_then_complete_clears_input() {
        let mut form = typed("octocat");
        assert_eq!(form.begin_submit(7).as_deref(), Ok("octocat"));
        assert_eq!(form.pending_request(), Some(7));

        assert!(form.complete(7));
        assert_eq!(form.input(), "");
        assert_eq!(form.phase(), &FormPhase::Idle);
    }

    #[test]
    fn test_abandon_keeps_input() {
        let mut form = typed("doesnotexist123xyz");
        form.begin_submit(3).unwrap();

        assert!(form.abandon(3));
        assert_eq!(form.input(), "doesnotexist123xyz");
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_input_frozen_while_submitting() {
        let mut form = typed("octocat");
        form.begin_submit(1).unwrap();

        assert!(!form.set_input("other".to_string()));
        assert_eq!(form.input(), "octocat");
        assert_eq!(form.begin_submit(2), Err(SubmitRejected::InFlight));
    }

    #[test]
    fn test_stale_request_ids_are_ignored() {
        let mut form = typed("octocat");
        form.begin_submit(5).unwrap();

        assert!(!form.complete(4));
        assert!(!form.abandon(6));
        assert_eq!(form.pending_request(), Some(5));
        assert_eq!(form.input(), "octocat");
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut form = typed("octocat");
        assert_eq!(form.cancel(), None);

        form.begin_submit(9).unwrap();
        assert_eq!(form.cancel(), Some(9));
        assert_eq!(form.input(), "octocat");
        assert!(!form.complete(9), "cancelled request cannot complete");
    }
}
