//! # Application State
//!
//! The application root: the one owner of the profile collection. No
//! terminal types live here; presentation state belongs to the `tui` module.
//!
//! ```text
//! App
//! ├── lookup: Arc<dyn ProfileLookup>   // outbound profile service
//! ├── title: String                    // static header text
//! ├── profiles: ProfileCollection      // append-only, root-owned
//! ├── form: SearchForm                 // input + Idle/Submitting
//! ├── status_message: String           // header status text
//! ├── error: Option<String>            // last lookup failure
//! ├── next_request_id: u64             // correlates lookups to responses
//! └── revision: u64                    // bumped on every state change
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! `revision` is the state-changed signal the render loop watches.

use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::core::profile::{ProfileCollection, ProfileRecord};
use crate::core::search::SearchForm;
use crate::lookup::ProfileLookup;

pub const WELCOME_STATUS: &str = "Type a Github username and press Enter";

pub struct App {
    pub lookup: Arc<dyn ProfileLookup>,
    pub title: String,
    pub status_message: String,
    pub error: Option<String>,
    profiles: ProfileCollection,
    pub(crate) form: SearchForm,
    pub(crate) next_request_id: u64,
    revision: u64,
}

impl App {
    pub fn new(lookup: Arc<dyn ProfileLookup>, title: String) -> Self {
        Self {
            lookup,
            title,
            status_message: WELCOME_STATUS.to_string(),
            error: None,
            profiles: ProfileCollection::new(),
            form: SearchForm::new(),
            next_request_id: 1,
            revision: 0,
        }
    }

    pub fn from_config(lookup: Arc<dyn ProfileLookup>, config: &ResolvedConfig) -> Self {
        Self::new(lookup, config.title.clone())
    }

    pub fn profiles(&self) -> &ProfileCollection {
        &self.profiles
    }

    pub fn form(&self) -> &SearchForm {
        &self.form
    }

    /// Appends a fetched profile to the end of the collection.
    pub fn add_profile(&mut self, profile: ProfileRecord) {
        self.profiles.push(profile);
        self.touch();
    }

    /// Current state revision. Changes whenever the visible state changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
