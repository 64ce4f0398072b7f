//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::core::profile::ProfileRecord;
use crate::core::state::App;
use crate::lookup::{LookupError, ProfileLookup};

/// A lookup that answers from an in-memory table; unknown users are a 404.
#[derive(Default)]
pub struct StubLookup {
    profiles: HashMap<String, ProfileRecord>,
}

impl StubLookup {
    pub fn with(mut self, username: &str, profile: ProfileRecord) -> Self {
        self.profiles.insert(username.to_string(), profile);
        self
    }
}

#[async_trait]
impl ProfileLookup for StubLookup {
    fn name(&self) -> &str {
        "stub"
    }

    async fn fetch_profile(&self, username: &str) -> Result<ProfileRecord, LookupError> {
        self.profiles
            .get(username)
            .cloned()
            .ok_or_else(|| LookupError::Api {
                status: 404,
                message: "Not Found".to_string(),
            })
    }
}

/// A profile whose fields are derived from `login`.
pub fn profile(id: u64, login: &str) -> ProfileRecord {
    ProfileRecord {
        id,
        login: login.to_string(),
        avatar_url: format!("https://avatars.githubusercontent.com/u/{id}"),
        name: format!("{login} name"),
        company: format!("{login} co"),
    }
}

/// Creates a test App titled "Github cards" with an empty StubLookup.
pub fn test_app() -> App {
    App::new(Arc::new(StubLookup::default()), "Github cards".to_string())
}
