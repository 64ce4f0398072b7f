//! # Profile Lookup
//!
//! The one outbound call this app makes: fetch a user's public profile.
//! The `ProfileLookup` trait is the seam; `GithubLookup` is the real client.

pub mod github;
pub mod provider;

pub use github::GithubLookup;
pub use provider::{LookupError, ProfileLookup};
