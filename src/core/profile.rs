//! # Profiles
//!
//! The data shown on screen: one `ProfileRecord` per fetched user, and the
//! append-only `ProfileCollection` that the application root owns.
//!
//! ```text
//! ProfileCollection
//! ├── ProfileRecord { id: 1, login: "octocat", ... }
//! ├── ProfileRecord { id: 2, login: "gaearon", ... }
//! └── ...                      // insertion order, never reordered
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// Display data for one user profile, as returned by `GET /users/<name>`.
///
/// String fields that the service reports as `null` (GitHub does this for
/// users without a name or company) decode to the empty string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord {
    /// Stable identifier, used as the rendering key.
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub login: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub avatar_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub company: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ordered, append-only list of the profiles currently displayed.
///
/// No removal or reordering operation exists. Submitting the
/// same username twice yields two entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileCollection {
    records: Vec<ProfileRecord>,
}

impl ProfileCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one record to the end, keeping every prior entry in place.
    pub fn push(&mut self, record: ProfileRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProfileRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[ProfileRecord] {
        &self.records
    }
}
