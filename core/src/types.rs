//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the backend's JSON (`{_id, title, description}`) but the
//! identifier is kept opaque: the client never interprets it, only echoes it
//! back in request paths.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Backend-assigned item identifier. Accepted from JSON as a string or a
/// number; numbers are kept in their JSON text form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => ItemId(id),
            RawId::Number(id) => ItemId(id.to_string()),
        })
    }
}

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single to-do entry.
///
/// `id` is `None` only for an item appended locally after a create whose
/// response did not echo the new identifier. Such an item cannot be edited
/// or deleted until the next list refresh replaces it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    pub title: String,
    pub description: String,
}

/// Title/description pair. Used as the POST and PUT body and as the shape of
/// the compose and edit buffers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub description: String,
}

impl Draft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Both fields are non-empty once surrounding whitespace is ignored.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }
}
