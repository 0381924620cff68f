//! Frontend Models
//!
//! Game entries, the persisted record, and the handles the view uses to
//! point back into it.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One bookmarked game.
///
/// Has no id of its own; identity is its slot in a list. Missing or null
/// fields in a stored record read back as empty strings, numbers and bools
/// as their text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub emoji: String,
}

/// One odd field should not cost the whole record
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

impl Game {
    pub fn new(name: impl Into<String>, url: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            emoji: emoji.into(),
        }
    }

    /// Text shown on the link: emoji and name separated by one space
    pub fn label(&self) -> String {
        format!("{} {}", self.emoji, self.name)
    }
}

/// The persisted record: both lists, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameCollections {
    pub daily: Vec<Game>,
    pub other: Vec<Game>,
}

impl GameCollections {
    pub fn list(&self, kind: ListKind) -> &[Game] {
        match kind {
            ListKind::Daily => &self.daily,
            ListKind::Other => &self.other,
        }
    }

    pub fn list_mut(&mut self, kind: ListKind) -> &mut Vec<Game> {
        match kind {
            ListKind::Daily => &mut self.daily,
            ListKind::Other => &mut self.other,
        }
    }
}

/// Which of the two collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Daily,
    Other,
}

impl ListKind {
    pub const ALL: [ListKind; 2] = [ListKind::Daily, ListKind::Other];

    /// Value used by the list selector in the add form
    pub fn form_value(self) -> &'static str {
        match self {
            ListKind::Daily => "daily",
            ListKind::Other => "other",
        }
    }

    /// `"daily"` picks the daily list, anything else the other list
    pub fn from_form_value(value: &str) -> Self {
        if value == "daily" { ListKind::Daily } else { ListKind::Other }
    }

    /// DOM id of the list container
    pub fn container_id(self) -> &'static str {
        match self {
            ListKind::Daily => "dailyGames",
            ListKind::Other => "otherGames",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            ListKind::Daily => "Daily Games",
            ListKind::Other => "Other Games",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_value())
    }
}

/// Handle a rendered item carries: which list, which slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemRef {
    pub list: ListKind,
    pub index: usize,
}

impl ItemRef {
    pub fn new(list: ListKind, index: usize) -> Self {
        Self { list, index }
    }
}

/// Where a drag ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropSpot {
    /// On a list container (append)
    List(ListKind),
    /// On the drop zone before position `n` of a list
    Slot(ListKind, usize),
}
