//! Item Entity
//!
//! An inventory record as owned by the remote collection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Text shown in place of an absent (or empty) description
pub const NO_DESCRIPTION: &str = "No description";

/// Identifier assigned by the remote collection
///
/// The server decides the shape; numbers and strings are both accepted and
/// kept exactly as received so they round-trip into `/items/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        ItemId::Number(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId::Text(value.to_string())
    }
}

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// `None` when the server sent `null`; distinct from `Some("")`
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, description: Option<&str>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.map(str::to_string),
            price,
        }
    }

    /// Price with exactly two decimals, e.g. `12.50`
    ///
    /// Ties round away from zero: `0.125` is `0.13`.
    pub fn price_label(&self) -> String {
        format!("{:.2}", (self.price * 100.0).round() / 100.0)
    }

    /// Description, or [`NO_DESCRIPTION`] when there is nothing to show
    pub fn description_label(&self) -> &str {
        match self.description.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => NO_DESCRIPTION,
        }
    }
}

/// Validated request body for create and update
///
/// `description` is always serialized, as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPayload {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}
