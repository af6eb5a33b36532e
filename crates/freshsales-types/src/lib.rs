//! Shared types for the Freshsales client

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single CRM record (contact, account, deal or lead).
///
/// Records are kept untyped because their fields depend on the resource kind
/// and on the account's custom fields. Every record carries an `id`.
pub type Record = Map<String, Value>;

/// A server-side saved filter ("view") that list pagination runs against
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct View {
    pub id: i64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub model_class_name: Option<String>,

    #[serde(default)]
    pub is_default: bool,

    #[serde(default)]
    pub is_public: bool,

    /// Any other fields the server returns (`user_id`, `updated_at`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl View {
    /// Case-insensitive match against the view's display name
    pub fn has_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

/// The `meta` object attached to every page of a view listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageMeta {
    pub total_pages: u64,

    #[serde(default)]
    pub total: Option<u64>,
}
