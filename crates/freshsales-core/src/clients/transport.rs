//! Transport abstraction shared by every resource façade
//!
//! Resources only ever issue `GET path?query` and expect JSON back, so the
//! seam is a single async method. `HttpTransport` is the production
//! implementation; tests script responses through the same trait.

use async_trait::async_trait;
use serde_json::Value;
use crate::error::{FreshsalesError, Result};

/// Executes an authenticated GET against the Freshsales API
#[async_trait]
pub trait Transport: Send + Sync {
    /// `path` is relative to the API root and must start with `/`
    async fn get(&self, path: &str, params: &QueryParams) -> Result<Value>;
}

/// Reject paths that cannot be appended to the API root
pub fn check_path(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FreshsalesError::Precondition("request path is empty".to_string()));
    }

    if !path.starts_with('/') {
        return Err(FreshsalesError::Precondition(format!(
            "request path must start with '/': {}",
            path
        )));
    }

    Ok(())
}

/// Ordered query parameters with Freshsales encoding rules
///
/// Inserting a name that is already present replaces its value in place, so
/// the caller's parameters can override a resource's defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    entries: Vec<(String, Value)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder-style `insert`
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Copy every entry of `other` over this set
    pub fn merge(&mut self, other: &QueryParams) {
        for (name, value) in &other.entries {
            self.insert(name.clone(), value.clone());
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Wire form of the parameters.
    ///
    /// Nulls are dropped, booleans become `true`/`false`, strings are sent
    /// verbatim and everything else as its JSON text.
    pub fn encode(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .filter_map(|(name, value)| {
                let encoded = match value {
                    Value::Null => return None,
                    Value::Bool(b) => b.to_string(),
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                Some((name.clone(), encoded))
            })
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}
