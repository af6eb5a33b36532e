//! Resource façades and the shared paginate/normalize engine

pub mod kind;
pub mod normalizer;
pub mod paginator;
pub mod resource;
pub mod contacts;
pub mod facades;

pub use kind::{Link, ListLink, ResourceKind, ResourceSpec};
pub use resource::Resource;
pub use contacts::Contacts;
pub use facades::{Accounts, Deals, Leads};

use serde_json::Value;
use freshsales_types::Record;
use crate::error::{FreshsalesError, Result};

/// Remove `key` from a response object, failing if it is missing
pub(crate) fn take_field(response: &mut Value, key: &str) -> Result<Value> {
    response
        .as_object_mut()
        .and_then(|obj| obj.remove(key))
        .ok_or_else(|| FreshsalesError::Deserialization(format!("response has no '{}' field", key)))
}

pub(crate) fn take_array(response: &mut Value, key: &str) -> Result<Vec<Value>> {
    match take_field(response, key)? {
        Value::Array(items) => Ok(items),
        other => Err(FreshsalesError::Deserialization(format!(
            "'{}' is not an array: {}",
            key, other
        ))),
    }
}

pub(crate) fn into_record(value: Value) -> Result<Record> {
    match value {
        Value::Object(fields) => Ok(fields),
        other => Err(FreshsalesError::Deserialization(format!(
            "expected a record object, got {}",
            other
        ))),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory transport returning canned responses

    use async_trait::async_trait;
    use serde_json::Value;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use crate::clients::{check_path, QueryParams, Transport};
    use crate::error::{FreshsalesError, Result};

    #[derive(Default)]
    pub struct ScriptedTransport {
        /// `(path, page)` -> response; `page` is `None` for unpaged calls
        responses: HashMap<(String, Option<u64>), Value>,
        requests: Mutex<Vec<(String, QueryParams)>>,
    }

    impl ScriptedTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(mut self, path: &str, response: Value) -> Self {
            self.responses.insert((path.to_string(), None), response);
            self
        }

        pub fn respond_page(mut self, path: &str, page: u64, response: Value) -> Self {
            self.responses.insert((path.to_string(), Some(page)), response);
            self
        }

        pub fn requests(&self) -> Vec<(String, QueryParams)> {
            self.requests.lock().unwrap().clone()
        }

        pub fn pages_requested(&self) -> Vec<u64> {
            self.requests()
                .iter()
                .filter_map(|(_, params)| params.get("page").and_then(Value::as_u64))
                .collect()
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn get(&self, path: &str, params: &QueryParams) -> Result<Value> {
            check_path(path)?;
            self.requests.lock().unwrap().push((path.to_string(), params.clone()));

            let page = params.get("page").and_then(Value::as_u64);
            self.responses
                .get(&(path.to_string(), page))
                .cloned()
                .ok_or_else(|| FreshsalesError::Http {
                    status: 404,
                    body: format!("no scripted response for {} page {:?}", path, page),
                })
        }
    }

    /// One page of `resource_type` records with the given ids
    pub fn page(resource_type: &str, ids: &[u64], total_pages: u64) -> Value {
        let mut page = serde_json::Map::new();
        let items: Vec<Value> = ids.iter().map(|id| serde_json::json!({"id": id})).collect();
        page.insert(resource_type.to_string(), Value::Array(items));
        page.insert("meta".to_string(), serde_json::json!({"total_pages": total_pages}));
        Value::Object(page)
    }
}
