//! Operations shared by every resource façade

use futures::{Stream, TryStreamExt};
use serde_json::Value;
use std::fmt::Display;
use std::sync::Arc;
use freshsales_types::{Record, View};
use crate::clients::{QueryParams, Transport};
use crate::error::{FreshsalesError, Result};
use super::kind::{ResourceKind, ResourceSpec};
use super::normalizer::normalize;
use super::paginator::paginate;
use super::{into_record, take_array, take_field};

/// One resource kind bound to a transport
///
/// Holds no mutable state; clones share the transport.
#[derive(Clone)]
pub struct Resource {
    kind: ResourceKind,
    transport: Arc<dyn Transport>,
}

impl Resource {
    pub fn new(kind: ResourceKind, transport: Arc<dyn Transport>) -> Self {
        Self { kind, transport }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn spec(&self) -> &'static ResourceSpec {
        self.kind.spec()
    }

    /// GET with the resource's default params; `params` override them
    pub(crate) async fn get(&self, path: &str, params: &QueryParams) -> Result<Value> {
        let mut query = self.spec().default_query();
        query.merge(params);
        self.transport.get(path, &query).await
    }

    /// Saved filters available for this resource
    pub async fn get_views(&self) -> Result<Vec<View>> {
        let path = format!("/{}/filters", self.spec().resource_type);
        let mut response = self.get(&path, &QueryParams::new()).await?;

        take_array(&mut response, "filters")?
            .into_iter()
            .map(|filter| {
                serde_json::from_value(filter)
                    .map_err(|e| FreshsalesError::Deserialization(format!("invalid view: {}", e)))
            })
            .collect()
    }

    /// Look up a view by display name (case-insensitive)
    pub async fn find_view(&self, name: &str) -> Result<Option<View>> {
        let views = self.get_views().await?;
        Ok(views.into_iter().find(|view| view.has_name(name)))
    }

    /// Lazily stream the records of a view, one page request at a time
    pub fn paginate(
        &self,
        view_id: impl Display,
        limit: Option<usize>,
    ) -> impl Stream<Item = Result<Record>> + Send + 'static {
        paginate(
            Arc::clone(&self.transport),
            self.spec(),
            &view_id.to_string(),
            self.spec().default_query(),
            limit,
        )
    }

    /// Every record of a view (up to `limit`), in page order
    pub async fn get_all(&self, view_id: impl Display, limit: Option<usize>) -> Result<Vec<Record>> {
        self.paginate(view_id, limit).try_collect().await
    }

    /// Fetch one record, normalized against its own response
    pub async fn get_by_id(&self, id: impl Display) -> Result<Record> {
        let spec = self.spec();
        let path = format!("/{}/{}", spec.resource_type, id);
        let mut response = self.get(&path, &QueryParams::new()).await?;

        let mut record = into_record(take_field(&mut response, spec.singular())?)?;
        normalize(spec, &mut record, &response);
        Ok(record)
    }
}
