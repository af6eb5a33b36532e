//! Lazy page-by-page traversal of a view
//!
//! `paginate` returns a `Stream` that requests page 1 on first poll and the
//! next page only once the buffered one has been consumed. Every call starts
//! a fresh traversal; dropping the stream stops it.

use futures::stream::{self, Stream};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use freshsales_types::{PageMeta, Record};
use crate::clients::{QueryParams, Transport};
use crate::error::{FreshsalesError, Result};
use super::kind::ResourceSpec;
use super::normalizer::normalize;
use super::{into_record, take_array};

struct PageCursor {
    transport: Arc<dyn Transport>,
    spec: &'static ResourceSpec,
    path: String,
    params: QueryParams,
    limit: Option<usize>,
    next_page: u64,
    total_pages: Option<u64>,
    container: Value,
    items: std::vec::IntoIter<Value>,
    yielded: usize,
}

impl PageCursor {
    fn limit_reached(&self) -> bool {
        self.limit.is_some_and(|limit| self.yielded >= limit)
    }

    /// True once the last fetched page was the final one
    fn exhausted(&self) -> bool {
        matches!(self.total_pages, Some(total) if self.next_page > total)
    }

    fn next_record(&mut self) -> Result<Option<Record>> {
        let Some(item) = self.items.next() else {
            return Ok(None);
        };
        let mut record = into_record(item)?;
        normalize(self.spec, &mut record, &self.container);
        Ok(Some(record))
    }

    async fn fetch_next_page(&mut self) -> Result<()> {
        let page = self.next_page;
        let mut params = self.params.clone();
        params.insert("page", page);

        let started = Instant::now();
        let mut response = self.transport.get(&self.path, &params).await?;
        let meta = page_meta(&response)?;
        let items = take_array(&mut response, self.spec.resource_type)?;

        log::debug!(
            "got {} page {} of {} in {:.3} seconds",
            self.spec.resource_type,
            page,
            meta.total_pages,
            started.elapsed().as_secs_f64()
        );

        self.total_pages = Some(meta.total_pages);
        self.next_page = page + 1;
        self.container = response;
        self.items = items.into_iter();
        Ok(())
    }

    async fn step(mut self) -> Result<Option<(Record, Self)>> {
        loop {
            if self.limit_reached() {
                return Ok(None);
            }
            if let Some(record) = self.next_record()? {
                self.yielded += 1;
                return Ok(Some((record, self)));
            }
            if self.exhausted() {
                return Ok(None);
            }
            self.fetch_next_page().await?;
        }
    }
}

fn page_meta(response: &Value) -> Result<PageMeta> {
    let meta = response
        .get("meta")
        .cloned()
        .ok_or_else(|| FreshsalesError::Deserialization("page has no 'meta' field".to_string()))?;

    serde_json::from_value(meta)
        .map_err(|e| FreshsalesError::Deserialization(format!("invalid page meta: {}", e)))
}

/// Stream every record of `view_id`, normalized against its own page.
///
/// `params` are sent with every page request alongside `page`. With
/// `limit = Some(n)` at most `n` records are yielded and no page past the one
/// holding the n-th record is requested.
pub fn paginate(
    transport: Arc<dyn Transport>,
    spec: &'static ResourceSpec,
    view_id: &str,
    params: QueryParams,
    limit: Option<usize>,
) -> impl Stream<Item = Result<Record>> + Send + 'static {
    let cursor = PageCursor {
        transport,
        spec,
        path: format!("/{}/view/{}", spec.resource_type, view_id),
        params,
        limit,
        next_page: 1,
        total_pages: None,
        container: Value::Null,
        items: Vec::new().into_iter(),
        yielded: 0,
    };

    stream::try_unfold(cursor, PageCursor::step)
}
