use crate::error::CursorError;
use model::{
    core::{attribute::Attribute, value::Value},
    pagination::window::PageWindow,
};
use solr_client::{
    document::SolrDocument, executor::QueryExecutor, request::QueryRequest,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Streams the documents matching one query back in fixed-size pages behind a
/// pull interface, so the consumer never sees page sizes or offsets. One
/// cursor serves one logical scan; concurrent callers are serialized on the
/// internal state lock, never run in parallel.
pub struct SolrRecordIterator {
    collection: String,
    batch_size: usize,
    attributes: Vec<Attribute>,
    state: Mutex<CursorState>,
}

struct CursorState {
    executor: Option<Arc<dyn QueryExecutor>>,
    query: String,
    window: PageWindow,
    batch: Option<Vec<SolrDocument>>,
    position: usize,
}

impl CursorState {
    /// Only called after `advance` returned true, so a current document
    /// exists; the fallback keeps the non-test path panic-free regardless.
    fn take_current(&mut self) -> SolrDocument {
        let document = self
            .batch
            .as_ref()
            .and_then(|batch| batch.get(self.position))
            .cloned()
            .unwrap_or_default();
        self.position += 1;
        document
    }
}

impl SolrRecordIterator {
    pub fn new(
        query: String,
        executor: Arc<dyn QueryExecutor>,
        collection: &str,
        batch_size: usize,
        attributes: Vec<Attribute>,
    ) -> Self {
        SolrRecordIterator {
            collection: collection.to_string(),
            batch_size,
            attributes,
            state: Mutex::new(CursorState {
                executor: Some(executor),
                query,
                window: PageWindow::first(batch_size),
                batch: None,
                position: 0,
            }),
        }
    }

    /// True when at least one more record is available. Issues one remote
    /// fetch when the current batch is exhausted but came back full (the only
    /// case where more data may exist).
    pub async fn has_next(&self) -> Result<bool, CursorError> {
        let mut state = self.state.lock().await;
        self.advance(&mut state).await
    }

    /// Take the next record and project it through the attribute list into an
    /// ordered tuple; fields the document lacks become `Null`. At end of
    /// stream this returns an empty tuple rather than an error — the host's
    /// record-iterator contract expects that shape.
    pub async fn next_tuple(&self) -> Result<Vec<Value>, CursorError> {
        let mut state = self.state.lock().await;
        if !self.advance(&mut state).await? {
            return Ok(Vec::new());
        }
        let document = state.take_current();
        Ok(self.project(&document))
    }

    /// Take the next record without projection, or `None` at end of stream.
    pub async fn next_document(&self) -> Result<Option<SolrDocument>, CursorError> {
        let mut state = self.state.lock().await;
        if !self.advance(&mut state).await? {
            return Ok(None);
        }
        Ok(Some(state.take_current()))
    }

    /// Drop the client handle. Idempotent and purely local; an in-flight
    /// fetch on another task is not interrupted.
    pub async fn close(&self) {
        let mut state = self.state.lock().await;
        state.executor = None;
    }

    /// Ensure the current batch has an unconsumed record. A batch shorter
    /// than the page size is the end-of-stream signal, so the loop performs
    /// at most one fetch: either the refilled batch has records, or it proves
    /// the stream ended.
    async fn advance(&self, state: &mut CursorState) -> Result<bool, CursorError> {
        loop {
            if let Some(batch) = &state.batch {
                if state.position < batch.len() {
                    return Ok(true);
                }
                if batch.len() < self.batch_size {
                    return Ok(false);
                }
            }
            self.refill(state).await?;
        }
    }

    async fn refill(&self, state: &mut CursorState) -> Result<(), CursorError> {
        let executor = state.executor.clone().ok_or(CursorError::Closed)?;
        let request = QueryRequest::builder(&state.query)
            .window(state.window)
            .build();
        // The offset moves by the page size regardless of how many documents
        // actually come back; a short page ends the stream anyway.
        state.window = state.window.advance();
        let result = executor.query(&self.collection, &request).await?;
        debug!(
            "Fetched {} of {} matching documents from '{}' at offset {}",
            result.docs.len(),
            result.num_found,
            self.collection,
            request.window.start
        );
        state.batch = Some(result.docs);
        state.position = 0;
        Ok(())
    }

    fn project(&self, document: &SolrDocument) -> Vec<Value> {
        self.attributes
            .iter()
            .map(|attribute| match document.get(&attribute.name) {
                Some(raw) => Value::from_json(&attribute.data_type, raw),
                None => Value::Null,
            })
            .collect()
    }
}
