#[cfg(test)]
mod tests {
    use crate::{error::CursorError, iterator::SolrRecordIterator};
    use async_trait::async_trait;
    use model::core::{attribute::Attribute, data_type::DataType, value::Value};
    use serde_json::json;
    use solr_client::{
        document::SolrDocument,
        error::SolrError,
        executor::QueryExecutor,
        request::QueryRequest,
        response::QueryResult,
    };
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    // Serves `total` sequential documents, paged by whatever window the
    // cursor asks for, and counts the round trips.
    struct PagedExecutor {
        total: usize,
        fetches: Arc<AtomicUsize>,
    }

    fn document(seq: usize) -> SolrDocument {
        let mut document = SolrDocument::new();
        document.set("id", json!(format!("ev-{seq}")));
        document.set("seq", json!(seq as i64));
        document
    }

    #[async_trait]
    impl QueryExecutor for PagedExecutor {
        async fn query(
            &self,
            _collection: &str,
            request: &QueryRequest,
        ) -> Result<QueryResult, SolrError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            let start = request.window.start.min(self.total);
            let end = (start + request.window.rows).min(self.total);
            Ok(QueryResult {
                docs: (start..end).map(document).collect(),
                num_found: self.total as u64,
            })
        }
    }

    struct FailingExecutor;

    #[async_trait]
    impl QueryExecutor for FailingExecutor {
        async fn query(
            &self,
            _collection: &str,
            _request: &QueryRequest,
        ) -> Result<QueryResult, SolrError> {
            Err(SolrError::MalformedQuery("undefined field seq".to_string()))
        }
    }

    fn attributes() -> Vec<Attribute> {
        vec![Attribute::new("seq", DataType::Long)]
    }

    fn cursor(total: usize, batch_size: usize) -> (SolrRecordIterator, Arc<AtomicUsize>) {
        let fetches = Arc::new(AtomicUsize::new(0));
        let executor = Arc::new(PagedExecutor {
            total,
            fetches: fetches.clone(),
        });
        let iterator = SolrRecordIterator::new(
            "*:*".to_string(),
            executor,
            "events",
            batch_size,
            attributes(),
        );
        (iterator, fetches)
    }

    async fn drain(iterator: &SolrRecordIterator) -> usize {
        let mut seen = 0;
        while iterator.has_next().await.unwrap() {
            let tuple = iterator.next_tuple().await.unwrap();
            assert_eq!(tuple, vec![Value::Long(seen as i64)]);
            seen += 1;
        }
        seen
    }

    #[tokio::test]
    async fn yields_every_record_across_pages() {
        crate::tests::init_tracing();
        let (iterator, _) = cursor(7, 3);
        assert_eq!(drain(&iterator).await, 7);
        assert!(!iterator.has_next().await.unwrap());
    }

    #[tokio::test]
    async fn single_short_page_streams_completely() {
        let (iterator, fetches) = cursor(2, 5);
        assert_eq!(drain(&iterator).await, 2);
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn full_final_page_costs_exactly_one_probe_fetch() {
        let (iterator, fetches) = cursor(6, 3);
        assert_eq!(drain(&iterator).await, 6);
        // two data pages plus the empty probe that proves the stream ended
        assert_eq!(fetches.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn short_page_ends_the_stream_without_a_probe() {
        let (iterator, fetches) = cursor(5, 3);
        assert_eq!(drain(&iterator).await, 5);
        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn empty_result_set_terminates_immediately() {
        let (iterator, fetches) = cursor(0, 3);
        assert!(!iterator.has_next().await.unwrap());
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn next_tuple_after_end_returns_empty_tuple() {
        let (iterator, fetches) = cursor(2, 5);
        assert_eq!(drain(&iterator).await, 2);
        assert_eq!(iterator.next_tuple().await.unwrap(), Vec::new());
        assert_eq!(iterator.next_tuple().await.unwrap(), Vec::new());
        assert!(iterator.next_document().await.unwrap().is_none());
        // end-of-stream answers come from the cached short page
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn projection_follows_attribute_list_order() {
        struct SinglePage;

        #[async_trait]
        impl QueryExecutor for SinglePage {
            async fn query(
                &self,
                _collection: &str,
                _request: &QueryRequest,
            ) -> Result<QueryResult, SolrError> {
                let mut doc = SolrDocument::new();
                doc.set("a", json!(1));
                doc.set("b", json!("two"));
                doc.set("c", json!(true));
                Ok(QueryResult {
                    docs: vec![doc],
                    num_found: 1,
                })
            }
        }

        let iterator = SolrRecordIterator::new(
            "*:*".to_string(),
            Arc::new(SinglePage),
            "events",
            10,
            vec![
                Attribute::new("a", DataType::Int),
                Attribute::new("c", DataType::Bool),
                Attribute::new("b", DataType::String),
                Attribute::new("missing", DataType::Long),
            ],
        );
        let tuple = iterator.next_tuple().await.unwrap();
        assert_eq!(
            tuple,
            vec![
                Value::Int(1),
                Value::Bool(true),
                Value::String("two".to_string()),
                Value::Null,
            ]
        );
    }

    #[tokio::test]
    async fn close_is_idempotent_and_issues_no_remote_call() {
        let (iterator, fetches) = cursor(4, 2);
        iterator.close().await;
        iterator.close().await;
        assert_eq!(fetches.load(Ordering::SeqCst), 0);
        assert!(matches!(
            iterator.has_next().await,
            Err(CursorError::Closed)
        ));
    }

    #[tokio::test]
    async fn remote_fault_surfaces_as_cursor_error() {
        let iterator = SolrRecordIterator::new(
            "seq:zzz".to_string(),
            Arc::new(FailingExecutor),
            "events",
            3,
            attributes(),
        );
        assert!(matches!(
            iterator.has_next().await,
            Err(CursorError::Fetch(SolrError::MalformedQuery(_)))
        ));
    }
}
