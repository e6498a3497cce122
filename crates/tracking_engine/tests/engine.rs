use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tracking_engine::{
    EngineEvent, EngineHandle, FailureKind, FetchError, FetchMetadata, FetchOutput, Fetcher,
};

/// Answers after a delay encoded in the identifier (`slow` or `fast`).
struct DelayedFetcher;

#[async_trait::async_trait]
impl Fetcher for DelayedFetcher {
    async fn fetch(&self, identifier: &str) -> Result<FetchOutput, FetchError> {
        let delay = if identifier == "slow" { 200 } else { 10 };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        if identifier == "broken" {
            return Err(FetchError {
                kind: FailureKind::Network,
                message: "connection reset".to_string(),
            });
        }
        Ok(FetchOutput {
            body: json!({"status": {"code": 200}, "data": [{"msm": identifier}]}),
            metadata: FetchMetadata {
                request_url: format!("http://test/{identifier}"),
                status: 200,
                content_type: Some("application/json".to_string()),
                byte_len: 0,
            },
        })
    }
}

fn next_event(engine: &EngineHandle) -> EngineEvent {
    engine
        .recv_timeout(Duration::from_secs(5))
        .expect("engine event")
}

#[test]
fn completions_arrive_in_finish_order() {
    let engine = EngineHandle::with_fetcher(Arc::new(DelayedFetcher)).expect("engine");
    engine.search(1, "slow");
    engine.search(2, "fast");

    let order: Vec<u64> = (0..2)
        .map(|_| match next_event(&engine) {
            EngineEvent::SearchCompleted { search_id, result } => {
                assert!(result.is_ok());
                search_id
            }
        })
        .collect();

    assert_eq!(order, vec![2, 1]);
}

#[test]
fn failures_are_reported_as_events() {
    let engine = EngineHandle::with_fetcher(Arc::new(DelayedFetcher)).expect("engine");
    engine.search(7, "broken");

    let EngineEvent::SearchCompleted { search_id, result } = next_event(&engine);
    assert_eq!(search_id, 7);
    assert_eq!(result.unwrap_err().kind, FailureKind::Network);
}

#[test]
fn no_event_without_a_search() {
    let engine = EngineHandle::with_fetcher(Arc::new(DelayedFetcher)).expect("engine");
    assert!(engine.recv_timeout(Duration::from_millis(50)).is_none());
}
