use httpmock::Method::GET;
use news_sentiment_ingest::{BatchFailurePolicy, IngestError, Ingestor};
use serde_json::{Value, json};

use crate::common::{self, setup_server};

fn stock_rows(n: usize) -> Value {
    Value::Array(
        (0..n)
            .map(|i| json!({ "symbol": format!("S{i:02}"), "type": "stock" }))
            .collect(),
    )
}

fn joined(range: std::ops::Range<usize>) -> String {
    range.map(|i| format!("S{i:02}")).collect::<Vec<_>>().join(",")
}

#[tokio::test]
async fn symbols_are_queried_ten_at_a_time() {
    let server = setup_server();
    common::mock_catalog(&server, stock_rows(23));
    let feeds = [joined(0..10), joined(10..20), joined(20..23)]
        .map(|tickers| common::mock_feed(&server, &tickers, json!({ "feed": [] })));

    let report = Ingestor::new(common::client(&server)).run().await.unwrap();

    for feed in &feeds {
        feed.assert();
    }
    assert_eq!(report.batches, 3);
    assert_eq!(report.stats.batches_failed, 0);
}

#[tokio::test]
async fn failed_batch_is_isolated_by_default() {
    let server = setup_server();
    common::mock_catalog(&server, stock_rows(12));
    let broken = server.mock(|when, then| {
        when.method(GET).path("/query").query_param("tickers", joined(0..10));
        then.status(500).body("provider error");
    });
    let healthy = common::mock_feed(&server, &joined(10..12), json!({ "feed": [] }));

    let report = Ingestor::new(common::client(&server)).run().await.unwrap();

    broken.assert();
    healthy.assert();
    assert!(report.ok);
    assert_eq!(report.batches, 2);
    assert_eq!(report.stats.batches_failed, 1);
}

#[tokio::test]
async fn failed_batch_aborts_under_abort_policy() {
    let server = setup_server();
    common::mock_catalog(&server, stock_rows(12));
    server.mock(|when, then| {
        when.method(GET).path("/query").query_param("tickers", joined(0..10));
        then.status(500);
    });
    let healthy = common::mock_feed(&server, &joined(10..12), json!({ "feed": [] }));

    let err = Ingestor::new(common::client(&server))
        .on_batch_failure(BatchFailurePolicy::Abort)
        .run()
        .await
        .unwrap_err();

    healthy.assert_hits(0);
    assert!(matches!(err, IngestError::Upstream { .. }), "got {err:?}");
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn catalog_failure_aborts_before_any_batch() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/tickers/byType/all");
        then.status(502);
    });
    let provider = server.mock(|when, then| {
        when.path("/query");
        then.status(200).json_body(json!({ "feed": [] }));
    });

    let err = Ingestor::new(common::client(&server)).run().await.unwrap_err();

    provider.assert_hits(0);
    assert!(matches!(err, IngestError::Upstream { .. }), "got {err:?}");
    assert!(err.to_string().contains("ticker catalog"));
}
