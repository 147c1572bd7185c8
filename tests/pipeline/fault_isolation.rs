use httpmock::Method::POST;
use news_sentiment_ingest::{
    ArticleId, IngestStats, Ingestor, InstrumentType, StockUniverse, TickerSymbol,
};
use serde_json::json;

use crate::common::{self, article_payload, feed_item, setup_server};

const URLS: [&str; 3] = [
    "https://example.com/news/1",
    "https://example.com/news/2",
    "https://example.com/news/3",
];

fn universe(symbols: &[&str]) -> StockUniverse {
    let rows: Vec<TickerSymbol> = symbols
        .iter()
        .map(|s| TickerSymbol::new(*s, InstrumentType::Stock))
        .collect();
    StockUniverse::from_tickers(&rows)
}

#[tokio::test]
async fn failed_article_does_not_stop_the_batch() {
    let server = setup_server();
    common::mock_feed(
        &server,
        "A",
        json!({ "feed": URLS.map(|u| feed_item(u, &[("A", "0.1")])) }),
    );

    let mut sentiment_mocks = Vec::new();
    for (i, url) in URLS.iter().enumerate() {
        let ok = i != 1;
        server.mock(|when, then| {
            when.method(POST).path("/articles").json_body(article_payload(url));
            if ok {
                then.status(201).json_body(json!({ "articleId": format!("art-{i}") }));
            } else {
                then.status(500).json_body(json!({ "error": "db down" }));
            }
        });
        let id = if ok {
            format!("art-{i}")
        } else {
            ArticleId::from_url(url).to_string()
        };
        sentiment_mocks.push(server.mock(|when, then| {
            when.method(POST).path(format!("/articles/{id}/tickers"));
            then.status(200);
        }));
    }

    let ingestor = Ingestor::new(common::client(&server));
    let mut stats = IngestStats::default();
    ingestor
        .ingest_batch(&["A".to_string()], &universe(&["A"]), &mut stats)
        .await
        .unwrap();

    sentiment_mocks[0].assert_hits(1);
    sentiment_mocks[1].assert_hits(0);
    sentiment_mocks[2].assert_hits(1);
    assert_eq!(stats.articles_seen, 3);
    assert_eq!(stats.articles_created, 2);
    assert_eq!(stats.articles_failed, 1);
    assert_eq!(stats.sentiments_written, 2);
}

#[tokio::test]
async fn failed_sentiment_does_not_stop_the_article() {
    let server = setup_server();
    common::mock_feed(
        &server,
        "A,B,C",
        json!({
            "feed": [
                feed_item(URLS[0], &[("A", "0.1"), ("B", "0.2"), ("C", "0.3")]),
                feed_item(URLS[1], &[("C", "0.3")]),
            ]
        }),
    );
    server.mock(|when, then| {
        when.method(POST).path("/articles").json_body(article_payload(URLS[0]));
        then.status(201).json_body(json!({ "articleId": "first" }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/articles").json_body(article_payload(URLS[1]));
        then.status(201).json_body(json!({ "articleId": "second" }));
    });

    let mut first_calls = Vec::new();
    for (ticker, score, status) in [("A", 0.1, 200), ("B", 0.2, 400), ("C", 0.3, 200)] {
        first_calls.push(server.mock(|when, then| {
            when.method(POST)
                .path("/articles/first/tickers")
                .json_body(json!({
                    "tickerSymbol": ticker,
                    "tickerSentimentScore": score,
                    "tickerSentimentLabel": "Neutral",
                    "relevanceScore": 0.5,
                }));
            then.status(status);
        }));
    }
    let second_call = server.mock(|when, then| {
        when.method(POST).path("/articles/second/tickers");
        then.status(200);
    });

    let ingestor = Ingestor::new(common::client(&server));
    let mut stats = IngestStats::default();
    ingestor
        .ingest_batch(
            &["A".to_string(), "B".to_string(), "C".to_string()],
            &universe(&["A", "B", "C"]),
            &mut stats,
        )
        .await
        .unwrap();

    for mock in &first_calls {
        mock.assert_hits(1);
    }
    second_call.assert_hits(1);
    assert_eq!(stats.sentiments_written, 3);
    assert_eq!(stats.sentiments_failed, 1);
}

#[tokio::test]
async fn unknown_tickers_are_filtered_before_upsert() {
    let server = setup_server();
    common::mock_feed(
        &server,
        "A",
        json!({ "feed": [feed_item(URLS[0], &[("A", "0.1"), ("X", "0.2")])] }),
    );
    server.mock(|when, then| {
        when.method(POST).path("/articles");
        then.status(201).json_body(json!({ "articleId": "only" }));
    });
    let sentiment = server.mock(|when, then| {
        when.method(POST).path("/articles/only/tickers");
        then.status(200);
    });

    let mut stats = IngestStats::default();
    Ingestor::new(common::client(&server))
        .ingest_batch(&["A".to_string()], &universe(&["A"]), &mut stats)
        .await
        .unwrap();

    sentiment.assert_hits(1);
    assert_eq!(stats.sentiments_written, 1);
    assert_eq!(stats.sentiments_skipped, 1);
}
