use std::collections::HashMap;
use std::time::Duration;

use news_sentiment_ingest::{IngestClient, IngestClientBuilder, IngestError};

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

fn config_message(result: Result<IngestClient, IngestError>) -> String {
    match result {
        Err(IngestError::Config(msg)) => msg,
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn env_supplies_key_and_base_url() {
    let client = IngestClientBuilder::from_env_with(env(&[
        ("ALPHAVANTAGE_API_KEY", "k"),
        ("API_BASE_URL", "https://store.example.com/api"),
    ]))
    .unwrap()
    .build()
    .unwrap();

    assert_eq!(client.store_base().as_str(), "https://store.example.com/api");
    let debug = format!("{client:?}");
    assert!(debug.contains("<redacted>"));
    assert!(!debug.contains("\"k\""));
}

#[test]
fn missing_api_key_is_a_configuration_error() {
    let builder =
        IngestClientBuilder::from_env_with(env(&[("API_BASE_URL", "https://store.example.com")]))
            .unwrap();
    let msg = config_message(builder.build());
    assert!(msg.contains("ALPHAVANTAGE_API_KEY"), "{msg}");
}

#[test]
fn blank_base_url_is_a_configuration_error() {
    let builder = IngestClientBuilder::from_env_with(env(&[
        ("ALPHAVANTAGE_API_KEY", "k"),
        ("API_BASE_URL", "   "),
    ]))
    .unwrap();
    let msg = config_message(builder.build());
    assert!(msg.contains("API_BASE_URL"), "{msg}");
}

#[test]
fn unusable_base_urls_are_rejected() {
    for base in ["not a url", "mailto:ops@example.com", "ftp://store.example.com"] {
        let result = IngestClient::builder()
            .api_key("k")
            .store_base_url(base)
            .build();
        config_message(result);
    }
}

#[test]
fn timeout_override_must_be_whole_seconds() {
    let err = IngestClientBuilder::from_env_with(env(&[("INGEST_TIMEOUT_SECS", "soon")]))
        .unwrap_err();
    assert!(matches!(err, IngestError::Config(_)), "got {err:?}");

    IngestClientBuilder::from_env_with(env(&[
        ("ALPHAVANTAGE_API_KEY", "k"),
        ("API_BASE_URL", "http://localhost:8080"),
        ("INGEST_TIMEOUT_SECS", "5"),
    ]))
    .unwrap()
    .build()
    .unwrap();
}

#[test]
fn explicit_settings_build() {
    IngestClient::builder()
        .api_key("k")
        .store_base_url("http://localhost:8080/")
        .provider_endpoint("http://localhost:9090/query?function=NEWS_SENTIMENT")
        .timeout(Duration::from_secs(1))
        .user_agent("ingest-tests")
        .build()
        .unwrap();
}
