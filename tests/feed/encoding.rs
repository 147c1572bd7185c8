use news_sentiment_ingest::{IngestClient, feed};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve one empty feed and hand back the raw request line as it arrived.
async fn capture_request_line(listener: TcpListener) -> String {
    let (mut socket, _) = listener.accept().await.unwrap();
    let mut raw = Vec::new();
    let mut buf = [0u8; 1024];
    while !raw.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut buf).await.unwrap();
        assert!(n > 0, "connection closed before headers ended");
        raw.extend_from_slice(&buf[..n]);
    }

    let body = r#"{"feed":[]}"#;
    let response = format!(
        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );
    socket.write_all(response.as_bytes()).await.unwrap();

    let text = String::from_utf8_lossy(&raw).into_owned();
    text.lines().next().unwrap_or_default().to_string()
}

#[tokio::test]
async fn tickers_and_key_are_percent_encoded_on_the_wire() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(capture_request_line(listener));

    let client = IngestClient::builder()
        .api_key("se+cret")
        .store_base_url(format!("http://{addr}"))
        .provider_endpoint(format!("http://{addr}/query?function=NEWS_SENTIMENT"))
        .build()
        .unwrap();
    let symbols = ["BRK.B".to_string(), "A&B".to_string()];
    let articles = feed::fetch_batch(&client, &symbols).await.unwrap();
    assert!(articles.is_empty());

    let request_line = server.await.unwrap();
    assert!(
        request_line.starts_with(
            "GET /query?function=NEWS_SENTIMENT&tickers=BRK.B%2CA%26B&apikey=se%2Bcret "
        ),
        "unexpected request line: {request_line}"
    );
}
