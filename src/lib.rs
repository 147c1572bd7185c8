//! news-sentiment-ingest: pull ticker news sentiment from a market-data provider and
//! write it idempotently into an article/ticker-sentiment store.
//!
//! A run reads the store's instrument catalog, keeps the stock symbols, queries the
//! provider ten symbols at a time, and for every article returned:
//! 1. creates it in the store, or derives its id from the URL if it already exists;
//! 2. attaches the sentiment of each ticker the catalog knows.
//!
//! ```no_run
//! use news_sentiment_ingest::{IngestClient, Ingestor};
//!
//! # async fn run() -> Result<(), news_sentiment_ingest::IngestError> {
//! let client = IngestClient::builder()
//!     .api_key("demo")
//!     .store_base_url("https://store.example.com/api")
//!     .build()?;
//! let report = Ingestor::new(client).run().await?;
//! assert!(report.ok);
//! # Ok(())
//! # }
//! ```

pub mod articles;
pub mod batch;
pub mod catalog;
pub mod core;
pub mod feed;
pub mod pipeline;

pub use articles::{ArticleId, ArticleUpsert};
pub use batch::{BATCH_SIZE, chunk};
pub use catalog::{InstrumentType, StockUniverse, TickerSymbol};
pub use crate::core::{
    Backoff, IngestClient, IngestClientBuilder, IngestError, RequestError, RetryConfig,
};
pub use feed::{ArticleRecord, TickerSentimentEntry};
pub use pipeline::{BatchFailurePolicy, IngestReport, IngestStats, Ingestor};
