//! The store's instrument catalog and the stock universe derived from it.

mod api;
mod model;
mod wire;

pub use model::{InstrumentType, StockUniverse, TickerSymbol};

use crate::core::{IngestClient, IngestError};

/// Fetch every instrument the store knows, in catalog order.
///
/// Issues a single `GET {base}/tickers/byType/all`; the whole catalog comes back in one response.
///
/// # Errors
///
/// Returns `IngestError::Upstream` if the request fails, the store answers with a
/// non-2xx status, or the body is not a JSON list of `{symbol, type}` rows.
#[tracing::instrument(skip_all, err)]
pub async fn get_all_tickers(client: &IngestClient) -> Result<Vec<TickerSymbol>, IngestError> {
    api::get_all_tickers(client).await
}

/// Fetch the catalog and reduce it to the run's stock universe.
///
/// # Errors
///
/// Same as [`get_all_tickers`].
pub async fn load_stock_universe(client: &IngestClient) -> Result<StockUniverse, IngestError> {
    let tickers = get_all_tickers(client).await?;
    Ok(StockUniverse::from_tickers(&tickers))
}
