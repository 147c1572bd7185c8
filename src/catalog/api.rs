use crate::{
    catalog::{
        model::{InstrumentType, TickerSymbol},
        wire::TickerRow,
    },
    core::{IngestClient, IngestError, net},
};

const CONTEXT: &str = "ticker catalog";

pub(super) async fn get_all_tickers(
    client: &IngestClient,
) -> Result<Vec<TickerSymbol>, IngestError> {
    let url = client
        .store_url(&["tickers", "byType", "all"])
        .map_err(|e| IngestError::upstream(CONTEXT, e))?;

    let body = net::get_text(client, url)
        .await
        .map_err(|e| IngestError::upstream(CONTEXT, e))?;
    let rows: Vec<TickerRow> =
        serde_json::from_str(&body).map_err(|e| IngestError::upstream(CONTEXT, e))?;

    Ok(rows
        .into_iter()
        .map(|row| TickerSymbol {
            symbol: row.symbol.unwrap_or_default(),
            instrument_type: InstrumentType::parse(row.kind.as_deref().unwrap_or_default()),
        })
        .collect())
}
