use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct TickerRow {
    pub(crate) symbol: Option<String>,
    #[serde(rename = "type")]
    pub(crate) kind: Option<String>,
}
