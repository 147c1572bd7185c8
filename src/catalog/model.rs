use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

/// The kind of instrument a catalog row describes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum InstrumentType {
    Stock,
    Crypto,
    Forex,
    /// Any type string the catalog uses that this crate does not name.
    Other(String),
}

impl InstrumentType {
    /// Parse the catalog's `type` field. Matching is exact, as the catalog stores it.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "stock" => Self::Stock,
            "crypto" => Self::Crypto,
            "forex" => Self::Forex,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Stock => "stock",
            Self::Crypto => "crypto",
            Self::Forex => "forex",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<InstrumentType> for String {
    fn from(t: InstrumentType) -> Self {
        t.as_str().to_string()
    }
}

/// One row of the store's instrument catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickerSymbol {
    /// The ticker symbol (e.g. `AAPL`). May be empty if the catalog row had none.
    pub symbol: String,
    /// The instrument type.
    #[serde(rename = "type")]
    pub instrument_type: InstrumentType,
}

impl TickerSymbol {
    pub fn new(symbol: impl Into<String>, instrument_type: InstrumentType) -> Self {
        Self {
            symbol: symbol.into(),
            instrument_type,
        }
    }
}

/// The stock symbols a run works on, in catalog order, plus an O(1) membership view.
///
/// Both views are built from the same list and never change afterwards, so the
/// known-symbol filter always matches exactly the symbols sent to the provider.
#[derive(Debug, Clone, Default)]
pub struct StockUniverse {
    symbols: Vec<String>,
    known: HashSet<String>,
}

impl StockUniverse {
    /// Keep stock rows with a non-empty symbol, dropping repeats after their first occurrence.
    pub fn from_tickers<'a, I>(tickers: I) -> Self
    where
        I: IntoIterator<Item = &'a TickerSymbol>,
    {
        let mut known = HashSet::new();
        let symbols = tickers
            .into_iter()
            .filter(|t| t.instrument_type == InstrumentType::Stock && !t.symbol.is_empty())
            .filter(|t| known.insert(t.symbol.clone()))
            .map(|t| t.symbol.clone())
            .collect();
        Self { symbols, known }
    }

    /// Symbols in first-seen order.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.known.contains(symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
