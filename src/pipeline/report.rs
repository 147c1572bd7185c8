use serde::Serialize;

/// The run's terminal result. Serializes to `{"ok":true,"batches":N}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub ok: bool,
    /// Number of provider batches the symbol universe was split into.
    pub batches: usize,
    /// Counters for the log line; not part of the invocation payload.
    #[serde(skip)]
    pub stats: IngestStats,
}

/// Per-run counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestStats {
    pub batches_failed: usize,
    pub articles_seen: usize,
    pub articles_created: usize,
    pub articles_existing: usize,
    pub articles_unidentified: usize,
    pub articles_failed: usize,
    pub sentiments_written: usize,
    pub sentiments_failed: usize,
    /// Entries dropped because their ticker is not in the stock universe.
    pub sentiments_skipped: usize,
}
