//! Partitioning of the symbol universe into provider-sized queries.

/// Symbols per provider query. The provider's `tickers` parameter accepts at most ten.
pub const BATCH_SIZE: usize = 10;

/// Split `items` into consecutive groups of at most `size`, preserving order.
///
/// Only the last group may be shorter. Empty input yields no groups.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    assert!(size >= 1, "chunk size must be at least 1");
    items.chunks(size).map(<[T]>::to_vec).collect()
}
