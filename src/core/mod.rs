//! Core components of the ingestion pipeline.
//!
//! This module contains the foundational building blocks shared by every stage:
//! - The [`IngestClient`] and its builder, which carry all run configuration.
//! - The error types [`IngestError`] and [`RequestError`].
//! - The retry policy and the internal HTTP helpers.

/// The client (`IngestClient`), builder, and retry configuration.
pub mod client;
/// Error types for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::IngestClient`
pub use client::{Backoff, IngestClient, IngestClientBuilder, RetryConfig};
pub use error::{IngestError, RequestError};
