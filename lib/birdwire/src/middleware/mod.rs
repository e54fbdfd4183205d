//! Tower middleware layers for the birdwire transport.
//!
//! Layers wrap the [`HyperTransport`](crate::HyperTransport) service and
//! see every request the client issues, signed and encoded.
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `middleware-logging` | `.with_logging()` helper |
//! | `middleware-concurrency` | `.with_concurrency_limit()` helper |
//! | `middleware-full` | All helpers |
//!
//! # Available Layers
//!
//! - [`LoggingLayer`] - Logs requests/responses and exhausted rate limits using `tracing`
//! - [`ConcurrencyLimitLayer`] - Limits concurrent requests (tower)
//!
//! No retry layer is provided: a failed call reaches the caller as-is.

mod logging;

pub use logging::{LogLevel, Logging, LoggingLayer};

// Re-export tower types for convenience
pub use tower::limit::ConcurrencyLimitLayer;
pub use tower::{Layer, ServiceBuilder};
