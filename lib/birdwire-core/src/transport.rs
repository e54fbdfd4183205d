//! Transport trait.
//!
//! The client pipeline builds a [`Request`] and hands it to an
//! [`HttpClient`]. The production implementation lives in the `birdwire`
//! crate; tests may substitute their own.

use std::future::Future;

use bytes::Bytes;

use crate::{Request, Response, Result};

/// Executes one HTTP request.
///
/// Implementations must return non-2xx responses as `Ok`: the status,
/// headers and body are needed to decode API errors and rate limits. `Err`
/// is reserved for failures where no response was received.
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the response.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send;
}

impl<C: HttpClient> HttpClient for std::sync::Arc<C> {
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send {
        (**self).execute(request)
    }
}
