//! Typed async client for the Twitter API v2.
//!
//! Every endpoint goes through the same pipeline: pick an auth scheme,
//! encode the parameters, make exactly one HTTP call, decode the
//! `{data, includes, errors, meta}` envelope. List endpoints return a
//! [`Paginator`] that fetches the next page with the same arguments.
//!
//! # Example
//!
//! ```no_run
//! use birdwire::{Client, Credentials, Params};
//!
//! # async fn run() -> birdwire::Result<()> {
//! let client = Client::new(Credentials::builder().bearer_token("AAAA...").build()?)?;
//!
//! let page = client
//!     .search_recent("rustlang", Params::new().with("max_results", 10))
//!     .await?;
//! for tweet in page.items() {
//!     println!("{}: {}", tweet.id, tweet.text);
//! }
//! if page.has_next() {
//!     let next = page.next_page().await?;
//!     println!("{} more", next.items().len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Calls on the authenticated user's own resources need user context
//! (OAuth 1.0a). [`Client::as_user`] and [`Client::as_app`] force a scheme
//! when both credential sets are present.
//!
//! The transport is a Tower service; see [`middleware`] for the layers.

mod authorize;
mod bearer;
mod client;
mod config;
mod connector;
pub mod endpoints;
pub mod middleware;
mod oauth;
mod paginator;
pub mod prelude;
mod transport;

pub use bearer::fetch_bearer_token;
pub use client::{
    Client, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_TOKEN_URL, DEFAULT_USER_AGENT, Page,
};
pub use config::{TransportConfig, TransportConfigBuilder};
pub use oauth::OAuthSigner;
pub use paginator::{CallerBinding, EndpointFetcher, Fetcher, Paginator};
pub use transport::{BoxedService, HyperTransport, HyperTransportBuilder, ServiceFuture};

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use birdwire_core::{
    ApiError, AuthMode, Credentials, CredentialsBuilder, Cursor, EndpointSpec, Envelope, Error,
    HttpClient, Includes, Meta, Method, ParamValue, Params, PathTemplate, RateLimits, Request,
    RequestBuilder, Response, Result, entities, from_json, to_json,
};

// Re-export http types for status codes and headers
pub use birdwire_core::{StatusCode, header};
