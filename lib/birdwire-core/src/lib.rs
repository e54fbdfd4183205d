//! Core types for the birdwire Twitter API v2 client.
//!
//! This crate holds everything that does not touch the network:
//! - [`Params`] and [`ParamValue`]: caller-supplied parameters
//! - [`EndpointSpec`]: static endpoint descriptors
//! - [`query_pairs`], [`encode_query`], [`encode_body`]: parameter encoding
//! - [`Credentials`] and [`select_auth`]: auth scheme selection
//! - [`Envelope`] and [`decode_envelope`]: response decoding
//! - [`Request`], [`Response`] and the [`HttpClient`] transport trait
//! - [`Error`] and [`Result`]: error handling
//! - [`entities`]: typed tweets, users, lists...

mod auth;
mod body;
mod credentials;
mod encode;
mod endpoint;
pub mod entities;
mod envelope;
mod error;
mod method;
mod param;
mod path_template;
pub mod prelude;
mod request;
mod response;
mod transport;

pub use auth::{AuthMode, select_auth};
pub use body::{from_json, to_json};
pub use credentials::{Credentials, CredentialsBuilder, env};
pub use encode::{encode_body, encode_query, query_pairs, wire_name};
pub use endpoint::{Cursor, EndpointSpec};
pub use envelope::{ApiError, Envelope, Includes, Meta, RateLimits, decode_envelope, headers};
pub use error::{Error, Result};
pub use method::Method;
pub use param::{ParamValue, Params};
pub use path_template::PathTemplate;
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use transport::HttpClient;

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
