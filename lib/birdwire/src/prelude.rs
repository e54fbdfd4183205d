//! Prelude module for convenient imports.
//!
//! ```
//! use birdwire::prelude::*;
//!
//! let params = Params::new()
//!     .with("max_results", 100)
//!     .with("tweet_fields", ["created_at", "lang"]);
//! assert!(params.contains("tweet_fields"));
//! ```

pub use crate::entities::{List, Media, Space, Tweet, User};
pub use crate::{
    AuthMode, Client, Credentials, Envelope, Error, HttpClient, HyperTransport, Page, ParamValue,
    Params, Result,
};
