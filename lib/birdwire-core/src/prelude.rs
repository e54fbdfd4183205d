//! Prelude module for convenient imports.
//!
//! ```
//! use birdwire_core::prelude::*;
//!
//! let params = Params::new().with("max_results", 10);
//! assert_eq!(params.len(), 1);
//! ```

pub use crate::{
    AuthMode, Credentials, Envelope, Error, HttpClient, Method, ParamValue, Params, Request,
    Response, Result,
};
