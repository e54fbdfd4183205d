//! Response envelope decoding.
//!
//! Every API response body has the same shape:
//!
//! ```json
//! {
//!   "data": { ... } | [ ... ],
//!   "includes": { "users": [...], "tweets": [...], "media": [...], "polls": [...], "places": [...] },
//!   "errors": [ { "message": "...", "parameters": { ... } } ],
//!   "meta": { "result_count": 10, "newest_id": "...", "oldest_id": "...", "next_token": "..." }
//! }
//! ```
//!
//! All four keys are optional. `errors` may be present next to `data`: the
//! API returns partial results alongside partial failures, and both are kept.

use std::collections::BTreeMap;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::entities::{Media, Place, Poll, Tweet, User};
use crate::{Response, Result, from_json};

/// Rate-limit header names.
pub mod headers {
    /// Request ceiling of the current window.
    pub const LIMIT: &str = "X-Rate-Limit-Limit";
    /// Requests left in the current window.
    pub const REMAINING: &str = "X-Rate-Limit-Remaining";
    /// Window reset, epoch seconds.
    pub const RESET: &str = "X-Rate-Limit-Reset";
}

/// Rate-limit counters read from response headers.
///
/// Missing or unparseable headers read as `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RateLimits {
    /// Request ceiling of the current window.
    pub limit: u32,
    /// Requests left in the current window.
    pub remaining: u32,
    /// Window reset, epoch seconds.
    pub reset: i64,
}

impl RateLimits {
    /// Reads the counters from a response, whatever its status.
    #[must_use]
    pub fn from_response<B>(response: &Response<B>) -> Self {
        fn parse<N: std::str::FromStr + Default>(value: Option<&str>) -> N {
            value
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or_default()
        }

        Self {
            limit: parse(response.header(headers::LIMIT)),
            remaining: parse(response.header(headers::REMAINING)),
            reset: parse(response.header(headers::RESET)),
        }
    }

    /// Returns `true` if the response reported limits and none are left.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.limit > 0 && self.remaining == 0
    }

    /// Reset time, when reported.
    #[must_use]
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        (self.reset > 0)
            .then(|| DateTime::from_timestamp(self.reset, 0))
            .flatten()
    }
}

/// Entities referenced by id from the primary data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Includes {
    /// Expanded users.
    pub users: Vec<User>,
    /// Expanded tweets.
    pub tweets: Vec<Tweet>,
    /// Expanded media.
    pub media: Vec<Media>,
    /// Expanded polls.
    pub polls: Vec<Poll>,
    /// Expanded places.
    pub places: Vec<Place>,
}

impl Includes {
    /// Returns `true` if nothing was side-loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
            && self.tweets.is_empty()
            && self.media.is_empty()
            && self.polls.is_empty()
            && self.places.is_empty()
    }

    /// Included user by id.
    #[must_use]
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Included tweet by id.
    #[must_use]
    pub fn tweet(&self, id: &str) -> Option<&Tweet> {
        self.tweets.iter().find(|tweet| tweet.id == id)
    }

    /// Included media by key.
    #[must_use]
    pub fn media(&self, key: &str) -> Option<&Media> {
        self.media.iter().find(|media| media.media_key == key)
    }
}

/// A structured error reported inside a response body.
///
/// Request-level errors carry `message` and `parameters`; per-resource
/// partial errors carry `title`, `detail` and the resource fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiError {
    /// Human-readable message.
    pub message: String,
    /// Request parameters that triggered the error, with their values.
    pub parameters: BTreeMap<String, serde_json::Value>,
    /// Short summary.
    pub title: Option<String>,
    /// Longer explanation.
    pub detail: Option<String>,
    /// Problem type URI.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Kind of resource concerned (`tweet`, `user`...).
    pub resource_type: Option<String>,
    /// Id of the resource concerned.
    pub resource_id: Option<String>,
    /// Parameter concerned.
    pub parameter: Option<String>,
    /// Offending value.
    pub value: Option<serde_json::Value>,
}

impl ApiError {
    /// The most specific description available.
    #[must_use]
    pub fn description(&self) -> &str {
        if !self.message.is_empty() {
            return &self.message;
        }
        self.detail
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or_default()
    }
}

/// Result and pagination metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    /// Number of items in `data`.
    pub result_count: Option<u64>,
    /// Highest id in `data`.
    pub newest_id: Option<String>,
    /// Lowest id in `data`.
    pub oldest_id: Option<String>,
    /// Cursor of the previous page.
    pub previous_token: Option<String>,
    /// Cursor of the next page.
    pub next_token: Option<String>,
    /// Total over all buckets (tweet counts).
    pub total_tweet_count: Option<u64>,
}

impl Meta {
    /// Cursor of the next page, if there is one.
    #[must_use]
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref().filter(|token| !token.is_empty())
    }
}

/// A decoded response.
///
/// `T` is the primary payload: one entity, or `Vec` of entities for list
/// endpoints. The envelope is plain data, owned by whoever made the call.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    status: u16,
    data: Option<T>,
    includes: Includes,
    errors: Vec<ApiError>,
    meta: Meta,
    rate_limits: RateLimits,
}

impl<T> Envelope<T> {
    /// HTTP status of the response.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Primary payload.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Consume into the primary payload.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Side-loaded entities.
    #[must_use]
    pub const fn includes(&self) -> &Includes {
        &self.includes
    }

    /// Structured API errors, in response order.
    #[must_use]
    pub fn errors(&self) -> &[ApiError] {
        &self.errors
    }

    /// Returns `true` if the API reported any error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Result and pagination metadata.
    #[must_use]
    pub const fn meta(&self) -> &Meta {
        &self.meta
    }

    /// Rate-limit counters of the response.
    #[must_use]
    pub const fn rate_limits(&self) -> RateLimits {
        self.rate_limits
    }
}

impl<T> Envelope<Vec<T>> {
    /// Items of a list payload; empty when `data` was absent.
    #[must_use]
    pub fn items(&self) -> &[T] {
        self.data.as_deref().unwrap_or_default()
    }
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct WireEnvelope<T> {
    data: Option<T>,
    #[serde(default)]
    includes: Includes,
    #[serde(default)]
    errors: Vec<ApiError>,
    #[serde(default)]
    meta: Meta,
    // Problem responses (401, 403, 429...) use top-level fields instead.
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    detail: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

/// Decodes a raw response into a typed [`Envelope`].
///
/// Rate limits are read first, whatever the status. The body is consumed;
/// an empty body decodes as an empty envelope. A non-2xx problem body
/// without an `errors` array becomes a single [`ApiError`].
///
/// # Errors
///
/// Returns [`crate::Error::Decode`] when the body is not an envelope of `T`.
pub fn decode_envelope<T: DeserializeOwned>(response: Response<Bytes>) -> Result<Envelope<T>> {
    let rate_limits = RateLimits::from_response(&response);
    let (status, _, body) = response.into_parts();

    let bytes: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        &body
    };
    let wire: WireEnvelope<T> = from_json(bytes)?;

    let mut errors = wire.errors;
    let is_success = (200..300).contains(&status);
    if !is_success && errors.is_empty() && (wire.title.is_some() || wire.detail.is_some()) {
        errors.push(ApiError {
            message: wire
                .detail
                .clone()
                .or_else(|| wire.title.clone())
                .unwrap_or_default(),
            title: wire.title,
            detail: wire.detail,
            kind: wire.kind,
            ..ApiError::default()
        });
    }

    Ok(Envelope {
        status,
        data: wire.data,
        includes: wire.includes,
        errors,
        meta: wire.meta,
        rate_limits,
    })
}
