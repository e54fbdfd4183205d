//! HTTP request building.
//!
//! Use [`Request::builder`] to construct requests with headers, query parameters, and bodies.
//!
//! # Example
//!
//! ```
//! use birdwire_core::{Method, Request};
//! use bytes::Bytes;
//!
//! let request = Request::<Bytes>::builder(Method::Get, "https://api.twitter.com/2/tweets".parse().unwrap())
//!     .header("Accept", "application/json")
//!     .query("ids", "20,21")
//!     .build();
//! assert_eq!(request.url().query(), Some("ids=20%2C21"));
//! ```

use std::collections::HashMap;

use bytes::Bytes;

use crate::{Method, PathTemplate};

/// An HTTP request with method, URL, headers, and optional body.
///
/// The route template the request was built from travels along so that
/// middleware can log the endpoint without the substituted identifiers.
#[derive(Debug, Clone)]
pub struct Request<B = Bytes> {
    method: Method,
    url: url::Url,
    headers: HashMap<String, String>,
    body: Option<B>,
    template: Option<PathTemplate>,
}

impl<B> Request<B> {
    /// Creates a new [`RequestBuilder`].
    #[must_use]
    pub fn builder(method: Method, url: url::Url) -> RequestBuilder<B> {
        RequestBuilder::new(method, url)
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Request URL.
    #[must_use]
    pub fn url(&self) -> &url::Url {
        &self.url
    }

    /// Request headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Mutable access to headers.
    #[must_use]
    pub fn headers_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Request body.
    #[must_use]
    pub const fn body(&self) -> Option<&B> {
        self.body.as_ref()
    }

    /// Route template, when built by the endpoint pipeline.
    #[must_use]
    pub const fn template(&self) -> Option<&PathTemplate> {
        self.template.as_ref()
    }

    /// Consume into (method, url, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (Method, url::Url, HashMap<String, String>, Option<B>) {
        (self.method, self.url, self.headers, self.body)
    }
}

/// Builder for constructing [`Request`] instances.
#[derive(Debug, Clone)]
pub struct RequestBuilder<B = Bytes> {
    method: Method,
    url: url::Url,
    headers: HashMap<String, String>,
    body: Option<B>,
    template: Option<PathTemplate>,
}

impl<B> RequestBuilder<B> {
    /// Creates a new builder.
    #[must_use]
    pub fn new(method: Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: HashMap::new(),
            body: None,
            template: None,
        }
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Appends a query parameter to the URL.
    #[must_use]
    pub fn query(mut self, name: &str, value: &str) -> Self {
        self.url.query_pairs_mut().append_pair(name, value);
        self
    }

    /// Replaces the URL query with an already encoded query string.
    #[must_use]
    pub fn encoded_query(mut self, query: &str) -> Self {
        self.url.set_query((!query.is_empty()).then_some(query));
        self
    }

    /// Records the route template.
    #[must_use]
    pub fn template(mut self, template: PathTemplate) -> Self {
        self.template = Some(template);
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: B) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds the [`Request`].
    #[must_use]
    pub fn build(self) -> Request<B> {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
            template: self.template,
        }
    }
}

impl RequestBuilder<Bytes> {
    /// Set an encoded JSON body.
    #[must_use]
    pub fn json_bytes(self, body: Bytes) -> Self {
        self.header("Content-Type", "application/json; charset=UTF-8")
            .body(body)
    }

    /// Set a form-urlencoded body.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn form<T: serde::Serialize>(self, value: &T) -> crate::Result<Self> {
        let body = serde_html_form::to_string(value)?;
        Ok(self
            .header(
                "Content-Type",
                "application/x-www-form-urlencoded;charset=UTF-8",
            )
            .body(Bytes::from(body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> url::Url {
        url::Url::parse(s).expect("valid URL")
    }

    #[test]
    fn request_builder_basic() {
        let request = Request::<Bytes>::builder(Method::Get, url("https://api.twitter.com/2/users/me"))
            .header("Accept", "application/json")
            .build();

        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.url().as_str(), "https://api.twitter.com/2/users/me");
        assert_eq!(request.header("Accept"), Some("application/json"));
        assert!(request.body().is_none());
        assert!(request.template().is_none());
    }

    #[test]
    fn request_builder_encoded_query() {
        let request = Request::<Bytes>::builder(Method::Get, url("https://api.twitter.com/2/tweets"))
            .encoded_query("ids=1%2C2&tweet.fields=id")
            .build();
        assert_eq!(
            request.url().as_str(),
            "https://api.twitter.com/2/tweets?ids=1%2C2&tweet.fields=id"
        );

        let request = Request::<Bytes>::builder(Method::Get, url("https://api.twitter.com/2/tweets"))
            .encoded_query("")
            .build();
        assert_eq!(request.url().query(), None);
    }

    #[test]
    fn request_builder_json_bytes() {
        let body = Bytes::from(r#"{"text":"hello"}"#);
        let request = Request::builder(Method::Post, url("https://api.twitter.com/2/tweets"))
            .json_bytes(body.clone())
            .template(PathTemplate::new("tweets"))
            .build();

        assert_eq!(
            request.header("Content-Type"),
            Some("application/json; charset=UTF-8")
        );
        assert_eq!(request.body(), Some(&body));
        assert_eq!(request.template().map(PathTemplate::as_str), Some("tweets"));
    }

    #[test]
    fn request_builder_form() {
        let request = Request::builder(Method::Post, url("https://api.twitter.com/oauth2/token"))
            .form(&[("grant_type", "client_credentials")])
            .expect("form")
            .build();

        assert_eq!(
            request.body().map(Bytes::as_ref),
            Some(b"grant_type=client_credentials".as_ref())
        );
    }
}
