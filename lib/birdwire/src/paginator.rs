//! Resumable, forward-only pagination.
//!
//! A [`Paginator`] holds a decoded page, the arguments of the call that
//! produced it ([`CallerBinding`]) and a [`Fetcher`] able to repeat that
//! call. The envelope itself stays plain data.

use std::future::Future;
use std::ops::Deref;

use birdwire_core::{EndpointSpec, Envelope, Error, HttpClient, Params, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::Client;

/// Capability to fetch one page of a given endpoint.
pub trait Fetcher<T>: Send + Sync {
    /// Runs the originating call again with `identity` as path arguments
    /// and `params` as parameters.
    fn fetch_page(
        &self,
        identity: &[String],
        params: &Params,
    ) -> impl Future<Output = Result<Envelope<T>>> + Send;
}

/// [`Fetcher`] re-running one endpoint through a client's pipeline.
///
/// The client handle keeps its auth override, so follow-up pages are
/// requested the same way as the first one.
pub struct EndpointFetcher<C> {
    client: Client<C>,
    spec: EndpointSpec,
}

impl<C> EndpointFetcher<C> {
    /// Fetcher for `spec` through `client`.
    #[must_use]
    pub const fn new(client: Client<C>, spec: EndpointSpec) -> Self {
        Self { client, spec }
    }

    /// The endpoint this fetcher calls.
    #[must_use]
    pub const fn spec(&self) -> &EndpointSpec {
        &self.spec
    }
}

impl<C> Clone for EndpointFetcher<C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            spec: self.spec,
        }
    }
}

impl<C> std::fmt::Debug for EndpointFetcher<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EndpointFetcher")
            .field("endpoint", &self.spec.name)
            .field("client", &self.client)
            .finish()
    }
}

impl<C, T> Fetcher<T> for EndpointFetcher<C>
where
    C: HttpClient,
    T: DeserializeOwned + Send + Sync,
{
    async fn fetch_page(&self, identity: &[String], params: &Params) -> Result<Envelope<T>> {
        let args: Vec<&str> = identity.iter().map(String::as_str).collect();
        self.client.call(&self.spec, &args, params).await
    }
}

/// Arguments of the call that produced a page.
#[derive(Debug, Clone, PartialEq)]
pub struct CallerBinding {
    identity: Vec<String>,
    params: Params,
}

impl CallerBinding {
    /// Binding for path arguments `identity` and `params`.
    pub fn new(identity: impl IntoIterator<Item = String>, params: Params) -> Self {
        Self {
            identity: identity.into_iter().collect(),
            params,
        }
    }

    /// Path arguments (user id, list id...), possibly none.
    #[must_use]
    pub fn identity(&self) -> &[String] {
        &self.identity
    }

    /// Parameters of the call, cursor included for follow-up pages.
    #[must_use]
    pub const fn params(&self) -> &Params {
        &self.params
    }
}

/// A page of results able to fetch the next one.
///
/// Dereferences to its [`Envelope`].
///
/// ```text
/// HasNext --next_page--> HasNext | Terminal
/// Terminal --next_page--> Err(NoNextPage)
/// ```
#[derive(Debug, Clone)]
pub struct Paginator<T, F> {
    envelope: Envelope<T>,
    fetcher: F,
    binding: CallerBinding,
    cursor: &'static str,
}

impl<T, F> Paginator<T, F> {
    /// Binds `envelope` to the call that produced it.
    ///
    /// `cursor` is the parameter that carries the next-page token
    /// (`pagination_token` or `next_token`).
    #[must_use]
    pub const fn new(
        envelope: Envelope<T>,
        fetcher: F,
        binding: CallerBinding,
        cursor: &'static str,
    ) -> Self {
        Self {
            envelope,
            fetcher,
            binding,
            cursor,
        }
    }

    /// The current page.
    #[must_use]
    pub const fn envelope(&self) -> &Envelope<T> {
        &self.envelope
    }

    /// Consume into the current page.
    #[must_use]
    pub fn into_envelope(self) -> Envelope<T> {
        self.envelope
    }

    /// Arguments of the call that produced the current page.
    #[must_use]
    pub const fn binding(&self) -> &CallerBinding {
        &self.binding
    }

    /// Returns `true` if the server announced a next page.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.envelope.meta().next_token().is_some()
    }
}

impl<T, F> Paginator<T, F>
where
    F: Fetcher<T> + Clone,
{
    /// Fetches the next page.
    ///
    /// The original parameters are kept unchanged except the cursor, set
    /// to the current `meta.next_token`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoNextPage`] without a next token, without any
    /// request. Otherwise, any pipeline error.
    pub async fn next_page(&self) -> Result<Self> {
        let token = self.envelope.meta().next_token().ok_or(Error::NoNextPage)?;
        debug!(cursor = self.cursor, token, "fetching next page");

        let mut params = self.binding.params.clone();
        params.insert(self.cursor, token);

        let envelope = self
            .fetcher
            .fetch_page(&self.binding.identity, &params)
            .await?;

        Ok(Self {
            envelope,
            fetcher: self.fetcher.clone(),
            binding: CallerBinding {
                identity: self.binding.identity.clone(),
                params,
            },
            cursor: self.cursor,
        })
    }
}

impl<T, F> Deref for Paginator<T, F> {
    type Target = Envelope<T>;

    fn deref(&self) -> &Self::Target {
        &self.envelope
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use assert2::{check, let_assert};
    use birdwire_core::{ParamValue, Response, decode_envelope, entities::Tweet};
    use bytes::Bytes;

    use super::*;

    type Calls = Arc<Mutex<Vec<(Vec<String>, Params)>>>;

    /// Serves the pages in order and records each call.
    #[derive(Clone, Default)]
    struct Pages {
        bodies: Arc<Vec<&'static str>>,
        calls: Calls,
    }

    impl Fetcher<Vec<Tweet>> for Pages {
        async fn fetch_page(&self, identity: &[String], params: &Params) -> Result<Envelope<Vec<Tweet>>> {
            let index = {
                let mut calls = self.calls.lock().map_err(|_| Error::connection("poisoned"))?;
                calls.push((identity.to_vec(), params.clone()));
                calls.len()
            };
            let body = self.bodies.get(index).copied().unwrap_or("{}");
            decode_envelope(Response::new(200, HashMap::new(), Bytes::from_static(body.as_bytes())))
        }
    }

    fn first_page(pages: &Pages, params: Params) -> Paginator<Vec<Tweet>, Pages> {
        let body = pages.bodies.first().copied().unwrap_or("{}");
        let envelope =
            decode_envelope(Response::new(200, HashMap::new(), Bytes::from_static(body.as_bytes())))
                .expect("decode");
        let binding = CallerBinding::new(["2244994945".to_string()], params);
        Paginator::new(envelope, pages.clone(), binding, "pagination_token")
    }

    #[tokio::test]
    async fn terminal_page_fails_without_fetching() {
        let pages = Pages {
            bodies: Arc::new(vec![r#"{"data":[{"id":"1","text":"a"}],"meta":{"result_count":1}}"#]),
            ..Pages::default()
        };
        let page = first_page(&pages, Params::new());

        check!(!page.has_next());
        let_assert!(Err(Error::NoNextPage) = page.next_page().await);
        check!(pages.calls.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn next_page_rebinds_with_cursor() {
        let pages = Pages {
            bodies: Arc::new(vec![
                r#"{"data":[{"id":"1","text":"a"}],"meta":{"result_count":1,"next_token":"t1"}}"#,
                r#"{"data":[{"id":"2","text":"b"}],"meta":{"result_count":1,"next_token":"t2"}}"#,
                r#"{"data":[{"id":"3","text":"c"}],"meta":{"result_count":1}}"#,
            ]),
            ..Pages::default()
        };
        let params = Params::new()
            .with("max_results", 1)
            .with("tweet_fields", vec!["id", "text"]);
        let first = first_page(&pages, params.clone());

        let second = first.next_page().await.expect("second");
        check!(second.items().first().map(|t| t.id.as_str()) == Some("2"));
        check!(second.binding().params().get("pagination_token") == Some(&ParamValue::from("t1")));

        let third = second.next_page().await.expect("third");
        check!(third.items().first().map(|t| t.id.as_str()) == Some("3"));
        check!(!third.has_next());
        let_assert!(Err(Error::NoNextPage) = third.next_page().await);

        let calls = pages.calls.lock().expect("lock");
        let_assert!([(id1, p1), (id2, p2)] = calls.as_slice());
        check!(id1 == &["2244994945".to_string()]);
        check!(id2 == id1);
        check!(p1.get("pagination_token") == Some(&ParamValue::from("t1")));
        check!(p2.get("pagination_token") == Some(&ParamValue::from("t2")));
        for (name, value) in params.iter() {
            check!(p1.get(name) == Some(value));
            check!(p2.get(name) == Some(value));
        }
        check!(p2.len() == params.len() + 1);

        // The original page is unchanged and can be resumed again.
        check!(first.binding().params() == &params);
    }
}
