//! The API client and its generic endpoint pipeline.

use std::sync::Arc;

use birdwire_core::{
    AuthMode, Credentials, EndpointSpec, Envelope, Error, HttpClient, Params, Request, Result,
    decode_envelope, encode_body, encode_query, select_auth,
};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use tracing::{Span, debug, instrument};
use url::Url;

use crate::authorize::authorization;
use crate::bearer::fetch_bearer_token;
use crate::paginator::{CallerBinding, EndpointFetcher, Paginator};
use crate::transport::HyperTransport;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.twitter.com/2/";

/// Default bearer token exchange URL.
pub const DEFAULT_TOKEN_URL: &str = "https://api.twitter.com/oauth2/token";

/// Default `User-Agent` header value.
pub const DEFAULT_USER_AGENT: &str = concat!("birdwire/", env!("CARGO_PKG_VERSION"));

/// Paginator returned by list endpoints.
pub type Page<T, C = HyperTransport> = Paginator<Vec<T>, EndpointFetcher<C>>;

/// Twitter API v2 client.
///
/// Cloning is cheap: the transport and credentials are shared. Every
/// endpoint method runs the same pipeline, see [`Client::call`].
///
/// # Example
///
/// ```no_run
/// use birdwire::{Client, Credentials, Params};
///
/// # async fn run() -> birdwire::Result<()> {
/// let client = Client::new(Credentials::from_env()?)?;
/// let page = client
///     .search_recent("from:TwitterDev", Params::new().with("max_results", 10))
///     .await?;
/// for tweet in page.items() {
///     println!("{}", tweet.text);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Client<C = HyperTransport> {
    transport: Arc<C>,
    credentials: Arc<Credentials>,
    base_url: Url,
    token_url: Url,
    user_agent: Arc<str>,
    auth_override: Option<AuthMode>,
}

impl<C> Clone for Client<C> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            credentials: Arc::clone(&self.credentials),
            base_url: self.base_url.clone(),
            token_url: self.token_url.clone(),
            user_agent: Arc::clone(&self.user_agent),
            auth_override: self.auth_override,
        }
    }
}

impl<C> std::fmt::Debug for Client<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url.as_str())
            .field("auth_override", &self.auth_override)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Client with default settings and the hyper transport.
    ///
    /// # Errors
    ///
    /// Never fails with valid [`Credentials`]; see [`ClientBuilder::build`].
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::builder().credentials(credentials).build()
    }

    /// Client with credentials read from the `TWITTER_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if neither credential set is complete.
    pub fn from_env() -> Result<Self> {
        Self::new(Credentials::from_env()?)
    }

    /// Creates a builder.
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }
}

impl<C> Client<C> {
    /// Client credentials.
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Auth mode requested for every call of this handle, if any.
    #[must_use]
    pub const fn auth_override(&self) -> Option<AuthMode> {
        self.auth_override
    }

    /// Handle whose calls prefer the given auth mode.
    ///
    /// The preference still yields to what the credentials allow.
    #[must_use]
    pub fn with_auth(&self, mode: AuthMode) -> Self {
        Self {
            auth_override: Some(mode),
            ..self.clone()
        }
    }

    /// Handle whose calls prefer user context (OAuth 1.0a).
    #[must_use]
    pub fn as_user(&self) -> Self {
        self.with_auth(AuthMode::UserContext)
    }

    /// Handle whose calls prefer app context (bearer token).
    #[must_use]
    pub fn as_app(&self) -> Self {
        self.with_auth(AuthMode::AppContext)
    }

    /// Id of the authenticated user, for the `users/{id}/...` action routes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the access token carries no user id.
    pub fn user_id(&self) -> Result<&str> {
        self.credentials.user_id().ok_or_else(|| {
            Error::configuration("an access token of the form '<user id>-<key>' is required")
        })
    }

    /// Builds the signed request for one call.
    fn request(
        &self,
        spec: &EndpointSpec,
        path_args: &[&str],
        params: &Params,
        mode: AuthMode,
    ) -> Result<Request<Bytes>> {
        let path = spec.route.expand(path_args)?;
        let mut url = self.base_url.join(&path)?;

        let body = if spec.method.has_body() {
            Some(encode_body(spec, params)?)
        } else {
            let query = encode_query(spec, params)?;
            url.set_query((!query.is_empty()).then_some(query.as_str()));
            None
        };

        let authorization = authorization(&self.credentials, mode, spec.method, &url)?;
        let builder = Request::builder(spec.method, url)
            .template(spec.route)
            .header("User-Agent", &*self.user_agent)
            .header("Authorization", authorization);

        Ok(match body {
            Some(body) => builder.json_bytes(body),
            None => builder,
        }
        .build())
    }
}

impl<C: HttpClient> Client<C> {
    /// Runs one endpoint call through the pipeline.
    ///
    /// Auth selection, then parameter encoding, then exactly one transport
    /// call, then envelope decoding. The first failing stage ends the call;
    /// nothing is retried. Local failures (unknown parameter, missing
    /// credentials, bad path argument) happen before any I/O.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedParameter`] / [`Error::UnsupportedValueType`]
    /// - [`Error::Authentication`] if the selected mode has no credentials
    /// - transport errors as-is
    /// - [`Error::Decode`] if the body is not an envelope of `T`
    #[instrument(skip_all, fields(endpoint = spec.name, auth = tracing::field::Empty))]
    pub async fn call<T: DeserializeOwned>(
        &self,
        spec: &EndpointSpec,
        path_args: &[&str],
        params: &Params,
    ) -> Result<Envelope<T>> {
        let mode = select_auth(&self.credentials, spec.default_auth, self.auth_override);
        Span::current().record("auth", tracing::field::display(mode));

        let request = self.request(spec, path_args, params, mode)?;
        debug!(method = %spec.method, url = %request.url(), "encoded request");

        let response = self.transport.execute(request).await?;
        let envelope = decode_envelope(response)?;
        debug!(
            status = envelope.status(),
            errors = envelope.errors().len(),
            next_token = envelope.meta().next_token(),
            "decoded envelope"
        );
        Ok(envelope)
    }

    /// Runs a list endpoint call and binds the result to a [`Paginator`].
    ///
    /// # Errors
    ///
    /// Same as [`Client::call`], plus [`Error::InvalidRequest`] if the
    /// endpoint is not paginated.
    pub async fn call_paged<T>(
        &self,
        spec: &EndpointSpec,
        path_args: &[&str],
        params: Params,
    ) -> Result<Page<T, C>>
    where
        T: DeserializeOwned + Send + Sync,
    {
        let cursor = spec.cursor.param().ok_or_else(|| {
            Error::invalid_request(format!("endpoint '{}' is not paginated", spec.name))
        })?;

        let envelope = self.call(spec, path_args, &params).await?;
        let binding = CallerBinding::new(path_args.iter().map(ToString::to_string), params);
        let fetcher = EndpointFetcher::new(self.clone(), *spec);
        Ok(Paginator::new(envelope, fetcher, binding, cursor))
    }

    /// Client with an app-only bearer token, fetched if missing.
    ///
    /// Returns a clone when a bearer token is already present. Otherwise
    /// exchanges the consumer key and secret at the token URL and returns a
    /// client holding the extended credentials.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] without consumer keys, or the
    /// exchange error.
    pub async fn ensure_bearer_token(&self) -> Result<Self> {
        if self.credentials.has_bearer_token() {
            return Ok(self.clone());
        }
        let (key, secret) = self.credentials.consumer().ok_or_else(|| {
            Error::configuration("consumer key and secret are required to fetch a bearer token")
        })?;

        let token = fetch_bearer_token(&*self.transport, &self.token_url, key, secret).await?;
        Ok(Self {
            credentials: Arc::new(self.credentials.with_bearer_token(token)?),
            ..self.clone()
        })
    }
}

/// Builder for [`Client`].
pub struct ClientBuilder<C = HyperTransport> {
    credentials: Option<Credentials>,
    base_url: String,
    token_url: String,
    user_agent: String,
    transport: Option<C>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            credentials: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            transport: None,
        }
    }
}

impl<C> std::fmt::Debug for ClientBuilder<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .field("token_url", &self.token_url)
            .field("user_agent", &self.user_agent)
            .field("has_transport", &self.transport.is_some())
            .finish()
    }
}

impl<C> ClientBuilder<C> {
    /// Set the credentials.
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the bearer token exchange URL.
    #[must_use]
    pub fn token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }

    /// Set the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Use another transport.
    #[must_use]
    pub fn transport<T>(self, transport: T) -> ClientBuilder<T> {
        ClientBuilder {
            credentials: self.credentials,
            base_url: self.base_url,
            token_url: self.token_url,
            user_agent: self.user_agent,
            transport: Some(transport),
        }
    }
}

impl<C: HttpClient + Default> ClientBuilder<C> {
    /// Build the client.
    ///
    /// A base URL without a trailing `/` gets one, so routes resolve
    /// below it.
    ///
    /// # Errors
    ///
    /// - [`Error::Configuration`] if no credentials were set
    /// - [`Error::InvalidUrl`] if a URL does not parse
    pub fn build(self) -> Result<Client<C>> {
        let credentials = self
            .credentials
            .ok_or_else(|| Error::configuration("credentials must be provided"))?;

        let mut base_url = self.base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Client {
            transport: Arc::new(self.transport.unwrap_or_default()),
            credentials: Arc::new(credentials),
            base_url: Url::parse(&base_url)?,
            token_url: Url::parse(&self.token_url)?,
            user_agent: self.user_agent.into(),
            auth_override: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use assert2::{check, let_assert};
    use birdwire_core::{Cursor, Method, PathTemplate, Response, entities::Tweet};

    use super::*;

    /// Records requests and answers with a canned body.
    #[derive(Default)]
    struct Recorder {
        requests: Mutex<Vec<Request<Bytes>>>,
        body: &'static str,
    }

    impl Recorder {
        fn with_body(body: &'static str) -> Self {
            Self {
                body,
                ..Self::default()
            }
        }

        fn count(&self) -> usize {
            self.requests.lock().map(|r| r.len()).unwrap_or_default()
        }

        fn last_url(&self) -> Option<String> {
            let requests = self.requests.lock().ok()?;
            requests.last().map(|r| r.url().to_string())
        }
    }

    impl HttpClient for Recorder {
        async fn execute(&self, request: Request<Bytes>) -> Result<Response<Bytes>> {
            if let Ok(mut requests) = self.requests.lock() {
                requests.push(request);
            }
            Ok(Response::new(200, HashMap::new(), Bytes::from_static(self.body.as_bytes())))
        }
    }

    const TIMELINE: EndpointSpec = EndpointSpec::new(
        "user_tweets",
        Method::Get,
        PathTemplate::new("users/{id}/tweets"),
        &["max_results", "pagination_token", "tweet.fields"],
        AuthMode::Unset,
    )
    .paginated(Cursor::PaginationToken);

    const LOOKUP: EndpointSpec = EndpointSpec::new(
        "tweet",
        Method::Get,
        PathTemplate::new("tweets/{id}"),
        &["tweet.fields"],
        AuthMode::Unset,
    );

    fn client(credentials: Credentials, body: &'static str) -> Client<Recorder> {
        ClientBuilder::default()
            .credentials(credentials)
            .base_url("https://api.example.com/2")
            .transport(Recorder::with_body(body))
            .build()
            .expect("client")
    }

    #[test]
    fn builder_requires_credentials() {
        let_assert!(Err(Error::Configuration(_)) = Client::builder().build());
    }

    #[test]
    fn builder_rejects_bad_url() {
        let result = Client::builder()
            .credentials(Credentials::bearer("AAAA").expect("valid"))
            .base_url("not a url")
            .build();
        let_assert!(Err(Error::InvalidUrl(_)) = result);
    }

    #[test]
    fn handles_share_state_but_not_override() {
        let client = client(Credentials::bearer("AAAA").expect("valid"), "{}");
        let user = client.as_user();

        check!(client.auth_override().is_none());
        check!(user.auth_override() == Some(AuthMode::UserContext));
        check!(Arc::ptr_eq(&client.transport, &user.transport));
        check!(client.as_app().auth_override() == Some(AuthMode::AppContext));
    }

    #[tokio::test]
    async fn app_only_call_sends_bearer_and_query() {
        let client = client(
            Credentials::bearer("AAAA").expect("valid"),
            r#"{"data":{"id":"20","text":"just setting up my twttr"}}"#,
        );
        let params = Params::new().with("tweet_fields", vec!["id", "created_at"]);

        let envelope: Envelope<Tweet> = client
            .as_user()
            .call(&LOOKUP, &["20"], &params)
            .await
            .expect("call");
        check!(envelope.data().map(|t| t.text.as_str()) == Some("just setting up my twttr"));

        let requests = client.transport.requests.lock().expect("lock");
        let_assert!([request] = requests.as_slice());
        check!(request.url().as_str() == "https://api.example.com/2/tweets/20?tweet.fields=id%2Ccreated_at");
        check!(request.header("Authorization") == Some("Bearer AAAA"));
        check!(request.header("User-Agent") == Some(DEFAULT_USER_AGENT));
        check!(request.template() == Some(&LOOKUP.route));
        check!(request.body().is_none());
    }

    #[tokio::test]
    async fn local_failures_make_no_request() {
        let client = client(Credentials::bearer("AAAA").expect("valid"), "{}");

        let result: Result<Envelope<Tweet>> = client
            .call(&LOOKUP, &["20"], &Params::new().with("user_fields", "id"))
            .await;
        let_assert!(Err(Error::UnsupportedParameter { endpoint: "tweet", name }) = result);
        check!(name == "user_fields");

        let result: Result<Envelope<Tweet>> = client.call(&LOOKUP, &[], &Params::new()).await;
        let_assert!(Err(Error::InvalidRequest(_)) = result);

        check!(client.transport.count() == 0);
    }

    #[tokio::test]
    async fn write_call_sends_json_body() {
        const WRITE: EndpointSpec = EndpointSpec::new(
            "create_tweet",
            Method::Post,
            PathTemplate::new("tweets"),
            &["text"],
            AuthMode::UserContext,
        );
        // App-only credentials force app context; the bearer is there.
        let app_only = client(Credentials::bearer("AAAA").expect("valid"), "{}");
        let _: Envelope<Tweet> = app_only
            .call(&WRITE, &[], &Params::new().with("text", "hi"))
            .await
            .expect("call");
        check!(app_only.transport.count() == 1);

        let requests = app_only.transport.requests.lock().expect("lock");
        let_assert!([request] = requests.as_slice());
        check!(request.body().map(|b| b.to_vec()) == Some(br#"{"text":"hi"}"#.to_vec()));
        check!(request.header("Content-Type") == Some("application/json; charset=UTF-8"));
    }

    #[tokio::test]
    async fn paged_call_binds_identity_and_params() {
        let client = client(
            Credentials::bearer("AAAA").expect("valid"),
            r#"{"data":[{"id":"1","text":"a"}],"meta":{"result_count":1,"next_token":"n1"}}"#,
        );

        let page: Page<Tweet, Recorder> = client
            .call_paged(&TIMELINE, &["2244994945"], Params::new().with("max_results", 5))
            .await
            .expect("page");
        check!(page.items().len() == 1);
        check!(page.binding().identity() == ["2244994945".to_string()]);

        let next = page.next_page().await.expect("next");
        check!(next.items().len() == 1);
        check!(
            client.transport.last_url().as_deref()
                == Some("https://api.example.com/2/users/2244994945/tweets?max_results=5&pagination_token=n1")
        );

        let result: Result<Page<Tweet, Recorder>> =
            client.call_paged(&LOOKUP, &["20"], Params::new()).await;
        let_assert!(Err(Error::InvalidRequest(_)) = result);
    }

    #[tokio::test]
    async fn user_id_from_access_token() {
        let credentials = Credentials::builder()
            .consumer("ck", "cs")
            .access("2244994945-abc", "as")
            .build()
            .expect("valid");
        check!(client(credentials, "{}").user_id().ok() == Some("2244994945"));

        let app_only = client(Credentials::bearer("AAAA").expect("valid"), "{}");
        let_assert!(Err(Error::Configuration(_)) = app_only.user_id());
    }

    #[tokio::test]
    async fn ensure_bearer_token_is_a_noop_with_token() {
        let client = client(Credentials::bearer("AAAA").expect("valid"), "{}");
        let same = client.ensure_bearer_token().await.expect("token");
        check!(same.credentials().bearer_token() == Some("AAAA"));
        check!(client.transport.count() == 0);
    }
}
