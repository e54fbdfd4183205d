//! Client credentials.

use std::fmt;

use crate::{Error, Result};

/// Environment variable names read by [`Credentials::from_env`].
pub mod env {
    /// Consumer (API) key.
    pub const CONSUMER_KEY: &str = "TWITTER_CONSUMER_KEY";
    /// Consumer (API) secret.
    pub const CONSUMER_SECRET: &str = "TWITTER_CONSUMER_SECRET";
    /// User access token.
    pub const ACCESS_TOKEN: &str = "TWITTER_ACCESS_TOKEN";
    /// User access token secret.
    pub const ACCESS_SECRET: &str = "TWITTER_ACCESS_SECRET";
    /// App-only bearer token.
    pub const BEARER_TOKEN: &str = "TWITTER_BEARER_TOKEN";
}

/// Credentials a client is built with.
///
/// Either the four user-context keys (consumer key/secret, access
/// token/secret) or a bearer token must be present. Empty strings count as
/// absent. Once built, credentials are never mutated.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    consumer_key: Option<String>,
    consumer_secret: Option<String>,
    access_token: Option<String>,
    access_secret: Option<String>,
    bearer_token: Option<String>,
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    Some(value.into()).filter(|s| !s.is_empty())
}

impl Credentials {
    /// Creates a builder.
    #[must_use]
    pub fn builder() -> CredentialsBuilder {
        CredentialsBuilder::default()
    }

    /// App-only credentials holding just a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the token is empty.
    pub fn bearer(token: impl Into<String>) -> Result<Self> {
        Self::builder().bearer_token(token).build()
    }

    /// Reads credentials from the `TWITTER_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if neither credential set is complete.
    pub fn from_env() -> Result<Self> {
        let var = |name: &str| std::env::var(name).unwrap_or_default();
        Self::builder()
            .consumer(var(env::CONSUMER_KEY), var(env::CONSUMER_SECRET))
            .access(var(env::ACCESS_TOKEN), var(env::ACCESS_SECRET))
            .bearer_token(var(env::BEARER_TOKEN))
            .build()
    }

    /// Returns `true` if user-context signing keys are all present.
    #[must_use]
    pub fn has_user_context(&self) -> bool {
        self.consumer_key.is_some()
            && self.consumer_secret.is_some()
            && self.access_token.is_some()
            && self.access_secret.is_some()
    }

    /// Returns `true` if a bearer token is present.
    #[must_use]
    pub fn has_bearer_token(&self) -> bool {
        self.bearer_token.is_some()
    }

    /// Returns `true` if only app-context calls are possible.
    #[must_use]
    pub fn is_app_only(&self) -> bool {
        self.has_bearer_token() && !self.has_user_context()
    }

    /// Consumer key/secret pair, when both are present.
    #[must_use]
    pub fn consumer(&self) -> Option<(&str, &str)> {
        Some((self.consumer_key.as_deref()?, self.consumer_secret.as_deref()?))
    }

    /// Access token/secret pair, when both are present.
    #[must_use]
    pub fn access(&self) -> Option<(&str, &str)> {
        Some((self.access_token.as_deref()?, self.access_secret.as_deref()?))
    }

    /// Bearer token.
    #[must_use]
    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }

    /// Id of the user the access token belongs to.
    ///
    /// User access tokens are issued as `<user id>-<random>`.
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        let token = self.access_token.as_deref()?;
        let (id, _) = token.split_once('-')?;
        (!id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())).then_some(id)
    }

    /// Copy of these credentials with the given bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the token is empty.
    pub fn with_bearer_token(&self, token: impl Into<String>) -> Result<Self> {
        let bearer_token = non_empty(token)
            .ok_or_else(|| Error::configuration("bearer token must not be empty"))?;
        Ok(Self {
            bearer_token: Some(bearer_token),
            ..self.clone()
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &Option<String>| value.as_ref().map(|_| "***");
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &redact(&self.consumer_secret))
            .field("access_token", &redact(&self.access_token))
            .field("access_secret", &redact(&self.access_secret))
            .field("bearer_token", &redact(&self.bearer_token))
            .finish()
    }
}

/// Builder for [`Credentials`].
#[derive(Debug, Clone, Default)]
pub struct CredentialsBuilder {
    inner: Credentials,
}

impl CredentialsBuilder {
    /// Set the consumer (app) key and secret.
    #[must_use]
    pub fn consumer(mut self, key: impl Into<String>, secret: impl Into<String>) -> Self {
        self.inner.consumer_key = non_empty(key);
        self.inner.consumer_secret = non_empty(secret);
        self
    }

    /// Set the user access token and secret.
    #[must_use]
    pub fn access(mut self, token: impl Into<String>, secret: impl Into<String>) -> Self {
        self.inner.access_token = non_empty(token);
        self.inner.access_secret = non_empty(secret);
        self
    }

    /// Set the app-only bearer token.
    #[must_use]
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.inner.bearer_token = non_empty(token);
        self
    }

    /// Build the credentials.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if neither the user-context keys nor
    /// a bearer token are complete.
    pub fn build(self) -> Result<Credentials> {
        let credentials = self.inner;
        if credentials.has_user_context() || credentials.has_bearer_token() {
            Ok(credentials)
        } else {
            Err(Error::configuration(
                "consumer key, consumer secret, access token and access token secret, \
                 or a bearer token, must be provided",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_context() -> CredentialsBuilder {
        Credentials::builder()
            .consumer("ck", "cs")
            .access("1234-abcd", "as")
    }

    #[test]
    fn bearer_only_is_app_only() {
        let credentials = Credentials::bearer("AAAA").expect("valid");
        assert!(credentials.is_app_only());
        assert!(!credentials.has_user_context());
        assert_eq!(credentials.bearer_token(), Some("AAAA"));
        assert_eq!(credentials.user_id(), None);
    }

    #[test]
    fn user_keys_without_bearer() {
        let credentials = user_context().build().expect("valid");
        assert!(credentials.has_user_context());
        assert!(!credentials.has_bearer_token());
        assert!(!credentials.is_app_only());
        assert_eq!(credentials.consumer(), Some(("ck", "cs")));
        assert_eq!(credentials.user_id(), Some("1234"));
    }

    #[test]
    fn missing_everything_is_a_configuration_error() {
        let err = Credentials::builder().build().expect_err("should fail");
        assert!(matches!(err, Error::Configuration(_)));

        // Partial user keys do not count.
        let err = Credentials::builder()
            .consumer("ck", "cs")
            .access("1234-abcd", "")
            .build()
            .expect_err("should fail");
        assert!(matches!(err, Error::Configuration(_)));

        assert!(Credentials::bearer("").is_err());
    }

    #[test]
    fn with_bearer_token_keeps_user_keys() {
        let credentials = user_context().build().expect("valid");
        let upgraded = credentials.with_bearer_token("AAAA").expect("valid");

        assert!(upgraded.has_user_context());
        assert_eq!(upgraded.bearer_token(), Some("AAAA"));
        assert!(!credentials.has_bearer_token());
    }

    #[test]
    fn debug_redacts_secrets() {
        let credentials = user_context().bearer_token("AAAA").build().expect("valid");
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("1234-abcd"));
        assert!(!debug.contains("AAAA"));
        assert!(debug.contains("***"));
    }
}
