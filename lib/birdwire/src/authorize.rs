//! `Authorization` header per auth mode.

use birdwire_core::{AuthMode, Credentials, Error, Method, Result};
use url::Url;

use crate::oauth::OAuthSigner;

/// Header value authorizing `method url` in the given mode.
///
/// `url` must already carry the encoded query: it is part of the OAuth
/// signature. [`AuthMode::Unset`] is treated as app context.
///
/// # Errors
///
/// Returns [`Error::Authentication`] if the credentials needed by `mode`
/// are missing.
pub fn authorization(
    credentials: &Credentials,
    mode: AuthMode,
    method: Method,
    url: &Url,
) -> Result<String> {
    match mode {
        AuthMode::UserContext => OAuthSigner::from_credentials(credentials)?.sign(method, url),
        AuthMode::AppContext | AuthMode::Unset => credentials
            .bearer_token()
            .map(|token| format!("Bearer {token}"))
            .ok_or_else(|| Error::authentication("app-context call requires a bearer token")),
    }
}
