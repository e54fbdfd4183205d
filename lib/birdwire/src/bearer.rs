//! App-only bearer token exchange.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use birdwire_core::{Error, HttpClient, Method, Request, Result};
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token_type: String,
    access_token: String,
}

/// Exchanges consumer credentials for an app-only bearer token.
///
/// POSTs `grant_type=client_credentials` to `token_url` with HTTP Basic
/// auth built from the consumer key and secret.
///
/// # Errors
///
/// - [`Error::Http`] if the token endpoint answers with a non-2xx status
/// - [`Error::Authentication`] if the returned token is not a bearer token
/// - [`Error::Decode`] if the body is not a token response
/// - transport errors as-is
#[instrument(skip_all, fields(token_url = %token_url))]
pub async fn fetch_bearer_token<C: HttpClient>(
    transport: &C,
    token_url: &Url,
    consumer_key: &str,
    consumer_secret: &str,
) -> Result<String> {
    let basic = BASE64.encode(format!("{consumer_key}:{consumer_secret}"));
    let request = Request::builder(Method::Post, token_url.clone())
        .header("Authorization", format!("Basic {basic}"))
        .form(&[("grant_type", "client_credentials")])?
        .build();

    let response = transport.execute(request).await?;
    if !response.is_success() {
        let status = response.status();
        let (_, _, body) = response.into_parts();
        return Err(Error::http_with_body(status, "bearer token exchange failed", body));
    }

    let token: TokenResponse = response.json()?;
    if !token.token_type.eq_ignore_ascii_case("bearer") || token.access_token.is_empty() {
        return Err(Error::authentication(format!(
            "token endpoint returned an unusable '{}' token",
            token.token_type
        )));
    }

    debug!("bearer token obtained");
    Ok(token.access_token)
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::HyperTransport;

    fn token_url(server: &MockServer) -> Url {
        Url::parse(&format!("{}/oauth2/token", server.uri())).expect("url")
    }

    #[tokio::test]
    async fn exchanges_consumer_keys() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth2/token"))
            // base64("ck:cs")
            .and(header("authorization", "Basic Y2s6Y3M="))
            .and(header(
                "content-type",
                "application/x-www-form-urlencoded;charset=UTF-8",
            ))
            .and(body_string("grant_type=client_credentials"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"token_type":"bearer","access_token":"AAAA%2FAAA%3DAAAAAAAA"}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let token = fetch_bearer_token(&HyperTransport::new(), &token_url(&server), "ck", "cs")
            .await
            .expect("token");
        check!(token == "AAAA%2FAAA%3DAAAAAAAA");
    }

    #[tokio::test]
    async fn rejected_keys_are_an_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string(
                r#"{"errors":[{"code":99,"message":"Unable to verify your credentials"}]}"#,
            ))
            .mount(&server)
            .await;

        let result =
            fetch_bearer_token(&HyperTransport::new(), &token_url(&server), "ck", "bad").await;
        let_assert!(Err(Error::Http { status, body: Some(body), .. }) = result);
        check!(status == 403);
        check!(body.starts_with(b"{\"errors\""));
    }

    #[tokio::test]
    async fn non_bearer_token_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"token_type":"mac","access_token":"x"}"#),
            )
            .mount(&server)
            .await;

        let result =
            fetch_bearer_token(&HyperTransport::new(), &token_url(&server), "ck", "cs").await;
        let_assert!(Err(Error::Authentication(_)) = result);
    }
}
