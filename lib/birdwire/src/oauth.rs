//! OAuth 1.0a request signing for user-context calls.
//!
//! The signature base string covers the method, the URL without query, and
//! the query parameters. JSON bodies are not part of the signature.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use birdwire_core::{Credentials, Error, Method, Result};
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rand::RngCore;
use sha1::Sha1;
use url::Url;

/// Everything but RFC 3986 unreserved characters.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// OAuth 1.0a HMAC-SHA1 signer borrowing the client credentials.
pub struct OAuthSigner<'a> {
    consumer_key: &'a str,
    consumer_secret: &'a str,
    token: &'a str,
    token_secret: &'a str,
}

impl std::fmt::Debug for OAuthSigner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthSigner")
            .field("consumer_key", &self.consumer_key)
            .finish_non_exhaustive()
    }
}

impl<'a> OAuthSigner<'a> {
    /// Signer for the user-context keys of `credentials`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] if consumer or access keys are missing.
    pub fn from_credentials(credentials: &'a Credentials) -> Result<Self> {
        let (consumer_key, consumer_secret) = credentials.consumer().ok_or_else(|| {
            Error::authentication("user-context call requires consumer key and secret")
        })?;
        let (token, token_secret) = credentials.access().ok_or_else(|| {
            Error::authentication("user-context call requires access token and secret")
        })?;

        Ok(Self {
            consumer_key,
            consumer_secret,
            token,
            token_secret,
        })
    }

    /// `Authorization` header value for a request, with a fresh nonce and timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] if the HMAC cannot be computed.
    pub fn sign(&self, method: Method, url: &Url) -> Result<String> {
        let timestamp = chrono::Utc::now().timestamp();
        self.sign_with(method, url, &generate_nonce(), timestamp)
    }

    fn sign_with(&self, method: Method, url: &Url, nonce: &str, timestamp: i64) -> Result<String> {
        let timestamp = timestamp.to_string();
        let mut oauth_params = vec![
            ("oauth_consumer_key", self.consumer_key.to_string()),
            ("oauth_nonce", nonce.to_string()),
            ("oauth_signature_method", "HMAC-SHA1".to_string()),
            ("oauth_timestamp", timestamp),
            ("oauth_token", self.token.to_string()),
            ("oauth_version", "1.0".to_string()),
        ];

        let mut encoded: Vec<(String, String)> = oauth_params
            .iter()
            .map(|(k, v)| (percent_encode(k), percent_encode(v)))
            .chain(
                url.query_pairs()
                    .map(|(k, v)| (percent_encode(&k), percent_encode(&v))),
            )
            .collect();
        encoded.sort();

        let param_string = encoded
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");

        let mut base_url = url.clone();
        base_url.set_query(None);
        base_url.set_fragment(None);

        let base_string = format!(
            "{method}&{}&{}",
            percent_encode(base_url.as_str()),
            percent_encode(&param_string)
        );
        let signing_key = format!(
            "{}&{}",
            percent_encode(self.consumer_secret),
            percent_encode(self.token_secret)
        );

        oauth_params.push(("oauth_signature", hmac_sha1(&signing_key, &base_string)?));

        let header = oauth_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(format!("OAuth {header}"))
    }
}

fn percent_encode(s: &str) -> String {
    utf8_percent_encode(s, OAUTH_ENCODE_SET).to_string()
}

fn generate_nonce() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn hmac_sha1(key: &str, data: &str) -> Result<String> {
    type HmacSha1 = Hmac<Sha1>;

    let mut mac = HmacSha1::new_from_slice(key.as_bytes())
        .map_err(|e| Error::authentication(e.to_string()))?;
    mac.update(data.as_bytes());
    Ok(BASE64.encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;

    // Reference request from the Twitter "creating a signature" guide.
    fn reference_credentials() -> Credentials {
        Credentials::builder()
            .consumer(
                "xvz1evFS4wEEPTGEFPHBog",
                "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
            )
            .access(
                "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
                "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
            )
            .build()
            .expect("valid")
    }

    #[test]
    fn percent_encode_unreserved() {
        check!(percent_encode("hello world") == "hello%20world");
        check!(percent_encode("foo=bar&baz") == "foo%3Dbar%26baz");
        check!(percent_encode("test-value_123.txt~") == "test-value_123.txt~");
        check!(percent_encode("café") == "caf%C3%A9");
    }

    #[test]
    fn nonce_is_random_hex() {
        let nonce1 = generate_nonce();
        let nonce2 = generate_nonce();

        check!(nonce1 != nonce2);
        check!(nonce1.len() == 32);
        check!(nonce1.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn reference_signature() {
        let credentials = reference_credentials();
        let signer = OAuthSigner::from_credentials(&credentials).expect("signer");
        let url = Url::parse(
            "https://api.twitter.com/1.1/statuses/update.json?include_entities=true\
             &status=Hello%20Ladies%20%2B%20Gentlemen%2C%20a%20signed%20OAuth%20request%21",
        )
        .expect("url");

        let header = signer
            .sign_with(
                Method::Post,
                &url,
                "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg",
                1_318_622_958,
            )
            .expect("sign");

        insta::assert_snapshot!(header, @r#"OAuth oauth_consumer_key="xvz1evFS4wEEPTGEFPHBog", oauth_nonce="kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg", oauth_signature_method="HMAC-SHA1", oauth_timestamp="1318622958", oauth_token="370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb", oauth_version="1.0", oauth_signature="hCtSmYh%2BiHYCEqBWrE7C7hYmtUk%3D""#);
    }

    #[test]
    fn fresh_signature_has_all_fields() {
        let credentials = reference_credentials();
        let signer = OAuthSigner::from_credentials(&credentials).expect("signer");
        let url = Url::parse("https://api.twitter.com/2/users/me").expect("url");

        let header = signer.sign(Method::Get, &url).expect("sign");
        check!(header.starts_with("OAuth "));
        for field in ["oauth_consumer_key=", "oauth_nonce=", "oauth_signature=", "oauth_timestamp="] {
            check!(header.contains(field));
        }
    }

    #[test]
    fn app_only_credentials_cannot_sign() {
        let credentials = Credentials::bearer("AAAA").expect("valid");
        let_assert!(Err(Error::Authentication(_)) = OAuthSigner::from_credentials(&credentials));
    }
}
