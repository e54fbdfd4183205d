//! JSON body helpers.

use bytes::Bytes;

use crate::Result;

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Example
///
/// ```
/// use birdwire_core::to_json;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Like { tweet_id: String }
///
/// let like = Like { tweet_id: "20".to_string() };
/// let bytes = to_json(&like).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"tweet_id":"20"}"#);
/// ```
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so a [`crate::Error::Decode`] names the
/// field that failed (e.g. `data[1].created_at`).
///
/// # Errors
///
/// Returns [`crate::Error::Decode`] if JSON deserialization fails.
///
/// # Example
///
/// ```
/// use birdwire_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct User { username: String }
///
/// let user: User = from_json(br#"{"username":"TwitterDev"}"#).expect("deserialize");
/// assert_eq!(user, User { username: "TwitterDev".to_string() });
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| crate::Error::decode(e.path().to_string(), e.inner().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_json_serialize() {
        #[derive(serde::Serialize)]
        struct Tweet {
            text: String,
        }

        let bytes = to_json(&Tweet {
            text: "hello".to_string(),
        })
        .expect("serialize");
        assert_eq!(bytes.as_ref(), br#"{"text":"hello"}"#);
    }

    #[test]
    fn from_json_syntax_error() {
        #[derive(Debug, serde::Deserialize)]
        struct Tweet {
            #[allow(dead_code)]
            id: String,
        }

        let result: Result<Tweet> = from_json(b"<html>over capacity</html>");
        let err = result.expect_err("should fail");
        assert!(matches!(err, crate::Error::Decode { .. }));
    }

    #[test]
    fn from_json_error_names_path() {
        #[derive(Debug, serde::Deserialize)]
        struct Tweet {
            #[allow(dead_code)]
            id: String,
        }

        #[derive(Debug, serde::Deserialize)]
        struct Page {
            #[allow(dead_code)]
            data: Vec<Tweet>,
        }

        let result: Result<Page> = from_json(br#"{"data":[{"id":"1"},{"id":2}]}"#);
        let msg = result.expect_err("should fail").to_string();
        assert!(msg.contains("data[1].id"), "Expected path in error: {msg}");
    }
}
