//! Parameter encoding.
//!
//! Validates [`Params`] against an endpoint allow-list and serializes them
//! either into a `application/x-www-form-urlencoded` query string or into a
//! JSON object body.
//!
//! Field-selector names may be given with an underscore in place of the
//! first dot (`tweet_fields` for `tweet.fields`). Any other unknown name is
//! rejected with [`Error::UnsupportedParameter`].

use std::collections::BTreeMap;

use bytes::Bytes;
use chrono::SecondsFormat;
use serde_json::{Map, Value};
use tracing::trace;

use crate::{EndpointSpec, Error, ParamValue, Params, Result};

/// Resolves a caller-supplied parameter name to its wire name.
///
/// The name is accepted as-is when allowed, otherwise its first `_` is
/// replaced by `.` and the result is checked again.
///
/// # Errors
///
/// Returns [`Error::UnsupportedParameter`] when neither form is allowed.
pub fn wire_name(spec: &EndpointSpec, name: &str) -> Result<&'static str> {
    if let Some(allowed) = spec.allowed(name) {
        return Ok(allowed);
    }
    let dotted = name.replacen('_', ".", 1);
    let allowed = spec
        .allowed(&dotted)
        .ok_or_else(|| Error::unsupported_parameter(spec.name, name))?;
    trace!(endpoint = spec.name, name, wire = allowed, "normalized parameter name");
    Ok(allowed)
}

/// Resolves every name to its wire name, in key order.
///
/// Two names landing on the same wire name (`tweet.fields` and
/// `tweet_fields`) are rejected, naming the underscored one.
fn resolve<'p>(
    spec: &EndpointSpec,
    params: &'p Params,
) -> Result<Vec<(&'static str, &'p str, &'p ParamValue)>> {
    let mut seen = BTreeMap::new();
    params
        .iter()
        .map(|(name, value)| {
            let wire = wire_name(spec, name)?;
            if let Some(previous) = seen.insert(wire, name) {
                let alias = if name == wire { previous } else { name };
                return Err(Error::unsupported_parameter(spec.name, alias));
            }
            Ok((wire, name, value))
        })
        .collect()
}

fn query_value(name: &str, value: &ParamValue) -> Result<String> {
    match value {
        ParamValue::Int(n) => Ok(n.to_string()),
        ParamValue::Text(s) => Ok(s.clone()),
        ParamValue::TextList(items) => Ok(items.join(",")),
        ParamValue::Timestamp(at) => Ok(at.to_rfc3339_opts(SecondsFormat::Secs, true)),
        other @ (ParamValue::Bool(_) | ParamValue::Object(_)) => {
            Err(Error::unsupported_value_type(name, other.kind()))
        }
    }
}

fn body_value(value: &ParamValue) -> Value {
    match value {
        ParamValue::Int(n) => Value::from(*n),
        ParamValue::Text(s) => Value::from(s.as_str()),
        ParamValue::TextList(items) => Value::from(items.clone()),
        ParamValue::Timestamp(at) => Value::from(at.to_rfc3339_opts(SecondsFormat::Secs, true)),
        ParamValue::Bool(b) => Value::from(*b),
        ParamValue::Object(map) => Value::Object(map.clone()),
    }
}

/// Validates and renders parameters as `(wire name, text)` pairs in key order.
///
/// These are the pairs placed in the query string, and the ones an OAuth 1.0a
/// signature covers.
///
/// # Errors
///
/// Returns [`Error::UnsupportedParameter`] for a name outside the allow-list
/// or one that duplicates another after normalization, and
/// [`Error::UnsupportedValueType`] for a value with no text form.
pub fn query_pairs(spec: &EndpointSpec, params: &Params) -> Result<Vec<(String, String)>> {
    resolve(spec, params)?
        .into_iter()
        .map(|(wire, name, value)| Ok((wire.to_string(), query_value(name, value)?)))
        .collect()
}

/// Encodes parameters as a URL query string.
///
/// # Errors
///
/// See [`query_pairs`].
///
/// # Example
///
/// ```
/// use birdwire_core::{AuthMode, EndpointSpec, Method, Params, PathTemplate, encode_query};
///
/// const USER_TWEETS: EndpointSpec = EndpointSpec::new(
///     "user_tweets",
///     Method::Get,
///     PathTemplate::new("users/{id}/tweets"),
///     &["max_results", "tweet.fields"],
///     AuthMode::Unset,
/// );
///
/// let params = Params::new()
///     .with("max_results", 10)
///     .with("tweet_fields", ["id", "text"]);
/// let query = encode_query(&USER_TWEETS, &params).expect("encode");
/// assert_eq!(query, "max_results=10&tweet.fields=id%2Ctext");
/// ```
pub fn encode_query(spec: &EndpointSpec, params: &Params) -> Result<String> {
    let pairs = query_pairs(spec, params)?;
    serde_html_form::to_string(&pairs).map_err(Into::into)
}

/// Encodes parameters as a JSON object body.
///
/// Every value variant is accepted: lists become arrays, timestamps
/// RFC 3339 strings, objects are embedded as-is.
///
/// # Errors
///
/// Returns [`Error::UnsupportedParameter`] for a name outside the allow-list
/// or one that duplicates another after normalization.
pub fn encode_body(spec: &EndpointSpec, params: &Params) -> Result<Bytes> {
    let mut object = Map::new();
    for (wire, _, value) in resolve(spec, params)? {
        object.insert(wire.to_string(), body_value(value));
    }
    crate::to_json(&Value::Object(object))
}
