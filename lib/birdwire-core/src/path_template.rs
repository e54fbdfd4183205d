//! Route templates.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::{Error, Result};

/// Characters escaped in a path segment: everything but RFC 3986 unreserved.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A route relative to the API base URL, with `{name}` placeholders.
///
/// The template (e.g. `users/{id}/tweets`) is also carried on the request so
/// middleware can log the route rather than the resolved path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathTemplate(&'static str);

impl PathTemplate {
    /// Create a new path template.
    #[must_use]
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    /// Get the template string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Number of placeholders.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.0.matches('{').count()
    }

    /// Substitutes placeholders, in order, with percent-encoded arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if the number of arguments does not
    /// match the placeholders, or an argument is empty, `.` or `..`.
    ///
    /// # Example
    ///
    /// ```
    /// use birdwire_core::PathTemplate;
    ///
    /// let template = PathTemplate::new("users/{id}/following/{target_user_id}");
    /// let path = template.expand(&["12", "2244994945"]).expect("expand");
    /// assert_eq!(path, "users/12/following/2244994945");
    /// ```
    pub fn expand(&self, args: &[&str]) -> Result<String> {
        if args.len() != self.arity() {
            return Err(Error::invalid_request(format!(
                "route '{}' takes {} argument(s), got {}",
                self.0,
                self.arity(),
                args.len()
            )));
        }

        let mut path = String::with_capacity(self.0.len());
        let mut rest = self.0;
        for arg in args {
            if arg.is_empty() {
                return Err(Error::invalid_request(format!(
                    "empty path argument for route '{}'",
                    self.0
                )));
            }
            // Dot segments would be resolved away when joined to the base URL.
            if matches!(*arg, "." | "..") {
                return Err(Error::invalid_request(format!(
                    "dot segment '{arg}' as path argument for route '{}'",
                    self.0
                )));
            }
            let Some((before, placeholder)) = rest.split_once('{') else {
                break;
            };
            let Some((_, after)) = placeholder.split_once('}') else {
                break;
            };
            path.push_str(before);
            path.extend(utf8_percent_encode(arg, SEGMENT));
            rest = after;
        }
        path.push_str(rest);
        Ok(path)
    }
}

impl std::fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PathTemplate {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_without_placeholders() {
        let template = PathTemplate::new("tweets/search/recent");
        assert_eq!(template.arity(), 0);
        assert_eq!(template.expand(&[]).expect("expand"), "tweets/search/recent");
    }

    #[test]
    fn expand_rejects_dot_segments() {
        let template = PathTemplate::new("users/{id}/tweets");
        for arg in [".", ".."] {
            let err = template.expand(&[arg]).expect_err("dot segment");
            assert!(matches!(err, Error::InvalidRequest(_)), "{arg}: {err}");
        }
        assert_eq!(
            template.expand(&["..."]).expect("expand"),
            "users/.../tweets"
        );
    }

    #[test]
    fn expand_encodes_segments() {
        let template = PathTemplate::new("users/by/username/{username}");
        assert_eq!(
            template.expand(&["a/b c"]).expect("expand"),
            "users/by/username/a%2Fb%20c"
        );
    }

    #[test]
    fn expand_checks_arity() {
        let template = PathTemplate::new("lists/{id}/members/{user_id}");
        assert_eq!(template.arity(), 2);
        assert!(template.expand(&["1"]).is_err());
        assert!(template.expand(&["1", ""]).is_err());
        assert_eq!(
            template.expand(&["1", "2"]).expect("expand"),
            "lists/1/members/2"
        );
    }
}
