//! Static endpoint descriptors.

use crate::{AuthMode, Method, PathTemplate};

/// Name of the request parameter that carries the pagination cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// Not paginated.
    None,
    /// `pagination_token`, used by most list endpoints.
    PaginationToken,
    /// `next_token`, used by the tweet search endpoints.
    NextToken,
}

impl Cursor {
    /// Wire name of the cursor parameter.
    #[must_use]
    pub const fn param(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::PaginationToken => Some("pagination_token"),
            Self::NextToken => Some("next_token"),
        }
    }
}

/// Everything that distinguishes one endpoint from another.
///
/// Descriptors are `const` values; nothing mutates them at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointSpec {
    /// Name used in logs and errors.
    pub name: &'static str,
    /// HTTP method. POST and PUT send parameters as a JSON body.
    pub method: Method,
    /// Route relative to the API base URL.
    pub route: PathTemplate,
    /// Wire names of the accepted parameters.
    pub allowed: &'static [&'static str],
    /// Preferred auth scheme.
    pub default_auth: AuthMode,
    /// Pagination cursor parameter.
    pub cursor: Cursor,
}

impl EndpointSpec {
    /// Descriptor of a non-paginated endpoint.
    #[must_use]
    pub const fn new(
        name: &'static str,
        method: Method,
        route: PathTemplate,
        allowed: &'static [&'static str],
        default_auth: AuthMode,
    ) -> Self {
        Self {
            name,
            method,
            route,
            allowed,
            default_auth,
            cursor: Cursor::None,
        }
    }

    /// Same descriptor, paginated with the given cursor parameter.
    #[must_use]
    pub const fn paginated(self, cursor: Cursor) -> Self {
        Self { cursor, ..self }
    }

    /// The allow-list entry equal to `name`.
    #[must_use]
    pub fn allowed(&self, name: &str) -> Option<&'static str> {
        self.allowed.iter().copied().find(|allowed| *allowed == name)
    }

    /// Returns `true` if the endpoint returns pages.
    #[must_use]
    pub const fn is_paginated(&self) -> bool {
        !matches!(self.cursor, Cursor::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOLLOWERS: EndpointSpec = EndpointSpec::new(
        "followers",
        Method::Get,
        PathTemplate::new("users/{id}/followers"),
        &["max_results", "pagination_token", "user.fields"],
        AuthMode::Unset,
    )
    .paginated(Cursor::PaginationToken);

    #[test]
    fn cursor_param_names() {
        assert_eq!(Cursor::None.param(), None);
        assert_eq!(Cursor::PaginationToken.param(), Some("pagination_token"));
        assert_eq!(Cursor::NextToken.param(), Some("next_token"));
    }

    #[test]
    fn allowed_lookup() {
        assert_eq!(FOLLOWERS.allowed("user.fields"), Some("user.fields"));
        assert_eq!(FOLLOWERS.allowed("user_fields"), None);
        assert!(FOLLOWERS.is_paginated());
        assert_eq!(FOLLOWERS.route.arity(), 1);
    }
}
