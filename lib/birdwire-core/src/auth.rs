//! Auth scheme selection.

use derive_more::Display;

use crate::Credentials;

/// Which credential scheme a call is made with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum AuthMode {
    /// OAuth 1.0a signature from consumer + access keys.
    #[display("user-context")]
    UserContext,
    /// `Authorization: Bearer` app-only token.
    #[display("app-context")]
    AppContext,
    /// No preference.
    #[default]
    #[display("unset")]
    Unset,
}

impl AuthMode {
    fn preference(self) -> Option<Self> {
        (self != Self::Unset).then_some(self)
    }
}

/// Resolves the auth mode for one call.
///
/// Capability wins over preference:
/// 1. app-only credentials always give [`AuthMode::AppContext`];
/// 2. without a bearer token, [`AuthMode::UserContext`];
/// 3. otherwise the caller override, if any;
/// 4. then the endpoint default;
/// 5. then [`AuthMode::AppContext`].
///
/// The result may still be unusable (no credentials at all for it); that
/// is reported when the request is signed.
///
/// # Example
///
/// ```
/// use birdwire_core::{AuthMode, Credentials, select_auth};
///
/// let credentials = Credentials::bearer("AAAA").expect("valid");
/// let mode = select_auth(&credentials, AuthMode::UserContext, Some(AuthMode::UserContext));
/// assert_eq!(mode, AuthMode::AppContext);
/// ```
#[must_use]
pub fn select_auth(
    credentials: &Credentials,
    endpoint_default: AuthMode,
    caller_override: Option<AuthMode>,
) -> AuthMode {
    if !credentials.has_user_context() {
        return AuthMode::AppContext;
    }
    if !credentials.has_bearer_token() {
        return AuthMode::UserContext;
    }
    caller_override
        .and_then(AuthMode::preference)
        .or_else(|| endpoint_default.preference())
        .unwrap_or(AuthMode::AppContext)
}
