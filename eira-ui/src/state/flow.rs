//! Session Flows
//!
//! The fetch-and-decide cycle each page runs on mount. Pages turn the
//! outcome into a render or a navigation.

use crate::api::{ApiError, RelayApi, User};
use crate::state::session::SessionStore;

/// Result of loading the signed-in user for an account page
#[derive(Clone, Debug, PartialEq)]
pub enum SessionOutcome {
    /// Render the page with this snapshot
    Authenticated(User),
    /// Send the visitor to the login view; `cause` is worth logging
    Login { cause: Option<String> },
}

/// Result of probing for an existing session on the login page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Show the sign-in prompt
    Stay,
    /// Already signed in, leave the login view
    Dashboard,
}

/// Load the signed-in user for an account page.
///
/// Without a session marker no request is made. A non-2xx answer is
/// returned as an error for the caller to report; it is never retried.
pub async fn load_session_user<S, A>(session: &S, api: &A) -> Result<SessionOutcome, ApiError>
where
    S: SessionStore,
    A: RelayApi,
{
    if !session.has_session() {
        return Ok(SessionOutcome::Login { cause: None });
    }

    match api.fetch_me().await {
        Ok(Some(user)) => Ok(SessionOutcome::Authenticated(user)),
        Ok(None) => {
            session.clear_session();
            Ok(SessionOutcome::Login { cause: None })
        }
        Err(ApiError::Network(e)) => Ok(SessionOutcome::Login { cause: Some(e) }),
        Err(ApiError::Parse(e)) => {
            session.clear_session();
            Ok(SessionOutcome::Login { cause: Some(e) })
        }
        Err(e) => Err(e),
    }
}

/// Decide whether the login view should step aside for the dashboard
pub async fn check_existing_session<A: RelayApi>(api: &A) -> Result<LoginOutcome, ApiError> {
    match api.fetch_me().await {
        Ok(Some(_)) => Ok(LoginOutcome::Dashboard),
        Ok(None) => Ok(LoginOutcome::Stay),
        Err(e @ ApiError::Status { .. }) => Err(e),
        Err(_) => Ok(LoginOutcome::Stay),
    }
}
