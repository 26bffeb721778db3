//! Application Forms
//!
//! Create and delete flows for the user's single relay application.

use thiserror::Error;

use crate::api::{ApiError, CreateApplicationRequest, DeleteApplicationRequest, RelayApi, User};
use crate::state::flow::{load_session_user, SessionOutcome};
use crate::state::session::SessionStore;

/// Inline form error shown under the application form
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter a valid application name")]
    MissingName,

    #[error("Please enter a valid Client-ID")]
    MissingClientId,

    #[error("An unexpected error occurred. Please try again later.")]
    Unexpected,

    #[error("No token was returned")]
    MissingToken,

    /// The relay refused the request; carries its plain-text reason
    #[error("{0}")]
    Rejected(String),

    /// The session marker disappeared; the page should go to login
    #[error("Your session has ended. Please sign in again.")]
    SignedOut,
}

impl From<ApiError> for FormError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { status, message } => {
                let message = message.trim();
                if message.is_empty() {
                    FormError::Rejected(format!("Request failed with status {}", status))
                } else {
                    FormError::Rejected(message.to_string())
                }
            }
            ApiError::Network(_) | ApiError::Parse(_) => FormError::Unexpected,
        }
    }
}

/// Validated input of the create form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewApplication {
    pub name: String,
    pub client_id: String,
}

impl NewApplication {
    /// Check both fields are filled in, name first. Values are sent as typed.
    pub fn validate(name: &str, client_id: &str) -> Result<Self, FormError> {
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        if client_id.is_empty() {
            return Err(FormError::MissingClientId);
        }

        Ok(Self {
            name: name.to_string(),
            client_id: client_id.to_string(),
        })
    }

    fn into_request(self) -> CreateApplicationRequest {
        CreateApplicationRequest {
            name: self.name,
            client_id: self.client_id,
        }
    }
}

/// Register an application and return the relay's new snapshot of the user
pub async fn submit_application<S, A>(
    session: &S,
    api: &A,
    name: &str,
    client_id: &str,
) -> Result<User, FormError>
where
    S: SessionStore,
    A: RelayApi,
{
    if !session.has_session() {
        return Err(FormError::SignedOut);
    }

    let request = NewApplication::validate(name, client_id)?.into_request();
    Ok(api.create_application(&request).await?)
}

/// Delete the user's application, then reload the user.
///
/// A user without an application is left untouched.
pub async fn remove_application<S, A>(
    session: &S,
    api: &A,
    user: &User,
) -> Result<SessionOutcome, FormError>
where
    S: SessionStore,
    A: RelayApi,
{
    if !session.has_session() {
        return Err(FormError::SignedOut);
    }

    let Some(app) = user.application() else {
        return Ok(SessionOutcome::Authenticated(user.clone()));
    };

    let request = DeleteApplicationRequest {
        application_id: app.application_id.clone(),
    };
    api.delete_application(&request).await?;

    Ok(load_session_user(session, api).await?)
}
