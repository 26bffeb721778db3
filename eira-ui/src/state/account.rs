//! Account Actions
//!
//! Token generation and relay connection status.

use crate::api::RelayApi;
use crate::state::application::FormError;

/// Ask the relay for a new access token.
///
/// The token is returned to the caller only; it is never stored.
pub async fn generate_token<A: RelayApi>(api: &A) -> Result<String, FormError> {
    let user = api.fetch_token().await?;

    user.and_then(|u| u.token)
        .filter(|token| !token.is_empty())
        .ok_or(FormError::MissingToken)
}

/// Whether the user's application currently holds a relay connection
pub async fn refresh_status<A: RelayApi>(api: &A) -> Result<bool, FormError> {
    Ok(api.fetch_status().await?)
}
