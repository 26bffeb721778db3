//! State Management
//!
//! Session marker access and the page flows built on the relay API.

pub mod account;
pub mod application;
pub mod flow;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use account::{generate_token, refresh_status};
pub use application::{remove_application, submit_application, FormError};
pub use flow::{check_existing_session, load_session_user, LoginOutcome, SessionOutcome};
pub use session::CookieSession;
