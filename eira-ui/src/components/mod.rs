//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod account;
pub mod applications;
pub mod loading;
pub mod nav;
pub mod sign_in;
pub mod status;

pub use account::AccountDetails;
pub use applications::Applications;
pub use loading::Loading;
pub use nav::Nav;
pub use sign_in::SignInButton;
pub use status::ConnectionStatus;
