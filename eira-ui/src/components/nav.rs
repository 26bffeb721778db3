//! Navigation Component
//!
//! Header bar with the brand and a logout link.

use leptos::*;
use leptos_router::*;

use crate::api::LOGOUT_PATH;
use crate::app::DASHBOARD_ROUTE;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav">
            <A href=DASHBOARD_ROUTE class="brand">
                <span class="lightPurple">"TwitchIO"</span>
                " Token Relay"
            </A>

            // The relay clears the session and redirects; skip client-side routing
            <a href=LOGOUT_PATH rel="external" class="simpleButton">
                "Log out"
            </a>
        </nav>
    }
}
