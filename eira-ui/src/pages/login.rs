//! Login Page
//!
//! Sends visitors who already hold a session straight to the dashboard.

use leptos::*;
use leptos_router::use_navigate;

use crate::api::HttpRelay;
use crate::app::DASHBOARD_ROUTE;
use crate::components::SignInButton;
use crate::state::{check_existing_session, LoginOutcome};

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let navigate = use_navigate();

    create_effect(move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            match check_existing_session(&HttpRelay).await {
                Ok(LoginOutcome::Dashboard) => navigate(DASHBOARD_ROUTE, Default::default()),
                Ok(LoginOutcome::Stay) => {}
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Unable to fetch user data from API: {}", e).into(),
                    );
                }
            }
        });
    });

    view! {
        <main class="login">
            <h2>"Dashboard"</h2>
            <p>"Sign in with your Twitch account to manage your relay application."</p>
            <SignInButton />
        </main>
    }
}
