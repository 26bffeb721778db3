//! Dashboard Page
//!
//! Account details, the relay application and its connection status.
//! Nothing is rendered until the relay has confirmed the session.

use leptos::*;
use leptos_router::use_navigate;

use crate::api::{HttpRelay, User};
use crate::app::LOGIN_ROUTE;
use crate::components::{AccountDetails, Applications, ConnectionStatus, Loading, Nav};
use crate::state::{load_session_user, CookieSession, SessionOutcome};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let navigate = use_navigate();
    let user = create_rw_signal(None::<User>);

    let to_login = Callback::new(move |_: ()| navigate(LOGIN_ROUTE, Default::default()));

    let on_outcome = Callback::new(move |outcome: SessionOutcome| match outcome {
        SessionOutcome::Authenticated(snapshot) => user.set(Some(snapshot)),
        SessionOutcome::Login { cause } => {
            if let Some(cause) = cause {
                web_sys::console::warn_1(&format!("Session check failed: {}", cause).into());
            }
            to_login.call(());
        }
    });

    // Fetch the user on mount
    create_effect(move |_| {
        spawn_local(async move {
            match load_session_user(&CookieSession, &HttpRelay).await {
                Ok(outcome) => on_outcome.call(outcome),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Unable to fetch user data from API: {}", e).into(),
                    );
                }
            }
        });
    });

    view! {
        <Nav />
        <main>
            <h1 class="lightPurple">"TwitchIO Token Relay"</h1>
            <hr />

            <Show when=move || user.with(Option::is_some) fallback=|| view! { <Loading /> }>
                <AccountDetails user=user />
                <Applications user=user on_outcome=on_outcome on_signed_out=to_login />
                <ConnectionStatus user=user />
            </Show>
        </main>
    }
}
