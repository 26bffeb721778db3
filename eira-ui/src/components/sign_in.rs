//! Sign-in Button
//!
//! Link into the relay's Twitch login redirect.

use leptos::*;

use crate::api::LOGIN_PATH;

#[component]
pub fn SignInButton() -> impl IntoView {
    view! {
        <a class="loginButton button" href=LOGIN_PATH rel="external">
            <span class="twitchMark">"▶"</span>
            "Sign in via Twitch"
        </a>
    }
}
