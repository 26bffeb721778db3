//! Account Component
//!
//! Account identifiers and the relay token panel.

use leptos::*;

use crate::api::{HttpRelay, User};
use crate::state::generate_token;

/// Account id, Twitch identity and token generation
#[component]
pub fn AccountDetails(#[prop(into)] user: Signal<Option<User>>) -> impl IntoView {
    let account_id = move || user.with(|u| u.as_ref().map(|u| u.id.to_string()));
    let twitch = move || {
        user.with(|u| {
            u.as_ref()
                .map(|u| format!("{} | {}", u.name, u.twitch_id))
        })
    };

    view! {
        <div class="details">
            <div class="innerDetails">
                <b class="lightPurple">"Account ID"</b>
                {account_id}
            </div>
            <div class="innerDetails">
                <b class="lightPurple">"Twitch"</b>
                {twitch}
            </div>
            <TokenPanel />
        </div>
    }
}

/// Generates a token and shows it once.
///
/// The token lives only in this component's signal and is gone after
/// navigating away.
#[component]
fn TokenPanel() -> impl IntoView {
    let token = create_rw_signal(None::<String>);
    let error = create_rw_signal(None::<String>);
    let (generating, set_generating) = create_signal(false);

    let on_generate = move |_| {
        set_generating.set(true);
        error.set(None);

        spawn_local(async move {
            match generate_token(&HttpRelay).await {
                Ok(new_token) => token.set(Some(new_token)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to generate token: {}", e).into());
                    error.set(Some(e.to_string()));
                }
            }
            set_generating.set(false);
        });
    };

    view! {
        <div class="innerDetails">
            <b class="lightPurple">"API Token"</b>
            <span>"Your access token to TwitchIO Token Relay."</span>
            <span>
                "To view this token you must generate a new one. You must keep this token confidential."
            </span>

            {move || token.get().map(|t| view! { <code class="token">{t}</code> })}
            {move || error.get().map(|msg| view! { <span class="warningRed">{msg}</span> })}

            <button
                type="button"
                class="simpleButton"
                disabled=move || generating.get()
                on:click=on_generate
            >
                {move || if generating.get() { "Generating..." } else { "Generate Token" }}
            </button>
        </div>
    }
}
