//! Connection Status Component
//!
//! Shows whether the user's application holds a websocket to the relay.

use leptos::*;

use crate::api::{HttpRelay, User};
use crate::state::refresh_status;

#[component]
pub fn ConnectionStatus(#[prop(into)] user: Signal<Option<User>>) -> impl IntoView {
    // Refreshed value; falls back to the flag from the last user snapshot
    let refreshed = create_rw_signal(None::<bool>);
    let error = create_rw_signal(None::<String>);
    let (checking, set_checking) = create_signal(false);

    let has_application = move || user.with(|u| u.as_ref().is_some_and(|u| u.application().is_some()));
    let connected = move || {
        refreshed
            .get()
            .unwrap_or_else(|| user.with(|u| u.as_ref().is_some_and(|u| u.status)))
    };

    let on_refresh = move |_| {
        set_checking.set(true);
        error.set(None);

        spawn_local(async move {
            match refresh_status(&HttpRelay).await {
                Ok(status) => refreshed.set(Some(status)),
                Err(e) => error.set(Some(e.to_string())),
            }
            set_checking.set(false);
        });
    };

    view! {
        <div class="details">
            <h3>"Status"</h3>
            <hr class="hrW" />

            {move || {
                if !has_application() {
                    view! {
                        <span>"Create an application to connect it to the relay."</span>
                    }
                    .into_view()
                } else if connected() {
                    view! { <span class="statusOnline">"● Connected"</span> }.into_view()
                } else {
                    view! { <span class="statusOffline">"● Disconnected"</span> }.into_view()
                }
            }}

            {move || error.get().map(|msg| view! { <span class="warningRed">{msg}</span> })}

            <Show when=has_application>
                <button
                    type="button"
                    class="simpleButton"
                    disabled=move || checking.get()
                    on:click=on_refresh
                >
                    {move || if checking.get() { "Checking..." } else { "Refresh" }}
                </button>
            </Show>
        </div>
    }
}
