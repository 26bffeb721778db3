//! Landing Page
//!
//! Public description of the relay with a sign-in link.

use leptos::*;

use crate::components::SignInButton;

const SLIDES: [&str; 3] = [
    "The TwitchIO OAuth Relay is a free service, providing an easy and secure way to relay OAuth \
     requests from Twitch to your application over websockets. No domain or Static IP address required.",
    "Create an application. Connect via Secure-Websocket. Receive and complete OAuth flows locally \
     with your application without sharing any secrets, tokens or sensitive data.",
    "TwitchIO OAuth Relay has no access to the authenticated user's data; you complete the OAuth flow \
     locally without ever exposing your secret. We simply relay the code needed for your \
     Client-ID/Secret to complete the OAuth request.",
];

/// Landing page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <main class="landing">
            <div class="left">
                <h1>"TwitchIO " <span class="blue">"OAuth Relay"</span></h1>
                <p>"Easily and securely re-route OAuth to your Twitch applications"</p>

                <div class="slides">
                    {SLIDES
                        .iter()
                        .map(|text| view! { <div class="slide">{*text}</div> })
                        .collect_view()}
                </div>

                <div class="socials">
                    <a href="https://github.com/PythonistaGuild" rel="external">"GitHub"</a>
                    <a href="/" rel="external">"Documentation"</a>
                    <a href="/" rel="external">"Conditions"</a>
                </div>
            </div>
            <div class="right">
                <h2>"Dashboard"</h2>
                <SignInButton />
            </div>
        </main>
    }
}
