//! Eira Dashboard
//!
//! Dashboard for the TwitchIO OAuth relay, built with Leptos (WASM).
//!
//! # Features
//!
//! - Sign in through the relay's Twitch login
//! - Register the single relay application allowed per user
//! - Generate a relay access token
//! - Check whether the application is connected to the relay
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the relay's `/users` and `/oauth` paths on its
//! own origin; the `eira` host forwards those to the relay backend.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
