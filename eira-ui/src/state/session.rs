//! Session Marker
//!
//! The relay sets a `session` cookie after login. Its presence is only a hint
//! that a session exists; the relay makes the real trust decision.

use wasm_bindgen::JsCast;

/// Name of the relay's session cookie
pub const SESSION_COOKIE: &str = "session";

/// Access to the local session marker
pub trait SessionStore {
    /// Whether a session marker is present
    fn has_session(&self) -> bool;

    /// Remove the session marker
    fn clear_session(&self);
}

/// [`SessionStore`] over `document.cookie`
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieSession;

impl CookieSession {
    fn document() -> Option<web_sys::HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
    }
}

impl SessionStore for CookieSession {
    fn has_session(&self) -> bool {
        Self::document()
            .and_then(|doc| doc.cookie().ok())
            .and_then(|cookies| read_cookie(&cookies, SESSION_COOKIE))
            .is_some()
    }

    fn clear_session(&self) {
        if let Some(doc) = Self::document() {
            if let Err(e) = doc.set_cookie(&expired_cookie(SESSION_COOKIE)) {
                web_sys::console::warn_1(&format!("Failed to clear session cookie: {:?}", e).into());
            }
        }
    }
}

/// Find a cookie's value in a `document.cookie` string.
///
/// Empty values are reported as absent.
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}

/// Cookie string that deletes `name` for the whole site
pub fn expired_cookie(name: &str) -> String {
    format!("{}=; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT; Max-Age=0", name)
}
