//! App Root Component
//!
//! Main application component with routing.

use leptos::*;
use leptos_router::*;

use crate::pages::{Dashboard, Home, Login};

/// Authenticated account view
pub const DASHBOARD_ROUTE: &str = "/dashboard";
/// Public landing page
pub const LANDING_ROUTE: &str = "/dashboard/landing";
/// Login view
pub const LOGIN_ROUTE: &str = "/dashboard/login";

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes>
                <Route path=DASHBOARD_ROUTE view=Dashboard />
                <Route path=LANDING_ROUTE view=Home />
                <Route path=LOGIN_ROUTE view=Login />
                <Route path="/*any" view=NotFound />
            </Routes>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <main class="notFound">
            <h1 class="lightPurple">"Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href=DASHBOARD_ROUTE class="simpleButton">
                "Go to Dashboard"
            </A>
        </main>
    }
}
