use leptos::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{
        guard::{RedirectAuthenticated, RequireSession},
        notification::{Notifier, Toast},
    },
    pages::{dashboard::DashboardPage, home::HomePage, login::LoginPage, signup::SignupPage},
    state::session::SessionStore,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/signup", "/login", "/dashboard"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/dashboard"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/signup", "/login"];

/// How long a success toast stays on screen before the app navigates away.
pub const REDIRECT_DELAY_MS: u32 = 1_000;

/// Swaps the page after a short pause, leaving the toast announcing the
/// outcome visible first.
pub fn redirect_after_delay(target: &'static str) {
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(target);
        }
    });
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    let sessions = SessionStore::browser();
    provide_context(sessions.clone());
    provide_context(ApiClient::with_sessions(sessions));
    provide_context(Notifier::new());

    view! {
        <Toast />
        <Router>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/signup" view=PublicSignup/>
                <Route path="/login" view=PublicLogin/>
                <Route path="/dashboard" view=ProtectedDashboard/>
            </Routes>
        </Router>
    }
}

#[component]
fn PublicSignup() -> impl IntoView {
    view! { <RedirectAuthenticated><SignupPage/></RedirectAuthenticated> }
}

#[component]
fn PublicLogin() -> impl IntoView {
    view! { <RedirectAuthenticated><LoginPage/></RedirectAuthenticated> }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireSession><DashboardPage/></RequireSession> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn route_paths_cover_the_referral_flow() {
        assert!(ROUTE_PATHS.contains(&"/signup"));
        assert!(ROUTE_PATHS.contains(&"/dashboard"));
    }

    #[test]
    fn every_route_is_either_public_or_protected() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        let public: HashSet<&str> = PUBLIC_ROUTE_PATHS.iter().copied().collect();
        let protected: HashSet<&str> = PROTECTED_ROUTE_PATHS.iter().copied().collect();

        assert!(public.is_disjoint(&protected));
        let partitioned: HashSet<&str> = public.union(&protected).copied().collect();
        assert_eq!(partitioned, all);
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
