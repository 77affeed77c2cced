use crate::state::session::use_session_store;
use leptos::*;

/// Wraps routes that require a stored session. The login check reads the
/// session store on every evaluation so a login or logout in another tab is
/// picked up the next time the route renders.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let sessions = use_session_store();
    let effect_sessions = sessions.clone();
    create_effect(move |_| {
        if let Some(target) = protected_redirect(effect_sessions.is_authenticated()) {
            if let Some(win) = web_sys::window() {
                let _ = win.location().set_href(target);
            }
        }
    });
    view! {
        <Show when=move || sessions.is_authenticated() fallback=|| ()>
            {children()}
        </Show>
    }
}

/// Wraps routes that only make sense while logged out, such as login and
/// signup. Logged-in visitors are sent to the dashboard.
#[component]
pub fn RedirectAuthenticated(children: ChildrenFn) -> impl IntoView {
    let sessions = use_session_store();
    let effect_sessions = sessions.clone();
    create_effect(move |_| {
        if let Some(target) = public_redirect(effect_sessions.is_authenticated()) {
            if let Some(win) = web_sys::window() {
                let _ = win.location().set_href(target);
            }
        }
    });
    view! {
        <Show when=move || !sessions.is_authenticated() fallback=|| ()>
            {children()}
        </Show>
    }
}

fn protected_redirect(is_authenticated: bool) -> Option<&'static str> {
    if is_authenticated {
        None
    } else {
        Some("/login")
    }
}

fn public_redirect(is_authenticated: bool) -> Option<&'static str> {
    if is_authenticated {
        Some("/dashboard")
    } else {
        None
    }
}
