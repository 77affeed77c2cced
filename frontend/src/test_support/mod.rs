#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::Session;
    use crate::state::session::SessionStore;
    use leptos::*;

    pub fn test_session() -> Session {
        Session::new("tok-1", "cli-1", "me@example.com")
    }

    pub fn logged_in_store() -> SessionStore {
        let sessions = SessionStore::in_memory();
        sessions.save(&test_session()).unwrap();
        sessions
    }

    pub fn provide_session(logged_in: bool) -> SessionStore {
        let sessions = if logged_in {
            logged_in_store()
        } else {
            SessionStore::in_memory()
        };
        provide_context(sessions.clone());
        sessions
    }
}
