use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use leptos::*;

use crate::api::Session;
use crate::utils::storage;

pub const SESSION_STORAGE_KEY: &str = "authHeaders";

#[derive(Clone)]
enum Backend {
    Browser,
    Memory(Rc<RefCell<HashMap<String, String>>>),
}

/// Repository for the credential triple persisted across page loads.
///
/// The browser backend keeps the serialized session under
/// `SESSION_STORAGE_KEY` in localStorage. The in-memory backend backs
/// host-side tests that cannot reach a real window.
#[derive(Clone)]
pub struct SessionStore {
    backend: Backend,
}

impl SessionStore {
    pub fn browser() -> Self {
        Self {
            backend: Backend::Browser,
        }
    }

    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(Rc::new(RefCell::new(HashMap::new()))),
        }
    }

    fn read_raw(&self) -> Option<String> {
        match &self.backend {
            Backend::Browser => storage::read_item(SESSION_STORAGE_KEY).ok().flatten(),
            Backend::Memory(items) => items.borrow().get(SESSION_STORAGE_KEY).cloned(),
        }
    }

    /// Loads the stored session, treating missing, unreadable, malformed
    /// and incomplete values alike as "no session".
    pub fn load(&self) -> Option<Session> {
        self.read_raw().as_deref().and_then(Session::parse)
    }

    pub fn is_authenticated(&self) -> bool {
        self.load().is_some()
    }

    pub fn save(&self, session: &Session) -> Result<(), String> {
        let raw = serde_json::to_string(session)
            .map_err(|err| format!("Failed to serialize session: {}", err))?;
        match &self.backend {
            Backend::Browser => storage::write_item(SESSION_STORAGE_KEY, &raw),
            Backend::Memory(items) => {
                items.borrow_mut().insert(SESSION_STORAGE_KEY.to_string(), raw);
                Ok(())
            }
        }
    }

    pub fn clear(&self) -> Result<(), String> {
        match &self.backend {
            Backend::Browser => storage::remove_item(SESSION_STORAGE_KEY),
            Backend::Memory(items) => {
                items.borrow_mut().remove(SESSION_STORAGE_KEY);
                Ok(())
            }
        }
    }

    #[cfg(test)]
    pub fn seed_raw(&self, raw: &str) {
        if let Backend::Memory(items) = &self.backend {
            items
                .borrow_mut()
                .insert(SESSION_STORAGE_KEY.to_string(), raw.to_string());
        }
    }
}

pub fn use_session_store() -> SessionStore {
    use_context::<SessionStore>().unwrap_or_else(SessionStore::browser)
}
