use crate::api::ApiError;
use leptos::*;

#[derive(Clone, Copy, Default)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub password_visible: RwSignal<bool>,
}

pub fn validate_login_fields(email: &str, password: &str) -> Result<(), String> {
    if email.is_empty() || password.is_empty() {
        return Err("Please enter all fields!".into());
    }
    Ok(())
}

/// A rejected login reads the same to the user whatever the backend said;
/// only transport failures get their own message.
pub fn login_failure_message(error: &ApiError) -> String {
    if error.code == "REQUEST_FAILED" {
        "Network error! Please try again.".into()
    } else {
        "Invalid email or password!".into()
    }
}
