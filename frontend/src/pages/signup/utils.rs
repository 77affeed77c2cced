use crate::api::ApiError;
use leptos::*;

#[derive(Clone, Copy, Default)]
pub struct SignupFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub password_visible: RwSignal<bool>,
}

pub fn validate_signup_fields(email: &str, password: &str) -> Result<(), String> {
    if email.is_empty() || password.is_empty() {
        return Err("Please enter all fields!".into());
    }
    Ok(())
}

pub fn signup_failure_message(error: &ApiError) -> String {
    if error.code == "REQUEST_FAILED" {
        "Network error! Please try again.".into()
    } else {
        error.error.clone()
    }
}

/// Extracts `referral_code` from a raw query string. The code is opaque and
/// forwarded to the backend exactly as it appears in the URL.
pub fn referral_code_from_query(search: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "referral_code")
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

pub fn referral_code_from_url() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    referral_code_from_query(&search)
}
