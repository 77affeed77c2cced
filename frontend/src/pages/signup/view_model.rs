use super::repository::SignupRepository;
use super::utils::{self, SignupFormState};
use crate::api::{ApiClient, ApiError, SignupRequest};
use crate::components::notification::{use_notifier, Notifier};
use crate::router;
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct SignupViewModel {
    pub form: SignupFormState,
    pub notifier: Notifier,
    /// Code found in the URL on mount, shown in the invitation banner.
    pub referral_code: RwSignal<Option<String>>,
    pub signup_action: Action<SignupRequest, Result<(), ApiError>>,
}

pub fn use_signup_view_model() -> SignupViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = SignupRepository::new_with_client(Rc::new(api));
    let notifier = use_notifier();
    let form = SignupFormState::default();
    let referral_code = create_rw_signal(None::<String>);

    create_effect(move |_| {
        referral_code.set(utils::referral_code_from_url());
    });

    let repo_for_submit = repository.clone();
    let signup_action = create_action(move |request: &SignupRequest| {
        let repo = repo_for_submit.clone();
        let request = request.clone();
        async move { repo.sign_up(request).await }
    });

    create_effect(move |_| {
        if let Some(result) = signup_action.value().get() {
            match result {
                Ok(()) => {
                    notifier.success("Signup successful! Redirecting...");
                    router::redirect_after_delay("/login");
                }
                Err(err) => {
                    notifier.error(utils::signup_failure_message(&err));
                }
            }
        }
    });

    SignupViewModel {
        form,
        notifier,
        referral_code,
        signup_action,
    }
}

impl SignupViewModel {
    /// Validates and dispatches the registration request. The referral code
    /// is re-read from the URL at submit time.
    pub fn submit(&self) {
        if self.signup_action.pending().get_untracked() {
            return;
        }
        let email = self.form.email.get_untracked();
        let password = self.form.password.get_untracked();
        if let Err(message) = utils::validate_signup_fields(&email, &password) {
            self.notifier.error(message);
            return;
        }
        let referral_code = utils::referral_code_from_url();
        self.signup_action
            .dispatch(SignupRequest::new(email, password).with_referral_code(referral_code));
    }
}
