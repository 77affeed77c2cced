use super::repository::LoginRepository;
use super::utils::{self, LoginFormState};
use crate::api::{ApiClient, ApiError, LoginRequest, Session};
use crate::components::notification::{use_notifier, Notifier};
use crate::router;
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub notifier: Notifier,
    pub login_action: Action<LoginRequest, Result<Session, ApiError>>,
}

pub fn use_login_view_model() -> LoginViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = LoginRepository::new_with_client(Rc::new(api));
    let notifier = use_notifier();
    let form = LoginFormState::default();

    let repo_for_submit = repository.clone();
    let login_action = create_action(move |request: &LoginRequest| {
        let repo = repo_for_submit.clone();
        let request = request.clone();
        async move { repo.sign_in(request).await }
    });

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    notifier.success("Login successful!");
                    router::redirect_after_delay("/dashboard");
                }
                Err(err) => {
                    notifier.error(utils::login_failure_message(&err));
                }
            }
        }
    });

    LoginViewModel {
        form,
        notifier,
        login_action,
    }
}

impl LoginViewModel {
    /// Validates and dispatches the sign-in request. Runs nothing while a
    /// request is already in flight or a field is empty.
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        let email = self.form.email.get_untracked();
        let password = self.form.password.get_untracked();
        if let Err(message) = utils::validate_login_fields(&email, &password) {
            self.notifier.error(message);
            return;
        }
        self.login_action.dispatch(LoginRequest { email, password });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn view_model_defaults_empty() {
        with_runtime(|| {
            let vm = use_login_view_model();
            assert!(vm.form.email.get().is_empty());
            assert!(vm.form.password.get().is_empty());
            assert!(!vm.form.password_visible.get());
            assert!(vm.login_action.value().get().is_none());
        });
    }

    #[test]
    fn submit_with_empty_fields_never_dispatches() {
        with_runtime(|| {
            let vm = use_login_view_model();
            vm.form.email.set("me@example.com".into());
            vm.submit();
            let notice = vm.notifier.current().unwrap();
            assert_eq!(notice.message, "Please enter all fields!");
            assert!(vm.login_action.value().get().is_none());
            assert!(!vm.login_action.pending().get());
        });
    }
}
