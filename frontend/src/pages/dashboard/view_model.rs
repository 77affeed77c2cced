use super::repository::DashboardRepository;
use super::utils;
use crate::api::{ApiClient, ReferralStatistics, SendReferralEmailRequest};
use crate::components::notification::{use_notifier, Notifier};
use crate::router;
use crate::utils::{clipboard, storage};
use leptos::{ev::MouseEvent, *};
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardViewModel {
    pub friend_email: RwSignal<String>,
    pub referral_link: RwSignal<Option<String>>,
    pub statistics: RwSignal<ReferralStatistics>,
    pub statistics_loading: RwSignal<bool>,
    pub current_user_id: RwSignal<Option<String>>,
    pub referred_modal_open: RwSignal<bool>,
    pub notifier: Notifier,
    pub refer_action: Action<String, ()>,
    pub logout_action: Action<(), ()>,
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = DashboardRepository::new_with_client(Rc::new(api));
    let notifier = use_notifier();

    let friend_email = create_rw_signal(String::new());
    let referral_link = create_rw_signal(None::<String>);
    let statistics = create_rw_signal(ReferralStatistics::default());
    let statistics_loading = create_rw_signal(false);
    let current_user_id = create_rw_signal(None::<String>);
    let referred_modal_open = create_rw_signal(false);

    let repo_for_load = repository.clone();
    create_effect(move |_| {
        let repo = repo_for_load.clone();
        spawn_local(async move {
            statistics_loading.set(true);
            load_statistics(&repo, notifier, statistics, current_user_id).await;
            statistics_loading.set(false);
        });
    });

    let repo_for_refer = repository.clone();
    let refer_action = create_action(move |friend_email: &String| {
        let repo = repo_for_refer.clone();
        let friend_email = friend_email.clone();
        async move {
            let origin = storage::current_origin().unwrap_or_default();
            refer_friend(&repo, notifier, origin, friend_email, referral_link).await;
        }
    });

    let repo_for_logout = repository.clone();
    let logout_action = create_action(move |_: &()| {
        let repo = repo_for_logout.clone();
        async move {
            logout(&repo, notifier).await;
            router::redirect_after_delay("/login");
        }
    });

    DashboardViewModel {
        friend_email,
        referral_link,
        statistics,
        statistics_loading,
        current_user_id,
        referred_modal_open,
        notifier,
        refer_action,
        logout_action,
    }
}

impl DashboardViewModel {
    pub fn handle_refer(&self) -> impl Fn(MouseEvent) {
        let refer_action = self.refer_action;
        let friend_email = self.friend_email;
        move |_| {
            if refer_action.pending().get_untracked() {
                return;
            }
            refer_action.dispatch(friend_email.get_untracked());
        }
    }

    pub fn handle_copy_link(&self) -> impl Fn(MouseEvent) {
        let referral_link = self.referral_link;
        let notifier = self.notifier;
        move |_| {
            if let Some(link) = referral_link.get_untracked() {
                spawn_local(async move {
                    if let Err(err) = clipboard::copy_text(&link).await {
                        log::warn!("clipboard write failed: {}", err);
                    }
                });
                notifier.success("Referral link copied to clipboard!");
            }
        }
    }

    pub fn handle_logout(&self) -> impl Fn(MouseEvent) {
        let logout_action = self.logout_action;
        move |_| {
            if logout_action.pending().get_untracked() {
                return;
            }
            logout_action.dispatch(());
        }
    }

    pub fn handle_open_referred(&self) -> impl Fn(MouseEvent) {
        let referred_modal_open = self.referred_modal_open;
        move |_| referred_modal_open.set(true)
    }

    pub fn close_referred(&self) -> impl Fn(()) {
        let referred_modal_open = self.referred_modal_open;
        move |_| referred_modal_open.set(false)
    }
}

/// Fetches referral statistics into view state. Requires a session; on
/// failure the previously displayed statistics stay as they are.
pub async fn load_statistics(
    repo: &DashboardRepository,
    notifier: Notifier,
    statistics: RwSignal<ReferralStatistics>,
    current_user_id: RwSignal<Option<String>>,
) {
    let session = match repo.sessions().load() {
        Some(session) => session,
        None => {
            notifier.error("You are not logged in!");
            return;
        }
    };
    match repo.fetch_statistics().await {
        Ok(stats) => {
            statistics.set(stats);
            current_user_id.set(Some(session.uid));
        }
        Err(err) => {
            log::warn!("failed to load referral statistics: {}", err);
            notifier.error("Failed to load referral statistics!");
        }
    }
}

/// Generates a referral link for `friend_email` and emails it. The link is
/// published as soon as it exists; a failed email send never takes it back.
pub async fn refer_friend(
    repo: &DashboardRepository,
    notifier: Notifier,
    origin: String,
    friend_email: String,
    referral_link: RwSignal<Option<String>>,
) {
    let friend_email = friend_email.trim().to_string();
    if friend_email.is_empty() {
        notifier.error("Please enter your friend's email!");
        return;
    }
    let session = match repo.sessions().load() {
        Some(session) => session,
        None => {
            notifier.error("You are not logged in!");
            return;
        }
    };
    if utils::is_self_referral(&friend_email, &session.uid) {
        notifier.warning("You cannot refer yourself!");
        return;
    }

    let code = match repo.generate_code().await {
        Ok(response) => response.referral_code,
        Err(err) => {
            log::warn!("failed to generate referral code: {}", err);
            notifier.error("Failed to generate referral link!");
            return;
        }
    };
    let link = utils::build_referral_link(&origin, &code);
    referral_link.set(Some(link.clone()));
    notifier.success("Referral link generated successfully!");

    let request = SendReferralEmailRequest {
        email: friend_email,
        referral_link: link,
    };
    match repo.send_email(request).await {
        Ok(()) => {
            notifier.success("Referral email sent successfully!");
        }
        Err(err) => {
            log::warn!("failed to send referral email: {}", err);
            notifier.error("Failed to send referral email!");
        }
    }
}

/// Best-effort server sign-out; the local session is cleared no matter what.
pub async fn logout(repo: &DashboardRepository, notifier: Notifier) {
    if let Err(err) = repo.sign_out().await {
        log::warn!("sign-out request failed: {}", err);
    }
    if let Err(err) = repo.sessions().clear() {
        log::warn!("failed to clear stored session: {}", err);
    }
    notifier.info("Logged out successfully!");
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::components::notification::Severity;
    use crate::state::session::SessionStore;
    use crate::test_support::helpers::logged_in_store;
    use crate::test_support::ssr::with_local_runtime_async;
    use httpmock::prelude::*;
    use serde_json::json;

    fn repository(server: &MockServer, sessions: &SessionStore) -> DashboardRepository {
        DashboardRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.base_url(),
            sessions.clone(),
        )))
    }

    #[test]
    fn load_statistics_replaces_the_zero_state() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            server.mock(|when, then| {
                when.method(GET).path("/referrals/statistics");
                then.status(200).json_body(json!({
                    "rewards_point": 50,
                    "referral_count": 2,
                    "referred_user_emails": ["a@x.com", "b@x.com"]
                }));
            });
            let repo = repository(&server, &logged_in_store());
            let notifier = Notifier::new();
            let statistics = create_rw_signal(ReferralStatistics::default());
            let current_user_id = create_rw_signal(None::<String>);

            load_statistics(&repo, notifier, statistics, current_user_id).await;

            let loaded = statistics.get();
            assert_eq!(loaded.rewards_point, 50.0);
            assert_eq!(loaded.referral_count, 2);
            assert_eq!(loaded.referred_user_emails, vec!["a@x.com", "b@x.com"]);
            assert_eq!(current_user_id.get(), Some("me@example.com".to_string()));
            assert!(notifier.current().is_none());
        });
    }

    #[test]
    fn load_statistics_without_a_session_never_reaches_the_network() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            let mock = server.mock(|when, then| {
                when.method(GET).path("/referrals/statistics");
                then.status(200).json_body(json!({}));
            });
            let repo = repository(&server, &SessionStore::in_memory());
            let notifier = Notifier::new();
            let statistics = create_rw_signal(ReferralStatistics::default());
            let current_user_id = create_rw_signal(None::<String>);

            load_statistics(&repo, notifier, statistics, current_user_id).await;

            assert_eq!(mock.hits(), 0);
            assert_eq!(
                notifier.current().map(|notice| notice.message),
                Some("You are not logged in!".to_string())
            );
            assert!(current_user_id.get().is_none());
        });
    }

    #[test]
    fn load_statistics_failure_leaves_prior_statistics() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            server.mock(|when, then| {
                when.method(GET).path("/referrals/statistics");
                then.status(500).json_body(json!({"error": "statistics unavailable"}));
            });
            let repo = repository(&server, &logged_in_store());
            let notifier = Notifier::new();
            let prior = ReferralStatistics {
                rewards_point: 25.0,
                referral_count: 1,
                referred_user_emails: vec!["a@x.com".into()],
            };
            let statistics = create_rw_signal(prior.clone());
            let current_user_id = create_rw_signal(None::<String>);

            load_statistics(&repo, notifier, statistics, current_user_id).await;

            assert_eq!(statistics.get(), prior);
            assert_eq!(
                notifier.current().map(|notice| notice.message),
                Some("Failed to load referral statistics!".to_string())
            );
        });
    }

    #[test]
    fn refer_with_an_empty_email_never_reaches_the_network() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            let generate = server.mock(|when, then| {
                when.method(GET).path("/referrals/generate_code");
                then.status(200).json_body(json!({"referral_code": "x"}));
            });
            let repo = repository(&server, &logged_in_store());
            let notifier = Notifier::new();
            let referral_link = create_rw_signal(None::<String>);

            refer_friend(
                &repo,
                notifier,
                "https://app.example.com".into(),
                "   ".into(),
                referral_link,
            )
            .await;

            assert_eq!(generate.hits(), 0);
            assert_eq!(
                notifier.current().map(|notice| notice.message),
                Some("Please enter your friend's email!".to_string())
            );
            assert!(referral_link.get().is_none());
        });
    }

    #[test]
    fn refer_rejects_self_referral_before_any_call() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            let generate = server.mock(|when, then| {
                when.method(GET).path("/referrals/generate_code");
                then.status(200).json_body(json!({"referral_code": "x"}));
            });
            let repo = repository(&server, &logged_in_store());
            let notifier = Notifier::new();
            let referral_link = create_rw_signal(None::<String>);

            refer_friend(
                &repo,
                notifier,
                "https://app.example.com".into(),
                "  ME@Example.COM ".into(),
                referral_link,
            )
            .await;

            assert_eq!(generate.hits(), 0);
            let notice = notifier.current().unwrap();
            assert_eq!(notice.message, "You cannot refer yourself!");
            assert_eq!(notice.severity, Severity::Warning);
            assert!(referral_link.get().is_none());
        });
    }

    #[test]
    fn refer_generates_the_link_and_sends_the_email() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            server.mock(|when, then| {
                when.method(GET).path("/referrals/generate_code");
                then.status(200).json_body(json!({"referral_code": "ab12cd"}));
            });
            let send = server.mock(|when, then| {
                when.method(POST).path("/send_referral_email").json_body(json!({
                    "email": "friend@example.com",
                    "referral_link": "https://app.example.com/signup?referral_code=ab12cd"
                }));
                then.status(200).json_body(json!({"sent": true}));
            });
            let repo = repository(&server, &logged_in_store());
            let notifier = Notifier::new();
            let referral_link = create_rw_signal(None::<String>);

            refer_friend(
                &repo,
                notifier,
                "https://app.example.com".into(),
                "friend@example.com".into(),
                referral_link,
            )
            .await;

            assert_eq!(send.hits(), 1);
            assert_eq!(
                referral_link.get(),
                Some("https://app.example.com/signup?referral_code=ab12cd".to_string())
            );
            assert_eq!(
                notifier.current().map(|notice| notice.message),
                Some("Referral email sent successfully!".to_string())
            );
        });
    }

    #[test]
    fn generate_failure_leaves_the_link_unset() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            server.mock(|when, then| {
                when.method(GET).path("/referrals/generate_code");
                then.status(500).json_body(json!({"error": "generator down"}));
            });
            let send = server.mock(|when, then| {
                when.method(POST).path("/send_referral_email");
                then.status(200).json_body(json!({}));
            });
            let repo = repository(&server, &logged_in_store());
            let notifier = Notifier::new();
            let referral_link = create_rw_signal(None::<String>);

            refer_friend(
                &repo,
                notifier,
                "https://app.example.com".into(),
                "friend@example.com".into(),
                referral_link,
            )
            .await;

            assert!(referral_link.get().is_none());
            assert_eq!(send.hits(), 0);
            assert_eq!(
                notifier.current().map(|notice| notice.message),
                Some("Failed to generate referral link!".to_string())
            );
        });
    }

    #[test]
    fn send_failure_keeps_the_generated_link() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            server.mock(|when, then| {
                when.method(GET).path("/referrals/generate_code");
                then.status(200).json_body(json!({"referral_code": "ab12cd"}));
            });
            server.mock(|when, then| {
                when.method(POST).path("/send_referral_email");
                then.status(502).json_body(json!({"error": "mailer down"}));
            });
            let repo = repository(&server, &logged_in_store());
            let notifier = Notifier::new();
            let referral_link = create_rw_signal(None::<String>);

            refer_friend(
                &repo,
                notifier,
                "https://app.example.com".into(),
                "friend@example.com".into(),
                referral_link,
            )
            .await;

            assert_eq!(
                referral_link.get(),
                Some("https://app.example.com/signup?referral_code=ab12cd".to_string())
            );
            assert_eq!(
                notifier.current().map(|notice| notice.message),
                Some("Failed to send referral email!".to_string())
            );
        });
    }

    #[test]
    fn logout_clears_the_session_even_when_sign_out_fails() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            server.mock(|when, then| {
                when.method(DELETE).path("/auth/sign_out");
                then.status(500).json_body(json!({"error": "session service down"}));
            });
            let sessions = logged_in_store();
            let repo = repository(&server, &sessions);
            let notifier = Notifier::new();

            logout(&repo, notifier).await;

            assert!(sessions.load().is_none());
            let notice = notifier.current().unwrap();
            assert_eq!(notice.message, "Logged out successfully!");
            assert_eq!(notice.severity, Severity::Info);
        });
    }

    #[test]
    fn logout_clears_the_session_on_success() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            let sign_out = server.mock(|when, then| {
                when.method(DELETE).path("/auth/sign_out").header("uid", "me@example.com");
                then.status(200).json_body(json!({"success": true}));
            });
            let sessions = logged_in_store();
            let repo = repository(&server, &sessions);
            let notifier = Notifier::new();

            logout(&repo, notifier).await;

            assert_eq!(sign_out.hits(), 1);
            assert!(sessions.load().is_none());
        });
    }
}
