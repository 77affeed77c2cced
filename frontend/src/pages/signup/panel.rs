use crate::components::layout::AuthCard;
use crate::pages::signup::view_model::use_signup_view_model;
use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

#[component]
pub fn SignupPanel() -> impl IntoView {
    let vm = use_signup_view_model();
    let form = vm.form;
    let referral_code = vm.referral_code;
    let pending = vm.signup_action.pending();

    let submit_vm = vm.clone();
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        submit_vm.submit();
    };

    view! {
        <AuthCard title="Create Account" subtitle="Join our referral program and start earning rewards">
            <Show when=move || referral_code.get().is_some() fallback=|| ()>
                <div class="bg-status-info-bg border border-status-info-border text-status-info-text px-4 py-3 rounded text-sm">
                    "You were invited! Referral code "
                    <span class="font-mono font-semibold">
                        {move || referral_code.get().unwrap_or_default()}
                    </span>
                    " will be applied to your signup."
                </div>
            </Show>

            <form class="mt-8 space-y-6" on:submit=handle_submit>
                <div class="rounded-md shadow-sm -space-y-px">
                    <div>
                        <label for="email" class="sr-only">"Email"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            class="appearance-none rounded-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-t-md focus:outline-none focus:ring-blue-500 focus:border-blue-500 focus:z-10 sm:text-sm"
                            placeholder="Email"
                            prop:value=move || form.email.get()
                            on:input=move |ev| {
                                let target = event_target::<HtmlInputElement>(&ev);
                                form.email.set(target.value());
                            }
                        />
                    </div>
                    <div class="relative">
                        <label for="password" class="sr-only">"Password"</label>
                        <input
                            id="password"
                            name="password"
                            type=move || if form.password_visible.get() { "text" } else { "password" }
                            class="appearance-none rounded-none relative block w-full px-3 py-2 pr-10 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-b-md focus:outline-none focus:ring-blue-500 focus:border-blue-500 focus:z-10 sm:text-sm"
                            placeholder="Password"
                            prop:value=move || form.password.get()
                            on:input=move |ev| {
                                let target = event_target::<HtmlInputElement>(&ev);
                                form.password.set(target.value());
                            }
                        />
                        <button
                            type="button"
                            class="absolute inset-y-0 right-0 z-20 flex items-center pr-3 text-gray-500 hover:text-gray-700"
                            aria-label=move || {
                                if form.password_visible.get() { "Hide password" } else { "Show password" }
                            }
                            on:click=move |_| form.password_visible.update(|visible| *visible = !*visible)
                        >
                            <i
                                class=move || {
                                    if form.password_visible.get() { "fas fa-eye-slash" } else { "fas fa-eye" }
                                }
                                aria-hidden="true"
                            ></i>
                        </button>
                    </div>
                </div>

                <div>
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500 disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing up..." } else { "Sign Up" }}
                    </button>
                </div>
            </form>

            <div class="mt-3 flex flex-col gap-1 text-center text-sm">
                <p class="text-fg-muted">
                    "Already have an account? "
                    <a href="/login" class="font-medium text-action-primary-bg hover:underline">
                        "Login here"
                    </a>
                </p>
                <a href="/" class="text-fg-muted hover:text-action-primary-bg hover:underline">
                    "Back to Home"
                </a>
            </div>
        </AuthCard>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn signup_panel_renders_form_and_links() {
        let html = render_to_string(move || view! { <SignupPanel /> });
        assert!(html.contains("Create Account"));
        assert!(html.contains("placeholder=\"Email\""));
        assert!(html.contains("placeholder=\"Password\""));
        assert!(html.contains("Sign Up"));
        assert!(html.contains("href=\"/login\""));
        assert!(html.contains("href=\"/\""));
    }

    #[test]
    fn invitation_banner_hidden_without_a_code() {
        let html = render_to_string(move || view! { <SignupPanel /> });
        assert!(!html.contains("You were invited!"));
    }
}
