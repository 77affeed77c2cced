use crate::pages::dashboard::{
    components::{ReferralForm, ReferredModal, StatisticsSection},
    view_model::use_dashboard_view_model,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let current_user_id = vm.current_user_id;
    let statistics = vm.statistics;
    let referred_modal_open: Signal<bool> = vm.referred_modal_open.into();
    let referred_emails = Signal::derive(move || statistics.get().referred_user_emails);
    let logout_pending = vm.logout_action.pending();

    let greeting = move || match current_user_id.get() {
        Some(uid) => format!("Welcome back, {}!", uid),
        None => "Welcome back!".to_string(),
    };

    view! {
        <div class="min-h-screen bg-gray-50">
            <header class="bg-white shadow">
                <div class="mx-auto max-w-5xl px-6 py-4 flex items-center justify-between gap-4">
                    <div>
                        <h1 class="text-xl font-bold text-gray-900">{"🎉 Referral System Dashboard"}</h1>
                        <p class="text-sm text-gray-600">{greeting}</p>
                    </div>
                    <button
                        type="button"
                        class="inline-flex items-center justify-center rounded-md border border-red-300 px-4 py-2 text-sm font-semibold text-red-600 hover:bg-red-50 disabled:opacity-50"
                        disabled=move || logout_pending.get()
                        on:click=vm.handle_logout()
                    >
                        <i class="fas fa-sign-out-alt mr-2"></i>
                        {"Logout"}
                    </button>
                </div>
            </header>
            <main class="mx-auto max-w-5xl p-6 space-y-6">
                <p class="text-gray-700">
                    {"Invite your friends and earn rewards when they sign up using your referral link!"}
                </p>
                <ReferralForm
                    friend_email=vm.friend_email
                    referral_link=vm.referral_link
                    pending=vm.refer_action.pending()
                    on_refer=Callback::new(vm.handle_refer())
                    on_copy=Callback::new(vm.handle_copy_link())
                />
                <StatisticsSection
                    statistics=vm.statistics
                    loading=vm.statistics_loading
                    on_open_referred=Callback::new(vm.handle_open_referred())
                />
                <ReferredModal
                    is_open=referred_modal_open
                    emails=referred_emails
                    on_close=Callback::new(vm.close_referred())
                />
            </main>
        </div>
    }
}
