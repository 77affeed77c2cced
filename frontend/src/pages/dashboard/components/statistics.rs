use crate::api::ReferralStatistics;
use crate::components::layout::LoadingSpinner;
use crate::pages::dashboard::utils::format_rewards;
use leptos::ev::MouseEvent;
use leptos::*;

#[component]
pub fn StatisticsSection(
    statistics: RwSignal<ReferralStatistics>,
    loading: RwSignal<bool>,
    on_open_referred: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <div>
                <h3 class="text-base font-semibold text-gray-900">{"Your Referral Statistics"}</h3>
                <p class="text-sm text-gray-600">{"How your invitations are paying off so far"}</p>
            </div>
            <div>
                {move || if loading.get() {
                    view! {
                        <div class="flex items-center gap-2 text-sm text-gray-500">
                            <LoadingSpinner />
                            <span>{"Loading your referral statistics..."}</span>
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <div class="grid grid-cols-1 gap-4 lg:grid-cols-3">
                            <StatCard
                                label="Earned Rewards"
                                value=Signal::derive(move || format_rewards(statistics.get().rewards_point))
                            />
                            <StatCard
                                label="Friends Referred"
                                value=Signal::derive(move || statistics.get().referral_count.to_string())
                            />
                            <button
                                type="button"
                                class="text-left"
                                aria-label="Show referred users"
                                on:click=move |ev| on_open_referred.call(ev)
                            >
                                <StatCard
                                    label="Referred Users"
                                    value=Signal::derive(move || {
                                        statistics.get().referred_user_emails.len().to_string()
                                    })
                                />
                            </button>
                        </div>
                    }.into_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn StatCard(#[prop(into)] label: String, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="relative overflow-hidden p-6 rounded-2xl bg-white border border-gray-100 shadow hover:shadow-md transition-all duration-300 group">
            <div class="absolute top-0 right-0 -mr-4 -mt-4 w-24 h-24 bg-blue-50 rounded-full opacity-50 group-hover:scale-110 transition-transform"></div>
            <p class="relative z-10 text-xs font-bold text-blue-600 uppercase tracking-widest">{label}</p>
            <p class="relative z-10 mt-3 text-3xl font-extrabold text-gray-900">{move || value.get()}</p>
        </div>
    }
}
