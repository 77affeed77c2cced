use leptos::ev::MouseEvent;
use leptos::*;
use web_sys::HtmlInputElement;

/// Friend-email entry plus the generated link row. The link row only exists
/// once a link has been generated in this page visit.
#[component]
pub fn ReferralForm(
    friend_email: RwSignal<String>,
    referral_link: RwSignal<Option<String>>,
    pending: ReadSignal<bool>,
    on_refer: Callback<MouseEvent>,
    on_copy: Callback<MouseEvent>,
) -> impl IntoView {
    let refer_disabled = move || pending.get() || friend_email.get().trim().is_empty();

    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <div>
                <h3 class="text-base font-semibold text-gray-900">{"Refer a Friend"}</h3>
                <p class="text-sm text-gray-600">
                    {"We generate a personal referral link and email it straight to your friend."}
                </p>
            </div>
            <div class="flex flex-col sm:flex-row gap-3">
                <input
                    type="email"
                    placeholder="Enter Friend's Email"
                    class="flex-1 rounded-md border border-gray-300 px-3 py-2 text-sm text-gray-900 placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-blue-500"
                    prop:value=move || friend_email.get()
                    on:input=move |ev| {
                        let input = event_target::<HtmlInputElement>(&ev);
                        friend_email.set(input.value());
                    }
                />
                <button
                    type="button"
                    class="inline-flex items-center justify-center rounded-md bg-blue-600 px-4 py-2 text-sm font-semibold text-white hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed"
                    disabled=refer_disabled
                    on:click=move |ev| on_refer.call(ev)
                >
                    {move || if pending.get() { "Generating..." } else { "Generate Referral Link" }}
                </button>
            </div>
            <Show when=move || referral_link.get().is_some()>
                <div class="rounded-md border border-gray-200 bg-gray-50 p-4 space-y-2">
                    <p class="text-sm font-medium text-gray-700">{"Your Referral Link:"}</p>
                    <div class="flex items-center gap-2">
                        <input
                            type="text"
                            readonly
                            class="flex-1 rounded-md border border-gray-300 bg-white px-3 py-2 text-sm text-gray-600 font-mono"
                            value=move || referral_link.get().unwrap_or_default()
                        />
                        <button
                            type="button"
                            aria-label="Copy referral link"
                            class="inline-flex items-center justify-center rounded-md border border-gray-300 bg-white px-3 py-2 text-sm text-gray-700 hover:bg-gray-100"
                            on:click=move |ev| on_copy.call(ev)
                        >
                            <i class="fas fa-copy"></i>
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
