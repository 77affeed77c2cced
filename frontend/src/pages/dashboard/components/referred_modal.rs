use crate::components::empty_state::EmptyState;
use leptos::ev::KeyboardEvent;
use leptos::*;

/// Modal listing the accounts that signed up through the current user's
/// referral links.
#[component]
pub fn ReferredModal(
    is_open: Signal<bool>,
    emails: Signal<Vec<String>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let close_on_backdrop = on_close;
    let close_on_header_button = on_close;
    let close_on_esc = on_close;
    let close_on_footer_button = on_close;

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| close_on_backdrop.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            close_on_esc.call(());
                        }
                    }
                >
                    <div class="flex items-start justify-between gap-3">
                        <h2 class="text-lg font-semibold text-fg">{"Referred Users"}</h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-fg-muted hover:text-fg"
                            on:click=move |_| close_on_header_button.call(())
                        >
                            {"✕"}
                        </button>
                    </div>
                    {move || {
                        let referred = emails.get();
                        if referred.is_empty() {
                            view! { <EmptyState title="No users referred yet" /> }.into_view()
                        } else {
                            view! {
                                <ol class="max-h-64 overflow-y-auto divide-y divide-border text-sm text-fg">
                                    {referred
                                        .into_iter()
                                        .map(|email| view! { <li class="py-2">{email}</li> })
                                        .collect_view()}
                                </ol>
                            }
                            .into_view()
                        }
                    }}
                    <div class="flex justify-end">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                            on:click=move |_| close_on_footer_button.call(())
                        >
                            {"Close"}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
