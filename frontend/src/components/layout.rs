use leptos::*;

/// Centered card shell shared by the login and signup pages.
#[component]
pub fn AuthCard(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <a href="/" class="block text-center text-lg font-semibold text-action-primary-bg">
                        "Share & Earn"
                    </a>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">{title}</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">{subtitle}</p>
                </div>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}
