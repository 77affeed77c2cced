use leptos::*;

mod panel;
mod repository;
mod utils;
mod view_model;

pub use panel::SignupPanel;

#[component]
pub fn SignupPage() -> impl IntoView {
    view! { <SignupPanel /> }
}
