//! Stat Card Component
//!
//! Small summary card used on the dashboard and list pages.

use leptos::*;

/// Summary card with a headline figure and caption
#[component]
pub fn StatCard(
    title: &'static str,
    #[prop(into)] value: MaybeSignal<String>,
    caption: &'static str,
    icon: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl border border-gray-200 p-4">
            <div class="flex flex-row items-center justify-between pb-2">
                <h3 class="text-sm font-medium">{title}</h3>
                <span class="text-muted-foreground">{icon}</span>
            </div>
            <div class="text-2xl font-bold">{move || value.get()}</div>
            <p class="text-xs text-muted-foreground">{caption}</p>
        </div>
    }
}
