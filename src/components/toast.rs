//! Toast Notification Component
//!
//! Renders the FIFO toast queue from global state. Items auto-dismiss on a
//! timer owned by [`GlobalState::notify`](crate::state::GlobalState::notify).

use leptos::*;

use crate::state::{expect_state, ToastItem, ToastKind};

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = expect_state();

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2">
            {move || {
                state
                    .toasts
                    .get()
                    .into_iter()
                    .map(|item| view! { <ToastMessage item=item /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn ToastMessage(item: ToastItem) -> impl IntoView {
    let (icon, style) = match item.kind {
        ToastKind::Success => ("✓", "bg-white border-gray-200 text-gray-900"),
        ToastKind::Error => ("✕", "bg-red-600 border-red-700 text-white"),
    };

    view! {
        <div class=format!(
            "w-80 flex items-start space-x-3 {} border px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out animate-slide-in",
            style
        )>
            <span class="text-lg">{icon}</span>
            <div class="flex-1 min-w-0">
                <p class="text-sm font-semibold">{item.title}</p>
                <p class="text-sm opacity-90">{item.body}</p>
            </div>
        </div>
    }
}
