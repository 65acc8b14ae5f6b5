//! Forgot Password Page
//!
//! Simulated reset request; flips to a confirmation view after the cosmetic
//! latency timer.

use leptos::*;
use leptos_router::*;

use crate::pages::login::{Brand, AUTH_DELAY_MS};
use crate::state::expect_state;

/// Always succeeds in this build; a real reset request plugs in here.
fn request_reset(_email: &str) -> Result<(), String> {
    Ok(())
}

/// Forgot password page component
#[component]
pub fn ForgotPassword() -> impl IntoView {
    let state = expect_state();

    let (email, set_email) = create_signal(String::new());
    let (loading, set_loading) = create_signal(false);
    let (submitted, set_submitted) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        if email.get().is_empty() {
            state.notify_error("Missing information", "Email is required.");
            return;
        }

        set_loading.set(true);

        let state = state.clone();
        gloo_timers::callback::Timeout::new(AUTH_DELAY_MS, move || {
            set_loading.set(false);
            match request_reset(&email.get_untracked()) {
                Ok(()) => {
                    set_submitted.set(true);
                    state.notify_success(
                        "Email sent",
                        "Check your email for password reset instructions.",
                    );
                }
                Err(_) => {
                    state.notify_error("Error", "Failed to send reset email. Please try again.");
                }
            }
        })
        .forget();
    };

    view! {
        <div class="flex h-screen items-center justify-center bg-gray-50 px-4">
            <div class="w-full max-w-md bg-white rounded-xl border border-gray-200 shadow-sm">
                <div class="p-6 space-y-1">
                    <Brand />
                    <h1 class="text-2xl font-bold text-center">"Reset your password"</h1>
                </div>
                <div class="px-6 pb-6">
                    {move || {
                        if submitted.get() {
                            view! {
                                <div class="text-center py-4">
                                    <p class="mb-4">
                                        "Password reset instructions have been sent to "
                                        <strong>{email.get()}</strong>
                                        ". Please check your email and follow the instructions to reset your password."
                                    </p>
                                    <p class="text-sm text-gray-500">
                                        "Didn't receive an email? Check your spam folder or "
                                        <button
                                            class="text-blue-600 hover:text-blue-800 underline"
                                            on:click=move |_| set_submitted.set(false)
                                        >
                                            "try again"
                                        </button>
                                        "."
                                    </p>
                                </div>
                            }.into_view()
                        } else {
                            view! {
                                <form on:submit=on_submit.clone() class="space-y-4">
                                    <div class="space-y-2">
                                        <label class="text-sm font-medium" for="email">"Email"</label>
                                        <input
                                            id="email"
                                            type="email"
                                            placeholder="m.johnson@example.com"
                                            required
                                            class="w-full border rounded-md px-3 py-2"
                                            prop:value=move || email.get()
                                            on:input=move |ev| set_email.set(event_target_value(&ev))
                                        />
                                    </div>
                                    <button
                                        type="submit"
                                        disabled=move || loading.get()
                                        class="w-full px-4 py-2 bg-healthcare-purple hover:bg-healthcare-dark-purple disabled:bg-gray-400 text-white rounded-lg font-medium transition-colors"
                                    >
                                        {move || if loading.get() { "Sending..." } else { "Send reset instructions" }}
                                    </button>
                                </form>
                            }.into_view()
                        }
                    }}
                </div>
                <div class="border-t p-4 w-full text-center">
                    <A href="/login" class="text-blue-600 hover:text-blue-800 text-sm">"Back to sign in"</A>
                </div>
            </div>
        </div>
    }
}
