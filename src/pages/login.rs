//! Login Page
//!
//! Simulated sign-in: credentials are presence-checked, a short timer
//! stands in for the auth round-trip, and the session always succeeds.

use leptos::*;
use leptos_router::*;

use crate::state::expect_state;

/// Cosmetic auth latency, milliseconds.
pub const AUTH_DELAY_MS: u32 = 1_500;

/// Always succeeds in this build; a real credential check plugs in here.
fn authenticate(_email: &str, _password: &str) -> Result<(), String> {
    Ok(())
}

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = expect_state();
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (loading, set_loading) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        if email.get().is_empty() || password.get().is_empty() {
            state.notify_error("Missing information", "Email and password are required.");
            return;
        }

        set_loading.set(true);

        let state = state.clone();
        let navigate = navigate.clone();
        gloo_timers::callback::Timeout::new(AUTH_DELAY_MS, move || {
            set_loading.set(false);
            match authenticate(&email.get_untracked(), &password.get_untracked()) {
                Ok(()) => {
                    state.notify_success("Success!", "You have successfully logged in.");
                    navigate("/", Default::default());
                }
                Err(_) => {
                    state.notify_error("Error", "Failed to log in. Please check your credentials.");
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
                    <h1 class="text-2xl font-bold text-center">"Sign in to your account"</h1>
                </div>
                <div class="px-6 pb-6">
                    <form on:submit=on_submit class="space-y-4">
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
                        <div class="space-y-2">
                            <div class="flex items-center justify-between">
                                <label class="text-sm font-medium" for="password">"Password"</label>
                                <A href="/forgot-password" class="text-sm text-blue-600 hover:text-blue-800">
                                    "Forgot password?"
                                </A>
                            </div>
                            <input
                                id="password"
                                type="password"
                                required
                                class="w-full border rounded-md px-3 py-2"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </div>
                        <button
                            type="submit"
                            disabled=move || loading.get()
                            class="w-full px-4 py-2 bg-healthcare-purple hover:bg-healthcare-dark-purple disabled:bg-gray-400 text-white rounded-lg font-medium transition-colors"
                        >
                            {move || if loading.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                    </form>
                </div>
                <div class="flex flex-col space-y-4 border-t p-4">
                    <div class="text-center text-sm">
                        "Don't have an account? "
                        <A href="/register" class="text-blue-600 hover:text-blue-800">"Sign up"</A>
                    </div>
                    <div class="text-xs text-center text-gray-500">
                        "By signing in, you agree to our Terms of Service and Privacy Policy."
                        <br />
                        "HIPAA Compliant"
                    </div>
                </div>
            </div>
        </div>
    }
}

/// MedConnect wordmark used on the auth screens.
#[component]
pub fn Brand() -> impl IntoView {
    view! {
        <div class="flex justify-center mb-4">
            <div class="flex items-center gap-1">
                <span class="text-healthcare-purple font-bold text-3xl">"Med"</span>
                <span class="text-healthcare-blue font-bold text-3xl">"Connect"</span>
            </div>
        </div>
    }
}
