//! Register Page
//!
//! Simulated account creation, matching the login flow's cosmetic latency.

use leptos::*;
use leptos_router::*;

use crate::pages::login::{Brand, AUTH_DELAY_MS};
use crate::state::expect_state;

/// Registration page component
#[component]
pub fn Register() -> impl IntoView {
    let state = expect_state();
    let navigate = use_navigate();

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());
    let (loading, set_loading) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        if name.get().is_empty() || email.get().is_empty() || password.get().is_empty() {
            state.notify_error("Missing information", "All fields are required.");
            return;
        }
        if password.get() != confirm.get() {
            state.notify_error("Passwords do not match", "Please re-enter your password.");
            return;
        }

        set_loading.set(true);

        let state = state.clone();
        let navigate = navigate.clone();
        gloo_timers::callback::Timeout::new(AUTH_DELAY_MS, move || {
            set_loading.set(false);
            state.notify_success("Account created", "You can now sign in with your credentials.");
            navigate("/login", Default::default());
        })
        .forget();
    };

    let field = move |id: &'static str,
                      label: &'static str,
                      kind: &'static str,
                      value: ReadSignal<String>,
                      setter: WriteSignal<String>| {
        view! {
            <div class="space-y-2">
                <label class="text-sm font-medium" for=id>{label}</label>
                <input
                    id=id
                    type=kind
                    required
                    class="w-full border rounded-md px-3 py-2"
                    prop:value=move || value.get()
                    on:input=move |ev| setter.set(event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <div class="flex h-screen items-center justify-center bg-gray-50 px-4">
            <div class="w-full max-w-md bg-white rounded-xl border border-gray-200 shadow-sm">
                <div class="p-6 space-y-1">
                    <Brand />
                    <h1 class="text-2xl font-bold text-center">"Create your account"</h1>
                </div>
                <div class="px-6 pb-6">
                    <form on:submit=on_submit class="space-y-4">
                        {field("name", "Full name", "text", name, set_name)}
                        {field("email", "Email", "email", email, set_email)}
                        {field("password", "Password", "password", password, set_password)}
                        {field("confirm", "Confirm password", "password", confirm, set_confirm)}
                        <button
                            type="submit"
                            disabled=move || loading.get()
                            class="w-full px-4 py-2 bg-healthcare-purple hover:bg-healthcare-dark-purple disabled:bg-gray-400 text-white rounded-lg font-medium transition-colors"
                        >
                            {move || if loading.get() { "Creating account..." } else { "Sign up" }}
                        </button>
                    </form>
                </div>
                <div class="border-t p-4 text-center text-sm">
                    "Already have an account? "
                    <A href="/login" class="text-blue-600 hover:text-blue-800">"Sign in"</A>
                </div>
            </div>
        </div>
    }
}
