//! Page Shell
//!
//! Shared chrome wrapping every main page: nav bar, content area, footer.
//! Auth screens render outside this shell.

use leptos::*;

use crate::components::NavBar;

/// Shell layout wrapping page content
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col bg-gray-50">
            <NavBar />

            <main class="flex-1 container mx-auto px-4 py-8 md:px-6">
                {children()}
            </main>

            <Footer />
        </div>
    }
}

/// Footer with branding and compliance note
#[component]
fn Footer() -> impl IntoView {
    let year = chrono::Local::now().format("%Y").to_string();

    view! {
        <footer class="border-t border-gray-200 bg-white py-6">
            <div class="container mx-auto px-4 md:px-6">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <div class="flex items-center gap-1 mb-4 md:mb-0">
                        <span class="text-healthcare-purple font-bold text-xl">"Med"</span>
                        <span class="text-healthcare-blue font-bold text-xl">"Connect"</span>
                    </div>
                    <p class="text-sm text-gray-500">
                        "© " {year} " MedConnect. All rights reserved. HIPAA Compliant."
                    </p>
                </div>
            </div>
        </footer>
    }
}
