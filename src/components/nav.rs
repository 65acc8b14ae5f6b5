//! Navigation Component
//!
//! Sticky header with brand, page links, notification buttons, and the
//! account menu.

use leptos::*;
use leptos_router::*;

const NAV_LINKS: [(&str, &str); 5] = [
    ("Dashboard", "/"),
    ("Appointments", "/appointments"),
    ("Patients", "/patients"),
    ("Messages", "/messages"),
    ("Prescriptions", "/prescriptions"),
];

/// Navigation header component
#[component]
pub fn NavBar() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let (account_open, set_account_open) = create_signal(false);

    view! {
        <header class="sticky top-0 z-30 w-full bg-white border-b border-gray-200">
            <div class="container flex h-16 items-center px-4 md:px-6">
                <div class="flex items-center gap-2 md:gap-4 mr-4">
                    <A href="/" class="flex items-center gap-1">
                        <span class="text-healthcare-purple font-bold text-xl">"Med"</span>
                        <span class="text-healthcare-blue font-bold text-xl">"Connect"</span>
                    </A>
                    <button
                        class="md:hidden px-2 py-1 border rounded-md text-gray-600"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        "☰"
                    </button>
                </div>

                <nav class="hidden md:flex gap-6 flex-1">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(name, path)| view! { <NavLink label=name href=path /> })
                        .collect_view()}
                </nav>

                <div class="ml-auto flex items-center gap-2">
                    <IconButton label="Notifications" icon="🔔" />
                    <IconButton label="Messages" icon="💬" />

                    // Account menu
                    <div class="relative">
                        <button
                            class="h-9 w-9 rounded-full hover:bg-gray-100 flex items-center justify-center"
                            aria-label="User menu"
                            on:click=move |_| set_account_open.update(|open| *open = !*open)
                        >
                            "👤"
                        </button>
                        {move || {
                            if account_open.get() {
                                view! {
                                    <div class="absolute right-0 mt-2 w-56 bg-white border border-gray-200 rounded-md shadow-lg py-1 text-sm">
                                        <p class="px-3 py-2 font-semibold">"My Account"</p>
                                        <hr class="border-gray-100" />
                                        // Plain anchors so the close handler can ride along;
                                        // the router intercepts them for client-side navigation.
                                        <a href="/business-card" class="block px-3 py-2 hover:bg-gray-50"
                                            on:click=move |_| set_account_open.set(false)
                                        >
                                            "Business Card"
                                        </a>
                                        <a href="/login" class="block px-3 py-2 hover:bg-gray-50"
                                            on:click=move |_| set_account_open.set(false)
                                        >
                                            "Log out"
                                        </a>
                                    </div>
                                }.into_view()
                            } else {
                                view! {}.into_view()
                            }
                        }}
                    </div>
                </div>
            </div>

            // Mobile menu
            {move || {
                if menu_open.get() {
                    view! {
                        <div class="md:hidden border-t border-gray-200">
                            <nav class="flex flex-col p-4 space-y-4">
                                {NAV_LINKS
                                    .into_iter()
                                    .map(|(name, path)| view! {
                                        <a
                                            href=path
                                            class="text-sm font-medium text-muted-foreground hover:text-healthcare-purple"
                                            on:click=move |_| set_menu_open.set(false)
                                        >
                                            {name}
                                        </a>
                                    })
                                    .collect_view()}
                            </nav>
                        </div>
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </header>
    }
}

/// Individual navigation link
#[component]
fn NavLink(label: &'static str, href: &'static str) -> impl IntoView {
    view! {
        <A
            href=href
            class="text-sm font-medium text-muted-foreground transition-colors hover:text-healthcare-purple"
            active_class="text-healthcare-purple border-b-2 border-healthcare-purple"
            exact=true
        >
            {label}
        </A>
    }
}

/// Icon button with an unread indicator dot
#[component]
fn IconButton(label: &'static str, icon: &'static str) -> impl IntoView {
    view! {
        <button
            class="relative h-9 w-9 rounded-md hover:bg-gray-100 flex items-center justify-center"
            aria-label=label
        >
            {icon}
            <span class="absolute top-0 right-0 h-2 w-2 rounded-full bg-red-500" />
        </button>
    }
}
