//! Dashboard Page
//!
//! Landing view: practice stats, upcoming appointments, recent messages,
//! and quick-access tiles.

use leptos::*;
use leptos_router::use_navigate;

use crate::components::{Layout, StatCard};
use crate::model::{Appointment, AppointmentStatus, RecentMessage};
use crate::state::expect_state;

/// How many appointments the dashboard previews.
const UPCOMING_LIMIT: usize = 3;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = expect_state();
    let navigate = use_navigate();

    let appointments = state.appointments;
    let upcoming = move || {
        appointments
            .get()
            .into_iter()
            .take(UPCOMING_LIMIT)
            .collect::<Vec<_>>()
    };

    let nav_new_appointment = navigate.clone();
    let nav_all_appointments = navigate.clone();

    view! {
        <Layout>
            <div class="space-y-8">
                // Header
                <div class="flex flex-col sm:flex-row justify-between items-start sm:items-center">
                    <div>
                        <h1 class="text-3xl font-bold text-healthcare-dark-gray">"Welcome, Dr. Smith"</h1>
                        <p class="text-gray-500">"Here's what's happening today"</p>
                    </div>
                    <div class="mt-4 sm:mt-0 flex gap-3">
                        <button
                            class="px-4 py-2 bg-healthcare-purple hover:bg-healthcare-dark-purple text-white rounded-lg font-medium transition-colors"
                            on:click=move |_| nav_new_appointment("/appointments/new", Default::default())
                        >
                            "New Appointment"
                        </button>
                    </div>
                </div>

                // Stats
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-4">
                    <StatCard title="Total Patients" value="127".to_string() caption="+5 this month" icon="👤" />
                    <StatCard title="Today's Appointments" value="8".to_string() caption="2 pending confirmation" icon="📅" />
                    <StatCard
                        title="Unread Messages"
                        value=Signal::derive({
                            let state = state.clone();
                            move || state.unread_conversations().to_string()
                        })
                        caption="3 require urgent attention"
                        icon="💬"
                    />
                    <StatCard title="Average Wait Time" value="12m".to_string() caption="-2m from last week" icon="⏱" />
                </div>

                // Upcoming appointments
                <section class="bg-white rounded-xl border border-gray-200 p-6">
                    <div class="flex flex-row items-center justify-between mb-4">
                        <div>
                            <h2 class="text-xl font-semibold">"Upcoming Appointments"</h2>
                            <p class="text-sm text-muted-foreground">
                                "You have " {move || upcoming().len()} " appointments scheduled"
                            </p>
                        </div>
                        <button
                            class="px-3 py-1.5 border rounded-md text-sm hover:bg-gray-50"
                            on:click=move |_| nav_all_appointments("/appointments", Default::default())
                        >
                            "View all"
                        </button>
                    </div>
                    <div class="space-y-4">
                        {move || {
                            upcoming()
                                .into_iter()
                                .map(|appointment| view! { <UpcomingRow appointment=appointment /> })
                                .collect_view()
                        }}
                    </div>
                </section>

                // Recent messages and quick access
                <div class="grid gap-6 md:grid-cols-2">
                    <RecentMessages />
                    <QuickAccess />
                </div>
            </div>
        </Layout>
    }
}

#[component]
fn UpcomingRow(appointment: Appointment) -> impl IntoView {
    let badge = match appointment.status {
        AppointmentStatus::Confirmed => "bg-green-100 text-green-800",
        AppointmentStatus::Pending => "bg-yellow-100 text-yellow-800",
    };

    view! {
        <div class="flex items-center justify-between border-b pb-4 last:border-0 last:pb-0">
            <div class="flex items-center space-x-4">
                <div class="bg-healthcare-light-blue rounded-full p-2">"👤"</div>
                <div>
                    <p class="font-medium">{appointment.patient_name}</p>
                    <p class="text-sm text-muted-foreground">
                        {appointment.kind} " · " {appointment.date} " · " {appointment.time}
                    </p>
                </div>
            </div>
            <span class=format!(
                "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium {}",
                badge
            )>
                {appointment.status.label()}
            </span>
        </div>
    }
}

/// Recent message previews with an unread summary
#[component]
fn RecentMessages() -> impl IntoView {
    let state = expect_state();
    let navigate = use_navigate();
    let recent = state.recent_messages;

    let nav_view_all = navigate.clone();

    view! {
        <section class="bg-white rounded-xl border border-gray-200 p-6">
            <div class="flex flex-row items-center justify-between mb-4">
                <div>
                    <h2 class="text-xl font-semibold">"Recent Messages"</h2>
                    <p class="text-sm text-muted-foreground">
                        "You have "
                        {
                            let state = state.clone();
                            move || state.unread_recent_messages()
                        }
                        " unread messages"
                    </p>
                </div>
                <button
                    class="px-3 py-1.5 border rounded-md text-sm hover:bg-gray-50"
                    on:click=move |_| nav_view_all("/messages", Default::default())
                >
                    "View all"
                </button>
            </div>
            <div class="space-y-4">
                {move || {
                    recent
                        .get()
                        .into_iter()
                        .map(|message| view! { <MessagePreview message=message /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[component]
fn MessagePreview(message: RecentMessage) -> impl IntoView {
    let navigate = use_navigate();
    let id = message.id;
    let background = if message.read { "bg-white" } else { "bg-healthcare-light-blue" };

    view! {
        <div
            class=format!("cursor-pointer p-3 rounded-md {}", background)
            on:click=move |_| navigate(&format!("/messages/{id}"), Default::default())
        >
            <div class="flex justify-between items-start">
                <p class="font-medium">{message.sender}</p>
                <span class="text-xs text-muted-foreground">{message.time}</span>
            </div>
            <p class="text-sm text-muted-foreground truncate">{message.message}</p>
        </div>
    }
}

/// Quick-access tiles for frequent actions
#[component]
fn QuickAccess() -> impl IntoView {
    let navigate = use_navigate();

    let tile = move |label: &'static str, icon: &'static str, path: &'static str| {
        let navigate = navigate.clone();
        view! {
            <button
                class="flex flex-col h-24 items-center justify-center gap-1 border-2 rounded-md hover:bg-gray-50"
                on:click=move |_| navigate(path, Default::default())
            >
                <span class="text-2xl">{icon}</span>
                <span>{label}</span>
            </button>
        }
    };

    view! {
        <section class="bg-white rounded-xl border border-gray-200 p-6">
            <h2 class="text-xl font-semibold">"Quick Access"</h2>
            <p class="text-sm text-muted-foreground mb-4">"Frequently used functions"</p>
            <div class="grid gap-4 grid-cols-2">
                {tile("Business Card", "👤", "/business-card")}
                {tile("New Patient", "🧑‍⚕️", "/patients/new")}
                {tile("Write Prescription", "📝", "/prescriptions/new")}
                {tile("New Message", "💬", "/messages/new")}
            </div>
        </section>
    }
}
