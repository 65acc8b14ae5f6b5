//! Appointments Page
//!
//! Calendar-scoped appointment list with text search. The date filter and
//! the search term compose with AND semantics.

use chrono::NaiveDate;
use leptos::*;
use leptos_router::use_navigate;

use crate::components::Layout;
use crate::filter::{empty_reason, EmptyReason, ListFilter};
use crate::model::{Appointment, AppointmentStatus};
use crate::state::expect_state;

fn search_fields(a: &Appointment) -> Vec<String> {
    vec![a.patient_name.clone(), a.patient_id.to_string(), a.kind.clone()]
}

/// "May 17, 2025" header for an ISO date, falling back to the raw string.
fn long_date(iso: &str) -> String {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

/// Appointments page component
#[component]
pub fn Appointments() -> impl IntoView {
    let state = expect_state();
    let navigate = use_navigate();

    let (search, set_search) = create_signal(String::new());
    // Defaults to today, matching the original flow; None shows every date.
    let (selected_date, set_selected_date) = create_signal(Some(
        chrono::Local::now().date_naive().format("%Y-%m-%d").to_string(),
    ));

    let appointments = state.appointments;
    let filtered = move || {
        let mut filter = ListFilter::new(&search.get());
        if let Some(day) = selected_date.get() {
            filter = filter.and(move |a: &Appointment| a.date == day);
        }
        filter.apply(&appointments.get(), search_fields)
    };

    // Distinct dates carrying at least one appointment, in book order.
    let booked_dates = move || {
        let mut dates: Vec<String> = Vec::new();
        for appointment in appointments.get() {
            if !dates.contains(&appointment.date) {
                dates.push(appointment.date);
            }
        }
        dates
    };

    let nav_new = navigate.clone();

    view! {
        <Layout>
            <div class="space-y-8">
                // Header
                <div class="flex flex-col sm:flex-row justify-between items-start sm:items-center">
                    <div>
                        <h1 class="text-3xl font-bold text-healthcare-dark-gray">"Appointments"</h1>
                        <p class="text-gray-500">"Schedule and manage your appointments"</p>
                    </div>
                    <div class="mt-4 sm:mt-0">
                        <button
                            class="px-4 py-2 bg-healthcare-purple hover:bg-healthcare-dark-purple text-white rounded-lg font-medium transition-colors flex items-center gap-2"
                            on:click=move |_| nav_new("/appointments/new", Default::default())
                        >
                            "+ New Appointment"
                        </button>
                    </div>
                </div>

                <div class="grid md:grid-cols-3 gap-8">
                    // Date picker
                    <div class="md:col-span-1 bg-white rounded-xl border border-gray-200 p-6">
                        <h2 class="text-xl font-semibold">"Calendar"</h2>
                        <p class="text-sm text-muted-foreground mb-4">"Select a date to view appointments"</p>

                        <input
                            type="date"
                            class="w-full border rounded-md px-3 py-2"
                            prop:value=move || selected_date.get().unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                set_selected_date.set(if value.is_empty() { None } else { Some(value) });
                            }
                        />
                        <button
                            class="mt-3 w-full px-3 py-2 border rounded-md text-sm hover:bg-gray-50"
                            on:click=move |_| set_selected_date.set(None)
                        >
                            "Show all dates"
                        </button>

                        <div class="mt-6">
                            <p class="text-sm font-medium text-gray-500 mb-2">"Days with appointments"</p>
                            <div class="flex flex-wrap gap-2">
                                {move || {
                                    booked_dates()
                                        .into_iter()
                                        .map(|date| {
                                            let value = date.clone();
                                            let active = selected_date.get().as_deref() == Some(date.as_str());
                                            let style = if active {
                                                "bg-healthcare-light-blue text-healthcare-blue font-medium"
                                            } else {
                                                "bg-gray-100 text-gray-600 hover:bg-gray-200"
                                            };
                                            view! {
                                                <button
                                                    class=format!("px-2.5 py-1 rounded-full text-xs {}", style)
                                                    on:click=move |_| set_selected_date.set(Some(value.clone()))
                                                >
                                                    {date}
                                                </button>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </div>
                        </div>
                    </div>

                    // Appointment list
                    <div class="md:col-span-2 bg-white rounded-xl border border-gray-200 p-6">
                        <div class="flex flex-row items-center justify-between mb-4">
                            <div>
                                <h2 class="text-xl font-semibold">
                                    {move || {
                                        selected_date
                                            .get()
                                            .map(|d| long_date(&d))
                                            .unwrap_or_else(|| "All Appointments".to_string())
                                    }}
                                </h2>
                                <p class="text-sm text-muted-foreground">
                                    {move || filtered().len()} " appointments found"
                                </p>
                            </div>
                            <input
                                type="search"
                                placeholder="Search appointments..."
                                class="border rounded-md px-3 py-2 w-full md:w-[250px]"
                                prop:value=move || search.get()
                                on:input=move |ev| set_search.set(event_target_value(&ev))
                            />
                        </div>

                        {move || {
                            let rows = filtered();
                            if rows.is_empty() {
                                let reason = empty_reason(
                                    !search.get().is_empty(),
                                    selected_date.get().is_some(),
                                );
                                view! { <EmptyState reason=reason /> }.into_view()
                            } else {
                                view! {
                                    <div class="space-y-4">
                                        {rows
                                            .into_iter()
                                            .map(|appointment| view! { <AppointmentRow appointment=appointment /> })
                                            .collect_view()}
                                    </div>
                                    <Pagination />
                                }.into_view()
                            }
                        }}
                    </div>
                </div>
            </div>
        </Layout>
    }
}

#[component]
fn AppointmentRow(appointment: Appointment) -> impl IntoView {
    let navigate = use_navigate();
    let id = appointment.id;

    let (visit_icon, visit_style) = if appointment.virtual_visit {
        ("🎥", "bg-blue-100 text-blue-700")
    } else {
        ("👤", "bg-green-100 text-green-700")
    };
    let status_style = match appointment.status {
        AppointmentStatus::Confirmed => "bg-green-100 text-green-800",
        AppointmentStatus::Pending => "bg-yellow-100 text-yellow-800",
    };

    view! {
        <div
            class="flex flex-col sm:flex-row sm:items-center justify-between p-4 rounded-lg border hover:bg-gray-50 cursor-pointer"
            on:click=move |_| navigate(&format!("/appointments/{id}"), Default::default())
        >
            <div class="flex items-center space-x-4 mb-2 sm:mb-0">
                <div class=format!("p-2 rounded-full {}", visit_style)>{visit_icon}</div>
                <div>
                    <p class="font-medium">{appointment.patient_name}</p>
                    <p class="text-sm text-muted-foreground">
                        {appointment.patient_id.to_string()} " • " {appointment.kind}
                    </p>
                </div>
            </div>
            <div class="flex flex-wrap gap-4 items-center mt-2 sm:mt-0">
                <span class="text-sm">"📅 " {appointment.date}</span>
                <span class="text-sm">"🕐 " {appointment.time} " (" {appointment.duration} ")"</span>
                <span class=format!(
                    "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium {}",
                    status_style
                )>
                    {appointment.status.label()}
                </span>
            </div>
        </div>
    }
}

/// Empty list message, keyed by whichever filter is responsible.
#[component]
fn EmptyState(reason: EmptyReason) -> impl IntoView {
    let message = match reason {
        EmptyReason::Search => "Try using different search terms.",
        EmptyReason::Date => "There are no appointments scheduled for this date.",
        EmptyReason::NoData => "Start by scheduling your first appointment.",
    };

    view! {
        <div class="text-center py-10">
            <div class="text-5xl">"📅"</div>
            <h3 class="mt-2 text-lg font-medium text-gray-900">"No appointments found"</h3>
            <p class="mt-1 text-sm text-gray-500">{message}</p>
        </div>
    }
}

/// Decorative pager; the list always fits one page in this build.
#[component]
fn Pagination() -> impl IntoView {
    view! {
        <div class="flex items-center justify-between border-t pt-4 mt-4">
            <button class="px-3 py-1.5 border rounded-md text-sm hover:bg-gray-50">"‹ Previous"</button>
            <div class="text-sm text-muted-foreground">"Page 1 of 1"</div>
            <button class="px-3 py-1.5 border rounded-md text-sm hover:bg-gray-50">"Next ›"</button>
        </div>
    }
}
