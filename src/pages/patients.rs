//! Patients Page
//!
//! Registry table with name search and summary cards.

use leptos::*;
use leptos_router::*;

use crate::components::{Layout, StatCard};
use crate::filter::{empty_reason, EmptyReason, ListFilter};
use crate::model::Patient;
use crate::state::expect_state;

fn search_fields(p: &Patient) -> Vec<String> {
    vec![p.name.clone()]
}

/// Patients page component
#[component]
pub fn Patients() -> impl IntoView {
    let state = expect_state();

    let (search, set_search) = create_signal(String::new());

    let patients = state.patients;
    let filtered = move || ListFilter::new(&search.get()).apply(&patients.get(), search_fields);

    view! {
        <Layout>
            <div class="flex flex-col gap-6">
                // Header
                <div class="flex flex-col md:flex-row justify-between items-start md:items-center gap-4">
                    <h1 class="text-3xl font-bold tracking-tight">"Patients"</h1>
                    <div class="flex gap-2">
                        <input
                            type="search"
                            placeholder="Search patients..."
                            class="border rounded-md px-3 py-2 w-[200px] md:w-[300px]"
                            prop:value=move || search.get()
                            on:input=move |ev| set_search.set(event_target_value(&ev))
                        />
                        <button class="px-4 py-2 bg-healthcare-purple hover:bg-healthcare-dark-purple text-white rounded-lg font-medium transition-colors">
                            "+ New Patient"
                        </button>
                    </div>
                </div>

                // Stats
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <StatCard
                        title="Total Patients"
                        value=Signal::derive(move || patients.get().len().to_string())
                        caption="+2 new this month"
                        icon="👥"
                    />
                    <StatCard title="Appointments Today" value="8".to_string() caption="2 remaining" icon="📅" />
                    <StatCard title="New Messages" value="5".to_string() caption="3 unread" icon="💬" />
                </div>

                // Table
                <div class="bg-white rounded-xl border border-gray-200 p-6">
                    <h2 class="text-xl font-semibold mb-4">"Patient List"</h2>

                    {move || {
                        let rows = filtered();
                        if rows.is_empty() {
                            let reason = empty_reason(!search.get().is_empty(), false);
                            view! { <EmptyState reason=reason /> }.into_view()
                        } else {
                            view! {
                                <table class="w-full text-sm">
                                    <thead>
                                        <tr class="border-b text-left text-muted-foreground">
                                            <th class="py-2 pr-4 font-medium">"Name"</th>
                                            <th class="py-2 pr-4 font-medium">"Date of Birth"</th>
                                            <th class="py-2 pr-4 font-medium">"Contact Number"</th>
                                            <th class="py-2 pr-4 font-medium">"Last Visit"</th>
                                            <th class="py-2 pr-4 font-medium">"Next Appointment"</th>
                                            <th class="py-2 font-medium">"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {rows
                                            .into_iter()
                                            .map(|patient| view! { <PatientRow patient=patient /> })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            }.into_view()
                        }
                    }}
                </div>
            </div>
        </Layout>
    }
}

#[component]
fn PatientRow(patient: Patient) -> impl IntoView {
    let id = patient.id.clone();

    view! {
        <tr class="border-b last:border-0">
            <td class="py-3 pr-4 font-medium">{patient.name}</td>
            <td class="py-3 pr-4">{patient.dob}</td>
            <td class="py-3 pr-4">{patient.contact_number}</td>
            <td class="py-3 pr-4">{patient.last_visit}</td>
            <td class="py-3 pr-4">{patient.next_appointment}</td>
            <td class="py-3">
                <div class="flex gap-2">
                    <A href=format!("/patients/{id}") class="px-2 py-1 border rounded-md hover:bg-gray-50">
                        "📄" <span class="sr-only">"View Details"</span>
                    </A>
                    <A href=format!("/appointments/new?patient={id}") class="px-2 py-1 border rounded-md hover:bg-gray-50">
                        "📅" <span class="sr-only">"Schedule Appointment"</span>
                    </A>
                    <A href=format!("/messages?patient={id}") class="px-2 py-1 border rounded-md hover:bg-gray-50">
                        "💬" <span class="sr-only">"Send Message"</span>
                    </A>
                </div>
            </td>
        </tr>
    }
}

#[component]
fn EmptyState(reason: EmptyReason) -> impl IntoView {
    let message = match reason {
        EmptyReason::Search => "No patients match this search. Try different search terms.",
        // No date filter on this page.
        EmptyReason::Date | EmptyReason::NoData => "No patients registered yet.",
    };

    view! {
        <div class="text-center py-10">
            <div class="text-5xl">"👥"</div>
            <h3 class="mt-2 text-lg font-medium text-gray-900">"No patients found"</h3>
            <p class="mt-1 text-sm text-gray-500">{message}</p>
        </div>
    }
}
