//! New Appointment Page
//!
//! Patient search-and-select plus scheduling details, with presence checks
//! surfaced as destructive toasts.

use chrono::NaiveDate;
use leptos::*;
use leptos_router::use_navigate;

use crate::components::Layout;
use crate::filter::ListFilter;
use crate::model::DirectoryPatient;
use crate::state::expect_state;

const TIME_SLOTS: [&str; 16] = [
    "08:00 AM", "08:30 AM", "09:00 AM", "09:30 AM", "10:00 AM", "10:30 AM", "11:00 AM",
    "11:30 AM", "01:00 PM", "01:30 PM", "02:00 PM", "02:30 PM", "03:00 PM", "03:30 PM",
    "04:00 PM", "04:30 PM",
];

const VISIT_TYPES: [(&str, &str); 6] = [
    ("check-up", "General Check-up"),
    ("follow-up", "Follow-up Visit"),
    ("consultation", "Consultation"),
    ("new-patient", "New Patient Visit"),
    ("emergency", "Emergency Visit"),
    ("procedure", "Medical Procedure"),
];

const DURATIONS: [(&str, &str); 5] = [
    ("15", "15 minutes"),
    ("30", "30 minutes"),
    ("45", "45 minutes"),
    ("60", "60 minutes"),
    ("90", "90 minutes"),
];

fn directory_fields(p: &DirectoryPatient) -> Vec<String> {
    vec![p.name.clone(), p.id.to_string()]
}

/// New appointment form page
#[component]
pub fn NewAppointment() -> impl IntoView {
    let state = expect_state();
    let navigate = use_navigate();

    let (search, set_search) = create_signal(String::new());
    let (selected, set_selected) = create_signal(None::<DirectoryPatient>);
    let (date, set_date) = create_signal(String::new());
    let (time, set_time) = create_signal(String::new());
    let (kind, set_kind) = create_signal(String::new());
    let (duration, set_duration) = create_signal("30".to_string());
    let (virtual_visit, set_virtual_visit) = create_signal(false);
    let (notes, set_notes) = create_signal(String::new());

    let directory = state.patient_directory;
    let matches = move || ListFilter::new(&search.get()).apply(&directory.get(), directory_fields);

    let today = chrono::Local::now().date_naive();
    let min_date = today.format("%Y-%m-%d").to_string();

    let nav_back = navigate.clone();
    let nav_cancel = navigate.clone();
    let nav_submit = navigate.clone();
    let state_for_submit = state.clone();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let Some(patient) = selected.get() else {
            state_for_submit.notify_error(
                "Patient required",
                "Please select a patient for this appointment.",
            );
            return;
        };
        let day = date.get();
        if day.is_empty() {
            state_for_submit.notify_error(
                "Date required",
                "Please select a date for this appointment.",
            );
            return;
        }
        match NaiveDate::parse_from_str(&day, "%Y-%m-%d") {
            Ok(parsed) if parsed >= today => {}
            _ => {
                state_for_submit.notify_error(
                    "Invalid date",
                    "Appointments cannot be scheduled in the past.",
                );
                return;
            }
        }
        if time.get().is_empty() {
            state_for_submit.notify_error(
                "Time required",
                "Please select a time for this appointment.",
            );
            return;
        }
        if kind.get().is_empty() {
            state_for_submit.notify_error("Type required", "Please select an appointment type.");
            return;
        }

        let pretty = NaiveDate::parse_from_str(&day, "%Y-%m-%d")
            .map(|d| d.format("%B %-d, %Y").to_string())
            .unwrap_or(day);
        state_for_submit.notify_success(
            "Appointment scheduled",
            &format!(
                "Appointment for {} on {} at {} has been scheduled.",
                patient.name,
                pretty,
                time.get()
            ),
        );
        nav_submit("/appointments", Default::default());
    };

    view! {
        <Layout>
            <div class="max-w-4xl mx-auto space-y-8">
                <div class="flex items-center gap-4">
                    <button class="text-xl" on:click=move |_| nav_back("/appointments", Default::default())>
                        "←"
                    </button>
                    <div>
                        <h1 class="text-3xl font-bold text-healthcare-dark-gray">"New Appointment"</h1>
                        <p class="text-gray-500">"Schedule a new appointment"</p>
                    </div>
                </div>

                <form on:submit=on_submit>
                    <div class="grid gap-8 md:grid-cols-2">
                        // Patient selection
                        <div class="bg-white rounded-xl border border-gray-200 p-6">
                            <h2 class="text-xl font-semibold">"Patient Information"</h2>
                            <p class="text-sm text-muted-foreground mb-4">"Select a patient for this appointment"</p>

                            {move || {
                                if let Some(patient) = selected.get() {
                                    view! {
                                        <SelectedPatient
                                            patient=patient
                                            on_change=move || set_selected.set(None)
                                        />
                                    }.into_view()
                                } else {
                                    view! {
                                        <PatientSearch
                                            search=search
                                            set_search=set_search
                                            matches=Signal::derive(matches)
                                            on_select=move |patient| {
                                                set_selected.set(Some(patient));
                                                set_search.set(String::new());
                                            }
                                        />
                                    }.into_view()
                                }
                            }}
                        </div>

                        // Appointment details
                        <div class="bg-white rounded-xl border border-gray-200 p-6 space-y-4">
                            <div>
                                <h2 class="text-xl font-semibold">"Appointment Details"</h2>
                                <p class="text-sm text-muted-foreground">"Select date, time and type"</p>
                            </div>

                            <div>
                                <label class="block text-sm text-gray-500 mb-2" for="date">"Date"</label>
                                <input
                                    id="date"
                                    type="date"
                                    min=min_date
                                    class="w-full border rounded-md px-3 py-2"
                                    prop:value=move || date.get()
                                    on:input=move |ev| set_date.set(event_target_value(&ev))
                                />
                            </div>

                            <div>
                                <label class="block text-sm text-gray-500 mb-2" for="time">"Time"</label>
                                <select
                                    id="time"
                                    class="w-full border rounded-md px-3 py-2"
                                    prop:value=move || time.get()
                                    on:change=move |ev| set_time.set(event_target_value(&ev))
                                >
                                    <option value="">"Select a time"</option>
                                    {TIME_SLOTS
                                        .into_iter()
                                        .map(|slot| view! { <option value=slot>{slot}</option> })
                                        .collect_view()}
                                </select>
                            </div>

                            <div>
                                <label class="block text-sm text-gray-500 mb-2" for="type">"Appointment Type"</label>
                                <select
                                    id="type"
                                    class="w-full border rounded-md px-3 py-2"
                                    prop:value=move || kind.get()
                                    on:change=move |ev| set_kind.set(event_target_value(&ev))
                                >
                                    <option value="">"Select a type"</option>
                                    {VISIT_TYPES
                                        .into_iter()
                                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                                        .collect_view()}
                                </select>
                            </div>

                            <div>
                                <label class="block text-sm text-gray-500 mb-2" for="duration">"Duration"</label>
                                <select
                                    id="duration"
                                    class="w-full border rounded-md px-3 py-2"
                                    prop:value=move || duration.get()
                                    on:change=move |ev| set_duration.set(event_target_value(&ev))
                                >
                                    {DURATIONS
                                        .into_iter()
                                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                                        .collect_view()}
                                </select>
                            </div>

                            <div class="flex items-center justify-between pt-2">
                                <div>
                                    <label for="virtual" class="font-medium">"Virtual Appointment"</label>
                                    <p class="text-sm text-muted-foreground">"Enable for telemedicine consultations"</p>
                                </div>
                                <input
                                    id="virtual"
                                    type="checkbox"
                                    class="h-5 w-10"
                                    prop:checked=move || virtual_visit.get()
                                    on:change=move |ev| set_virtual_visit.set(event_target_checked(&ev))
                                />
                            </div>

                            {move || {
                                if virtual_visit.get() {
                                    view! {
                                        <div class="rounded-md bg-blue-50 p-3 flex gap-3">
                                            <div class="p-2 rounded-full bg-blue-100 text-blue-700">"🎥"</div>
                                            <div>
                                                <p class="font-medium text-blue-700">"Virtual appointment enabled"</p>
                                                <p class="text-sm text-blue-600">
                                                    "Patient will receive a secure video link 15 minutes before the appointment."
                                                </p>
                                            </div>
                                        </div>
                                    }.into_view()
                                } else {
                                    view! {}.into_view()
                                }
                            }}
                        </div>

                        // Notes and actions
                        <div class="md:col-span-2 bg-white rounded-xl border border-gray-200 p-6">
                            <h2 class="text-xl font-semibold">"Additional Information"</h2>
                            <p class="text-sm text-muted-foreground mb-4">"Add notes or special instructions"</p>
                            <textarea
                                class="w-full min-h-32 border rounded-md px-3 py-2"
                                placeholder="Add any notes or special instructions for this appointment"
                                prop:value=move || notes.get()
                                on:input=move |ev| set_notes.set(event_target_value(&ev))
                            />
                            <div class="flex justify-between mt-4">
                                <button
                                    type="button"
                                    class="px-4 py-2 border rounded-md hover:bg-gray-50"
                                    on:click=move |_| nav_cancel("/appointments", Default::default())
                                >
                                    "Cancel"
                                </button>
                                <button
                                    type="submit"
                                    class="px-4 py-2 bg-healthcare-purple hover:bg-healthcare-dark-purple text-white rounded-lg font-medium transition-colors"
                                >
                                    "Schedule Appointment"
                                </button>
                            </div>
                        </div>
                    </div>
                </form>
            </div>
        </Layout>
    }
}

/// Card showing the chosen patient, with a control to reselect.
#[component]
fn SelectedPatient(patient: DirectoryPatient, on_change: impl Fn() + 'static) -> impl IntoView {
    view! {
        <div class="border rounded-md p-4">
            <div class="flex justify-between items-start">
                <div>
                    <p class="font-medium text-lg">{patient.name.clone()}</p>
                    <p class="text-sm text-muted-foreground">{patient.id.to_string()}</p>
                </div>
                <button
                    type="button"
                    class="text-sm px-2 py-1 hover:bg-gray-100 rounded-md"
                    on:click=move |_| on_change()
                >
                    "Change"
                </button>
            </div>
            <div class="mt-4 grid grid-cols-2 gap-2 text-sm">
                <div>
                    <p class="text-muted-foreground">"Age"</p>
                    <p>{patient.age} " years"</p>
                </div>
                <div>
                    <p class="text-muted-foreground">"Gender"</p>
                    <p>{patient.gender.clone()}</p>
                </div>
                <div class="col-span-2">
                    <p class="text-muted-foreground">"Last Visit"</p>
                    <p>{patient.last_visit.clone().unwrap_or_else(|| "New Patient".to_string())}</p>
                </div>
            </div>
        </div>
    }
}

/// Directory search box with a result list shown once a term is typed.
#[component]
fn PatientSearch(
    search: ReadSignal<String>,
    set_search: WriteSignal<String>,
    #[prop(into)] matches: Signal<Vec<DirectoryPatient>>,
    on_select: impl Fn(DirectoryPatient) + Clone + 'static,
) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div>
            <input
                type="search"
                placeholder="Search for a patient..."
                class="w-full border rounded-md px-3 py-2 mb-4"
                prop:value=move || search.get()
                on:input=move |ev| set_search.set(event_target_value(&ev))
            />

            <div class="border rounded-md">
                {move || {
                    if search.get().is_empty() {
                        let navigate = navigate.clone();
                        view! {
                            <div class="p-4 text-center">
                                <p class="text-muted-foreground">"Search for a patient to continue"</p>
                                <button
                                    type="button"
                                    class="mt-2 text-healthcare-purple hover:text-healthcare-dark-purple underline"
                                    on:click=move |_| navigate("/patients/new", Default::default())
                                >
                                    "Add a new patient"
                                </button>
                            </div>
                        }.into_view()
                    } else {
                        let rows = matches.get();
                        if rows.is_empty() {
                            view! {
                                <div class="p-4 text-center">
                                    <p class="text-muted-foreground">"No patients found"</p>
                                </div>
                            }.into_view()
                        } else {
                            let on_select = on_select.clone();
                            view! {
                                <div class="max-h-52 overflow-y-auto">
                                    {rows
                                        .into_iter()
                                        .map(|patient| {
                                            let on_select = on_select.clone();
                                            let choice = patient.clone();
                                            view! {
                                                <div
                                                    class="flex justify-between items-center p-3 border-b last:border-0 cursor-pointer hover:bg-gray-50"
                                                    on:click=move |_| on_select(choice.clone())
                                                >
                                                    <div>
                                                        <p class="font-medium">{patient.name.clone()}</p>
                                                        <p class="text-sm text-muted-foreground">
                                                            {patient.id.to_string()} " • " {patient.age} " yrs • " {patient.gender.clone()}
                                                        </p>
                                                    </div>
                                                    <span class="text-sm text-healthcare-purple">"Select"</span>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }.into_view()
                        }
                    }
                }}
            </div>
        </div>
    }
}
