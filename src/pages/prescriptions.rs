//! Prescriptions Page
//!
//! Ledger table with patient/medication search, summary cards, and a detail
//! dialog. Print and download are stubs that toast.

use std::collections::HashSet;

use leptos::*;

use crate::components::{Layout, StatCard};
use crate::filter::{empty_reason, EmptyReason, ListFilter};
use crate::model::{Prescription, PrescriptionStatus};
use crate::state::expect_state;

fn search_fields(p: &Prescription) -> Vec<String> {
    vec![p.patient.clone(), p.medication.clone()]
}

fn status_style(status: PrescriptionStatus) -> &'static str {
    match status {
        PrescriptionStatus::Active => "bg-green-100 text-green-800",
        PrescriptionStatus::Expired => "bg-red-100 text-red-800",
    }
}

/// Prescriptions page component
#[component]
pub fn Prescriptions() -> impl IntoView {
    let state = expect_state();

    let (search, set_search) = create_signal(String::new());
    let (selected, set_selected) = create_signal(None::<Prescription>);

    let prescriptions = state.prescriptions;
    let filtered =
        move || ListFilter::new(&search.get()).apply(&prescriptions.get(), search_fields);

    let active_count = move || {
        prescriptions
            .get()
            .iter()
            .filter(|p| p.status == PrescriptionStatus::Active)
            .count()
    };
    let distinct_patients = move || {
        prescriptions
            .get()
            .iter()
            .map(|p| p.patient.clone())
            .collect::<HashSet<_>>()
            .len()
    };

    let state_for_print = state.clone();
    let print = move || {
        state_for_print.notify_success(
            "Printing Prescription",
            "The prescription has been sent to the printer.",
        );
    };
    let state_for_download = state.clone();
    let download = move || {
        state_for_download.notify_success(
            "Prescription Downloaded",
            "The prescription PDF has been downloaded.",
        );
    };

    let print_for_rows = print.clone();
    let download_for_rows = download.clone();

    view! {
        <Layout>
            <div class="flex flex-col gap-6">
                // Header
                <div class="flex flex-col md:flex-row justify-between items-start md:items-center gap-4">
                    <h1 class="text-3xl font-bold tracking-tight">"Prescriptions"</h1>
                    <div class="flex gap-2">
                        <input
                            type="search"
                            placeholder="Search prescriptions..."
                            class="border rounded-md px-3 py-2 w-[200px] md:w-[300px]"
                            prop:value=move || search.get()
                            on:input=move |ev| set_search.set(event_target_value(&ev))
                        />
                        <button class="px-4 py-2 bg-healthcare-purple hover:bg-healthcare-dark-purple text-white rounded-lg font-medium transition-colors">
                            "+ New Prescription"
                        </button>
                    </div>
                </div>

                // Stats
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <StatCard
                        title="Total Prescriptions"
                        value=Signal::derive(move || prescriptions.get().len().to_string())
                        caption="3 new this week"
                        icon="📄"
                    />
                    <StatCard
                        title="Active Prescriptions"
                        value=Signal::derive(move || active_count().to_string())
                        caption="Updated today"
                        icon="✅"
                    />
                    <StatCard
                        title="Patients with Prescriptions"
                        value=Signal::derive(move || distinct_patients().to_string())
                        caption="From total patient base"
                        icon="👥"
                    />
                </div>

                // Table
                <div class="bg-white rounded-xl border border-gray-200 p-6">
                    <h2 class="text-xl font-semibold mb-4">"Prescription List"</h2>

                    {move || {
                        let rows = filtered();
                        if rows.is_empty() {
                            let reason = empty_reason(!search.get().is_empty(), false);
                            view! { <EmptyState reason=reason /> }.into_view()
                        } else {
                            let print = print_for_rows.clone();
                            let download = download_for_rows.clone();
                            view! {
                                <table class="w-full text-sm">
                                    <thead>
                                        <tr class="border-b text-left text-muted-foreground">
                                            <th class="py-2 pr-4 font-medium">"Patient"</th>
                                            <th class="py-2 pr-4 font-medium">"Medication"</th>
                                            <th class="py-2 pr-4 font-medium">"Dosage"</th>
                                            <th class="py-2 pr-4 font-medium">"Issue Date"</th>
                                            <th class="py-2 pr-4 font-medium">"Expiry Date"</th>
                                            <th class="py-2 pr-4 font-medium">"Status"</th>
                                            <th class="py-2 font-medium">"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {rows
                                            .into_iter()
                                            .map(|prescription| {
                                                let print = print.clone();
                                                let download = download.clone();
                                                view! {
                                                    <PrescriptionRow
                                                        prescription=prescription
                                                        set_selected=set_selected
                                                        on_print=print
                                                        on_download=download
                                                    />
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            }.into_view()
                        }
                    }}
                </div>

                // Detail dialog
                {move || {
                    selected.get().map(|prescription| {
                        let print = print.clone();
                        let download = download.clone();
                        view! {
                            <DetailDialog
                                prescription=prescription
                                on_close=move || set_selected.set(None)
                                on_print=print
                                on_download=download
                            />
                        }
                    })
                }}
            </div>
        </Layout>
    }
}

#[component]
fn PrescriptionRow(
    prescription: Prescription,
    set_selected: WriteSignal<Option<Prescription>>,
    on_print: impl Fn() + 'static,
    on_download: impl Fn() + 'static,
) -> impl IntoView {
    let row = prescription.clone();

    view! {
        <tr class="border-b last:border-0">
            <td class="py-3 pr-4 font-medium">{prescription.patient.clone()}</td>
            <td class="py-3 pr-4">{prescription.medication.clone()}</td>
            <td class="py-3 pr-4">{prescription.dosage.clone()}</td>
            <td class="py-3 pr-4">{prescription.issue_date.clone()}</td>
            <td class="py-3 pr-4">{prescription.expiry_date.clone()}</td>
            <td class="py-3 pr-4">
                <span class=format!(
                    "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium {}",
                    status_style(prescription.status)
                )>
                    {prescription.status.label()}
                </span>
            </td>
            <td class="py-3">
                <div class="flex gap-2">
                    <button
                        class="px-2 py-1 border rounded-md hover:bg-gray-50"
                        on:click=move |_| set_selected.set(Some(row.clone()))
                    >
                        "👁" <span class="sr-only">"View Details"</span>
                    </button>
                    <button
                        class="px-2 py-1 border rounded-md hover:bg-gray-50"
                        on:click=move |_| on_print()
                    >
                        "🖨" <span class="sr-only">"Print"</span>
                    </button>
                    <button
                        class="px-2 py-1 border rounded-md hover:bg-gray-50"
                        on:click=move |_| on_download()
                    >
                        "⬇" <span class="sr-only">"Download"</span>
                    </button>
                </div>
            </td>
        </tr>
    }
}

/// Modal with the full prescription record.
#[component]
fn DetailDialog(
    prescription: Prescription,
    on_close: impl Fn() + 'static,
    on_print: impl Fn() + 'static,
    on_download: impl Fn() + 'static,
) -> impl IntoView {
    let field = |label: &'static str, value: String| {
        view! {
            <div class="grid grid-cols-4 items-center gap-4">
                <p class="text-right font-medium col-span-1">{label}</p>
                <p class="col-span-3">{value}</p>
            </div>
        }
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-white rounded-xl p-6 w-full max-w-md mx-4">
                <div class="flex items-center justify-between mb-2">
                    <h2 class="text-xl font-semibold">"Prescription Details"</h2>
                    <button class="text-gray-400 hover:text-gray-600" on:click=move |_| on_close()>
                        "✕"
                    </button>
                </div>
                <p class="text-sm text-muted-foreground mb-4">"View complete prescription information."</p>

                <div class="grid gap-4 py-2">
                    {field("Patient:", prescription.patient.clone())}
                    {field("Medication:", prescription.medication.clone())}
                    {field("Dosage:", prescription.dosage.clone())}
                    {field("Quantity:", prescription.quantity.clone())}
                    {field("Refills:", prescription.refills.to_string())}
                    {field("Issued:", prescription.issue_date.clone())}
                    {field("Expires:", prescription.expiry_date.clone())}
                    <div class="grid grid-cols-4 items-center gap-4">
                        <p class="text-right font-medium col-span-1">"Status:"</p>
                        <p class="col-span-3">
                            <span class=format!(
                                "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium {}",
                                status_style(prescription.status)
                            )>
                                {prescription.status.label()}
                            </span>
                        </p>
                    </div>
                    {field("Physician:", prescription.doctor.clone())}
                </div>

                <div class="flex justify-end gap-3 pt-4">
                    <button
                        class="px-4 py-2 border rounded-md hover:bg-gray-50"
                        on:click=move |_| on_print()
                    >
                        "🖨 Print"
                    </button>
                    <button
                        class="px-4 py-2 bg-healthcare-purple hover:bg-healthcare-dark-purple text-white rounded-lg font-medium transition-colors"
                        on:click=move |_| on_download()
                    >
                        "⬇ Download PDF"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn EmptyState(reason: EmptyReason) -> impl IntoView {
    let message = match reason {
        EmptyReason::Search => "No prescriptions match this search. Try different search terms.",
        EmptyReason::Date | EmptyReason::NoData => "No prescriptions issued yet.",
    };

    view! {
        <div class="text-center py-10">
            <div class="text-5xl">"📄"</div>
            <h3 class="mt-2 text-lg font-medium text-gray-900">"No prescriptions found"</h3>
            <p class="mt-1 text-sm text-gray-500">{message}</p>
        </div>
    }
}
