//! Business Card Page
//!
//! View and edit the practitioner's digital business card. Edits run
//! through the buffered lifecycle in [`crate::state::card`]; share,
//! download, and copy are stubs that toast.

use leptos::*;

use crate::components::Layout;
use crate::state::{expect_state, CardEditor, CardField};

/// Business card page component
#[component]
pub fn BusinessCard() -> impl IntoView {
    let state = expect_state();
    let card = state.card;

    let editing = move || card.with(|editor| editor.is_editing());

    let state_for_save = state.clone();
    let save = move |_| {
        card.update(|editor| editor.save());
        state_for_save.notify_success(
            "Changes saved",
            "Your business card information has been updated.",
        );
    };
    let cancel = move |_| card.update(|editor| editor.cancel());
    let begin_edit = move |_| card.update(|editor| editor.begin_edit());

    let state_for_share = state.clone();
    let share = move |_| {
        state_for_share.notify_success(
            "Share link generated",
            "A unique link to your business card has been copied to clipboard.",
        );
    };
    let state_for_download = state.clone();
    let download = move |_| {
        state_for_download.notify_success(
            "Download started",
            "Your business card is being downloaded as a PDF.",
        );
    };
    let state_for_copy = state.clone();
    let copy = move |_| {
        // Stub clipboard: serialize the committed record as the payload a
        // real integration would place on the clipboard.
        if let Ok(payload) =
            card.with(|editor| serde_json::to_string_pretty(editor.committed()))
        {
            web_sys::console::log_1(&payload.into());
        }
        state_for_copy.notify_success(
            "Copied to clipboard",
            "Your contact information has been copied to clipboard.",
        );
    };

    view! {
        <Layout>
            <div class="max-w-4xl mx-auto space-y-8">
                // Header and mode controls
                <div class="flex flex-col sm:flex-row justify-between items-start sm:items-center gap-4">
                    <div>
                        <h1 class="text-3xl font-bold text-healthcare-dark-gray">"Digital Business Card"</h1>
                        <p class="text-gray-500">"Manage and share your professional contact information"</p>
                    </div>
                    {move || {
                        if editing() {
                            view! {
                                <div class="flex gap-2">
                                    <button
                                        class="px-4 py-2 border rounded-md hover:bg-gray-50 flex items-center gap-2"
                                        on:click=cancel
                                    >
                                        "✕ Cancel"
                                    </button>
                                    <button
                                        class="px-4 py-2 bg-healthcare-purple hover:bg-healthcare-dark-purple text-white rounded-lg font-medium transition-colors flex items-center gap-2"
                                        on:click=save.clone()
                                    >
                                        "✓ Save Changes"
                                    </button>
                                </div>
                            }.into_view()
                        } else {
                            view! {
                                <button
                                    class="px-4 py-2 bg-healthcare-purple hover:bg-healthcare-dark-purple text-white rounded-lg font-medium transition-colors flex items-center gap-2"
                                    on:click=begin_edit
                                >
                                    "✎ Edit Information"
                                </button>
                            }.into_view()
                        }
                    }}
                </div>

                <div class="grid md:grid-cols-2 gap-8">
                    // Preview of the committed record
                    <div>
                        <h2 class="text-xl font-semibold mb-4">"Preview"</h2>
                        <CardPreview card=card />
                        <div class="flex justify-center gap-3 mt-6">
                            <button class="px-4 py-2 border rounded-md hover:bg-gray-50" on:click=share>
                                "🔗 Share"
                            </button>
                            <button class="px-4 py-2 border rounded-md hover:bg-gray-50" on:click=download>
                                "⬇ Download"
                            </button>
                            <button class="px-4 py-2 border rounded-md hover:bg-gray-50" on:click=copy>
                                "📋 Copy"
                            </button>
                        </div>
                    </div>

                    // Committed info, or the edit buffer while editing
                    <div>
                        <h2 class="text-xl font-semibold mb-4">
                            {move || if editing() { "Edit Information" } else { "Information" }}
                        </h2>
                        <div class="bg-white rounded-xl border border-gray-200 p-6">
                            {move || {
                                if editing() {
                                    view! { <EditForm card=card /> }.into_view()
                                } else {
                                    view! { <InfoGrid card=card /> }.into_view()
                                }
                            }}
                        </div>
                    </div>
                </div>
            </div>
        </Layout>
    }
}

/// Rendered card preview, always showing the committed record.
#[component]
fn CardPreview(card: RwSignal<CardEditor>) -> impl IntoView {
    let committed = move || card.with(|editor| editor.committed().clone());

    view! {
        <div class="rounded-xl border border-gray-200 shadow-lg overflow-hidden bg-white">
            <div class="bg-healthcare-purple text-white p-6">
                <h3 class="text-2xl font-bold">{move || committed().name}</h3>
                <p class="opacity-90">{move || committed().title}</p>
            </div>
            <div class="p-6 space-y-4">
                <div class="space-y-2">
                    <p class="font-medium">{move || committed().hospital}</p>
                    <p class="text-sm text-gray-500">{move || committed().address}</p>
                </div>
                <div class="space-y-1 text-sm">
                    <p><strong>"Phone: "</strong>{move || committed().phone}</p>
                    <p><strong>"Email: "</strong>{move || committed().email}</p>
                    <p><strong>"Web: "</strong>{move || committed().website}</p>
                    <p><strong>"Hours: "</strong>{move || committed().hours}</p>
                </div>
                <div class="pt-2 border-t">
                    <p class="text-sm">{move || committed().about}</p>
                </div>
                <div class="pt-2 border-t text-sm space-y-1">
                    <p><strong>"Education: "</strong>{move || committed().education}</p>
                    <p><strong>"Certifications: "</strong>{move || committed().certifications}</p>
                </div>
                <div class="flex justify-center mt-4">
                    <div class="bg-gray-100 p-4 rounded-md text-6xl">"⬚"</div>
                </div>
            </div>
        </div>
    }
}

/// Read-only grid of the committed record.
#[component]
fn InfoGrid(card: RwSignal<CardEditor>) -> impl IntoView {
    let committed = move || card.with(|editor| editor.committed().clone());

    let item = move |label: &'static str, value: fn(&crate::model::BusinessCard) -> String| {
        view! {
            <div>
                <p class="text-sm font-medium text-gray-500">{label}</p>
                <p>{move || value(&committed())}</p>
            </div>
        }
    };

    view! {
        <div class="space-y-4">
            <div class="grid grid-cols-2 gap-x-4 gap-y-2">
                {item("Name", |c| c.name.clone())}
                {item("Title/Specialization", |c| c.title.clone())}
                {item("Hospital/Practice", |c| c.hospital.clone())}
                {item("Address", |c| c.address.clone())}
                {item("Phone", |c| c.phone.clone())}
                {item("Email", |c| c.email.clone())}
                {item("Website", |c| c.website.clone())}
                {item("Office Hours", |c| c.hours.clone())}
            </div>
            {item("About", |c| c.about.clone())}
            {item("Education", |c| c.education.clone())}
            {item("Certifications", |c| c.certifications.clone())}
        </div>
    }
}

/// Keyed edit form over the buffer.
#[component]
fn EditForm(card: RwSignal<CardEditor>) -> impl IntoView {
    view! {
        <form class="space-y-4" on:submit=|ev| ev.prevent_default()>
            <FieldInput label="Name" field=CardField::Name card=card />
            <FieldInput label="Title/Specialization" field=CardField::Title card=card />
            <FieldInput label="Hospital/Practice" field=CardField::Hospital card=card />
            <FieldInput label="Address" field=CardField::Address card=card />
            <div class="grid grid-cols-2 gap-4">
                <FieldInput label="Phone" field=CardField::Phone card=card />
                <FieldInput label="Email" field=CardField::Email card=card />
            </div>
            <div class="grid grid-cols-2 gap-4">
                <FieldInput label="Website" field=CardField::Website card=card />
                <FieldInput label="Office Hours" field=CardField::Hours card=card />
            </div>
            <FieldArea label="About" field=CardField::About card=card />
            <FieldInput label="Education" field=CardField::Education card=card />
            <FieldInput label="Certifications" field=CardField::Certifications card=card />
        </form>
    }
}

#[component]
fn FieldInput(
    label: &'static str,
    field: CardField,
    card: RwSignal<CardEditor>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-500">{label}</label>
            <input
                type="text"
                class="mt-1 w-full border rounded-md px-3 py-2"
                prop:value=move || card.with(|editor| editor.buffer_field(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    card.update(|editor| editor.set_field(field, &value));
                }
            />
        </div>
    }
}

#[component]
fn FieldArea(
    label: &'static str,
    field: CardField,
    card: RwSignal<CardEditor>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-500">{label}</label>
            <textarea
                rows=3
                class="mt-1 w-full border rounded-md px-3 py-2"
                prop:value=move || card.with(|editor| editor.buffer_field(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    card.update(|editor| editor.set_field(field, &value));
                }
            />
        </div>
    }
}
