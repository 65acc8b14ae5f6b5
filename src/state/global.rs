//! Global Application State
//!
//! Reactive state management using Leptos signals. All mock collections are
//! initialized here once and provided through context; pages never reach for
//! ambient singletons.

use leptos::*;

use crate::data;
use crate::model::{
    Appointment, ChatMessage, Conversation, DirectoryPatient, Patient, Prescription, RecentMessage,
};
use crate::state::card::CardEditor;

/// How a toast should be styled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    /// Destructive styling for validation and failure messages.
    Error,
}

/// One queued toast notification.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastItem {
    pub id: u32,
    pub kind: ToastKind,
    pub title: String,
    pub body: String,
}

/// Milliseconds a toast stays on screen.
const TOAST_DISMISS_MS: u32 = 4_000;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// The appointment book.
    pub appointments: RwSignal<Vec<Appointment>>,
    /// The patient registry.
    pub patients: RwSignal<Vec<Patient>>,
    /// The directory searched when scheduling.
    pub patient_directory: RwSignal<Vec<DirectoryPatient>>,
    /// Conversation previews for the messages sidebar.
    pub conversations: RwSignal<Vec<Conversation>>,
    /// The static chat transcript.
    pub chat_messages: RwSignal<Vec<ChatMessage>>,
    /// Recent-message previews on the dashboard.
    pub recent_messages: RwSignal<Vec<RecentMessage>>,
    /// The prescription ledger.
    pub prescriptions: RwSignal<Vec<Prescription>>,
    /// The business card and its edit lifecycle.
    pub card: RwSignal<CardEditor>,
    /// FIFO queue of visible toasts.
    pub toasts: RwSignal<Vec<ToastItem>>,
    next_toast_id: RwSignal<u32>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        appointments: create_rw_signal(data::appointments()),
        patients: create_rw_signal(data::patients()),
        patient_directory: create_rw_signal(data::patient_directory()),
        conversations: create_rw_signal(data::conversations()),
        chat_messages: create_rw_signal(data::chat_messages()),
        recent_messages: create_rw_signal(data::recent_messages()),
        prescriptions: create_rw_signal(data::prescriptions()),
        card: create_rw_signal(CardEditor::new(data::business_card())),
        toasts: create_rw_signal(Vec::new()),
        next_toast_id: create_rw_signal(0),
    };

    provide_context(state);
}

/// Fetch the provided state. Panics outside the component tree root.
pub fn expect_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    /// Queue a toast. Toasts display in FIFO order and auto-dismiss.
    pub fn notify(&self, kind: ToastKind, title: &str, body: &str) {
        let id = self.next_toast_id.get_untracked();
        self.next_toast_id.set(id.wrapping_add(1));

        self.toasts.update(|queue| {
            queue.push(ToastItem {
                id,
                kind,
                title: title.to_string(),
                body: body.to_string(),
            });
        });

        let toasts = self.toasts;
        gloo_timers::callback::Timeout::new(TOAST_DISMISS_MS, move || {
            toasts.update(|queue| queue.retain(|t| t.id != id));
        })
        .forget();
    }

    /// Success toast.
    pub fn notify_success(&self, title: &str, body: &str) {
        self.notify(ToastKind::Success, title, body);
    }

    /// Destructive toast for validation and failure messages.
    pub fn notify_error(&self, title: &str, body: &str) {
        self.notify(ToastKind::Error, title, body);
    }

    /// Unread count across the conversation list.
    pub fn unread_conversations(&self) -> usize {
        self.conversations.get().iter().filter(|c| c.unread).count()
    }

    /// Unread count across the dashboard previews.
    pub fn unread_recent_messages(&self) -> usize {
        self.recent_messages.get().iter().filter(|m| !m.read).count()
    }
}
