//! Entity Records
//!
//! Plain data records for every collection shown in the dashboard. None of
//! these outlive the browser tab; the only record that is ever mutated after
//! initialization is [`BusinessCard`].

use std::fmt;

/// Patient identifier in the practice-wide `P-#####` scheme.
///
/// Both the appointment book and the patient registry key patients with this
/// scheme. The mock collections are still independent of each other: an
/// appointment's patient id is not guaranteed to resolve in the registry.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct PatientId(pub String);

impl PatientId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for PatientId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Confirmation state of an appointment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum AppointmentStatus {
    Confirmed,
    Pending,
}

impl AppointmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Pending => "Pending",
        }
    }
}

/// A scheduled appointment.
///
/// `date` is an ISO `yyyy-mm-dd` string so calendar matching reduces to
/// string equality.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Appointment {
    pub id: u32,
    pub patient_name: String,
    pub patient_id: PatientId,
    pub date: String,
    pub time: String,
    pub duration: String,
    pub kind: String,
    pub status: AppointmentStatus,
    pub virtual_visit: bool,
}

/// A registry entry on the patients page.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub dob: String,
    pub contact_number: String,
    pub last_visit: String,
    pub next_appointment: String,
}

/// A directory entry searched when scheduling a new appointment.
///
/// A third independent patient mock set; `last_visit` is `None` for patients
/// who have never been seen.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectoryPatient {
    pub id: PatientId,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub last_visit: Option<String>,
}

/// A conversation preview in the messages sidebar.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Conversation {
    pub id: u32,
    pub name: String,
    pub last_message: String,
    pub timestamp: String,
    pub unread: bool,
    pub avatar: String,
}

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum MessageSender {
    Doctor,
    Patient,
}

/// A single message in the chat transcript.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ChatMessage {
    pub id: u32,
    pub sender: MessageSender,
    pub text: String,
    pub timestamp: String,
}

/// A recent-message preview on the dashboard. Independent of the
/// conversation list.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct RecentMessage {
    pub id: u32,
    pub sender: String,
    pub message: String,
    pub time: String,
    pub read: bool,
}

/// Whether a prescription can still be dispensed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum PrescriptionStatus {
    Active,
    Expired,
}

impl PrescriptionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Expired => "Expired",
        }
    }
}

/// An issued prescription.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Prescription {
    pub id: u32,
    pub patient: String,
    pub medication: String,
    pub dosage: String,
    pub quantity: String,
    pub refills: u32,
    pub issue_date: String,
    pub expiry_date: String,
    pub status: PrescriptionStatus,
    pub doctor: String,
}

/// The practitioner's digital business card.
///
/// The single mutable record in the application. Edits go through the
/// buffered lifecycle in [`crate::state::card`]; the committed value lives
/// only in memory and resets on reload.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct BusinessCard {
    pub name: String,
    pub title: String,
    pub hospital: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub hours: String,
    pub about: String,
    pub education: String,
    pub certifications: String,
}
