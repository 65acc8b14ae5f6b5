//! Mock Datasets
//!
//! Hard-coded, fictional collections standing in for a practice-management
//! backend. Each function builds a fresh copy for the application state
//! initializer; no module-level mutable state.

use crate::model::{
    Appointment, AppointmentStatus, BusinessCard, ChatMessage, Conversation, DirectoryPatient,
    MessageSender, Patient, Prescription, PrescriptionStatus, RecentMessage,
};

/// The appointment book.
pub fn appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: 1,
            patient_name: "John Doe".into(),
            patient_id: "P-10023".into(),
            date: "2025-05-17".into(),
            time: "09:00 AM".into(),
            duration: "30 min".into(),
            kind: "Check-up".into(),
            status: AppointmentStatus::Confirmed,
            virtual_visit: false,
        },
        Appointment {
            id: 2,
            patient_name: "Jane Smith".into(),
            patient_id: "P-10045".into(),
            date: "2025-05-17".into(),
            time: "10:30 AM".into(),
            duration: "45 min".into(),
            kind: "Follow-up".into(),
            status: AppointmentStatus::Confirmed,
            virtual_visit: true,
        },
        Appointment {
            id: 3,
            patient_name: "Robert Johnson".into(),
            patient_id: "P-10078".into(),
            date: "2025-05-18".into(),
            time: "02:00 PM".into(),
            duration: "60 min".into(),
            kind: "Consultation".into(),
            status: AppointmentStatus::Pending,
            virtual_visit: false,
        },
        Appointment {
            id: 4,
            patient_name: "Lisa Brown".into(),
            patient_id: "P-10132".into(),
            date: "2025-05-18".into(),
            time: "03:30 PM".into(),
            duration: "30 min".into(),
            kind: "Check-up".into(),
            status: AppointmentStatus::Confirmed,
            virtual_visit: true,
        },
        Appointment {
            id: 5,
            patient_name: "Michael Davis".into(),
            patient_id: "P-10087".into(),
            date: "2025-05-19".into(),
            time: "11:00 AM".into(),
            duration: "45 min".into(),
            kind: "New Patient".into(),
            status: AppointmentStatus::Confirmed,
            virtual_visit: false,
        },
    ]
}

/// The patient registry shown on the patients page.
pub fn patients() -> Vec<Patient> {
    vec![
        Patient {
            id: "P-10101".into(),
            name: "John Smith".into(),
            dob: "05/12/1980".into(),
            contact_number: "(555) 123-4567".into(),
            last_visit: "04/28/2025".into(),
            next_appointment: "05/20/2025".into(),
        },
        Patient {
            id: "P-10102".into(),
            name: "Sarah Johnson".into(),
            dob: "11/23/1975".into(),
            contact_number: "(555) 987-6543".into(),
            last_visit: "05/01/2025".into(),
            next_appointment: "05/22/2025".into(),
        },
        Patient {
            id: "P-10103".into(),
            name: "Michael Brown".into(),
            dob: "07/09/1992".into(),
            contact_number: "(555) 456-7890".into(),
            last_visit: "04/15/2025".into(),
            next_appointment: "05/30/2025".into(),
        },
        Patient {
            id: "P-10104".into(),
            name: "Emily Davis".into(),
            dob: "03/17/1988".into(),
            contact_number: "(555) 789-0123".into(),
            last_visit: "05/05/2025".into(),
            next_appointment: "06/05/2025".into(),
        },
        Patient {
            id: "P-10105".into(),
            name: "Robert Wilson".into(),
            dob: "09/29/1965".into(),
            contact_number: "(555) 234-5678".into(),
            last_visit: "05/10/2025".into(),
            next_appointment: "06/10/2025".into(),
        },
    ]
}

/// The directory searched when scheduling a new appointment.
pub fn patient_directory() -> Vec<DirectoryPatient> {
    vec![
        DirectoryPatient {
            id: "P-10023".into(),
            name: "John Doe".into(),
            age: 45,
            gender: "Male".into(),
            last_visit: Some("2025-03-10".into()),
        },
        DirectoryPatient {
            id: "P-10045".into(),
            name: "Jane Smith".into(),
            age: 38,
            gender: "Female".into(),
            last_visit: Some("2025-04-15".into()),
        },
        DirectoryPatient {
            id: "P-10078".into(),
            name: "Robert Johnson".into(),
            age: 62,
            gender: "Male".into(),
            last_visit: Some("2025-04-22".into()),
        },
        DirectoryPatient {
            id: "P-10132".into(),
            name: "Lisa Brown".into(),
            age: 29,
            gender: "Female".into(),
            last_visit: None,
        },
        DirectoryPatient {
            id: "P-10087".into(),
            name: "Michael Davis".into(),
            age: 56,
            gender: "Male".into(),
            last_visit: Some("2025-02-03".into()),
        },
    ]
}

/// Conversation previews for the messages sidebar.
pub fn conversations() -> Vec<Conversation> {
    vec![
        Conversation {
            id: 1,
            name: "John Smith".into(),
            last_message: "I've been feeling much better since our last appointment.".into(),
            timestamp: "10:30 AM".into(),
            unread: true,
            avatar: "JS".into(),
        },
        Conversation {
            id: 2,
            name: "Sarah Johnson".into(),
            last_message: "Thanks for sending my prescription refill.".into(),
            timestamp: "Yesterday".into(),
            unread: false,
            avatar: "SJ".into(),
        },
        Conversation {
            id: 3,
            name: "Michael Brown".into(),
            last_message: "When should I schedule my next checkup?".into(),
            timestamp: "Yesterday".into(),
            unread: true,
            avatar: "MB".into(),
        },
        Conversation {
            id: 4,
            name: "Emily Davis".into(),
            last_message: "I have a question about the medication you prescribed.".into(),
            timestamp: "May 12".into(),
            unread: false,
            avatar: "ED".into(),
        },
        Conversation {
            id: 5,
            name: "Robert Wilson".into(),
            last_message: "I'll see you at my appointment next week.".into(),
            timestamp: "May 10".into(),
            unread: false,
            avatar: "RW".into(),
        },
    ]
}

/// The static transcript shown in the chat pane. No foreign key to the
/// conversation list in this build.
pub fn chat_messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            id: 1,
            sender: MessageSender::Doctor,
            text: "Hello John, how are you feeling today?".into(),
            timestamp: "10:00 AM".into(),
        },
        ChatMessage {
            id: 2,
            sender: MessageSender::Patient,
            text: "I've been feeling much better since our last appointment.".into(),
            timestamp: "10:30 AM".into(),
        },
    ]
}

/// Recent-message previews on the dashboard.
pub fn recent_messages() -> Vec<RecentMessage> {
    vec![
        RecentMessage {
            id: 1,
            sender: "Sarah Wilson".into(),
            message: "I've been feeling better since our last appointment.".into(),
            time: "Today, 11:32 AM".into(),
            read: false,
        },
        RecentMessage {
            id: 2,
            sender: "Mike Thompson".into(),
            message: "Could you clarify the dosage for the new medication?".into(),
            time: "Yesterday, 3:15 PM".into(),
            read: true,
        },
    ]
}

/// The prescription ledger.
pub fn prescriptions() -> Vec<Prescription> {
    vec![
        Prescription {
            id: 1,
            patient: "John Smith".into(),
            medication: "Amoxicillin 500mg".into(),
            dosage: "1 tablet every 8 hours".into(),
            quantity: "30 tablets".into(),
            refills: 2,
            issue_date: "05/10/2025".into(),
            expiry_date: "05/10/2026".into(),
            status: PrescriptionStatus::Active,
            doctor: "Dr. Elizabeth Taylor".into(),
        },
        Prescription {
            id: 2,
            patient: "Sarah Johnson".into(),
            medication: "Lisinopril 20mg".into(),
            dosage: "1 tablet daily".into(),
            quantity: "30 tablets".into(),
            refills: 5,
            issue_date: "05/05/2025".into(),
            expiry_date: "05/05/2026".into(),
            status: PrescriptionStatus::Active,
            doctor: "Dr. Elizabeth Taylor".into(),
        },
        Prescription {
            id: 3,
            patient: "Michael Brown".into(),
            medication: "Sertraline 50mg".into(),
            dosage: "1 tablet daily in the morning".into(),
            quantity: "30 tablets".into(),
            refills: 3,
            issue_date: "04/28/2025".into(),
            expiry_date: "04/28/2026".into(),
            status: PrescriptionStatus::Active,
            doctor: "Dr. Elizabeth Taylor".into(),
        },
        Prescription {
            id: 4,
            patient: "Emily Davis".into(),
            medication: "Metformin 1000mg".into(),
            dosage: "1 tablet twice daily with meals".into(),
            quantity: "60 tablets".into(),
            refills: 2,
            issue_date: "04/15/2025".into(),
            expiry_date: "04/15/2026".into(),
            status: PrescriptionStatus::Active,
            doctor: "Dr. Elizabeth Taylor".into(),
        },
        Prescription {
            id: 5,
            patient: "Robert Wilson".into(),
            medication: "Atorvastatin 40mg".into(),
            dosage: "1 tablet daily at bedtime".into(),
            quantity: "30 tablets".into(),
            refills: 6,
            issue_date: "05/01/2025".into(),
            expiry_date: "05/01/2026".into(),
            status: PrescriptionStatus::Active,
            doctor: "Dr. Elizabeth Taylor".into(),
        },
        Prescription {
            id: 6,
            patient: "Linda Martinez".into(),
            medication: "Prednisone 5mg".into(),
            dosage: "2 tablets daily for 5 days, then 1 tablet daily for 5 days".into(),
            quantity: "15 tablets".into(),
            refills: 0,
            issue_date: "05/08/2025".into(),
            expiry_date: "05/22/2025".into(),
            status: PrescriptionStatus::Expired,
            doctor: "Dr. Elizabeth Taylor".into(),
        },
    ]
}

/// Default business-card contents used by the state initializer.
pub fn business_card() -> BusinessCard {
    BusinessCard {
        name: "Dr. Emily Smith".into(),
        title: "Cardiologist".into(),
        hospital: "MedConnect Medical Center".into(),
        address: "123 Healthcare Ave, Medical District".into(),
        phone: "+1 (555) 123-4567".into(),
        email: "dr.smith@medconnect.com".into(),
        website: "www.medconnect.com/dr-smith".into(),
        hours: "Mon-Fri: 9AM-5PM".into(),
        about: "Specialized in cardiovascular health with over 10 years of experience in \
                diagnosing and treating heart conditions."
            .into(),
        education: "MD, Harvard Medical School".into(),
        certifications: "Board Certified in Cardiology, American Heart Association".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_appointment_dates_are_iso() {
        // Calendar matching relies on dates comparing as ISO yyyy-mm-dd.
        for appointment in appointments() {
            assert!(
                NaiveDate::parse_from_str(&appointment.date, "%Y-%m-%d").is_ok(),
                "appointment {} has a non-ISO date: {}",
                appointment.id,
                appointment.date
            );
        }
    }

    #[test]
    fn test_appointments_span_three_days() {
        let appointments = appointments();
        assert_eq!(appointments.len(), 5);

        let on = |day: &str| appointments.iter().filter(|a| a.date == day).count();
        assert_eq!(on("2025-05-17"), 2);
        assert_eq!(on("2025-05-18"), 2);
        assert_eq!(on("2025-05-19"), 1);
    }

    #[test]
    fn test_patient_ids_use_practice_scheme() {
        for patient in patients() {
            assert!(patient.id.as_str().starts_with("P-"));
        }
        for patient in patient_directory() {
            assert!(patient.id.as_str().starts_with("P-"));
        }
        for appointment in appointments() {
            assert!(appointment.patient_id.as_str().starts_with("P-"));
        }
    }
}
