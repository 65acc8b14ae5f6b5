//! Pages
//!
//! Top-level page components for each route.

pub mod appointments;
pub mod business_card;
pub mod dashboard;
pub mod forgot_password;
pub mod login;
pub mod messages;
pub mod new_appointment;
pub mod patients;
pub mod prescriptions;
pub mod register;

pub use appointments::Appointments;
pub use business_card::BusinessCard;
pub use dashboard::Dashboard;
pub use forgot_password::ForgotPassword;
pub use login::Login;
pub use messages::Messages;
pub use new_appointment::NewAppointment;
pub use patients::Patients;
pub use prescriptions::Prescriptions;
pub use register::Register;
