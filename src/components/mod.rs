//! UI Components
//!
//! Reusable Leptos components for the dashboard shell and pages.

pub mod layout;
pub mod nav;
pub mod stat_card;
pub mod toast;

pub use layout::Layout;
pub use nav::NavBar;
pub use stat_card::StatCard;
pub use toast::Toast;
