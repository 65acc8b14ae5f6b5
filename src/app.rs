//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::Toast;
use crate::pages::{
    Appointments, BusinessCard, Dashboard, ForgotPassword, Login, Messages, NewAppointment,
    Patients, Prescriptions, Register,
};
use crate::state::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <Routes>
                <Route path="/" view=Dashboard />
                <Route path="/business-card" view=BusinessCard />
                <Route path="/appointments" view=Appointments />
                <Route path="/appointments/new" view=NewAppointment />
                <Route path="/patients" view=Patients />
                <Route path="/messages" view=Messages />
                <Route path="/prescriptions" view=Prescriptions />
                <Route path="/login" view=Login />
                <Route path="/register" view=Register />
                <Route path="/forgot-password" view=ForgotPassword />
                <Route path="/*any" view=NotFound />
            </Routes>

            // Toast notifications, also available on the auth screens
            <Toast />
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-healthcare-purple hover:bg-healthcare-dark-purple text-white rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
