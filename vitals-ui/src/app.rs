//! App Root Component
//!
//! Main application component with routing and the dashboard state provider.

use leptos::*;
use leptos_router::*;

use crate::pages::DashboardPage;
use crate::state::provide_dashboard_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide dashboard state to all components
    provide_dashboard_state();

    view! {
        <Router>
            <Routes>
                <Route path="/" view=DashboardPage />
                <Route path="/*any" view=NotFound />
            </Routes>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-screen text-center bg-gray-50">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-teal-600 hover:bg-teal-700 text-white rounded-md font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
