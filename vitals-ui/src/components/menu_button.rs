//! Mobile Menu Button
//!
//! Shown below the `md` breakpoint; toggles the sidebar.

use leptos::*;
use vitals::Icon;

use crate::state::use_dashboard_state;

/// Sidebar toggle for small screens
#[component]
pub fn MenuButton() -> impl IntoView {
    let state = use_dashboard_state();
    let is_mobile = state.is_mobile;

    view! {
        <Show when=move || is_mobile.get()>
            <button
                aria-label="Menu"
                on:click=move |_| state.toggle_sidebar()
                class="mb-4 w-12 h-12 flex items-center justify-center text-2xl
                       bg-gray-100 hover:bg-gray-200 rounded-md transition-colors"
            >
                {Icon::Menu.glyph()}
            </button>
        </Show>
    }
}
