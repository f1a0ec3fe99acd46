//! Sidebar Component
//!
//! Brand, menu entries and, in the charts layout, the color pickers.

use leptos::*;
use vitals::layout::{BRAND, MENU_ITEMS};
use vitals::{PickerStyle, SwatchKind};

use crate::components::ButtonPicker;
use crate::state::use_dashboard_state;

/// Side navigation panel, tinted with the accent color
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_dashboard_state();
    let with_pickers = state
        .dashboard
        .with_value(|d| d.picker_style() == PickerStyle::Buttons);

    view! {
        <aside
            class="w-full md:w-64 p-4 text-white"
            class:hidden=move || !state.sidebar_visible()
            style=move || format!("background-color: {}", state.accent_hex())
        >
            <div class="flex flex-col space-y-4">
                <span class="text-2xl font-bold">{BRAND}</span>
                <nav class="flex flex-col space-y-4 pt-8">
                    {MENU_ITEMS.iter().map(|item| view! {
                        <span class="text-lg">{*item}</span>
                    }).collect_view()}
                </nav>

                {with_pickers.then(|| view! {
                    <div class="pt-8 space-y-4">
                        <ButtonPicker kind=SwatchKind::Accent label="Choose Theme Color:" />
                        <ButtonPicker kind=SwatchKind::Background label="Choose Background Color:" />
                    </div>
                })}
            </div>
        </aside>
    }
}
