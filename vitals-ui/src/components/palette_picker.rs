//! Palette Picker Components
//!
//! Button-row and dropdown pickers for the accent and background colors.

use leptos::*;
use vitals::SwatchKind;

use crate::state::use_dashboard_state;

/// Row of color buttons, one per swatch
#[component]
pub fn ButtonPicker(
    kind: SwatchKind,
    /// Caption above the buttons
    label: &'static str,
) -> impl IntoView {
    let state = use_dashboard_state();
    let swatches = state
        .dashboard
        .with_value(|d| d.palette().swatches(kind).to_vec());

    view! {
        <div class="flex flex-col items-start space-y-2">
            <span>{label}</span>
            <div class="flex space-x-2">
                {swatches.into_iter().map(|swatch| {
                    let token = swatch.token;
                    let is_selected = move || state.preferences.get().selected(kind) == token;
                    let style = {
                        let swatch = swatch.clone();
                        move || swatch.button_style(kind, is_selected()).to_css()
                    };

                    view! {
                        <button
                            on:click=move |_| state.select(kind, token)
                            class="px-3 py-1 text-sm rounded-md hover:opacity-80 transition-opacity"
                            class:font-semibold=is_selected
                            style=style
                        >
                            {swatch.label}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Dropdown of labelled swatches
#[component]
pub fn SelectPicker(
    kind: SwatchKind,
    /// Caption next to the dropdown
    label: &'static str,
) -> impl IntoView {
    let state = use_dashboard_state();
    let swatches = state
        .dashboard
        .with_value(|d| d.palette().swatches(kind).to_vec());

    let on_change = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        state.select_named(kind, &value);
    };

    view! {
        <div class="flex items-center space-x-2 mb-4">
            <span class="whitespace-nowrap">{label}</span>
            <select
                on:change=on_change
                prop:value=move || state.preferences.get().selected(kind).name().to_string()
                class="w-full bg-white rounded-md px-4 py-2 border border-gray-300
                       focus:border-teal-500 focus:outline-none"
            >
                {swatches.into_iter().map(|swatch| {
                    let token = swatch.token;
                    view! {
                        <option
                            value=token.name()
                            selected=move || state.preferences.get().selected(kind) == token
                        >
                            {swatch.label}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
