//! Diet Card Component

use leptos::*;
use vitals::DietEntry;

/// One recommended meal
#[component]
pub fn DietCard(entry: DietEntry) -> impl IntoView {
    view! {
        <div class="p-4 bg-white rounded-md shadow-md">
            <p class="text-lg font-bold">{entry.meal}</p>
            <p class="text-gray-500">{entry.items}</p>
        </div>
    }
}
