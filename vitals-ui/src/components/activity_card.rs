//! Activity Card Component

use leptos::*;
use vitals::Activity;

/// One row of the activity overview
#[component]
pub fn ActivityCard(activity: Activity) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between p-4 bg-white rounded-md shadow-md">
            <span class="font-bold">{activity.name}</span>
            <span class="text-gray-500">{activity.display_time()}</span>
        </div>
    }
}
