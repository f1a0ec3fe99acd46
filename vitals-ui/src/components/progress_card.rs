//! Progress Card Components
//!
//! Goal rows with a filled bar, plus the weight-loss goal card.

use leptos::*;
use vitals::{ColorToken, ProgressItem, WeightGoal};

/// Progress row for a daily goal
#[component]
pub fn ProgressCard(item: ProgressItem) -> impl IntoView {
    let percent = f64::from(item.percent);

    view! {
        <div class="p-4 bg-white rounded-md shadow-md">
            <p class="text-lg font-bold">{item.heading()}</p>
            <ProgressBar value=percent color="teal.500" />
        </div>
    }
}

/// Weight-loss goal with current and target weight
#[component]
pub fn WeightGoalCard(goal: WeightGoal) -> impl IntoView {
    view! {
        <div class="p-4 bg-white rounded-md shadow-md">
            <p class="text-lg font-bold">"Weight Loss Goal"</p>
            <p class="text-gray-500">{format!("Current: {} kg", goal.current_kg())}</p>
            <p class="text-gray-500">{format!("Goal: {} kg", goal.goal_kg())}</p>
            <ProgressBar value=goal.bar_value() color="red.500" />
            <p class="text-sm text-gray-500 mt-1">{goal.percent_label()}</p>
        </div>
    }
}

/// Thin horizontal bar filled to `value` percent
#[component]
fn ProgressBar(
    /// Fill percentage, clamped to 0-100
    value: f64,
    /// Fill color token
    color: &'static str,
) -> impl IntoView {
    let fill = ColorToken::lookup(color).map(|c| c.hex()).unwrap_or("#319795");
    let width = value.clamp(0.0, 100.0);

    view! {
        <div
            class="mt-2 h-2 w-full bg-gray-200 rounded-full overflow-hidden"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=width.to_string()
        >
            <div
                class="h-full rounded-full"
                style=format!("width: {}%; background-color: {}", width, fill)
            />
        </div>
    }
}
