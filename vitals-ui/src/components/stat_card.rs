//! Stat Card Component
//!
//! A metric tile: icon, title and value, with a pie chart in the charts layout.

use leptos::*;
use vitals::StatTile;

use crate::components::PieChart;
use crate::state::use_dashboard_state;

/// Metric tile
#[component]
pub fn StatCard(tile: StatTile) -> impl IntoView {
    let state = use_dashboard_state();
    let (icon_color, chart) = state
        .dashboard
        .with_value(|d| (d.icon_color(&tile), d.chart_for(&tile)));

    match chart {
        Some(data) => view! {
            <div class="flex flex-col items-center p-4 space-y-4 bg-white rounded-md shadow-md hover:shadow-lg transition-shadow">
                <span class="text-2xl" style=format!("color: {}", icon_color)>{tile.icon.glyph()}</span>
                <p class="text-lg font-bold">{tile.title}</p>
                <p class="text-xl text-gray-600">{tile.value}</p>
                <PieChart data=data />
            </div>
        }
        .into_view(),
        None => view! {
            <div class="flex items-center p-4 space-x-4 bg-white rounded-md shadow-md hover:shadow-lg transition-shadow">
                <span class="text-2xl" style=format!("color: {}", icon_color)>{tile.icon.glyph()}</span>
                <div>
                    <p class="text-lg font-bold">{tile.title}</p>
                    <p class="text-xl text-gray-600">{tile.value}</p>
                </div>
            </div>
        }
        .into_view(),
    }
}
