//! Dashboard Page
//!
//! The single screen: sidebar, stat tiles and the card sections.

use leptos::*;
use vitals::layout::{ACTIVITY_HEADING, DIET_HEADING, PROGRESS_HEADING, TITLE, WEIGHT_HEADING};
use vitals::{PickerStyle, SwatchKind};

use crate::components::{
    ActivityCard, DietCard, MenuButton, ProgressCard, SelectPicker, Sidebar, StatCard,
    WeightGoalCard,
};
use crate::state::use_dashboard_state;

/// Dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = use_dashboard_state();
    let dashboard = state.dashboard.get_value();
    let with_selects = dashboard.picker_style() == PickerStyle::Select;

    view! {
        <div
            class="min-h-screen flex flex-col md:flex-row"
            style=move || format!("background-color: {}", state.background_hex())
        >
            <Sidebar />

            // Main content
            <main class="flex-1 p-4">
                <MenuButton />

                <h1
                    class="text-3xl font-bold mb-4"
                    style=move || format!("color: {}", state.accent_hex())
                >
                    {TITLE}
                </h1>

                {with_selects.then(|| view! {
                    <SelectPicker kind=SwatchKind::Accent label="Choose Theme Color:" />
                    <SelectPicker kind=SwatchKind::Background label="Choose Background Color:" />
                })}

                // Health stats
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4 mb-8">
                    {dashboard.tiles.into_iter().map(|tile| view! {
                        <StatCard tile=tile />
                    }).collect_view()}
                </div>

                <Section heading=PROGRESS_HEADING>
                    {dashboard.progress.iter().cloned().map(|item| view! {
                        <ProgressCard item=item />
                    }).collect_view()}
                </Section>

                <Section heading=ACTIVITY_HEADING>
                    {dashboard.activities.iter().cloned().map(|activity| view! {
                        <ActivityCard activity=activity />
                    }).collect_view()}
                </Section>

                <Section heading=DIET_HEADING>
                    {dashboard.diet.iter().cloned().map(|entry| view! {
                        <DietCard entry=entry />
                    }).collect_view()}
                </Section>

                {dashboard.weight_goal.map(|goal| view! {
                    <Section heading=WEIGHT_HEADING>
                        <WeightGoalCard goal=goal />
                    </Section>
                })}
            </main>
        </div>
    }
}

/// Headed, vertically stacked group of cards
#[component]
fn Section(heading: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="mt-8">
            <h2 class="text-2xl font-bold mb-4">{heading}</h2>
            <div class="flex flex-col space-y-4">
                {children()}
            </div>
        </section>
    }
}
