//! UI Components
//!
//! Presentational Leptos components for the dashboard.

pub mod activity_card;
pub mod diet_card;
pub mod menu_button;
pub mod palette_picker;
pub mod pie_chart;
pub mod progress_card;
pub mod sidebar;
pub mod stat_card;

pub use activity_card::ActivityCard;
pub use diet_card::DietCard;
pub use menu_button::MenuButton;
pub use palette_picker::{ButtonPicker, SelectPicker};
pub use pie_chart::PieChart;
pub use progress_card::{ProgressCard, WeightGoalCard};
pub use sidebar::Sidebar;
pub use stat_card::StatCard;
