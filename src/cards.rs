//! Card data for the dashboard
//!
//! This module defines the literal values each card renders:
//! - `StatTile`: one metric's label and current value
//! - `ProgressItem`: a label, goal description and fill percentage
//! - `Activity`: a scheduled activity and its time of day
//! - `DietEntry`: a meal and its ingredient list
//!
//! The values are compiled in and rendered identically on every view.

use chrono::NaiveTime;
use serde::{Serialize, Serializer};

use crate::palette::ColorToken;

/// Decorative glyph shown next to a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Heartbeat,
    Walking,
    Burn,
    Apple,
    Menu,
}

impl Icon {
    /// Glyph rendered for the icon
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Heartbeat => "❤️",
            Icon::Walking => "🚶",
            Icon::Burn => "🔥",
            Icon::Apple => "🍎",
            Icon::Menu => "☰",
        }
    }
}

/// A single metric tile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatTile {
    pub title: &'static str,
    pub value: &'static str,
    pub icon: Icon,
    /// Pie slice colors; the first one also tints the icon in the chart layout
    pub colors: [&'static str; 3],
    /// Icon tint used by the compact layout
    pub icon_color: ColorToken,
}

/// A goal with a fill percentage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressItem {
    pub label: &'static str,
    /// Fill percentage, 0-100
    pub percent: u8,
    pub goal: &'static str,
}

impl ProgressItem {
    /// Heading text, e.g. `Water Intake - 8 cups`
    pub fn heading(&self) -> String {
        format!("{} - {}", self.label, self.goal)
    }
}

/// A scheduled activity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub name: &'static str,
    #[serde(serialize_with = "serialize_clock")]
    pub time: NaiveTime,
}

impl Activity {
    /// Time of day as shown on the card, e.g. `6:00 AM`
    pub fn display_time(&self) -> String {
        self.time.format("%-I:%M %p").to_string()
    }
}

fn serialize_clock<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&time.format("%-I:%M %p").to_string())
}

/// A recommended meal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DietEntry {
    pub meal: &'static str,
    pub items: &'static str,
}

/// The four metric tiles
pub fn stat_tiles() -> Vec<StatTile> {
    vec![
        StatTile {
            title: "Heart Rate",
            value: "75 bpm",
            icon: Icon::Heartbeat,
            colors: ["#FF6384", "#FFB6C1", "#FFC0CB"],
            icon_color: ColorToken::known("red.500"),
        },
        StatTile {
            title: "Steps",
            value: "8,200",
            icon: Icon::Walking,
            colors: ["#36A2EB", "#ADD8E6", "#87CEFA"],
            icon_color: ColorToken::known("blue.500"),
        },
        StatTile {
            title: "Calories",
            value: "520 kcal",
            icon: Icon::Burn,
            colors: ["#FFA500", "#FFD700", "#FFB347"],
            icon_color: ColorToken::known("orange.500"),
        },
        StatTile {
            title: "Nutrition",
            value: "1200 cal",
            icon: Icon::Apple,
            colors: ["#4CAF50", "#8BC34A", "#A5D6A7"],
            icon_color: ColorToken::known("green.500"),
        },
    ]
}

/// Daily goal progress rows
pub fn progress_items() -> Vec<ProgressItem> {
    vec![
        ProgressItem { label: "Water Intake", percent: 70, goal: "8 cups" },
        ProgressItem { label: "Exercise", percent: 60, goal: "30 mins" },
        ProgressItem { label: "Sleep", percent: 80, goal: "8 hrs" },
    ]
}

/// Today's activity schedule
pub fn activities() -> Vec<Activity> {
    [("Morning Run", 6), ("Breakfast", 8), ("Yoga", 10)]
        .into_iter()
        .filter_map(|(name, hour)| {
            NaiveTime::from_hms_opt(hour, 0, 0).map(|time| Activity { name, time })
        })
        .collect()
}

/// Recommended meals
pub fn diet_entries() -> Vec<DietEntry> {
    vec![
        DietEntry { meal: "Breakfast", items: "Oatmeal, Bananas, Almonds" },
        DietEntry { meal: "Lunch", items: "Grilled Chicken, Quinoa, Vegetables" },
        DietEntry { meal: "Dinner", items: "Salmon, Sweet Potatoes, Spinach" },
    ]
}
