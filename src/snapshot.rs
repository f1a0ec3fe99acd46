//! Plain-text and JSON renderings of a dashboard screen
//!
//! Used by the CLI and as the reference for what the UI shows: every card's
//! literal text plus the style values that follow the preferences.

use serde::Serialize;
use std::fmt::Write;

use crate::cards::{Activity, DietEntry, ProgressItem};
use crate::chart::PieChartData;
use crate::error::DashboardResult;
use crate::layout::{self, Dashboard, PickerStyle};
use crate::preferences::Preferences;

/// Width of the text progress bar, in characters
const BAR_WIDTH: usize = 20;

#[derive(Debug, Serialize)]
struct TileView<'a> {
    title: &'a str,
    value: &'a str,
    icon: &'a str,
    icon_color: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    chart: Option<PieChartData>,
}

#[derive(Debug, Serialize)]
struct WeightView {
    current_kg: f64,
    goal_kg: f64,
    progress_percent: f64,
    bar_value: f64,
}

#[derive(Debug, Serialize)]
struct Theme<'a> {
    accent: &'a str,
    accent_hex: &'a str,
    background: &'a str,
    background_hex: &'a str,
    sidebar_open: bool,
}

#[derive(Debug, Serialize)]
struct SnapshotView<'a> {
    layout: layout::Layout,
    picker: PickerStyle,
    theme: Theme<'a>,
    tiles: Vec<TileView<'a>>,
    progress: &'a [ProgressItem],
    activities: &'a [Activity],
    diet: &'a [DietEntry],
    #[serde(skip_serializing_if = "Option::is_none")]
    weight_goal: Option<WeightView>,
}

/// Serialize the screen as JSON
pub fn to_json(dashboard: &Dashboard, prefs: &Preferences, pretty: bool) -> DashboardResult<String> {
    let view = SnapshotView {
        layout: dashboard.layout,
        picker: dashboard.picker_style(),
        theme: Theme {
            accent: prefs.accent.name(),
            accent_hex: prefs.accent.hex(),
            background: prefs.background.name(),
            background_hex: prefs.background.hex(),
            sidebar_open: prefs.sidebar_open,
        },
        tiles: dashboard
            .tiles
            .iter()
            .map(|tile| TileView {
                title: tile.title,
                value: tile.value,
                icon: tile.icon.glyph(),
                icon_color: dashboard.icon_color(tile),
                chart: dashboard.chart_for(tile),
            })
            .collect(),
        progress: &dashboard.progress,
        activities: &dashboard.activities,
        diet: &dashboard.diet,
        weight_goal: dashboard.weight_goal.map(|goal| WeightView {
            current_kg: goal.current_kg(),
            goal_kg: goal.goal_kg(),
            progress_percent: goal.progress_percent(),
            bar_value: goal.bar_value(),
        }),
    };

    let json = if pretty {
        serde_json::to_string_pretty(&view)?
    } else {
        serde_json::to_string(&view)?
    };
    Ok(json)
}

/// Render the screen as plain text
pub fn to_text(dashboard: &Dashboard, prefs: &Preferences) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", layout::BRAND);
    let _ = writeln!(out, "{}", layout::MENU_ITEMS.join(" | "));
    let _ = writeln!(
        out,
        "Theme: {} on {}",
        prefs.accent.name(),
        prefs.background.name()
    );
    out.push('\n');

    let _ = writeln!(out, "== {} ==", layout::TITLE);
    for tile in &dashboard.tiles {
        let _ = writeln!(out, "{} {}: {}", tile.icon.glyph(), tile.title, tile.value);
        if let Some(chart) = dashboard.chart_for(tile) {
            let split: Vec<String> = chart
                .labels
                .iter()
                .zip(chart.datasets[0].data.iter())
                .map(|(label, value)| format!("{} {}%", label, value))
                .collect();
            let _ = writeln!(out, "    {}", split.join(", "));
        }
    }

    section(&mut out, layout::PROGRESS_HEADING);
    for item in &dashboard.progress {
        let _ = writeln!(out, "{}", item.heading());
        let _ = writeln!(out, "    {} {}%", bar(item.percent as f64), item.percent);
    }

    section(&mut out, layout::ACTIVITY_HEADING);
    for activity in &dashboard.activities {
        let _ = writeln!(out, "{:<20}{}", activity.name, activity.display_time());
    }

    section(&mut out, layout::DIET_HEADING);
    for entry in &dashboard.diet {
        let _ = writeln!(out, "{}", entry.meal);
        let _ = writeln!(out, "    {}", entry.items);
    }

    if let Some(goal) = dashboard.weight_goal {
        section(&mut out, layout::WEIGHT_HEADING);
        let _ = writeln!(out, "Weight Loss Goal");
        let _ = writeln!(out, "Current: {} kg", goal.current_kg());
        let _ = writeln!(out, "Goal: {} kg", goal.goal_kg());
        let _ = writeln!(out, "    {} {}", bar(goal.bar_value()), goal.percent_label());
    }

    out
}

fn section(out: &mut String, heading: &str) {
    let _ = writeln!(out, "\n== {} ==", heading);
}

fn bar(percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SwatchKind;
    use crate::layout::Layout;
    use crate::palette::ColorToken;

    #[test]
    fn test_text_contains_literals() {
        let dashboard = Dashboard::for_layout(Layout::Compact);
        let text = to_text(&dashboard, &Preferences::default());

        assert!(text.contains("Heart Rate: 75 bpm"));
        assert!(text.contains("Water Intake - 8 cups"));
        assert!(text.contains("Oatmeal, Bananas, Almonds"));
        assert!(text.contains("Morning Run"));
        assert!(text.contains("6:00 AM"));
        assert!(text.contains("Current: 70 kg"));
        assert!(text.contains("7.1%"));
    }

    #[test]
    fn test_text_charts_layout() {
        let dashboard = Dashboard::for_layout(Layout::Charts);
        let text = to_text(&dashboard, &Preferences::default());

        assert!(text.contains("Completed 70%, Remaining 30%"));
        assert!(!text.contains(layout::WEIGHT_HEADING));
    }

    #[test]
    fn test_color_change_leaves_text_unchanged() {
        let dashboard = Dashboard::for_layout(Layout::Charts);
        let before = Preferences::default();
        let mut after = before;
        after.select(SwatchKind::Accent, ColorToken::known("red.600"));
        after.select(SwatchKind::Background, ColorToken::known("blue.50"));

        let strip = |text: String| -> String {
            text.lines()
                .filter(|l| !l.starts_with("Theme:"))
                .collect::<Vec<_>>()
                .join("\n")
        };
        assert_eq!(
            strip(to_text(&dashboard, &before)),
            strip(to_text(&dashboard, &after))
        );
        assert!(to_text(&dashboard, &after).contains("Theme: red.600 on blue.50"));
    }

    #[test]
    fn test_json_export() {
        let dashboard = Dashboard::for_layout(Layout::Charts);
        let json = to_json(&dashboard, &Preferences::default(), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["layout"], "charts");
        assert_eq!(value["picker"], "buttons");
        assert_eq!(value["theme"]["accent_hex"], "#2C7A7B");
        assert_eq!(value["tiles"][0]["title"], "Heart Rate");
        assert_eq!(value["tiles"][0]["chart"]["datasets"][0]["data"][0], 70.0);
        assert_eq!(value["activities"][2]["time"], "10:00 AM");
        assert!(value.get("weight_goal").is_none());
    }

    #[test]
    fn test_json_compact_weight_goal() {
        let dashboard = Dashboard::for_layout(Layout::Compact);
        let json = to_json(&dashboard, &Preferences::default(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["weight_goal"]["progress_percent"], 7.1);
        assert!(value["tiles"][0].get("chart").is_none());
    }

    #[test]
    fn test_bar_rendering() {
        assert_eq!(bar(0.0), format!("[{}]", "-".repeat(20)));
        assert_eq!(bar(100.0), format!("[{}]", "#".repeat(20)));
        assert_eq!(bar(150.0), bar(100.0));
        assert_eq!(bar(50.0), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
    }
}
