//! Dashboard layouts
//!
//! Both layouts show the same literal cards. They differ in how stat tiles
//! are drawn, where the color pickers live and which colors they offer.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::cards::{self, Activity, DietEntry, ProgressItem, StatTile};
use crate::chart::PieChartData;
use crate::error::DashboardError;
use crate::goal::WeightGoal;
use crate::palette::Palette;

/// Brand shown at the top of the sidebar
pub const BRAND: &str = "Health Tracker";

/// Sidebar menu entries
pub const MENU_ITEMS: [&str; 3] = ["Dashboard", "Profile", "Settings"];

/// Section headings
pub const TITLE: &str = "Dashboard";
pub const PROGRESS_HEADING: &str = "Progress Tracking";
pub const ACTIVITY_HEADING: &str = "Activity Overview";
pub const DIET_HEADING: &str = "Recommended Diet";
pub const WEIGHT_HEADING: &str = "Weight Loss Goals";

/// Which dashboard variant to render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Pie chart in every tile, button pickers in the sidebar
    #[default]
    Charts,
    /// Icon tiles, select pickers above the tiles, weight-goal card
    Compact,
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layout::Charts => write!(f, "charts"),
            Layout::Compact => write!(f, "compact"),
        }
    }
}

impl FromStr for Layout {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "charts" => Ok(Layout::Charts),
            "compact" => Ok(Layout::Compact),
            _ => Err(DashboardError::UnknownLayout(s.to_string())),
        }
    }
}

/// How the color pickers are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PickerStyle {
    /// A row of buttons inside the sidebar
    Buttons,
    /// A dropdown above the stat tiles
    Select,
}

/// Everything one dashboard screen renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub layout: Layout,
    pub tiles: Vec<StatTile>,
    pub progress: Vec<ProgressItem>,
    pub activities: Vec<Activity>,
    pub diet: Vec<DietEntry>,
    pub weight_goal: Option<WeightGoal>,
    pub palette: Palette,
}

impl Dashboard {
    /// Assemble the literal sections for a layout
    pub fn for_layout(layout: Layout) -> Self {
        let (weight_goal, palette) = match layout {
            Layout::Charts => (None, Palette::buttons()),
            Layout::Compact => (Some(WeightGoal::sample()), Palette::select()),
        };

        Self {
            layout,
            tiles: cards::stat_tiles(),
            progress: cards::progress_items(),
            activities: cards::activities(),
            diet: cards::diet_entries(),
            weight_goal,
            palette,
        }
    }

    pub fn picker_style(&self) -> PickerStyle {
        match self.layout {
            Layout::Charts => PickerStyle::Buttons,
            Layout::Compact => PickerStyle::Select,
        }
    }

    /// Whether stat tiles carry a pie chart
    pub fn shows_charts(&self) -> bool {
        self.layout == Layout::Charts
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Chart dataset for a tile, `None` when the layout draws no charts
    pub fn chart_for(&self, tile: &StatTile) -> Option<PieChartData> {
        self.shows_charts().then(|| PieChartData::for_colors(&tile.colors))
    }

    /// Icon tint for a tile as a CSS color
    pub fn icon_color(&self, tile: &StatTile) -> &'static str {
        match self.layout {
            Layout::Charts => tile.colors[0],
            Layout::Compact => tile.icon_color.hex(),
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::for_layout(Layout::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_parse() {
        assert_eq!("charts".parse::<Layout>().unwrap(), Layout::Charts);
        assert_eq!(" Compact ".parse::<Layout>().unwrap(), Layout::Compact);
        assert!(matches!(
            "grid".parse::<Layout>(),
            Err(DashboardError::UnknownLayout(_))
        ));
        assert_eq!(Layout::Compact.to_string(), "compact");
    }

    #[test]
    fn test_charts_layout() {
        let dashboard = Dashboard::for_layout(Layout::Charts);
        assert_eq!(dashboard.picker_style(), PickerStyle::Buttons);
        assert!(dashboard.weight_goal.is_none());
        assert_eq!(dashboard.palette().accents.len(), 3);

        let tile = &dashboard.tiles[0];
        assert_eq!(dashboard.icon_color(tile), "#FF6384");
        let chart = dashboard.chart_for(tile).unwrap();
        assert_eq!(chart.datasets[0].background_color[0], "#FF6384");
    }

    #[test]
    fn test_compact_layout() {
        let dashboard = Dashboard::for_layout(Layout::Compact);
        assert_eq!(dashboard.picker_style(), PickerStyle::Select);
        assert_eq!(dashboard.weight_goal, Some(WeightGoal::sample()));
        assert_eq!(dashboard.palette().accents.len(), 5);

        let tile = &dashboard.tiles[1];
        assert!(dashboard.chart_for(tile).is_none());
        assert_eq!(dashboard.icon_color(tile), "#3182CE");
    }

    #[test]
    fn test_layouts_share_cards() {
        let charts = Dashboard::for_layout(Layout::Charts);
        let compact = Dashboard::for_layout(Layout::Compact);
        assert_eq!(charts.tiles, compact.tiles);
        assert_eq!(charts.progress, compact.progress);
        assert_eq!(charts.activities, compact.activities);
        assert_eq!(charts.diet, compact.diet);
    }
}
