//! Pie chart dataset and slice geometry
//!
//! The dataset mirrors the labeled-dataset shape charting libraries accept
//! (`labels` plus `datasets[].data` and color arrays), so it can be handed to
//! one as JSON. The UI draws it itself from [`PieChartData::slices`].

use serde::Serialize;
use std::f64::consts::PI;

/// Completed/remaining split shown in every tile
pub const SAMPLE_SPLIT: [f64; 2] = [70.0, 30.0];

/// Slice labels, in dataset order
pub const SLICE_LABELS: [&str; 2] = ["Completed", "Remaining"];

/// Alpha suffix appended to hex colors for the hover state
const HOVER_ALPHA: &str = "CC";

/// Slice color when a dataset carries no colors
const FALLBACK_COLOR: &str = "#CCCCCC";

/// One dataset of a pie chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieDataset {
    pub data: Vec<f64>,
    pub background_color: Vec<String>,
    pub hover_background_color: Vec<String>,
}

/// Chart input: labels plus datasets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<PieDataset>,
}

/// A drawn slice, angles in radians measured clockwise from 12 o'clock
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: String,
    pub hover_color: String,
}

impl Slice {
    fn contains_angle(&self, angle: f64) -> bool {
        angle >= self.start_angle && angle < self.end_angle
    }
}

/// Index of the slice under a point given relative to the pie center
/// (canvas coordinates, y grows downward). `None` outside the radius.
pub fn slice_at(slices: &[Slice], dx: f64, dy: f64, radius: f64) -> Option<usize> {
    if dx * dx + dy * dy > radius * radius {
        return None;
    }

    let mut angle = dy.atan2(dx);
    if angle < -PI / 2.0 {
        angle += 2.0 * PI;
    }
    slices.iter().position(|s| s.contains_angle(angle))
}

impl PieChartData {
    /// Dataset for a stat tile with the fixed 70/30 split
    pub fn for_colors(colors: &[&str]) -> Self {
        let background_color: Vec<String> = colors.iter().map(|c| c.to_string()).collect();
        let hover_background_color = background_color
            .iter()
            .map(|c| format!("{}{}", c, HOVER_ALPHA))
            .collect();

        Self {
            labels: SLICE_LABELS.iter().map(|l| l.to_string()).collect(),
            datasets: vec![PieDataset {
                data: SAMPLE_SPLIT.to_vec(),
                background_color,
                hover_background_color,
            }],
        }
    }

    /// Slices of the first dataset.
    ///
    /// Colors cycle when there are more values than colors. Non-positive or
    /// non-finite values get no slice; an all-zero dataset yields none.
    pub fn slices(&self) -> Vec<Slice> {
        let dataset = match self.datasets.first() {
            Some(d) => d,
            None => return Vec::new(),
        };

        let total: f64 = dataset
            .data
            .iter()
            .filter(|v| v.is_finite() && **v > 0.0)
            .sum();
        if total <= 0.0 {
            return Vec::new();
        }

        let mut angle = -PI / 2.0;
        let mut slices = Vec::with_capacity(dataset.data.len());

        for (idx, value) in dataset.data.iter().enumerate() {
            if !value.is_finite() || *value <= 0.0 {
                continue;
            }
            let sweep = value / total * 2.0 * PI;
            let color = pick(&dataset.background_color, idx);
            let hover_color = pick(&dataset.hover_background_color, idx);

            slices.push(Slice {
                label: self.labels.get(idx).cloned().unwrap_or_default(),
                value: *value,
                start_angle: angle,
                end_angle: angle + sweep,
                color,
                hover_color,
            });
            angle += sweep;
        }

        slices
    }
}

/// One legend row: a color swatch and its label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

impl PieChartData {
    /// Legend rows, one per label with the first dataset's colors.
    /// Labels whose value is zero are still listed.
    pub fn legend(&self) -> Vec<LegendEntry> {
        let colors = self
            .datasets
            .first()
            .map(|d| d.background_color.as_slice())
            .unwrap_or_default();

        self.labels
            .iter()
            .enumerate()
            .map(|(idx, label)| LegendEntry {
                label: label.clone(),
                color: pick(colors, idx),
            })
            .collect()
    }
}

fn pick(colors: &[String], idx: usize) -> String {
    if colors.is_empty() {
        FALLBACK_COLOR.to_string()
    } else {
        colors[idx % colors.len()].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_shape() {
        let data = PieChartData::for_colors(&["#FF6384", "#FFB6C1", "#FFC0CB"]);
        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(json["labels"], serde_json::json!(["Completed", "Remaining"]));
        assert_eq!(json["datasets"][0]["data"], serde_json::json!([70.0, 30.0]));
        assert_eq!(json["datasets"][0]["backgroundColor"][0], "#FF6384");
        assert_eq!(json["datasets"][0]["hoverBackgroundColor"][2], "#FFC0CBCC");
    }

    #[test]
    fn test_slices_split_full_circle() {
        let data = PieChartData::for_colors(&["#36A2EB", "#ADD8E6", "#87CEFA"]);
        let slices = data.slices();

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, "Completed");
        assert_eq!(slices[0].color, "#36A2EB");
        assert_eq!(slices[1].color, "#ADD8E6");
        assert_eq!(slices[1].hover_color, "#ADD8E6CC");
        assert_eq!(slices[1].value, 30.0);
        assert!((slices[0].start_angle + PI / 2.0).abs() < 1e-9);
        assert!((slices[0].end_angle - slices[0].start_angle - 0.7 * 2.0 * PI).abs() < 1e-9);
        assert!((slices[1].end_angle - 1.5 * PI).abs() < 1e-9);
    }

    #[test]
    fn test_slices_skip_empty_values() {
        let mut data = PieChartData::for_colors(&["#111111"]);
        data.datasets[0].data = vec![0.0, 5.0];
        let slices = data.slices();
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].label, "Remaining");
        assert_eq!(slices[0].color, "#111111");

        data.datasets[0].data = vec![0.0, 0.0];
        assert!(data.slices().is_empty());
    }

    #[test]
    fn test_legend_lists_every_label() {
        let mut data = PieChartData::for_colors(&["#4BC0C0", "#AFEEEE", "#E0FFFF"]);
        data.datasets[0].data = vec![0.0, 5.0];

        let legend = data.legend();
        assert_eq!(legend.len(), 2);
        assert_eq!(legend[0].label, "Completed");
        assert_eq!(legend[0].color, "#4BC0C0");
        assert_eq!(legend[1].color, "#AFEEEE");

        data.datasets.clear();
        assert_eq!(data.legend()[1].color, FALLBACK_COLOR);
    }

    #[test]
    fn test_slice_hit_testing() {
        let slices = PieChartData::for_colors(&["#FFA500", "#FFD700", "#FFB347"]).slices();

        // Right of center: a quarter turn past 12 o'clock, inside the 70% slice
        assert_eq!(slice_at(&slices, 10.0, 0.0, 40.0), Some(0));
        // Straight below: half a turn
        assert_eq!(slice_at(&slices, 0.0, 10.0, 40.0), Some(0));
        // Left of center: three quarters, inside the 30% slice
        assert_eq!(slice_at(&slices, -10.0, 0.0, 40.0), Some(1));
        // Just left of 12 o'clock wraps to the end of the circle
        assert_eq!(slice_at(&slices, -1.0, -20.0, 40.0), Some(1));
        // Outside the radius
        assert_eq!(slice_at(&slices, 50.0, 0.0, 40.0), None);
    }
}
