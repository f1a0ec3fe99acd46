//! Weight-loss goal arithmetic

use serde::Serialize;

use crate::error::{DashboardError, DashboardResult};

/// Current and target body weight, in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightGoal {
    current_kg: f64,
    goal_kg: f64,
}

impl WeightGoal {
    /// Build a goal.
    ///
    /// The current weight must be finite and strictly positive, the goal
    /// finite and non-negative; anything else would make the percentage
    /// undefined.
    pub fn new(current_kg: f64, goal_kg: f64) -> DashboardResult<Self> {
        let current_ok = current_kg.is_finite() && current_kg > 0.0;
        let goal_ok = goal_kg.is_finite() && goal_kg >= 0.0;

        if !current_ok || !goal_ok {
            tracing::warn!(current_kg, goal_kg, "rejecting weight goal");
            return Err(DashboardError::InvalidWeight {
                current: current_kg,
                goal: goal_kg,
            });
        }

        Ok(Self { current_kg, goal_kg })
    }

    /// The goal shown on the compact dashboard
    pub fn sample() -> Self {
        Self { current_kg: 70.0, goal_kg: 65.0 }
    }

    pub fn current_kg(&self) -> f64 {
        self.current_kg
    }

    pub fn goal_kg(&self) -> f64 {
        self.goal_kg
    }

    /// Share of the current weight still to lose, in percent, rounded to one
    /// decimal. Negative when the goal is above the current weight.
    pub fn progress_percent(&self) -> f64 {
        let raw = (self.current_kg - self.goal_kg) / self.current_kg * 100.0;
        let rounded = (raw * 10.0).round() / 10.0;
        // a tiny negative rounds to -0.0, which formats as "-0.0"
        if rounded == 0.0 {
            0.0
        } else {
            rounded
        }
    }

    /// Progress bar fill, clamped to 0-100
    pub fn bar_value(&self) -> f64 {
        self.progress_percent().clamp(0.0, 100.0)
    }

    /// Percentage label, e.g. `7.1%`
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.progress_percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_percentage() {
        let goal = WeightGoal::new(70.0, 65.0).unwrap();
        assert_eq!(goal.progress_percent(), 7.1);
        assert_eq!(goal.percent_label(), "7.1%");
        assert_eq!(goal, WeightGoal::sample());
    }

    #[test]
    fn test_zero_current_weight_rejected() {
        let err = WeightGoal::new(0.0, 65.0).unwrap_err();
        assert_eq!(err, DashboardError::InvalidWeight { current: 0.0, goal: 65.0 });
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(WeightGoal::new(f64::NAN, 65.0).is_err());
        assert!(WeightGoal::new(70.0, f64::INFINITY).is_err());
        assert!(WeightGoal::new(-70.0, 65.0).is_err());
        assert!(WeightGoal::new(70.0, -1.0).is_err());
    }

    #[test]
    fn test_goal_above_current() {
        let goal = WeightGoal::new(60.0, 66.0).unwrap();
        assert_eq!(goal.progress_percent(), -10.0);
        assert_eq!(goal.bar_value(), 0.0);
    }

    #[test]
    fn test_goal_reached_zero() {
        let goal = WeightGoal::new(80.0, 0.0).unwrap();
        assert_eq!(goal.progress_percent(), 100.0);
        assert_eq!(goal.bar_value(), 100.0);

        let goal = WeightGoal::new(65.0, 65.0).unwrap();
        assert_eq!(goal.progress_percent(), 0.0);
    }

    #[test]
    fn test_no_negative_zero_label() {
        let goal = WeightGoal::new(70.0, 70.01).unwrap();
        assert!(goal.progress_percent().is_sign_positive());
        assert_eq!(goal.percent_label(), "0.0%");
        assert_eq!(goal.bar_value(), 0.0);
    }
}
