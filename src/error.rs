//! Dashboard error types
//!
//! The literal cards themselves never fail. These cover the few places where
//! a value comes from outside the binary: config files, CLI flags and the
//! weight-goal arithmetic.

use thiserror::Error;

/// Which preference a palette lookup was made for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwatchKind {
    Accent,
    Background,
}

impl std::fmt::Display for SwatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwatchKind::Accent => write!(f, "accent"),
            SwatchKind::Background => write!(f, "background"),
        }
    }
}

/// Errors that can occur while building or reconfiguring the dashboard
#[derive(Error, Debug, PartialEq)]
pub enum DashboardError {
    /// Token is not of the form `hue.shade` or a known bare color
    #[error("Unknown color token: {0}")]
    UnknownColor(String),

    /// Token is valid but the current layout does not offer it
    #[error("Color {token} is not in the {kind} palette")]
    NotInPalette { token: String, kind: SwatchKind },

    /// Weight pair the goal percentage cannot be computed for
    #[error("Invalid weight goal: current={current} kg, goal={goal} kg")]
    InvalidWeight { current: f64, goal: f64 },

    /// Unrecognized layout name
    #[error("Unknown layout: {0} (expected charts or compact)")]
    UnknownLayout(String),

    /// JSON encoding failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Serialization(err.to_string())
    }
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashboardError::UnknownColor("purple".to_string());
        assert_eq!(err.to_string(), "Unknown color token: purple");

        let err = DashboardError::NotInPalette {
            token: "green.600".to_string(),
            kind: SwatchKind::Accent,
        };
        assert_eq!(err.to_string(), "Color green.600 is not in the accent palette");

        let err = DashboardError::InvalidWeight { current: 0.0, goal: 65.0 };
        assert_eq!(err.to_string(), "Invalid weight goal: current=0 kg, goal=65 kg");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: DashboardError = json_err.into();
        assert!(matches!(err, DashboardError::Serialization(_)));
    }
}
