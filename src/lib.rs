//! # Vitals
//!
//! Health tracking dashboard. This crate holds everything the screen shows
//! and the little state it keeps, independent of how it is drawn:
//!
//! - [`cards`]: literal stat tiles, progress rows, activities and meals
//! - [`palette`]: color tokens and the swatches the pickers offer
//! - [`preferences`]: session-local accent, background and sidebar state
//! - [`goal`]: weight-loss percentage
//! - [`chart`]: pie dataset and slice geometry
//! - [`layout`]: the two dashboard variants
//! - [`snapshot`]: text and JSON renderings
//! - [`config`]: TOML configuration with environment overrides
//!
//! The Leptos frontend in `vitals-ui` and the `vitals` CLI both build on it.
//!
//! ## Quick Start
//!
//! ```rust
//! use vitals::{Dashboard, Layout, Preferences, SwatchKind};
//!
//! let dashboard = Dashboard::for_layout(Layout::Charts);
//! let mut prefs = Preferences::default();
//!
//! prefs
//!     .select_named(dashboard.palette(), SwatchKind::Accent, "blue.600")
//!     .unwrap();
//!
//! let text = vitals::snapshot::to_text(&dashboard, &prefs);
//! assert!(text.contains("Heart Rate: 75 bpm"));
//! ```

pub mod cards;
pub mod chart;
pub mod config;
pub mod error;
pub mod goal;
pub mod layout;
pub mod palette;
pub mod preferences;
pub mod snapshot;

pub use cards::{Activity, DietEntry, Icon, ProgressItem, StatTile};
pub use chart::{slice_at, LegendEntry, PieChartData, PieDataset, Slice};
pub use config::{generate_default_config, Config, ConfigError, DashboardConfig, LoggingConfig};
pub use error::{DashboardError, DashboardResult, SwatchKind};
pub use goal::WeightGoal;
pub use layout::{Dashboard, Layout, PickerStyle};
pub use palette::{ButtonStyle, ButtonVariant, ColorToken, Palette, Swatch};
pub use preferences::Preferences;
