//! State Management
//!
//! Session-local dashboard state shared through context.

pub mod global;

pub use global::{provide_dashboard_state, use_dashboard_state};
