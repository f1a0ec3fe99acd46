//! Dashboard State
//!
//! Reactive wrapper around the preferences using Leptos signals.

use leptos::*;
use vitals::{ColorToken, Config, Dashboard, Preferences, SwatchKind};

/// Config compiled into the app
const EMBEDDED_CONFIG: &str = include_str!("../../dashboard.toml");

/// Widths below this are treated as mobile (the `md` breakpoint)
pub const MD_BREAKPOINT_PX: f64 = 768.0;

/// State provided to all components
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Literal cards and palette for the configured layout
    pub dashboard: StoredValue<Dashboard>,
    /// Accent, background and sidebar state
    pub preferences: RwSignal<Preferences>,
    /// Whether the viewport is below the `md` breakpoint
    pub is_mobile: RwSignal<bool>,
}

impl DashboardState {
    /// Select a color from the palette
    pub fn select(&self, kind: SwatchKind, token: ColorToken) {
        self.preferences.update(|p| p.select(kind, token));
    }

    /// Select a color by token name, as delivered by a `<select>`
    pub fn select_named(&self, kind: SwatchKind, name: &str) {
        let result = self.dashboard.with_value(|dashboard| {
            let mut prefs = self.preferences.get_untracked();
            prefs
                .select_named(dashboard.palette(), kind, name)
                .map(|_| prefs)
        });

        match result {
            Ok(prefs) => self.preferences.set(prefs),
            Err(e) => web_sys::console::warn_1(&format!("Ignoring color choice: {}", e).into()),
        }
    }

    /// Flip sidebar visibility on small screens
    pub fn toggle_sidebar(&self) {
        self.preferences.update(|p| p.toggle_sidebar());
    }

    /// Whether the sidebar is shown (tracks both signals)
    pub fn sidebar_visible(&self) -> bool {
        self.preferences.get().sidebar_visible(self.is_mobile.get())
    }

    /// Current accent hex (tracked)
    pub fn accent_hex(&self) -> &'static str {
        self.preferences.get().accent.hex()
    }

    /// Current background hex (tracked)
    pub fn background_hex(&self) -> &'static str {
        self.preferences.get().background.hex()
    }
}

/// Whether a viewport width counts as mobile
pub fn is_mobile_width(width: f64) -> bool {
    width < MD_BREAKPOINT_PX
}

fn viewport_is_mobile() -> bool {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .map(is_mobile_width)
        .unwrap_or(false)
}

/// Load the embedded config, falling back to defaults
fn load_config() -> (Dashboard, Preferences) {
    let config = match Config::from_toml_str(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::error_1(&format!("Invalid dashboard.toml: {}", e).into());
            Config::default()
        }
    };

    let preferences = match config.initial_preferences() {
        Ok(prefs) => prefs,
        Err(e) => {
            web_sys::console::error_1(&format!("Invalid initial colors: {}", e).into());
            Preferences::default()
        }
    };

    (config.dashboard(), preferences)
}

/// Provide dashboard state to the component tree
pub fn provide_dashboard_state() {
    let (dashboard, preferences) = load_config();

    let state = DashboardState {
        dashboard: store_value(dashboard),
        preferences: create_rw_signal(preferences),
        is_mobile: create_rw_signal(viewport_is_mobile()),
    };

    let is_mobile = state.is_mobile;
    let _resize = window_event_listener(ev::resize, move |_| {
        let mobile = viewport_is_mobile();
        if mobile != is_mobile.get_untracked() {
            is_mobile.set(mobile);
        }
    });

    provide_context(state);
}

/// Fetch the dashboard state from context
pub fn use_dashboard_state() -> DashboardState {
    use_context::<DashboardState>().expect("DashboardState not found")
}
