//! Session-local UI preferences
//!
//! Accent color, background color and whether the sidebar is open on small
//! screens. Nothing here is persisted; a reload starts from the configured
//! defaults again.

use serde::Serialize;

use crate::error::{DashboardResult, SwatchKind};
use crate::palette::{ColorToken, Palette};

/// Current preference values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preferences {
    pub accent: ColorToken,
    pub background: ColorToken,
    pub sidebar_open: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            accent: ColorToken::known("teal.600"),
            background: ColorToken::known("gray.50"),
            sidebar_open: false,
        }
    }
}

impl Preferences {
    /// Build preferences, checking both colors against the palette
    pub fn new(
        palette: &Palette,
        accent: ColorToken,
        background: ColorToken,
        sidebar_open: bool,
    ) -> DashboardResult<Self> {
        palette.ensure_offered(SwatchKind::Accent, accent)?;
        palette.ensure_offered(SwatchKind::Background, background)?;
        Ok(Self {
            accent,
            background,
            sidebar_open,
        })
    }

    /// Currently selected token for a preference
    pub fn selected(&self, kind: SwatchKind) -> ColorToken {
        match kind {
            SwatchKind::Accent => self.accent,
            SwatchKind::Background => self.background,
        }
    }

    /// Select a color, leaving the other preference and the sidebar alone
    pub fn select(&mut self, kind: SwatchKind, token: ColorToken) {
        tracing::debug!(%kind, %token, "color selected");
        match kind {
            SwatchKind::Accent => self.accent = token,
            SwatchKind::Background => self.background = token,
        }
    }

    /// Select a color by name, as it arrives from a `<select>` element.
    /// Tokens the palette does not offer leave the preferences unchanged.
    pub fn select_named(&mut self, palette: &Palette, kind: SwatchKind, name: &str) -> DashboardResult<()> {
        let token: ColorToken = name.parse()?;
        palette.ensure_offered(kind, token)?;
        self.select(kind, token);
        Ok(())
    }

    /// Flip sidebar visibility on small screens
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Whether the sidebar is shown. Always shown on wide screens.
    pub fn sidebar_visible(&self, is_mobile: bool) -> bool {
        !is_mobile || self.sidebar_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.accent.name(), "teal.600");
        assert_eq!(prefs.background.name(), "gray.50");
        assert!(!prefs.sidebar_open);
    }

    #[test]
    fn test_select_touches_only_its_property() {
        let mut prefs = Preferences::default();
        prefs.select(SwatchKind::Accent, ColorToken::known("red.600"));

        assert_eq!(prefs.accent.name(), "red.600");
        assert_eq!(prefs.background, Preferences::default().background);
        assert!(!prefs.sidebar_open);

        prefs.select(SwatchKind::Background, ColorToken::known("orange.50"));
        assert_eq!(prefs.accent.name(), "red.600");
        assert_eq!(prefs.selected(SwatchKind::Background).name(), "orange.50");
    }

    #[test]
    fn test_select_named_validates() {
        let palette = Palette::buttons();
        let mut prefs = Preferences::default();

        prefs.select_named(&palette, SwatchKind::Accent, "blue.600").unwrap();
        assert_eq!(prefs.accent.name(), "blue.600");

        let err = prefs
            .select_named(&palette, SwatchKind::Background, "white")
            .unwrap_err();
        assert!(matches!(err, DashboardError::NotInPalette { .. }));
        assert_eq!(prefs.background.name(), "gray.50");

        assert!(prefs.select_named(&palette, SwatchKind::Accent, "nope").is_err());
        assert_eq!(prefs.accent.name(), "blue.600");
    }

    #[test]
    fn test_toggle_flips_one_flag() {
        let mut prefs = Preferences::default();
        let before = prefs;

        prefs.toggle_sidebar();
        assert!(prefs.sidebar_open);
        assert_eq!(prefs.accent, before.accent);
        assert_eq!(prefs.background, before.background);

        prefs.toggle_sidebar();
        assert_eq!(prefs, before);
    }

    #[test]
    fn test_sidebar_visibility() {
        let mut prefs = Preferences::default();
        assert!(prefs.sidebar_visible(false));
        assert!(!prefs.sidebar_visible(true));

        prefs.toggle_sidebar();
        assert!(prefs.sidebar_visible(true));
    }

    #[test]
    fn test_new_rejects_unoffered_colors() {
        let palette = Palette::buttons();
        let ok = Preferences::new(
            &palette,
            ColorToken::known("blue.600"),
            ColorToken::known("blue.50"),
            true,
        );
        assert!(ok.is_ok());

        let bad = Preferences::new(
            &palette,
            ColorToken::known("green.600"),
            ColorToken::known("gray.50"),
            false,
        );
        assert!(bad.is_err());
    }
}
