//! Color tokens and the swatches offered by the preference pickers
//!
//! Tokens use the `hue.shade` notation (`teal.600`) or a bare name (`white`).
//! Every token resolves to an inlined hex literal; there is no generated scale.

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use crate::error::{DashboardError, SwatchKind};

/// Known tokens and their hex values
const COLOR_TABLE: &[(&str, &str)] = &[
    ("white", "#FFFFFF"),
    ("black", "#000000"),
    ("gray.50", "#F7FAFC"),
    ("gray.500", "#718096"),
    ("gray.600", "#4A5568"),
    ("red.500", "#E53E3E"),
    ("red.600", "#C53030"),
    ("orange.50", "#FFFAF0"),
    ("orange.500", "#DD6B20"),
    ("orange.600", "#C05621"),
    ("yellow.50", "#FFFFF0"),
    ("green.500", "#38A169"),
    ("green.600", "#2F855A"),
    ("teal.500", "#319795"),
    ("teal.600", "#2C7A7B"),
    ("blue.50", "#EBF8FF"),
    ("blue.500", "#3182CE"),
    ("blue.600", "#2B6CB0"),
];

/// A named palette color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct ColorToken {
    name: &'static str,
    hex: &'static str,
}

impl ColorToken {
    /// Look up a token in the color table
    pub fn lookup(token: &str) -> Option<Self> {
        COLOR_TABLE
            .iter()
            .find(|(name, _)| *name == token)
            .map(|&(name, hex)| Self { name, hex })
    }

    /// Look up a token that is known to be in the table.
    /// Only used for compiled-in literals.
    pub(crate) fn known(token: &'static str) -> Self {
        match Self::lookup(token) {
            Some(color) => color,
            None => panic!("color {token} missing from COLOR_TABLE"),
        }
    }

    /// Full token, e.g. `teal.600`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Hue part of the token, e.g. `teal`
    pub fn hue(&self) -> &'static str {
        self.name.split('.').next().unwrap_or(self.name)
    }

    /// CSS hex value
    pub fn hex(&self) -> &'static str {
        self.hex
    }
}

impl FromStr for ColorToken {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s.trim()).ok_or_else(|| DashboardError::UnknownColor(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for ColorToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

impl From<ColorToken> for String {
    fn from(token: ColorToken) -> Self {
        token.name.to_string()
    }
}

impl std::fmt::Display for ColorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One selectable option in a picker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swatch {
    pub token: ColorToken,
    pub label: &'static str,
}

impl Swatch {
    /// Swatch labelled with its hue name (`teal.600` -> `teal`)
    pub(crate) fn hue_labelled(token: &'static str) -> Self {
        let token = ColorToken::known(token);
        Self {
            token,
            label: token.hue(),
        }
    }

    /// Swatch with an explicit human label
    pub(crate) fn labelled(token: &'static str, label: &'static str) -> Self {
        Self {
            token: ColorToken::known(token),
            label,
        }
    }

    /// Style for the button-row picker
    pub fn button_style(&self, kind: SwatchKind, selected: bool) -> ButtonStyle {
        let (text, highlight) = match kind {
            SwatchKind::Accent => ("#FFFFFF", "#FFFFFF"),
            SwatchKind::Background => ("#000000", "#000000"),
        };

        if selected {
            ButtonStyle {
                variant: ButtonVariant::Solid,
                background: self.token.hex(),
                text,
                border_width_px: 2,
                border_color: highlight,
            }
        } else {
            ButtonStyle {
                variant: ButtonVariant::Outline,
                background: self.token.hex(),
                text,
                border_width_px: 1,
                border_color: self.token.hex(),
            }
        }
    }
}

/// Visual variant of a picker button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Solid,
    Outline,
}

/// Resolved style of a picker button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonStyle {
    pub variant: ButtonVariant,
    pub background: &'static str,
    pub text: &'static str,
    pub border_width_px: u8,
    pub border_color: &'static str,
}

impl ButtonStyle {
    /// Inline CSS for the button
    pub fn to_css(&self) -> String {
        format!(
            "background-color: {}; color: {}; border: {}px solid {};",
            self.background, self.text, self.border_width_px, self.border_color
        )
    }
}

/// Accent and background options for a layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    pub accents: Vec<Swatch>,
    pub backgrounds: Vec<Swatch>,
}

impl Palette {
    /// Three-button palette shown in the sidebar
    pub fn buttons() -> Self {
        Self {
            accents: ["teal.600", "blue.600", "red.600"]
                .into_iter()
                .map(Swatch::hue_labelled)
                .collect(),
            backgrounds: ["gray.50", "blue.50", "orange.50"]
                .into_iter()
                .map(Swatch::hue_labelled)
                .collect(),
        }
    }

    /// Five-option palette shown in the select controls
    pub fn select() -> Self {
        Self {
            accents: vec![
                Swatch::labelled("teal.600", "Teal"),
                Swatch::labelled("blue.600", "Blue"),
                Swatch::labelled("orange.600", "Orange"),
                Swatch::labelled("red.600", "Red"),
                Swatch::labelled("green.600", "Green"),
            ],
            backgrounds: vec![
                Swatch::labelled("gray.50", "Light Gray"),
                Swatch::labelled("white", "White"),
                Swatch::labelled("blue.50", "Light Blue"),
                Swatch::labelled("orange.50", "Light Orange"),
                Swatch::labelled("yellow.50", "Light Yellow"),
            ],
        }
    }

    /// Swatches offered for a preference
    pub fn swatches(&self, kind: SwatchKind) -> &[Swatch] {
        match kind {
            SwatchKind::Accent => &self.accents,
            SwatchKind::Background => &self.backgrounds,
        }
    }

    /// Check that a token is offered for a preference
    pub fn ensure_offered(&self, kind: SwatchKind, token: ColorToken) -> Result<(), DashboardError> {
        if self.swatches(kind).iter().any(|s| s.token == token) {
            Ok(())
        } else {
            Err(DashboardError::NotInPalette {
                token: token.to_string(),
                kind,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_parts() {
        let teal: ColorToken = "teal.600".parse().unwrap();
        assert_eq!(teal.hue(), "teal");
        assert_eq!(teal.hex(), "#2C7A7B");

        let white: ColorToken = "white".parse().unwrap();
        assert_eq!(white.hue(), "white");
    }

    #[test]
    fn test_unknown_token() {
        let err = "purple.600".parse::<ColorToken>().unwrap_err();
        assert_eq!(err, DashboardError::UnknownColor("purple.600".to_string()));
    }

    #[test]
    fn test_token_serde_as_string() {
        let token = ColorToken::known("blue.50");
        assert_eq!(serde_json::to_string(&token).unwrap(), "\"blue.50\"");

        let parsed: ColorToken = serde_json::from_str("\"orange.600\"").unwrap();
        assert_eq!(parsed.name(), "orange.600");

        assert!(serde_json::from_str::<ColorToken>("\"magenta\"").is_err());
    }

    #[test]
    fn test_button_palette_labels() {
        let palette = Palette::buttons();
        let labels: Vec<_> = palette.accents.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["teal", "blue", "red"]);

        let labels: Vec<_> = palette.backgrounds.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["gray", "blue", "orange"]);
    }

    #[test]
    fn test_select_palette_offers_five() {
        let palette = Palette::select();
        assert_eq!(palette.accents.len(), 5);
        assert_eq!(palette.backgrounds.len(), 5);
        assert_eq!(palette.backgrounds[1].token.name(), "white");
        assert_eq!(palette.backgrounds[1].label, "White");
    }

    #[test]
    fn test_ensure_offered() {
        let palette = Palette::buttons();
        let green = ColorToken::known("green.600");

        assert!(palette
            .ensure_offered(SwatchKind::Accent, ColorToken::known("red.600"))
            .is_ok());
        assert!(matches!(
            palette.ensure_offered(SwatchKind::Accent, green),
            Err(DashboardError::NotInPalette { kind: SwatchKind::Accent, .. })
        ));
        assert!(Palette::select().ensure_offered(SwatchKind::Accent, green).is_ok());
    }

    #[test]
    fn test_button_style_selected_vs_idle() {
        let swatch = Swatch::hue_labelled("blue.600");

        let selected = swatch.button_style(SwatchKind::Accent, true);
        assert_eq!(selected.variant, ButtonVariant::Solid);
        assert_eq!(selected.border_width_px, 2);
        assert_eq!(selected.border_color, "#FFFFFF");

        let idle = swatch.button_style(SwatchKind::Accent, false);
        assert_eq!(idle.variant, ButtonVariant::Outline);
        assert_eq!(idle.border_width_px, 1);
        assert_eq!(idle.border_color, "#2B6CB0");

        let bg = Swatch::hue_labelled("gray.50").button_style(SwatchKind::Background, true);
        assert_eq!(bg.text, "#000000");
        assert_eq!(bg.border_color, "#000000");
        assert_eq!(
            bg.to_css(),
            "background-color: #F7FAFC; color: #000000; border: 2px solid #000000;"
        );
    }
}
