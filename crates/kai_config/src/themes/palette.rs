//! Theme colour palettes.
//!
//! A palette is grouped into six sections mirroring the CSS custom
//! properties the UI exposes (`--color-bg-*`, `--color-text-*`, ...).
//! Colours are kept as CSS strings.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::LazyLock;

/// `#rgb` or `#rrggbb`.
static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("hex colour pattern is valid")
});

/// `rgb(`, `rgba(`, `hsl(` or `hsla(` prefixes.
static FUNCTIONAL_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(rgba?|hsla?)\(").expect("functional colour pattern is valid")
});

const COLOR_KEYWORDS: &[&str] = &["transparent", "currentColor", "inherit", "initial", "unset"];

/// Full colour palette of a theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColorPalette {
    pub background: BackgroundColors,
    pub text: TextColors,
    pub border: BorderColors,
    pub status: StatusColors,
    pub interactive: InteractiveColors,
    pub shadow: ShadowStyles,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundColors {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
    pub accent: String,
    pub surface: String,
    pub overlay: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextColors {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
    pub disabled: String,
    pub inverse: String,
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub focus: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusColors {
    pub success: String,
    pub warning: String,
    pub error: String,
    pub info: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractiveColors {
    pub primary: String,
    pub primary_hover: String,
    pub primary_active: String,
    pub secondary: String,
    pub secondary_hover: String,
    pub secondary_active: String,
}

/// CSS `box-shadow` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowStyles {
    pub small: String,
    pub medium: String,
    pub large: String,
}

impl ThemeColorPalette {
    /// Palette of the built-in dark theme.
    pub fn default_dark() -> Self {
        Self {
            background: BackgroundColors {
                primary: "#0f0f23".into(),
                secondary: "#1a1a2e".into(),
                tertiary: "#2a2d47".into(),
                accent: "#4ecdc4".into(),
                surface: "#1e1e3f".into(),
                overlay: "rgba(15, 15, 35, 0.95)".into(),
            },
            text: TextColors {
                primary: "#f8fafc".into(),
                secondary: "#cbd5e1".into(),
                tertiary: "#94a3b8".into(),
                disabled: "#64748b".into(),
                inverse: "#1a1a2e".into(),
                accent: "#4ecdc4".into(),
            },
            border: BorderColors {
                primary: "#374151".into(),
                secondary: "#4b5563".into(),
                accent: "#4ecdc4".into(),
                focus: "#6ee7b7".into(),
            },
            status: StatusColors {
                success: "#10b981".into(),
                warning: "#f59e0b".into(),
                error: "#ef4444".into(),
                info: "#06b6d4".into(),
            },
            interactive: InteractiveColors {
                primary: "#4ecdc4".into(),
                primary_hover: "#3fb3b1".into(),
                primary_active: "#2d9490".into(),
                secondary: "#8b5cf6".into(),
                secondary_hover: "#7c3aed".into(),
                secondary_active: "#6d28d9".into(),
            },
            shadow: ShadowStyles {
                small: "0 1px 3px 0 rgba(0, 0, 0, 0.12), 0 1px 2px 0 rgba(0, 0, 0, 0.08)".into(),
                medium: "0 4px 6px -1px rgba(0, 0, 0, 0.12), 0 2px 4px -1px rgba(0, 0, 0, 0.08)"
                    .into(),
                large: "0 10px 15px -3px rgba(0, 0, 0, 0.12), 0 4px 6px -2px rgba(0, 0, 0, 0.06)"
                    .into(),
            },
        }
    }

    /// Palette of the built-in light theme.
    pub fn default_light() -> Self {
        Self {
            background: BackgroundColors {
                primary: "#ffffff".into(),
                secondary: "#f8fafc".into(),
                tertiary: "#f1f5f9".into(),
                accent: "#0891b2".into(),
                surface: "#ffffff".into(),
                overlay: "rgba(248, 250, 252, 0.95)".into(),
            },
            text: TextColors {
                primary: "#0f172a".into(),
                secondary: "#475569".into(),
                tertiary: "#64748b".into(),
                disabled: "#94a3b8".into(),
                inverse: "#ffffff".into(),
                accent: "#0891b2".into(),
            },
            border: BorderColors {
                primary: "#e2e8f0".into(),
                secondary: "#cbd5e1".into(),
                accent: "#0891b2".into(),
                focus: "#059669".into(),
            },
            status: StatusColors {
                success: "#059669".into(),
                warning: "#d97706".into(),
                error: "#dc2626".into(),
                info: "#0284c7".into(),
            },
            interactive: InteractiveColors {
                primary: "#0891b2".into(),
                primary_hover: "#0e7490".into(),
                primary_active: "#164e63".into(),
                secondary: "#7c3aed".into(),
                secondary_hover: "#6d28d9".into(),
                secondary_active: "#5b21b6".into(),
            },
            shadow: ShadowStyles {
                small: "0 1px 3px 0 rgba(0, 0, 0, 0.1), 0 1px 2px 0 rgba(0, 0, 0, 0.06)".into(),
                medium: "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)"
                    .into(),
                large: "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)"
                    .into(),
            },
        }
    }

    /// Default palette for a dark or light theme.
    pub fn default_for(is_dark: bool) -> Self {
        if is_dark {
            Self::default_dark()
        } else {
            Self::default_light()
        }
    }

    /// Whether the primary background reads as dark.
    ///
    /// Uses perceived brightness `(299r + 587g + 114b) / 1000 < 128`.
    /// Backgrounds that are not six-digit hex are treated as dark.
    pub fn is_dark(&self) -> bool {
        is_dark_color(&self.background.primary)
    }

    /// Lays a sparse palette document over this palette.
    ///
    /// Sections present in `partial` are merged key by key; omitted
    /// sections and colours keep this palette's values.
    ///
    /// # Errors
    ///
    /// Fails if a supplied section or colour has the wrong JSON type.
    pub fn overlaid_with(&self, partial: &Value) -> Result<Self, serde_json::Error> {
        let mut merged = serde_json::to_value(self)?;
        if let (Some(target), Some(source)) = (merged.as_object_mut(), partial.as_object()) {
            for (section, colors) in source {
                let Some(colors) = colors.as_object() else {
                    target.insert(section.clone(), colors.clone());
                    continue;
                };
                if let Some(existing) = target.get_mut(section).and_then(Value::as_object_mut) {
                    for (key, color) in colors {
                        existing.insert(key.clone(), color.clone());
                    }
                }
            }
        }
        serde_json::from_value(merged)
    }
}

/// Whether a background colour reads as dark.
///
/// Colours that are not six-digit hex count as dark.
pub fn is_dark_color(color: &str) -> bool {
    match hex_to_rgb(color) {
        Some((r, g, b)) => {
            let brightness = (u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000;
            brightness < 128
        }
        None => true,
    }
}

/// Whether `color` is a CSS colour the theme system accepts.
pub fn is_valid_color(color: &str) -> bool {
    HEX_COLOR.is_match(color) || FUNCTIONAL_COLOR.is_match(color) || COLOR_KEYWORDS.contains(&color)
}

/// Parses `#rrggbb` (the leading `#` is optional).
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
#[path = "palette_tests.rs"]
mod tests;
