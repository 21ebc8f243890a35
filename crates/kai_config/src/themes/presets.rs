//! Palette presets.
//!
//! A preset only specifies the colours that give it its character; every
//! other colour comes from the default dark or light palette.

use super::palette::{
    BackgroundColors, InteractiveColors, StatusColors, TextColors, ThemeColorPalette,
};

/// Named starting point for a custom theme.
#[derive(Debug, Clone, Copy)]
pub struct ThemePreset {
    /// Slug, e.g. `dark-mode-elite`. Matches `theme.defaultColorScheme`.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub is_dark: bool,
    colors: fn(ThemeColorPalette) -> ThemeColorPalette,
}

impl ThemePreset {
    /// The complete palette: the preset's colours over the matching default.
    pub fn palette(&self) -> ThemeColorPalette {
        (self.colors)(ThemeColorPalette::default_for(self.is_dark))
    }
}

/// All presets, dark first.
pub const THEME_PRESETS: &[ThemePreset] = &[
    ThemePreset {
        id: "dark-mode-elite",
        name: "Dark Mode Elite",
        description: "Premium dark experience with sophisticated contrast",
        is_dark: true,
        colors: dark_mode_elite,
    },
    ThemePreset {
        id: "neon-brights",
        name: "Neon Brights",
        description: "Vibrant French Rose, Valentino, and Burnt Sienna energy",
        is_dark: true,
        colors: neon_brights,
    },
    ThemePreset {
        id: "teal-wave",
        name: "Teal Wave",
        description: "Modern teal-focused palette following 2025 color trends",
        is_dark: true,
        colors: teal_wave,
    },
    ThemePreset {
        id: "earth-tones",
        name: "Earth Tones",
        description: "Natural Aqua Forest, Saffron Mango, and Burnt Sienna",
        is_dark: false,
        colors: earth_tones,
    },
    ThemePreset {
        id: "pastel-palette",
        name: "Pastel Palette",
        description: "Elegant soft tones with Double Pearl Lusta, Perfume, and Mauve",
        is_dark: false,
        colors: pastel_palette,
    },
];

/// Finds a preset by display name or slug.
pub fn find_preset(name_or_id: &str) -> Option<&'static ThemePreset> {
    THEME_PRESETS
        .iter()
        .find(|preset| preset.name == name_or_id || preset.id == name_or_id)
}

fn dark_mode_elite(base: ThemeColorPalette) -> ThemeColorPalette {
    ThemeColorPalette {
        background: BackgroundColors {
            primary: "#0f172a".into(),
            secondary: "#1e293b".into(),
            tertiary: "#334155".into(),
            accent: "#0ea5e9".into(),
            surface: "#1e293b".into(),
            overlay: "rgba(15, 23, 42, 0.95)".into(),
        },
        text: TextColors {
            primary: "#f8fafc".into(),
            secondary: "#cbd5e1".into(),
            tertiary: "#94a3b8".into(),
            accent: "#38bdf8".into(),
            ..base.text
        },
        interactive: InteractiveColors {
            primary: "#0ea5e9".into(),
            primary_hover: "#0284c7".into(),
            primary_active: "#0369a1".into(),
            secondary: "#475569".into(),
            secondary_hover: "#64748b".into(),
            secondary_active: "#334155".into(),
        },
        status: StatusColors {
            success: "#22c55e".into(),
            warning: "#f59e0b".into(),
            error: "#ef4444".into(),
            info: "#3b82f6".into(),
        },
        ..base
    }
}

fn neon_brights(base: ThemeColorPalette) -> ThemeColorPalette {
    ThemeColorPalette {
        background: BackgroundColors {
            primary: "#38124A".into(),
            secondary: "#4c1d63".into(),
            tertiary: "#60267e".into(),
            accent: "#EC4186".into(),
            surface: "#3d1555".into(),
            overlay: "rgba(56, 18, 74, 0.95)".into(),
        },
        text: TextColors {
            primary: "#FFFFFF".into(),
            secondary: "#e2e8f0".into(),
            tertiary: "#cbd5e1".into(),
            accent: "#EC4186".into(),
            ..base.text
        },
        interactive: InteractiveColors {
            primary: "#EC4186".into(),
            primary_hover: "#db2777".into(),
            primary_active: "#be185d".into(),
            secondary: "#EE544A".into(),
            secondary_hover: "#dc2626".into(),
            secondary_active: "#b91c1c".into(),
        },
        status: StatusColors {
            success: "#10b981".into(),
            warning: "#f59e0b".into(),
            error: "#EE544A".into(),
            info: "#EC4186".into(),
        },
        ..base
    }
}

fn teal_wave(base: ThemeColorPalette) -> ThemeColorPalette {
    ThemeColorPalette {
        background: BackgroundColors {
            primary: "#0f1419".into(),
            secondary: "#1a2332".into(),
            tertiary: "#2d3748".into(),
            accent: "#4ecdc4".into(),
            surface: "#1e2a3a".into(),
            overlay: "rgba(15, 20, 25, 0.95)".into(),
        },
        text: TextColors {
            primary: "#f8fafc".into(),
            secondary: "#cbd5e1".into(),
            tertiary: "#94a3b8".into(),
            disabled: "#64748b".into(),
            inverse: "#0f1419".into(),
            accent: "#4ecdc4".into(),
        },
        interactive: InteractiveColors {
            primary: "#4ecdc4".into(),
            primary_hover: "#3fb3b1".into(),
            primary_active: "#2d9490".into(),
            secondary: "#06b6d4".into(),
            secondary_hover: "#0891b2".into(),
            secondary_active: "#0e7490".into(),
        },
        status: StatusColors {
            success: "#10b981".into(),
            warning: "#f59e0b".into(),
            error: "#ef4444".into(),
            info: "#06b6d4".into(),
        },
        ..base
    }
}

fn earth_tones(base: ThemeColorPalette) -> ThemeColorPalette {
    ThemeColorPalette {
        background: BackgroundColors {
            primary: "#FDF6EF".into(),
            secondary: "#fef3ec".into(),
            tertiary: "#fed7aa".into(),
            accent: "#74B27B".into(),
            surface: "#ffffff".into(),
            overlay: "rgba(253, 246, 239, 0.95)".into(),
        },
        text: TextColors {
            primary: "#1f2937".into(),
            secondary: "#374151".into(),
            tertiary: "#6b7280".into(),
            accent: "#74B27B".into(),
            ..base.text
        },
        interactive: InteractiveColors {
            primary: "#74B27B".into(),
            primary_hover: "#059669".into(),
            primary_active: "#047857".into(),
            secondary: "#FACF55".into(),
            secondary_hover: "#f59e0b".into(),
            secondary_active: "#d97706".into(),
        },
        status: StatusColors {
            success: "#74B27B".into(),
            warning: "#FACF55".into(),
            error: "#E96950".into(),
            info: "#3b82f6".into(),
        },
        ..base
    }
}

fn pastel_palette(base: ThemeColorPalette) -> ThemeColorPalette {
    ThemeColorPalette {
        background: BackgroundColors {
            primary: "#FFFFFF".into(),
            secondary: "#F9FBC3".into(),
            tertiary: "#ECAAFB".into(),
            accent: "#B4A2F6".into(),
            surface: "#FFFFFF".into(),
            overlay: "rgba(255, 255, 255, 0.95)".into(),
        },
        text: TextColors {
            primary: "#989997".into(),
            secondary: "#6b7280".into(),
            tertiary: "#9ca3af".into(),
            accent: "#B4A2F6".into(),
            ..base.text
        },
        interactive: InteractiveColors {
            primary: "#B4A2F6".into(),
            primary_hover: "#9b7ff7".into(),
            primary_active: "#8b5cf6".into(),
            secondary: "#ECAAFB".into(),
            secondary_hover: "#e879f9".into(),
            secondary_active: "#d946ef".into(),
        },
        status: StatusColors {
            success: "#10b981".into(),
            warning: "#FCE54D".into(),
            error: "#ef4444".into(),
            info: "#B4A2F6".into(),
        },
        ..base
    }
}

#[cfg(test)]
#[path = "presets_tests.rs"]
mod tests;
