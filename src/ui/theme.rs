//! Theme system for the configurator chrome.
//!
//! Provides:
//! - Theme struct with the UI colors (the preview pane uses the user's own
//!   hex colors, not the theme)
//! - Built-in presets (forge, paper)
//! - Hex color parsing shared with the preview

use ratatui::style::Color;

/// Theme colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Main background color
    pub background: Color,
    /// Primary text color
    pub foreground: Color,
    /// Accent color (borders, active tab)
    pub accent: Color,
    /// Dimmed text (labels, hints)
    pub dimmed: Color,
    /// More dimmed text (captions, placeholders)
    pub dimmed_alt: Color,
    /// Selected form field
    pub highlight: Color,
    /// Confirmation color ("Copied!")
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::forge()
    }
}

impl Theme {
    /// Forge theme - default dark palette
    pub fn forge() -> Self {
        Self {
            background: Color::Rgb(17, 21, 28),     // #11151c
            foreground: Color::Rgb(226, 230, 237),  // #e2e6ed
            accent: Color::Rgb(94, 129, 172),       // #5e81ac
            dimmed: Color::Rgb(148, 155, 168),      // #949ba8
            dimmed_alt: Color::Rgb(100, 108, 122),  // #646c7a
            highlight: Color::Rgb(235, 203, 139),   // #ebcb8b
            success: Color::Rgb(142, 192, 124),     // #8ec07c
        }
    }

    /// Paper theme - light palette close to the note-taking tool the
    /// widgets are embedded in
    pub fn paper() -> Self {
        Self {
            background: Color::Rgb(255, 255, 255),  // #ffffff
            foreground: Color::Rgb(55, 53, 47),     // #37352f
            accent: Color::Rgb(35, 131, 226),       // #2383e2
            dimmed: Color::Rgb(120, 119, 116),      // #787774
            dimmed_alt: Color::Rgb(155, 154, 151),  // #9b9a97
            highlight: Color::Rgb(203, 145, 47),    // #cb912f
            success: Color::Rgb(68, 131, 97),       // #448361
        }
    }

    /// Load theme from preset name
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "forge" | "default" => Some(Self::forge()),
            "paper" | "light" => Some(Self::paper()),
            _ => None,
        }
    }
}

/// Parse hex color string to Color
/// Supports: #rrggbb, #rgb, rrggbb, rgb
pub fn parse_hex_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim().trim_start_matches('#');

    match s.len() {
        // #rgb -> #rrggbb
        3 => {
            let r = u8::from_str_radix(&s[0..1], 16).map_err(|_| ColorError::InvalidHex)?;
            let g = u8::from_str_radix(&s[1..2], 16).map_err(|_| ColorError::InvalidHex)?;
            let b = u8::from_str_radix(&s[2..3], 16).map_err(|_| ColorError::InvalidHex)?;
            Ok(Color::Rgb(r * 17, g * 17, b * 17))
        }
        // #rrggbb
        6 => {
            let r = u8::from_str_radix(&s[0..2], 16).map_err(|_| ColorError::InvalidHex)?;
            let g = u8::from_str_radix(&s[2..4], 16).map_err(|_| ColorError::InvalidHex)?;
            let b = u8::from_str_radix(&s[4..6], 16).map_err(|_| ColorError::InvalidHex)?;
            Ok(Color::Rgb(r, g, b))
        }
        _ => Err(ColorError::InvalidLength),
    }
}

/// Color parsing error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid color length (expected 3 or 6 hex chars)")]
    InvalidLength,
    #[error("invalid hex character")]
    InvalidHex,
}
