//! Color palettes for the dark and light themes.

use ratatui::style::Color;

/// One complete set of theme colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub deepest_bg: Color,
    pub card_bg: Color,
    pub popup_bg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    /// Foreground drawn on top of `accent`
    pub contrast_fg: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Status ---
    pub green: Color,
    pub red: Color,
    pub yellow: Color,
    pub blue: Color,
}

pub const DARK: Palette = Palette {
    deepest_bg: Color::Rgb(10, 12, 16),
    card_bg: Color::Rgb(18, 21, 28),
    popup_bg: Color::Rgb(28, 33, 43),
    border_dim: Color::Rgb(45, 51, 59),
    border_active: Color::Rgb(88, 166, 255),
    accent: Color::Rgb(88, 166, 255),
    contrast_fg: Color::Rgb(10, 12, 16),
    text_primary: Color::Rgb(201, 209, 217),
    text_secondary: Color::Rgb(125, 133, 144),
    text_muted: Color::Rgb(72, 79, 88),
    green: Color::Rgb(16, 185, 129),
    red: Color::Rgb(244, 63, 94),
    yellow: Color::Rgb(234, 179, 8),
    blue: Color::Rgb(56, 189, 248),
};

pub const LIGHT: Palette = Palette {
    deepest_bg: Color::Rgb(248, 250, 252),
    card_bg: Color::Rgb(255, 255, 255),
    popup_bg: Color::Rgb(241, 245, 249),
    border_dim: Color::Rgb(203, 213, 225),
    border_active: Color::Rgb(37, 99, 235),
    accent: Color::Rgb(37, 99, 235),
    contrast_fg: Color::Rgb(255, 255, 255),
    text_primary: Color::Rgb(15, 23, 42),
    text_secondary: Color::Rgb(71, 85, 105),
    text_muted: Color::Rgb(148, 163, 184),
    green: Color::Rgb(5, 150, 105),
    red: Color::Rgb(220, 38, 38),
    yellow: Color::Rgb(202, 138, 4),
    blue: Color::Rgb(2, 132, 199),
};

/// Palette for the current theme mode
pub fn for_mode(dark: bool) -> &'static Palette {
    if dark {
        &DARK
    } else {
        &LIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_mode_picks_palette() {
        assert_eq!(for_mode(true), &DARK);
        assert_eq!(for_mode(false), &LIGHT);
    }

    #[test]
    fn test_palettes_differ_in_background() {
        assert_ne!(DARK.deepest_bg, LIGHT.deepest_bg);
        assert_ne!(DARK.text_primary, LIGHT.text_primary);
    }
}
