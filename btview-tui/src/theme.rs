//! Neon-on-dark theme tokens for the figure viewer.
//!
//! Series roles map to fixed colors (long = neon green, short = hot
//! pink) so direction always reads the same way; line traces without a
//! directional role cycle through a small palette so adjacent tickers
//! stay distinguishable.

use btview_core::SeriesRole;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Near-black background (primary surface)
    pub background: Color,
    /// Electric cyan accent (focus, first series)
    pub accent: Color,
    /// Neon green (gains, long trades)
    pub positive: Color,
    /// Hot pink (losses, short trades)
    pub negative: Color,
    /// Neon orange (warnings, third series)
    pub warning: Color,
    /// Cool purple (second series)
    pub neutral: Color,
    /// Steel blue (axes, muted text)
    pub muted: Color,
    /// White (primary text)
    pub text_primary: Color,
    /// Light gray (secondary text)
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }
}

impl Theme {
    /// Fixed color for directional marker roles.
    pub fn role_color(&self, role: SeriesRole) -> Color {
        match role {
            SeriesRole::Long => self.positive,
            SeriesRole::Short => self.negative,
            SeriesRole::Price => self.accent,
            SeriesRole::Pnl => self.accent,
        }
    }

    /// Palette for the nth line trace on a figure.
    pub fn line_color(&self, index: usize) -> Color {
        const CYCLE: usize = 5;
        match index % CYCLE {
            0 => self.accent,
            1 => self.neutral,
            2 => self.warning,
            3 => self.positive,
            _ => self.muted,
        }
    }

    /// Color for a PnL value (positive = green, negative = pink).
    pub fn pnl_color(&self, value: f64) -> Color {
        if value >= 0.0 {
            self.positive
        } else {
            self.negative
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_colors_are_directional() {
        let theme = Theme::default();
        assert_eq!(theme.role_color(SeriesRole::Long), theme.positive);
        assert_eq!(theme.role_color(SeriesRole::Short), theme.negative);
    }

    #[test]
    fn line_palette_cycles() {
        let theme = Theme::default();
        assert_eq!(theme.line_color(0), theme.line_color(5));
        assert_ne!(theme.line_color(0), theme.line_color(1));
    }

    #[test]
    fn pnl_color_by_sign() {
        let theme = Theme::default();
        assert_eq!(theme.pnl_color(10.0), theme.positive);
        assert_eq!(theme.pnl_color(-0.5), theme.negative);
    }
}
