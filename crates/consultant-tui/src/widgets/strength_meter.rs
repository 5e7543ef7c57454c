//! Password strength bar with its rule checklist

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use consultant_core::{PasswordChecks, PasswordStrength};

use crate::theme::{styles, Palette};

/// Rows used: bar line plus two checklist lines
pub const STRENGTH_METER_HEIGHT: u16 = 3;

const SEGMENTS: u8 = 5;

pub struct StrengthMeter<'a> {
    checks: PasswordChecks,
    palette: &'a Palette,
}

impl<'a> StrengthMeter<'a> {
    pub fn new(password: &str, palette: &'a Palette) -> Self {
        Self {
            checks: PasswordChecks::of(password),
            palette,
        }
    }

    fn strength_style(&self, strength: PasswordStrength) -> Style {
        let p = self.palette;
        match strength {
            PasswordStrength::VeryWeak | PasswordStrength::Weak => styles::status_red(p),
            PasswordStrength::Fair => styles::status_yellow(p),
            PasswordStrength::Good | PasswordStrength::Strong => styles::status_green(p),
        }
    }

    fn check<'s>(&self, ok: bool, label: &'s str) -> Span<'s> {
        let p = self.palette;
        if ok {
            Span::styled(format!("✓ {label}  "), styles::status_green(p))
        } else {
            Span::styled(format!("· {label}  "), styles::text_muted(p))
        }
    }
}

impl Widget for StrengthMeter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let score = self.checks.score();
        let strength = PasswordStrength::from_score(score);
        let style = self.strength_style(strength);

        let filled = "█".repeat(usize::from(score));
        let empty = "░".repeat(usize::from(SEGMENTS.saturating_sub(score)));
        let c = &self.checks;
        let lines = vec![
            Line::from(vec![
                Span::styled(filled, style),
                Span::styled(empty, styles::text_muted(self.palette)),
                Span::raw(" "),
                Span::styled(strength.label(), style),
            ]),
            Line::from(vec![
                self.check(c.min_length, "8+ characters"),
                self.check(c.lowercase, "lowercase"),
                self.check(c.uppercase, "uppercase"),
            ]),
            Line::from(vec![
                self.check(c.digit, "number"),
                self.check(c.symbol, "symbol"),
            ]),
        ];
        Paragraph::new(lines).render(area, buf);
    }
}
