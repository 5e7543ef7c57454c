//! Bottom status bar: current notice or key hints, plus global keys

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use consultant_app::{AppState, Screen};

use crate::theme::{styles, Palette};

pub struct StatusBar<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    fn hints(&self) -> &'static str {
        if self.state.show_splash() {
            return "";
        }
        match self.state.current_screen() {
            Screen::Login | Screen::Signup | Screen::ForgotPassword => {
                "Tab/↑↓ move · Enter select · Space toggle"
            }
            Screen::Dashboard => "Enter open · p portfolio · a advice · u upgrade",
            Screen::Profile => "Tab move · Enter select · Space toggle · Esc cancel",
            Screen::Portfolio => "Tab move · ↑↓ select · Enter add · +/- qty · d remove",
            Screen::Advice => "s share · p PDF · c CSV · ↑↓ browse",
            Screen::Billing => "←→ plan · Enter pay · r receipt",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let left = match &self.state.status {
            Some(status) => Span::styled(format!(" {status}"), styles::status_green(p)),
            None => Span::styled(format!(" {}", self.hints()), styles::text_muted(p)),
        };
        Paragraph::new(Line::from(left)).render(area, buf);

        let right = Line::from(vec![
            Span::styled("^T", styles::keybinding(p)),
            Span::styled(" theme  ", styles::text_muted(p)),
            Span::styled("^Q", styles::keybinding(p)),
            Span::styled(" quit ", styles::text_muted(p)),
        ])
        .right_aligned();
        Paragraph::new(right).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{signed_in_state, signed_out_state, TestTerminal};
    use crate::theme::palette::LIGHT;

    #[test]
    fn test_status_message_replaces_hints() {
        let mut state = signed_in_state(Screen::Advice);
        state.status = Some("Report shared via email".to_string());
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(StatusBar::new(&state, &LIGHT), term.area());

        assert!(term.buffer_contains("Report shared via email"));
        assert!(!term.buffer_contains("s share"));
        assert!(term.buffer_contains("^Q quit"));
    }

    #[test]
    fn test_hints_follow_screen() {
        let state = signed_out_state();
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(StatusBar::new(&state, &LIGHT), term.area());
        assert!(term.buffer_contains("Enter select"));
    }
}
