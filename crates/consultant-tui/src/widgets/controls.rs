//! Buttons, checkboxes and links

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::{styles, Palette};

/// Single-row push button, `[ Label ]`
pub struct Button<'a> {
    label: &'a str,
    palette: &'a Palette,
    focused: bool,
    busy: Option<&'a str>,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, palette: &'a Palette) -> Self {
        Self {
            label,
            palette,
            focused: false,
            busy: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Replace the label while a request is in flight
    pub fn busy(mut self, busy: bool, label: &'a str) -> Self {
        self.busy = busy.then_some(label);
        self
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let text = format!("[ {} ]", self.busy.unwrap_or(self.label));
        let style = if self.focused {
            styles::focused_selected(p)
        } else if self.busy.is_some() {
            styles::text_muted(p)
        } else {
            styles::accent_bold(p)
        };
        Paragraph::new(Line::from(Span::styled(text, style)))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

/// `[x] Label` toggle
pub struct Checkbox<'a> {
    label: &'a str,
    checked: bool,
    palette: &'a Palette,
    focused: bool,
}

impl<'a> Checkbox<'a> {
    pub fn new(label: &'a str, checked: bool, palette: &'a Palette) -> Self {
        Self {
            label,
            checked,
            palette,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for Checkbox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let mark = if self.checked { "[x]" } else { "[ ]" };
        let label_style = if self.focused {
            styles::focused_selected(p)
        } else {
            styles::text_secondary(p)
        };
        let line = Line::from(vec![
            Span::styled(mark, styles::accent(p)),
            Span::raw(" "),
            Span::styled(self.label, label_style),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

/// Underlined text link
pub fn link<'a>(label: &'a str, focused: bool, palette: &Palette) -> Span<'a> {
    let style = if focused {
        styles::focused_selected(palette)
    } else {
        styles::accent(palette).add_modifier(ratatui::style::Modifier::UNDERLINED)
    };
    Span::styled(label, style)
}
