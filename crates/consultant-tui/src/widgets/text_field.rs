//! Labelled single-line text field

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use consultant_app::screens::TextInput;

use crate::theme::{styles, Palette};

/// Rows a [`TextField`] occupies: bordered input plus the error line
pub const TEXT_FIELD_HEIGHT: u16 = 4;

/// Bordered input with its label in the border and an error line below
pub struct TextField<'a> {
    label: &'a str,
    input: &'a TextInput,
    palette: &'a Palette,
    focused: bool,
    masked: bool,
    placeholder: &'a str,
    error: Option<&'a str>,
}

impl<'a> TextField<'a> {
    pub fn new(label: &'a str, input: &'a TextInput, palette: &'a Palette) -> Self {
        Self {
            label,
            input,
            palette,
            focused: false,
            masked: false,
            placeholder: "",
            error: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Show one `•` per character instead of the value
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }
}

impl Widget for TextField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let input_area = Rect {
            height: area.height.min(3),
            ..area
        };
        let block = styles::glass_block(p, self.focused)
            .title(Span::styled(format!(" {} ", self.label), styles::text_secondary(p)));
        let inner = block.inner(input_area);
        block.render(input_area, buf);

        let mut spans = Vec::new();
        if self.input.is_empty() && !self.focused {
            spans.push(Span::styled(self.placeholder, styles::text_muted(p)));
        } else {
            let shown = if self.masked {
                self.input.masked()
            } else {
                self.input.value().to_string()
            };
            spans.push(Span::styled(shown, styles::text_primary(p)));
        }
        if self.focused {
            spans.push(Span::styled("▏", styles::accent(p)));
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);

        if area.height > 3 {
            if let Some(error) = self.error {
                let error_area = Rect {
                    y: area.y + 3,
                    height: 1,
                    ..area
                };
                Paragraph::new(Span::styled(error, styles::status_red(p))).render(error_area, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;

    #[test]
    fn test_masked_value_hides_characters() {
        let mut term = TestTerminal::with_size(30, 4);
        let input = TextInput::new("secret");
        term.render_widget(
            TextField::new("Password", &input, &DARK).masked(true),
            term.area(),
        );
        assert!(term.buffer_contains("••••••"));
        assert!(!term.buffer_contains("secret"));
        assert!(term.buffer_contains("Password"));
    }

    #[test]
    fn test_error_rendered_below_input() {
        let mut term = TestTerminal::with_size(30, 4);
        let input = TextInput::default();
        term.render_widget(
            TextField::new("Email", &input, &DARK).error(Some("Email is required")),
            term.area(),
        );
        assert!(term.line_contains(3, "Email is required"));
    }

    #[test]
    fn test_placeholder_when_empty_and_unfocused() {
        let mut term = TestTerminal::with_size(30, 3);
        let input = TextInput::default();
        term.render_widget(
            TextField::new("Email", &input, &DARK).placeholder("you@example.com"),
            term.area(),
        );
        assert!(term.buffer_contains("you@example.com"));
    }
}
