//! Top navigation bar shown on signed-in screens

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use consultant_app::{AppState, Screen};

use crate::theme::{styles, Palette};

pub struct NavBar<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> NavBar<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    fn tabs(&self) -> Line<'static> {
        let p = self.palette;
        let current = self.state.current_screen();
        let mut spans = Vec::new();
        for (i, screen) in Screen::NAV.iter().enumerate() {
            let label = format!(" F{} {} ", i + 1, screen.title());
            let style = if *screen == current {
                styles::focused_selected(p)
            } else {
                styles::text_secondary(p)
            };
            spans.push(Span::styled(label, style));
        }
        Line::from(spans)
    }

    fn account(&self) -> Line<'static> {
        let p = self.palette;
        let Some(user) = self.state.session.user() else {
            return Line::default();
        };
        let mut spans = vec![Span::styled(user.first_name().to_string(), styles::title(p))];
        if user.is_premium {
            spans.push(Span::raw(" "));
            spans.push(Span::styled("★ Premium", styles::status_yellow(p)));
        }
        let mode = if self.state.theme.is_dark_mode() {
            " ☾"
        } else {
            " ☀"
        };
        spans.push(Span::styled(mode, styles::text_muted(p)));
        Line::from(spans).right_aligned()
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);

        let [brand, tabs, account] = Layout::horizontal([
            Constraint::Length(19),
            Constraint::Min(10),
            Constraint::Length(16),
        ])
        .areas(inner);

        Paragraph::new(Span::styled("◆ Stock Consultant", styles::accent_bold(p)))
            .render(brand, buf);
        Paragraph::new(self.tabs()).render(tabs, buf);
        Paragraph::new(self.account()).render(account, buf);
    }
}
