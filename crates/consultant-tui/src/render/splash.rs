//! Startup splash shown while the saved session is checked

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use consultant_app::state::LoadingState;

use crate::theme::{styles, Palette};
use crate::widgets::centered_rect;

/// Braille spinner frames
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub(super) fn render(frame: &mut Frame, area: Rect, loading: &LoadingState, p: &Palette) {
    let spinner = SPINNER[(loading.animation_frame as usize) % SPINNER.len()];

    let modal = centered_rect(44, 7, area);
    frame.render_widget(Clear, modal);

    let lines = vec![
        Line::from(Span::styled("◆ Stock Consultant", styles::accent_bold(p))),
        Line::from(Span::styled(
            "AI-powered advice for your portfolio",
            styles::text_muted(p),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(spinner, styles::accent(p)),
            Span::raw(" "),
            Span::styled(loading.message, styles::text_secondary(p)),
        ]),
    ];

    let block = styles::glass_block(p, true);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        modal,
    );
}
