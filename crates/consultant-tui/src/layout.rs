//! Screen layout definitions for the TUI
//!
//! Signed-in screens get a navigation bar on top; every screen gets a
//! one-row status bar at the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the centered column used by the auth forms
pub const FORM_WIDTH: u16 = 56;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Navigation bar; zero height when signed out
    pub nav: Rect,
    pub body: Rect,
    pub status: Rect,
}

/// Split the frame into navigation, body and status rows
pub fn create(area: Rect, show_nav: bool) -> ScreenAreas {
    let nav_height = if show_nav { 3 } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(nav_height),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        nav: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Horizontally centered column of at most `width` cells
pub fn centered_column(area: Rect, width: u16) -> Rect {
    let w = width.min(area.width);
    Rect {
        x: area.x + (area.width - w) / 2,
        width: w,
        ..area
    }
}
