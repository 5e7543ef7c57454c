//! Main render/view function (View in TEA pattern)

mod advice;
mod auth;
mod billing;
mod dashboard;
mod portfolio;
mod profile;
mod splash;


use std::rc::Rc;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use consultant_app::{ActiveView, AppState};

use crate::layout;
use crate::theme::palette;
use crate::widgets::{NavBar, StatusBar};

/// Render the complete UI (View function in TEA)
///
/// Pure function of the state; nothing here mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let p = palette::for_mode(state.theme.is_dark_mode());

    frame.render_widget(Block::default().style(Style::default().bg(p.deepest_bg)), area);

    if state.show_splash() {
        splash::render(frame, area, &state.loading_state, p);
        return;
    }

    let show_nav = state.session.is_signed_in() && state.current_screen().is_member();
    let areas = layout::create(area, show_nav);

    if show_nav {
        frame.render_widget(NavBar::new(state, p), areas.nav);
    }

    match &state.view {
        ActiveView::Login(form) => auth::render_login(frame, areas.body, form, p),
        ActiveView::Signup(form) => auth::render_signup(frame, areas.body, form, p),
        ActiveView::ForgotPassword(flow) => auth::render_reset(frame, areas.body, flow, p),
        ActiveView::Dashboard(view) => dashboard::render(frame, areas.body, state, view, p),
        ActiveView::Profile(view) => profile::render(frame, areas.body, state, view, p),
        ActiveView::Portfolio(view) => portfolio::render(frame, areas.body, view, p),
        ActiveView::Advice(view) => advice::render(frame, areas.body, view, p),
        ActiveView::Billing(view) => billing::render(frame, areas.body, view, p),
    }

    frame.render_widget(StatusBar::new(state, p), areas.status);
}

/// Stack fixed-height rows from the top of `area`
fn rows(area: Rect, heights: &[u16]) -> Rc<[Rect]> {
    let mut constraints: Vec<Constraint> = heights.iter().map(|h| Constraint::Length(*h)).collect();
    constraints.push(Constraint::Min(0));
    Layout::vertical(constraints).split(area)
}
