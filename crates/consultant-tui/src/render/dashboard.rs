//! Dashboard: headline stats, recent advice and quick actions

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use consultant_app::screens::dashboard::{DashboardAction, DashboardView};
use consultant_app::AppState;
use consultant_core::fixtures::{dashboard_stats, recent_advice, DASHBOARD_PORTFOLIO_COUNT};
use consultant_core::{AdviceKind, DashboardStat, Trend};

use crate::theme::{styles, Palette};
use crate::widgets::Button;

pub(super) fn render(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    view: &DashboardView,
    p: &Palette,
) {
    let [greeting, stats, lower] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(5),
        Constraint::Min(6),
    ])
    .areas(area);

    let name = state
        .session
        .user()
        .map(|u| u.first_name().to_string())
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(format!(" Welcome back, {name}"), styles::title(p))),
            Line::from(Span::styled(
                format!(
                    " Here's how your {DASHBOARD_PORTFOLIO_COUNT} portfolios are doing today"
                ),
                styles::text_muted(p),
            )),
        ]),
        greeting,
    );

    let stat_list = dashboard_stats();
    let cards = Layout::horizontal(vec![Constraint::Ratio(1, 4); stat_list.len()]).split(stats);
    for (stat, card) in stat_list.iter().zip(cards.iter()) {
        render_stat(frame, *card, stat, p);
    }

    let [advice, actions] =
        Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)]).areas(lower);
    render_recent_advice(frame, advice, p);
    render_actions(frame, actions, view, p);
}

fn render_stat(frame: &mut Frame, area: Rect, stat: &DashboardStat, p: &Palette) {
    let (arrow, style) = match stat.trend {
        Trend::Up => ("▲", styles::status_green(p)),
        Trend::Down => ("▼", styles::status_red(p)),
    };
    let lines = vec![
        Line::from(Span::styled(stat.name, styles::text_secondary(p))),
        Line::from(Span::styled(stat.value, styles::title(p))),
        Line::from(Span::styled(format!("{arrow} {}", stat.change), style)),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(styles::glass_block(p, false)),
        area,
    );
}

pub(super) fn advice_style(kind: AdviceKind, p: &Palette) -> ratatui::style::Style {
    match kind {
        AdviceKind::Buy => styles::status_green(p),
        AdviceKind::Hold => styles::status_yellow(p),
        AdviceKind::Sell | AdviceKind::Reduce => styles::status_red(p),
    }
}

fn render_recent_advice(frame: &mut Frame, area: Rect, p: &Palette) {
    let mut lines = Vec::new();
    for item in recent_advice() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<6}", item.advice.label()), advice_style(item.advice, p)),
            Span::styled(format!(" {} ", item.stock), styles::text_primary(p)),
            Span::styled(format!("({})", item.ticker), styles::text_muted(p)),
            Span::styled(
                format!("  {}% confidence", item.confidence),
                styles::text_secondary(p),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("       {}", item.reason),
            styles::text_muted(p),
        )));
    }
    let block = styles::glass_block(p, false).title(Span::styled(" Recent Advice ", styles::title(p)));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_actions(frame: &mut Frame, area: Rect, view: &DashboardView, p: &Palette) {
    let block = styles::glass_block(p, true).title(Span::styled(" Quick Actions ", styles::title(p)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical(vec![Constraint::Length(2); DashboardAction::ORDER.len()]).split(inner);
    for (action, row) in DashboardAction::ORDER.iter().zip(rows.iter()) {
        frame.render_widget(
            Button::new(action.label(), p).focused(view.focus == *action),
            *row,
        );
    }
}
