//! Advice: portfolio summary, per-stock recommendations, report export
//! and the share dialog

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use consultant_app::screens::advice::{AdviceFocus, AdviceView, ShareTarget};
use consultant_core::fixtures::{portfolio_summary, stock_advice};
use consultant_core::{format_change, format_inr, format_price, ReportFormat, StockAdvice};

use super::dashboard::advice_style;
use crate::theme::{styles, Palette};
use crate::widgets::{render_modal, Button};

pub(super) fn render(frame: &mut Frame, area: Rect, view: &AdviceView, p: &Palette) {
    let [summary, body, actions, notice] = Layout::vertical([
        Constraint::Length(6),
        Constraint::Min(8),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_summary(frame, summary, p);

    let [list, detail] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(body);
    let advice = stock_advice();
    render_list(frame, list, &advice, view, p);
    if let Some(selected) = advice.get(view.selected) {
        render_detail(frame, detail, selected, p);
    }

    render_actions(frame, actions, view, p);
    render_notice(frame, notice, view, p);

    if let Some(target) = view.share_dialog {
        render_share_dialog(frame, area, target, p);
    }
}

fn render_summary(frame: &mut Frame, area: Rect, p: &Palette) {
    let summary = portfolio_summary();
    let metric = |label: &'static str, value: String| {
        vec![
            Span::styled(format!("{label} "), styles::text_muted(p)),
            Span::styled(value, styles::title(p)),
            Span::raw("    "),
        ]
    };
    let mut figures = metric("Total value", format_inr(summary.total_value));
    figures.extend(metric("Risk score", summary.risk_score.to_string()));
    figures.extend(metric("Expected return", summary.expected_return.to_string()));
    figures.extend(metric("Horizon", summary.time_horizon.to_string()));

    let block = styles::glass_block(p, false)
        .title(Span::styled(" Portfolio Analysis ", styles::title(p)));
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(figures),
            Line::from(Span::styled(summary.recommendation, styles::text_secondary(p))),
        ])
        .wrap(Wrap { trim: true })
        .block(block),
        area,
    );
}

fn render_list(
    frame: &mut Frame,
    area: Rect,
    advice: &[StockAdvice],
    view: &AdviceView,
    p: &Palette,
) {
    let focused = view.focus == AdviceFocus::Recommendations;
    let block = styles::glass_block(p, focused)
        .title(Span::styled(" Recommendations ", styles::title(p)));

    let lines: Vec<Line> = advice
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let line = Line::from(vec![
                Span::styled(format!("{:<6}", item.advice.label()), advice_style(item.advice, p)),
                Span::styled(format!(" {:<10}", item.ticker), styles::accent_bold(p)),
                Span::styled(format!("{:>3}%", item.confidence), styles::text_secondary(p)),
            ]);
            if i == view.selected {
                let marker = if focused { "▶ " } else { "› " };
                let mut spans = vec![Span::styled(marker, styles::accent(p))];
                spans.extend(line.spans);
                Line::from(spans)
            } else {
                let mut spans = vec![Span::raw("  ")];
                spans.extend(line.spans);
                Line::from(spans)
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_detail(frame: &mut Frame, area: Rect, item: &StockAdvice, p: &Palette) {
    let block = styles::glass_block(p, false).title(Span::styled(
        format!(" {} ", item.company),
        styles::title(p),
    ));

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format_price(item.current_price), styles::title(p)),
            Span::raw("  "),
            Span::styled(format_change(item.change), styles::change(p, item.change)),
            Span::styled(format!("   {} shares", item.quantity), styles::text_muted(p)),
        ]),
        Line::from(vec![
            Span::styled(item.advice.label().to_uppercase(), advice_style(item.advice, p)),
            Span::styled(
                format!("  {}% confidence", item.confidence),
                styles::text_secondary(p),
            ),
        ]),
    ];
    if let (Some(target), Some(upside)) = (item.target_price, item.target_upside()) {
        lines.push(Line::from(vec![
            Span::styled("Target ", styles::text_muted(p)),
            Span::styled(format_price(target), styles::text_primary(p)),
            Span::raw(" "),
            Span::styled(format!("({})", format_change(upside)), styles::change(p, upside)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(item.reason, styles::text_primary(p))));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("⚠ ", styles::status_yellow(p)),
        Span::styled(item.risk_note, styles::text_secondary(p)),
    ]));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

fn render_actions(frame: &mut Frame, area: Rect, view: &AdviceView, p: &Palette) {
    let cells = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
    let pdf_busy = view.downloading == Some(ReportFormat::Pdf);
    let csv_busy = view.downloading == Some(ReportFormat::Csv);

    frame.render_widget(
        Button::new("Share", p).focused(view.focus == AdviceFocus::Share),
        cells[0],
    );
    frame.render_widget(
        Button::new("Download PDF", p)
            .focused(view.focus == AdviceFocus::DownloadPdf)
            .busy(pdf_busy, "Saving PDF..."),
        cells[1],
    );
    frame.render_widget(
        Button::new("Download CSV", p)
            .focused(view.focus == AdviceFocus::DownloadCsv)
            .busy(csv_busy, "Saving CSV..."),
        cells[2],
    );
    frame.render_widget(
        Button::new("Back to Portfolio", p).focused(view.focus == AdviceFocus::BackToPortfolio),
        cells[3],
    );
}

fn render_notice(frame: &mut Frame, area: Rect, view: &AdviceView, p: &Palette) {
    let span = if let Some(error) = &view.download_error {
        Span::styled(format!(" Download failed: {error}"), styles::status_red(p))
    } else if let Some(path) = &view.last_download {
        Span::styled(
            format!(" Last report: {}", path.display()),
            styles::text_muted(p),
        )
    } else {
        return;
    };
    frame.render_widget(Paragraph::new(span), area);
}

fn render_share_dialog(frame: &mut Frame, area: Rect, selected: ShareTarget, p: &Palette) {
    let inner = render_modal(frame.buffer_mut(), area, p, "Share Report", 36, 7);
    let lines: Vec<Line> = ShareTarget::ALL
        .iter()
        .map(|target| {
            if *target == selected {
                Line::from(Span::styled(
                    format!(" ▶ {} ", target.label()),
                    styles::focused_selected(p),
                ))
            } else {
                Line::from(Span::styled(
                    format!("   {}", target.label()),
                    styles::text_primary(p),
                ))
            }
        })
        .chain(std::iter::once(Line::from(Span::styled(
            "   Enter choose · Esc close",
            styles::text_muted(p),
        ))))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}
