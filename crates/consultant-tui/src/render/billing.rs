//! Billing: plan selection, payment, usage and transaction history

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Gauge, Paragraph, Row, Table};
use ratatui::Frame;

use consultant_app::screens::billing::{BillingFocus, BillingView, PaymentDialog};
use consultant_core::fixtures::{plan, plans, transactions, usage_quota};
use consultant_core::{format_inr, Plan, TransactionStatus};

use crate::theme::{styles, Palette};
use crate::widgets::{render_modal, Button};

pub(super) fn render(frame: &mut Frame, area: Rect, view: &BillingView, p: &Palette) {
    let [plans_area, pay, usage, history] = Layout::vertical([
        Constraint::Length(10),
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Min(5),
    ])
    .areas(area);

    let all = plans();
    let cards = Layout::horizontal(vec![Constraint::Ratio(1, all.len() as u32); all.len()])
        .split(plans_area);
    for (plan, card) in all.iter().zip(cards.iter()) {
        render_plan(frame, *card, plan, view, p);
    }

    let price = plan(view.selected_plan).map(|found| found.price).unwrap_or_default();
    let label = format!("Pay {} now", format_inr(u64::from(price)));
    frame.render_widget(
        Button::new(&label, p)
            .focused(view.focus == BillingFocus::Pay)
            .busy(view.is_processing(), "Processing..."),
        Rect {
            y: pay.y + 1,
            height: 1,
            ..pay
        },
    );

    render_usage(frame, usage, p);
    render_history(frame, history, view, p);

    if let Some(dialog) = &view.payment {
        render_payment_dialog(frame, area, dialog, p);
    }
}

fn render_plan(frame: &mut Frame, area: Rect, plan: &Plan, view: &BillingView, p: &Palette) {
    let selected = plan.id == view.selected_plan;
    let focused = selected && view.focus == BillingFocus::Plans;

    let mut title = vec![Span::styled(format!(" {} ", plan.name), styles::title(p))];
    if plan.recommended {
        title.push(Span::styled("★ Popular ", styles::status_yellow(p)));
    }
    let block = styles::glass_block(p, selected).title(Line::from(title));

    let marker = if focused {
        Span::styled("▶ Selected", styles::focused_selected(p))
    } else if selected {
        Span::styled("● Selected", styles::accent(p))
    } else {
        Span::styled("○", styles::text_muted(p))
    };
    let mut lines = vec![
        Line::from(vec![
            Span::styled(format_inr(u64::from(plan.price)), styles::accent_bold(p)),
            Span::styled(format!("/{}", plan.period), styles::text_muted(p)),
            Span::raw("  "),
            marker,
        ]),
        Line::from(""),
    ];
    lines.extend(
        plan.features
            .iter()
            .map(|f| Line::from(Span::styled(format!("✓ {f}"), styles::text_secondary(p)))),
    );
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_usage(frame: &mut Frame, area: Rect, p: &Palette) {
    let quota = usage_quota();
    let block = styles::glass_block(p, false).title(Span::styled(" Usage ", styles::title(p)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [label, gauge] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{} of {} analyses used", quota.used, quota.limit),
                styles::text_primary(p),
            ),
            Span::styled(
                format!(
                    "  ·  {} left, resets {}",
                    quota.remaining(),
                    quota.reset_date.format("%b %-d, %Y")
                ),
                styles::text_muted(p),
            ),
        ])),
        label,
    );
    frame.render_widget(
        Gauge::default()
            .gauge_style(styles::accent(p))
            .ratio(quota.ratio().clamp(0.0, 1.0))
            .label(""),
        gauge,
    );
}

fn render_history(frame: &mut Frame, area: Rect, view: &BillingView, p: &Palette) {
    let block = styles::glass_block(p, view.focus == BillingFocus::Transactions)
        .title(Span::styled(" Billing History ", styles::title(p)));

    let header = Row::new(["Date", "Description", "Amount", "Status"])
        .style(styles::text_secondary(p));
    let rows = transactions().into_iter().enumerate().map(|(i, t)| {
        let status_style = match t.status {
            TransactionStatus::Paid => styles::status_green(p),
            TransactionStatus::Pending => styles::status_yellow(p),
            TransactionStatus::Failed => styles::status_red(p),
        };
        let row = Row::new(vec![
            Cell::from(t.date.format("%b %-d, %Y").to_string()),
            Cell::from(t.description),
            Cell::from(format_inr(u64::from(t.amount))),
            Cell::from(Span::styled(t.status.label(), status_style)),
        ]);
        if view.focus == BillingFocus::Transactions && i == view.selected_transaction {
            row.style(styles::focused_selected(p))
        } else {
            row.style(styles::text_primary(p))
        }
    });

    let mut lines_below = None;
    if let Some(error) = &view.receipt_error {
        lines_below = Some(Span::styled(
            format!("Receipt download failed: {error}"),
            styles::status_red(p),
        ));
    } else if let Some(path) = &view.last_receipt {
        lines_below = Some(Span::styled(
            format!("Receipt saved to {}", path.display()),
            styles::text_muted(p),
        ));
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    let [table_area, footer] =
        Layout::vertical([Constraint::Min(2), Constraint::Length(1)]).areas(inner);

    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Min(20),
            Constraint::Length(10),
            Constraint::Length(8),
        ],
    )
    .header(header);
    frame.render_widget(table, table_area);
    if let Some(span) = lines_below {
        frame.render_widget(Paragraph::new(span), footer);
    }
}

fn render_payment_dialog(frame: &mut Frame, area: Rect, dialog: &PaymentDialog, p: &Palette) {
    let inner = render_modal(frame.buffer_mut(), area, p, "Payment", 48, 8);
    let lines = match dialog {
        PaymentDialog::Processing { plan: id } => {
            let name = plan(*id).map(|found| found.name).unwrap_or("plan");
            vec![
                Line::from(Span::styled(
                    format!("Processing payment for {name}..."),
                    styles::text_primary(p),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Please don't close the app",
                    styles::text_muted(p),
                )),
            ]
        }
        PaymentDialog::Succeeded(receipt) => {
            let name = plan(receipt.plan).map(|found| found.name).unwrap_or("plan");
            vec![
                Line::from(Span::styled("✓ Payment successful", styles::status_green(p))),
                Line::from(""),
                Line::from(Span::styled(
                    format!(
                        "{} charged for {name}",
                        format_inr(u64::from(receipt.amount))
                    ),
                    styles::text_primary(p),
                )),
                Line::from(Span::styled(
                    format!("Reference {}", receipt.reference),
                    styles::text_muted(p),
                )),
                Line::from(Span::styled("Enter to close", styles::keybinding(p))),
            ]
        }
        PaymentDialog::Failed(error) => vec![
            Line::from(Span::styled("✗ Payment failed", styles::status_red(p))),
            Line::from(""),
            Line::from(Span::styled(error.as_str(), styles::text_primary(p))),
            Line::from(""),
            Line::from(Span::styled("Enter to close", styles::keybinding(p))),
        ],
    };
    frame.render_widget(Paragraph::new(lines), inner);
}
