//! Portfolio: stock search, holdings table, analysis trigger and the
//! add-holding dialog

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table};
use ratatui::Frame;

use consultant_app::screens::portfolio::{
    AddHoldingDialog, PortfolioFocus, PortfolioView, MIN_HOLDINGS_FOR_ANALYSIS, MIN_QUERY_LEN,
};
use consultant_core::{format_change, format_inr, format_price, Holding};

use crate::theme::{styles, Palette};
use crate::widgets::{render_modal, Button, TextField, TEXT_FIELD_HEIGHT};

pub(super) fn render(frame: &mut Frame, area: Rect, view: &PortfolioView, p: &Palette) {
    let [search, results, holdings, footer] = Layout::vertical([
        Constraint::Length(TEXT_FIELD_HEIGHT),
        Constraint::Length(7),
        Constraint::Min(5),
        Constraint::Length(2),
    ])
    .areas(area);

    frame.render_widget(
        TextField::new("Search stocks", &view.query, p)
            .focused(view.add_dialog.is_none() && view.focus == PortfolioFocus::Search)
            .placeholder("Ticker, company or sector"),
        search,
    );
    render_results(frame, results, view, p);
    render_holdings(frame, holdings, view, p);
    render_footer(frame, footer, view, p);

    if let Some(dialog) = &view.add_dialog {
        render_add_dialog(frame, area, dialog, p);
    }
}

fn render_results(frame: &mut Frame, area: Rect, view: &PortfolioView, p: &Palette) {
    let block = styles::glass_block(p, view.focus == PortfolioFocus::Results)
        .title(Span::styled(" Search Results ", styles::title(p)));

    let query_len = view.query.value().chars().count();
    let hint = if view.searching {
        Some("Searching...".to_string())
    } else if query_len < MIN_QUERY_LEN {
        Some(format!("Type at least {MIN_QUERY_LEN} characters to search"))
    } else if view.results.is_empty() {
        Some(format!("No stocks match \"{}\"", view.query.value()))
    } else {
        None
    };

    if let Some(hint) = hint {
        frame.render_widget(
            Paragraph::new(Span::styled(hint, styles::text_muted(p))).block(block),
            area,
        );
        return;
    }

    let rows = view.results.iter().enumerate().map(|(i, stock)| {
        let selected = view.focus == PortfolioFocus::Results && i == view.selected_result;
        stock_row(stock, selected, p)
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Min(20),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(9),
        ],
    )
    .block(block);
    frame.render_widget(table, area);
}

fn stock_row<'a>(stock: &'a Holding, selected: bool, p: &Palette) -> Row<'a> {
    let row = Row::new(vec![
        Cell::from(Span::styled(stock.ticker.as_str(), styles::accent_bold(p))),
        Cell::from(stock.company.as_str()),
        Cell::from(Span::styled(stock.sector.as_str(), styles::text_muted(p))),
        Cell::from(format_price(stock.price)),
        Cell::from(Span::styled(
            format_change(stock.change),
            styles::change(p, stock.change),
        )),
    ]);
    if selected {
        row.style(styles::focused_selected(p))
    } else {
        row.style(styles::text_primary(p))
    }
}

fn render_holdings(frame: &mut Frame, area: Rect, view: &PortfolioView, p: &Palette) {
    let block = styles::glass_block(p, view.focus == PortfolioFocus::Holdings).title(Span::styled(
        format!(" Holdings ({}) ", view.holdings.len()),
        styles::title(p),
    ));

    if view.holdings.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No holdings yet. Search for a stock to add one.",
                styles::text_muted(p),
            ))
            .block(block),
            area,
        );
        return;
    }

    let header = Row::new(["Ticker", "Company", "Qty", "Price", "Change", "Value"])
        .style(styles::text_secondary(p));
    let rows = view.holdings.iter().enumerate().map(|(i, h)| {
        let row = Row::new(vec![
            Cell::from(Span::styled(h.ticker.as_str(), styles::accent_bold(p))),
            Cell::from(h.company.as_str()),
            Cell::from(h.quantity.to_string()),
            Cell::from(format_price(h.price)),
            Cell::from(Span::styled(format_change(h.change), styles::change(p, h.change))),
            Cell::from(format_price(h.market_value())),
        ]);
        if view.focus == PortfolioFocus::Holdings && i == view.selected_holding {
            row.style(styles::focused_selected(p))
        } else {
            row.style(styles::text_primary(p))
        }
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Min(18),
            Constraint::Length(6),
            Constraint::Length(12),
            Constraint::Length(9),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(block);
    frame.render_widget(table, area);
}

fn render_footer(frame: &mut Frame, area: Rect, view: &PortfolioView, p: &Palette) {
    let [summary, button] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(26)]).areas(area);

    let total = view.total_value().round() as u64;
    let mut lines = vec![Line::from(vec![
        Span::styled(" Total value ", styles::text_muted(p)),
        Span::styled(format_inr(total), styles::title(p)),
        Span::styled(
            format!(
                "  ·  {} holdings  ·  {} sectors",
                view.holdings.len(),
                view.sector_count()
            ),
            styles::text_secondary(p),
        ),
    ])];
    if view.holdings.len() < MIN_HOLDINGS_FOR_ANALYSIS {
        lines.push(Line::from(Span::styled(
            format!(" Add at least {MIN_HOLDINGS_FOR_ANALYSIS} holdings to get advice"),
            styles::status_yellow(p),
        )));
    }
    frame.render_widget(Paragraph::new(lines), summary);

    frame.render_widget(
        Button::new("Get AI Advice", p)
            .focused(view.focus == PortfolioFocus::Analyze)
            .busy(view.analyzing, "Analyzing..."),
        button,
    );
}

fn render_add_dialog(frame: &mut Frame, area: Rect, dialog: &AddHoldingDialog, p: &Palette) {
    let inner = render_modal(frame.buffer_mut(), area, p, "Add to Portfolio", 50, 12);
    let [info, quantity, total, hint] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(TEXT_FIELD_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let stock = &dialog.stock;
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(stock.ticker.as_str(), styles::accent_bold(p)),
                Span::styled(format!("  {}", stock.company), styles::text_primary(p)),
            ]),
            Line::from(vec![
                Span::styled(format_price(stock.price), styles::text_secondary(p)),
                Span::raw("  "),
                Span::styled(format_change(stock.change), styles::change(p, stock.change)),
            ]),
        ]),
        info,
    );
    frame.render_widget(
        TextField::new("Quantity", &dialog.quantity, p)
            .focused(true)
            .error((!dialog.can_add()).then_some("Quantity must be at least 1")),
        quantity,
    );
    let cost = stock.price * f64::from(dialog.quantity());
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Total cost ", styles::text_muted(p)),
            Span::styled(format_price(cost), styles::title(p)),
        ])),
        total,
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Enter", styles::keybinding(p)),
            Span::styled(" add  ", styles::text_muted(p)),
            Span::styled("Esc", styles::keybinding(p)),
            Span::styled(" cancel", styles::text_muted(p)),
        ])),
        hint,
    );
}
