//! Portfolio handlers: debounced search, holdings edits, analysis

use tracing::{debug, info, warn};

use consultant_core::Holding;

use crate::message::Message;
use crate::router::Screen;
use crate::screens::ActiveView;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_query_changed(state: &mut AppState) -> UpdateResult {
    let view = state.view_id;
    let ActiveView::Portfolio(portfolio) = &mut state.view else {
        return UpdateResult::none();
    };
    match portfolio.query_changed() {
        Some(generation) => UpdateResult::action(UpdateAction::SearchStocks {
            view,
            generation,
            query: portfolio.query.value().to_string(),
        }),
        None => UpdateResult::none(),
    }
}

pub fn handle_search_completed(
    state: &mut AppState,
    generation: u64,
    results: Vec<Holding>,
) -> UpdateResult {
    if let ActiveView::Portfolio(portfolio) = &mut state.view {
        let count = results.len();
        if portfolio.apply_results(generation, results) {
            debug!("Search #{} returned {} results", generation, count);
        } else {
            debug!("Discarding superseded search #{}", generation);
        }
    }
    UpdateResult::none()
}

pub fn handle_select_result(state: &mut AppState, index: usize) -> UpdateResult {
    if let ActiveView::Portfolio(portfolio) = &mut state.view {
        portfolio.open_add_dialog(index);
    }
    UpdateResult::none()
}

pub fn handle_add_holding(state: &mut AppState) -> UpdateResult {
    let ActiveView::Portfolio(portfolio) = &mut state.view else {
        return UpdateResult::none();
    };
    let Some(dialog) = portfolio.add_dialog.as_ref() else {
        return UpdateResult::none();
    };
    if !dialog.can_add() {
        return UpdateResult::none();
    }

    let quantity = dialog.quantity();
    let stock = dialog.stock.clone();
    let ticker = stock.ticker.clone();
    let id = portfolio.add_holding(stock, quantity);
    info!("Added {} x{} as holding {}", ticker, quantity, id);
    state.status = Some(format!("Added {ticker} to portfolio"));
    UpdateResult::none()
}

pub fn handle_close_add_dialog(state: &mut AppState) -> UpdateResult {
    if let ActiveView::Portfolio(portfolio) = &mut state.view {
        portfolio.close_add_dialog();
    }
    UpdateResult::none()
}

pub fn handle_remove_holding(state: &mut AppState, id: &str) -> UpdateResult {
    if let ActiveView::Portfolio(portfolio) = &mut state.view {
        if portfolio.remove_holding(id) {
            info!("Removed holding {}", id);
        }
    }
    UpdateResult::none()
}

pub fn handle_update_quantity(state: &mut AppState, id: &str, quantity: u32) -> UpdateResult {
    if let ActiveView::Portfolio(portfolio) = &mut state.view {
        if quantity > 0 {
            portfolio.update_quantity(id, quantity);
        }
    }
    UpdateResult::none()
}

pub fn handle_analyze(state: &mut AppState) -> UpdateResult {
    let view = state.view_id;
    let ActiveView::Portfolio(portfolio) = &mut state.view else {
        return UpdateResult::none();
    };
    if !portfolio.can_analyze() {
        return UpdateResult::none();
    }

    portfolio.analyzing = true;
    UpdateResult::action(UpdateAction::AnalyzePortfolio {
        view,
        holdings: portfolio.holdings.clone(),
    })
}

pub fn handle_analysis_completed(state: &mut AppState, result: Result<(), String>) -> UpdateResult {
    match result {
        Ok(()) => UpdateResult::message(Message::Navigate(Screen::Advice)),
        Err(e) => {
            warn!("Analysis failed: {}", e);
            if let ActiveView::Portfolio(portfolio) = &mut state.view {
                portfolio.analyzing = false;
            }
            state.status = Some(format!("Analysis failed: {e}"));
            UpdateResult::none()
        }
    }
}
