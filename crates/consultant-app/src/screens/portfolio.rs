//! Portfolio builder: holdings, stock search and the add dialog

use std::collections::HashSet;

use rand::Rng;

use consultant_core::fixtures::seed_holdings;
use consultant_core::Holding;

use super::{cycle, FormView, TextInput};

/// Queries shorter than this clear the results without searching
pub const MIN_QUERY_LEN: usize = 3;

/// Holdings needed before an analysis can run
pub const MIN_HOLDINGS_FOR_ANALYSIS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PortfolioFocus {
    #[default]
    Search,
    Results,
    Holdings,
    Analyze,
}

impl PortfolioFocus {
    pub const ORDER: [PortfolioFocus; 4] = [
        PortfolioFocus::Search,
        PortfolioFocus::Results,
        PortfolioFocus::Holdings,
        PortfolioFocus::Analyze,
    ];
}

/// Quantity prompt for a selected search result
#[derive(Debug, Clone, PartialEq)]
pub struct AddHoldingDialog {
    pub stock: Holding,
    pub quantity: TextInput,
}

impl AddHoldingDialog {
    /// Parsed quantity; anything unparsable counts as zero
    pub fn quantity(&self) -> u32 {
        self.quantity.value().parse().unwrap_or(0)
    }

    pub fn can_add(&self) -> bool {
        self.quantity() > 0
    }
}

#[derive(Debug, Clone)]
pub struct PortfolioView {
    pub holdings: Vec<Holding>,
    pub query: TextInput,
    /// Bumped on every query edit; only the latest search may land
    pub search_generation: u64,
    pub searching: bool,
    pub results: Vec<Holding>,
    pub selected_result: usize,
    pub selected_holding: usize,
    pub add_dialog: Option<AddHoldingDialog>,
    pub analyzing: bool,
    pub focus: PortfolioFocus,
}

impl Default for PortfolioView {
    fn default() -> Self {
        Self::new()
    }
}

impl PortfolioView {
    pub fn new() -> Self {
        Self {
            holdings: seed_holdings(),
            query: TextInput::default(),
            search_generation: 0,
            searching: false,
            results: Vec::new(),
            selected_result: 0,
            selected_holding: 0,
            add_dialog: None,
            analyzing: false,
            focus: PortfolioFocus::Search,
        }
    }

    /// Σ price × quantity
    pub fn total_value(&self) -> f64 {
        self.holdings.iter().map(Holding::market_value).sum()
    }

    pub fn sector_count(&self) -> usize {
        self.holdings
            .iter()
            .map(|h| h.sector.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn can_analyze(&self) -> bool {
        !self.analyzing && self.holdings.len() >= MIN_HOLDINGS_FOR_ANALYSIS
    }

    /// React to an edited query.
    ///
    /// Returns the generation to search under when the query is long enough;
    /// shorter queries clear the results immediately.
    pub fn query_changed(&mut self) -> Option<u64> {
        self.search_generation += 1;
        if self.query.value().chars().count() < MIN_QUERY_LEN {
            self.results.clear();
            self.selected_result = 0;
            self.searching = false;
            return None;
        }
        self.searching = true;
        Some(self.search_generation)
    }

    /// Accept results for `generation`; stale generations are ignored
    pub fn apply_results(&mut self, generation: u64, results: Vec<Holding>) -> bool {
        if generation != self.search_generation {
            return false;
        }
        self.results = results;
        self.selected_result = 0;
        self.searching = false;
        true
    }

    pub fn open_add_dialog(&mut self, index: usize) -> bool {
        match self.results.get(index) {
            Some(stock) => {
                self.add_dialog = Some(AddHoldingDialog {
                    quantity: TextInput::new(stock.quantity.to_string()),
                    stock: stock.clone(),
                });
                true
            }
            None => false,
        }
    }

    pub fn close_add_dialog(&mut self) {
        self.add_dialog = None;
    }

    /// Add `stock` with a fresh id, close the dialog and clear the search.
    ///
    /// Returns the new holding's id.
    pub fn add_holding(&mut self, stock: Holding, quantity: u32) -> String {
        let id = fresh_holding_id(&self.holdings);
        self.holdings.push(Holding {
            id: id.clone(),
            quantity,
            ..stock
        });
        self.add_dialog = None;
        self.query.clear();
        self.search_generation += 1;
        self.results.clear();
        self.selected_result = 0;
        self.searching = false;
        id
    }

    pub fn remove_holding(&mut self, id: &str) -> bool {
        let before = self.holdings.len();
        self.holdings.retain(|h| h.id != id);
        if self.selected_holding >= self.holdings.len() {
            self.selected_holding = self.holdings.len().saturating_sub(1);
        }
        self.holdings.len() != before
    }

    pub fn update_quantity(&mut self, id: &str, quantity: u32) -> bool {
        match self.holdings.iter_mut().find(|h| h.id == id) {
            Some(holding) => {
                holding.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub fn selected_holding(&self) -> Option<&Holding> {
        self.holdings.get(self.selected_holding)
    }

    pub fn select_result(&mut self, forward: bool) {
        self.selected_result = step_index(self.selected_result, self.results.len(), forward);
    }

    pub fn select_holding(&mut self, forward: bool) {
        self.selected_holding = step_index(self.selected_holding, self.holdings.len(), forward);
    }
}

fn step_index(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        0
    } else if forward {
        (current + 1).min(len - 1)
    } else {
        current.saturating_sub(1)
    }
}

/// Random id not already used by any of `existing`
fn fresh_holding_id(existing: &[Holding]) -> String {
    let mut rng = rand::thread_rng();
    loop {
        let id = format!("{:016x}", rng.gen::<u64>());
        if !existing.iter().any(|h| h.id == id) {
            return id;
        }
    }
}

impl FormView for PortfolioView {
    fn focused_input(&mut self) -> Option<&mut TextInput> {
        if let Some(dialog) = self.add_dialog.as_mut() {
            return Some(&mut dialog.quantity);
        }
        match self.focus {
            PortfolioFocus::Search => Some(&mut self.query),
            _ => None,
        }
    }

    fn focus_next(&mut self) {
        if self.add_dialog.is_none() {
            self.focus = cycle(&PortfolioFocus::ORDER, self.focus, true);
        }
    }

    fn focus_prev(&mut self) {
        if self.add_dialog.is_none() {
            self.focus = cycle(&PortfolioFocus::ORDER, self.focus, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(ticker: &str, sector: &str) -> Holding {
        Holding {
            id: "q".to_string(),
            ticker: ticker.to_string(),
            company: format!("{ticker} Ltd"),
            sector: sector.to_string(),
            quantity: 0,
            price: 1000.0,
            change: 1.0,
        }
    }

    #[test]
    fn test_seeded_summary() {
        let view = PortfolioView::new();
        assert_eq!(view.holdings.len(), 2);
        assert!((view.total_value() - (50.0 * 2456.75 + 100.0 * 1543.20)).abs() < 1e-6);
        assert_eq!(view.sector_count(), 2);
        assert!(view.can_analyze());
    }

    #[test]
    fn test_short_query_clears_results() {
        let mut view = PortfolioView::new();
        view.results = vec![quote("TCS", "Technology")];
        view.query.set("tc");

        assert_eq!(view.query_changed(), None);
        assert!(view.results.is_empty());
        assert!(!view.searching);
    }

    #[test]
    fn test_stale_results_ignored() {
        let mut view = PortfolioView::new();
        view.query.set("ban");
        let first = view.query_changed().unwrap();
        view.query.set("bank");
        let second = view.query_changed().unwrap();

        assert!(!view.apply_results(first, vec![quote("SBIN", "Banking")]));
        assert!(view.searching);
        assert!(view.apply_results(second, vec![quote("HDFCBANK", "Banking")]));
        assert_eq!(view.results[0].ticker, "HDFCBANK");
    }

    #[test]
    fn test_add_holding_assigns_unique_id_and_resets_search() {
        let mut view = PortfolioView::new();
        view.query.set("tcs");
        let generation = view.query_changed().unwrap();
        view.apply_results(generation, vec![quote("TCS", "Technology")]);
        assert!(view.open_add_dialog(0));

        let stock = view.add_dialog.as_ref().unwrap().stock.clone();
        let id = view.add_holding(stock, 10);

        assert_eq!(view.holdings.len(), 3);
        assert!(view.add_dialog.is_none());
        assert!(view.query.is_empty());
        assert!(view.results.is_empty());
        let ids: HashSet<_> = view.holdings.iter().map(|h| h.id.clone()).collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(view.holdings[2].id, id);
        assert_eq!(view.holdings[2].quantity, 10);
        assert_eq!(view.sector_count(), 2);
    }

    #[test]
    fn test_remove_and_update_by_id() {
        let mut view = PortfolioView::new();
        assert!(view.update_quantity("2", 5));
        assert_eq!(view.holdings[1].quantity, 5);
        assert!(view.remove_holding("1"));
        assert!(!view.remove_holding("1"));
        assert_eq!(view.holdings.len(), 1);
        assert!(!view.can_analyze());
    }

    #[test]
    fn test_add_dialog_quantity_parsing() {
        let dialog = AddHoldingDialog {
            stock: quote("ITC", "FMCG"),
            quantity: TextInput::new("abc"),
        };
        assert_eq!(dialog.quantity(), 0);
        assert!(!dialog.can_add());
    }

    #[test]
    fn test_dialog_captures_text_input() {
        let mut view = PortfolioView::new();
        view.results = vec![quote("ITC", "FMCG")];
        view.open_add_dialog(0);
        let input = view.focused_input().unwrap();
        input.clear();
        input.insert('7');
        assert_eq!(view.add_dialog.as_ref().unwrap().quantity(), 7);
    }
}
