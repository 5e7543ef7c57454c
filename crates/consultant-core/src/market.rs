//! Stock, holding and advice types

use serde::{Deserialize, Serialize};

/// A stock the search catalog knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub ticker: &'static str,
    pub company: &'static str,
    pub sector: &'static str,
}

impl CatalogEntry {
    /// Case-insensitive substring match on ticker or company name
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.ticker.to_lowercase().contains(&query) || self.company.to_lowercase().contains(&query)
    }
}

/// A position in the portfolio (or a quoted search result, with quantity 0)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub id: String,
    pub ticker: String,
    pub company: String,
    pub sector: String,
    pub quantity: u32,
    pub price: f64,
    /// Daily change in percent
    pub change: f64,
}

impl Holding {
    pub fn market_value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    pub fn is_gaining(&self) -> bool {
        self.change >= 0.0
    }
}

/// Recommendation attached to a holding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdviceKind {
    Buy,
    Sell,
    Hold,
    Reduce,
}

impl AdviceKind {
    pub fn label(&self) -> &'static str {
        match self {
            AdviceKind::Buy => "Buy",
            AdviceKind::Sell => "Sell",
            AdviceKind::Hold => "Hold",
            AdviceKind::Reduce => "Reduce",
        }
    }

    /// Whether the advice points toward trimming the position
    pub fn is_bearish(&self) -> bool {
        matches!(self, AdviceKind::Sell | AdviceKind::Reduce)
    }
}

impl std::fmt::Display for AdviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Detailed advice record shown on the advice screen
#[derive(Debug, Clone, PartialEq)]
pub struct StockAdvice {
    pub ticker: &'static str,
    pub company: &'static str,
    pub current_price: f64,
    pub change: f64,
    pub advice: AdviceKind,
    pub reason: &'static str,
    pub risk_note: &'static str,
    /// Confidence in percent (0-100)
    pub confidence: u8,
    pub target_price: Option<f64>,
    pub quantity: u32,
}

impl StockAdvice {
    /// Upside (or downside) to the target price, in percent
    pub fn target_upside(&self) -> Option<f64> {
        self.target_price
            .filter(|_| self.current_price > 0.0)
            .map(|target| (target - self.current_price) / self.current_price * 100.0)
    }
}

/// Short advice line shown on the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct RecentAdvice {
    pub stock: &'static str,
    pub ticker: &'static str,
    pub advice: AdviceKind,
    pub reason: &'static str,
    pub confidence: u8,
}

/// Portfolio-level summary accompanying the advice list
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSummary {
    pub total_value: u64,
    pub recommendation: &'static str,
    pub risk_score: &'static str,
    pub expected_return: &'static str,
    pub time_horizon: &'static str,
}

/// Direction of a dashboard statistic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// Headline statistic on the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStat {
    pub name: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_entry_matches_ticker_case_insensitively() {
        let entry = CatalogEntry {
            ticker: "TCS",
            company: "Tata Consultancy Services",
            sector: "Technology",
        };
        assert!(entry.matches("tcs"));
        assert!(entry.matches("consult"));
        assert!(!entry.matches("wipro"));
    }

    #[test]
    fn test_market_value() {
        let holding = Holding {
            id: "1".into(),
            ticker: "INFY".into(),
            company: "Infosys Limited".into(),
            sector: "Technology".into(),
            quantity: 100,
            price: 1543.20,
            change: -1.12,
        };
        assert!((holding.market_value() - 154_320.0).abs() < 1e-6);
        assert!(!holding.is_gaining());
    }

    #[test]
    fn test_advice_kind_bearish() {
        assert!(AdviceKind::Reduce.is_bearish());
        assert!(AdviceKind::Sell.is_bearish());
        assert!(!AdviceKind::Hold.is_bearish());
        assert_eq!(AdviceKind::Buy.to_string(), "Buy");
    }
}
