//! Market data and advisory backend

use rand::Rng;
use tokio::time::sleep;
use tracing::{debug, info};

use consultant_core::fixtures::STOCK_CATALOG;
use consultant_core::prelude::*;
use consultant_core::{CatalogEntry, Holding, ReportFormat};

use crate::config::LatencySettings;

/// Stock search, portfolio analysis and report generation
#[trait_variant::make(MarketService: Send)]
pub trait LocalMarketService {
    /// Quote every catalog stock whose ticker or company contains `query`
    async fn search(&self, query: &str) -> Vec<Holding>;

    /// Run the advisory analysis over `holdings`
    async fn analyze_portfolio(&self, holdings: &[Holding]) -> Result<()>;

    /// Produce the body of a downloadable analysis report
    async fn generate_report(&self, format: ReportFormat) -> Result<String>;
}

/// Fixture-backed market service with random quotes
#[derive(Debug, Clone)]
pub struct MockMarketService {
    latency: LatencySettings,
}

impl MockMarketService {
    pub fn new(latency: LatencySettings) -> Self {
        Self { latency }
    }
}

/// Quote a catalog entry at a random price (500-3500) and daily change (±5%)
fn quote(entry: &CatalogEntry, rng: &mut impl Rng) -> Holding {
    Holding {
        id: format!("{:016x}", rng.gen::<u64>()),
        ticker: entry.ticker.to_string(),
        company: entry.company.to_string(),
        sector: entry.sector.to_string(),
        quantity: 0,
        price: rng.gen_range(500.0..3500.0),
        change: rng.gen_range(-5.0..5.0),
    }
}

fn quote_matches(query: &str) -> Vec<Holding> {
    let mut rng = rand::thread_rng();
    STOCK_CATALOG
        .iter()
        .filter(|entry| entry.matches(query))
        .map(|entry| quote(entry, &mut rng))
        .collect()
}

impl MarketService for MockMarketService {
    async fn search(&self, query: &str) -> Vec<Holding> {
        let results = quote_matches(query);
        debug!("Search {:?} matched {} stocks", query, results.len());
        results
    }

    async fn analyze_portfolio(&self, holdings: &[Holding]) -> Result<()> {
        info!("Analyzing portfolio of {} holdings", holdings.len());
        sleep(self.latency.analysis()).await;
        Ok(())
    }

    async fn generate_report(&self, format: ReportFormat) -> Result<String> {
        sleep(self.latency.report()).await;
        Ok(format!("Stock Analysis Report - {}", format))
    }
}
