//! Service layer: async boundaries to the simulated backends
//!
//! Each backend is a trait declared with `trait_variant`, giving a `Send`
//! variant (used by the action executor) and a local variant. The mock
//! implementations read their delays from [`LatencySettings`].

pub mod auth;
pub mod billing;
pub mod market;

use std::sync::Arc;

pub use auth::{AuthError, AuthService, LocalAuthService, MockAuthService};
pub use billing::{BillingService, LocalBillingService, MockBillingService, PaymentReceipt};
pub use market::{LocalMarketService, MarketService, MockMarketService};

use crate::config::LatencySettings;

/// The three backends the action executor talks to
pub struct Services<A, M, B> {
    pub auth: Arc<A>,
    pub market: Arc<M>,
    pub billing: Arc<B>,
}

impl<A, M, B> Services<A, M, B> {
    pub fn new(auth: A, market: M, billing: B) -> Self {
        Self {
            auth: Arc::new(auth),
            market: Arc::new(market),
            billing: Arc::new(billing),
        }
    }
}

impl<A, M, B> Clone for Services<A, M, B> {
    fn clone(&self) -> Self {
        Self {
            auth: Arc::clone(&self.auth),
            market: Arc::clone(&self.market),
            billing: Arc::clone(&self.billing),
        }
    }
}

/// Backends used by the shipped binary
pub type MockServices = Services<MockAuthService, MockMarketService, MockBillingService>;

impl MockServices {
    pub fn mock(latency: LatencySettings) -> Self {
        Services::new(
            MockAuthService::new(latency),
            MockMarketService::new(latency),
            MockBillingService::new(latency),
        )
    }
}
