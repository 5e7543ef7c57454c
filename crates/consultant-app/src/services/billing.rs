//! Payment and receipt backend

use rand::Rng;
use tokio::time::sleep;
use tracing::info;

use consultant_core::fixtures;
use consultant_core::prelude::*;
use consultant_core::PlanId;

use crate::config::LatencySettings;

/// Confirmation returned by a successful payment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub plan: PlanId,
    /// Amount charged, in rupees
    pub amount: u32,
    pub reference: String,
}

#[trait_variant::make(BillingService: Send)]
pub trait LocalBillingService {
    /// Charge for `plan`
    async fn process_payment(&self, plan: PlanId) -> Result<PaymentReceipt>;

    /// Body of the receipt document for a past transaction
    async fn receipt(&self, transaction_id: &str) -> Result<String>;
}

/// Payment processor that always succeeds
#[derive(Debug, Clone)]
pub struct MockBillingService {
    latency: LatencySettings,
}

impl MockBillingService {
    pub fn new(latency: LatencySettings) -> Self {
        Self { latency }
    }
}

fn payment_reference() -> String {
    format!("PAY-{:08X}", rand::thread_rng().gen::<u32>())
}

impl BillingService for MockBillingService {
    async fn process_payment(&self, plan: PlanId) -> Result<PaymentReceipt> {
        let amount = fixtures::plan(plan)
            .map(|p| p.price)
            .ok_or_else(|| Error::service(format!("Unknown plan {:?}", plan)))?;
        sleep(self.latency.payment()).await;

        let receipt = PaymentReceipt {
            plan,
            amount,
            reference: payment_reference(),
        };
        info!(
            "Payment {} of ₹{} for {:?} accepted",
            receipt.reference, receipt.amount, plan
        );
        Ok(receipt)
    }

    async fn receipt(&self, transaction_id: &str) -> Result<String> {
        Ok(format!("Receipt for transaction {}", transaction_id))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use consultant_core::PlanId;

    use super::{BillingService, MockBillingService};
    use crate::config::LatencySettings;

    #[tokio::test(start_paused = true)]
    async fn test_payment_takes_three_seconds_and_succeeds() {
        let service = MockBillingService::new(LatencySettings::default());
        let start = tokio::time::Instant::now();

        let receipt = service.process_payment(PlanId::Premium).await.unwrap();

        assert!(start.elapsed() >= Duration::from_secs(3));
        assert_eq!(receipt.amount, 299);
        assert!(receipt.reference.starts_with("PAY-"));
    }

    #[tokio::test]
    async fn test_receipt_body() {
        let service = MockBillingService::new(LatencySettings::instant());
        let body = service.receipt("2").await.unwrap();
        assert_eq!(body, "Receipt for transaction 2");
    }
}
