//! Subscription plan, usage and transaction types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Subscription plan identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanId {
    Basic,
    #[default]
    Premium,
    Enterprise,
}

impl PlanId {
    pub const ALL: [PlanId; 3] = [PlanId::Basic, PlanId::Premium, PlanId::Enterprise];

    pub fn next(self) -> Self {
        match self {
            PlanId::Basic => PlanId::Premium,
            PlanId::Premium => PlanId::Enterprise,
            PlanId::Enterprise => PlanId::Basic,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            PlanId::Basic => PlanId::Enterprise,
            PlanId::Premium => PlanId::Basic,
            PlanId::Enterprise => PlanId::Premium,
        }
    }
}

/// A subscription plan offered on the billing screen
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: PlanId,
    pub name: &'static str,
    /// Price in rupees per period
    pub price: u32,
    pub period: &'static str,
    pub features: &'static [&'static str],
    pub recommended: bool,
}

/// Settlement status of a past transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Paid,
    Pending,
    Failed,
}

impl TransactionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Paid => "Paid",
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Failed => "Failed",
        }
    }
}

/// A past billing transaction
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: &'static str,
    pub date: NaiveDate,
    pub amount: u32,
    pub description: &'static str,
    pub status: TransactionStatus,
}

/// Analysis quota for the current billing period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageQuota {
    pub used: u32,
    pub limit: u32,
    pub reset_date: NaiveDate,
}

impl UsageQuota {
    pub fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.used)
    }

    /// Fraction of the quota consumed, clamped to `0.0..=1.0`
    pub fn ratio(&self) -> f64 {
        if self.limit == 0 {
            return 1.0;
        }
        (f64::from(self.used) / f64::from(self.limit)).min(1.0)
    }
}
