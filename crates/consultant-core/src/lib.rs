//! # consultant-core - Core Domain Types
//!
//! Foundation crate for Stock Consultant. Provides domain types, fixed market
//! and billing data, form validation, display formatting, error handling and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Account Types (`types`)
//! - [`User`] - The signed-in account
//! - [`ProfileUpdate`] - Partial update merged into a [`User`]
//! - [`ReportFormat`] - Export format for analysis reports (PDF, CSV)
//!
//! ### Market Types (`market`)
//! - [`Holding`] - A portfolio position
//! - [`CatalogEntry`] - A searchable stock
//! - [`StockAdvice`], [`AdviceKind`] - Per-stock recommendations
//!
//! ### Billing Types (`billing`)
//! - [`Plan`], [`PlanId`] - Subscription plans
//! - [`Transaction`], [`UsageQuota`] - Billing history and analysis quota
//!
//! ### Validation (`validation`)
//! - Field rules for the sign-in, sign-up, reset and profile forms
//! - [`PasswordStrength`] - Five-step strength meter
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use consultant_core::prelude::*;
//! ```

pub mod billing;
pub mod error;
pub mod fixtures;
pub mod format;
pub mod logging;
pub mod market;
pub mod types;
pub mod validation;

/// Prelude for common imports used throughout all Stock Consultant crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use billing::{Plan, PlanId, Transaction, TransactionStatus, UsageQuota};
pub use error::{Error, Result, ResultExt};
pub use format::{format_change, format_inr, format_price, group_indian};
pub use market::{
    AdviceKind, CatalogEntry, DashboardStat, Holding, PortfolioSummary, RecentAdvice,
    StockAdvice, Trend,
};
pub use types::{ProfileUpdate, ReportFormat, User};
pub use validation::{PasswordChecks, PasswordStrength};
