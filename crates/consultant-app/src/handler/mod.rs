//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers, one per screen
//! - `form`: Focus, typing, toggles and list selection on the current view
//! - `auth`: Sign-in, sign-up, password reset and session completions
//! - `profile`: Profile edits, password change, notifications
//! - `portfolio`: Search, holdings and analysis
//! - `advice`: Report downloads and sharing
//! - `billing`: Plan selection, payment and receipts

pub(crate) mod advice;
pub(crate) mod auth;
pub(crate) mod billing;
pub(crate) mod form;
pub(crate) mod keys;
pub(crate) mod portfolio;
pub(crate) mod profile;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use consultant_core::{Holding, PlanId, ReportFormat};

use crate::message::Message;
use crate::screens::ViewId;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
///
/// Every variant that produces a completion carries the `ViewId` of the view
/// that asked for it, echoed back on the completion message.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Startup session check
    RestoreSession,

    Login {
        view: ViewId,
        email: String,
        password: String,
    },

    Signup {
        view: ViewId,
        email: String,
        password: String,
        full_name: String,
    },

    SendResetEmail {
        view: ViewId,
        email: String,
    },

    ConfirmPasswordReset {
        view: ViewId,
        new_password: String,
    },

    ChangePassword {
        view: ViewId,
        current: String,
        new_password: String,
    },

    /// Wait out the debounce period, then search the catalog
    SearchStocks {
        view: ViewId,
        generation: u64,
        query: String,
    },

    AnalyzePortfolio {
        view: ViewId,
        holdings: Vec<Holding>,
    },

    /// Generate the analysis report and write it to the downloads directory
    DownloadReport {
        view: ViewId,
        format: ReportFormat,
    },

    ProcessPayment {
        view: ViewId,
        plan: PlanId,
    },

    DownloadReceipt {
        view: ViewId,
        transaction_id: String,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
