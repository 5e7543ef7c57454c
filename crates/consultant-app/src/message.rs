//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use consultant_core::{Holding, PlanId, ReportFormat, User};

use crate::input_key::InputKey;
use crate::router::Screen;
use crate::screens::advice::ShareTarget;
use crate::screens::profile::NotificationKind;
use crate::screens::ViewId;
use crate::services::{AuthError, PaymentReceipt};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit immediately (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Global Messages
    // ─────────────────────────────────────────────────────────
    /// Flip between the dark and light palettes
    ToggleTheme,

    /// Ask the router for a screen
    Navigate(Screen),

    /// Clear the session and return to sign-in
    SignOut,

    // ─────────────────────────────────────────────────────────
    // Form Editing Messages (apply to the view on display)
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,
    /// Type into the focused text field
    InputChar(char),
    InputBackspace,
    /// Flip the checkbox or show/hide toggle under focus
    ToggleFocused,
    /// Move the highlighted row of the focused list
    SelectNext,
    SelectPrev,

    // ─────────────────────────────────────────────────────────
    // Auth Form Messages
    // ─────────────────────────────────────────────────────────
    SubmitLogin,
    SubmitSignup,

    /// Password reset, step 1: send the reset email
    SubmitResetEmail,
    /// Password reset, step 2: go back and send again
    ResendResetEmail,
    /// Password reset, step 2: continue to the new-password step
    EnterResetCode,
    /// Password reset, step 3: set the new password
    SubmitNewPassword,

    // ─────────────────────────────────────────────────────────
    // Profile Messages
    // ─────────────────────────────────────────────────────────
    EditProfile,
    CancelProfileEdit,
    SaveProfile,
    ChangePassword,
    ToggleNotification(NotificationKind),

    // ─────────────────────────────────────────────────────────
    // Portfolio Messages
    // ─────────────────────────────────────────────────────────
    /// The search query was edited
    SearchQueryChanged,
    /// Open the add dialog for a search result
    SelectSearchResult(usize),
    /// Confirm the add dialog
    AddHolding,
    CloseAddDialog,
    RemoveHolding { id: String },
    UpdateQuantity { id: String, quantity: u32 },
    AnalyzePortfolio,

    // ─────────────────────────────────────────────────────────
    // Advice Messages
    // ─────────────────────────────────────────────────────────
    DownloadReport(ReportFormat),
    OpenShareDialog,
    CloseShareDialog,
    Share(ShareTarget),

    // ─────────────────────────────────────────────────────────
    // Billing Messages
    // ─────────────────────────────────────────────────────────
    SelectPlan(PlanId),
    Pay,
    DismissPayment,
    DownloadReceipt { transaction_id: String },

    // ─────────────────────────────────────────────────────────
    // Background Task Completions
    // ─────────────────────────────────────────────────────────
    /// Startup session check finished
    SessionRestored { user: Option<User> },

    /// Sign-in or sign-up finished
    AuthCompleted {
        view: ViewId,
        result: Result<User, AuthError>,
    },

    ResetEmailSent {
        view: ViewId,
        result: Result<(), AuthError>,
    },

    PasswordResetCompleted {
        view: ViewId,
        result: Result<(), AuthError>,
    },

    PasswordChanged {
        view: ViewId,
        result: Result<(), AuthError>,
    },

    /// Debounced stock search finished
    SearchCompleted {
        view: ViewId,
        generation: u64,
        results: Vec<Holding>,
    },

    AnalysisCompleted {
        view: ViewId,
        result: Result<(), String>,
    },

    ReportDownloaded {
        view: ViewId,
        result: Result<PathBuf, String>,
    },

    PaymentCompleted {
        view: ViewId,
        result: Result<PaymentReceipt, String>,
    },

    ReceiptDownloaded {
        view: ViewId,
        result: Result<PathBuf, String>,
    },
}

impl Message {
    /// Completion messages carry the id of the view that started them
    pub fn origin_view(&self) -> Option<ViewId> {
        match self {
            Message::AuthCompleted { view, .. }
            | Message::ResetEmailSent { view, .. }
            | Message::PasswordResetCompleted { view, .. }
            | Message::PasswordChanged { view, .. }
            | Message::SearchCompleted { view, .. }
            | Message::AnalysisCompleted { view, .. }
            | Message::ReportDownloaded { view, .. }
            | Message::PaymentCompleted { view, .. }
            | Message::ReceiptDownloaded { view, .. } => Some(*view),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_view_only_on_completions() {
        let msg = Message::SearchCompleted {
            view: ViewId(7),
            generation: 1,
            results: vec![],
        };
        assert_eq!(msg.origin_view(), Some(ViewId(7)));
        assert_eq!(Message::Tick.origin_view(), None);
        assert_eq!(Message::SessionRestored { user: None }.origin_view(), None);
    }
}
