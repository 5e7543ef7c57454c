//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, info};

use crate::message::Message;
use crate::router::RouteEvent;
use crate::state::AppState;

use super::{advice, auth, billing, form, keys, portfolio, profile, UpdateResult};

/// Process a message and update state.
///
/// Returns an optional follow-up message and an optional action for the
/// event loop.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    // Completions addressed to a view that has since been replaced are
    // dropped. Sign-in results still reach the session.
    if let Some(origin) = message.origin_view() {
        let session_bound = matches!(message, Message::AuthCompleted { .. });
        if !session_bound && !state.is_current_view(origin) {
            debug!("Dropping completion for replaced {}", origin);
            return UpdateResult::none();
        }
    }

    match message {
        Message::Key(key) => {
            if let Some(msg) = keys::handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.show_splash() {
                state.loading_state.tick();
            }
            UpdateResult::none()
        }

        Message::Quit => {
            info!("Quit requested");
            state.request_quit();
            UpdateResult::none()
        }

        Message::ToggleTheme => {
            state.theme.toggle();
            UpdateResult::none()
        }

        Message::Navigate(screen) => {
            state.route(RouteEvent::Navigate(screen));
            UpdateResult::none()
        }

        Message::SignOut => auth::handle_sign_out(state),

        // ─────────────────────────────────────────────────────────
        // Form editing
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.view.as_form().focus_next();
            UpdateResult::none()
        }
        Message::FocusPrev => {
            state.view.as_form().focus_prev();
            UpdateResult::none()
        }
        Message::InputChar(c) => form::handle_input(state, |input| input.insert(c)),
        Message::InputBackspace => form::handle_input(state, |input| input.backspace()),
        Message::ToggleFocused => form::handle_toggle_focused(state),
        Message::SelectNext => form::handle_select(state, true),
        Message::SelectPrev => form::handle_select(state, false),

        // ─────────────────────────────────────────────────────────
        // Auth forms
        // ─────────────────────────────────────────────────────────
        Message::SubmitLogin => auth::handle_submit_login(state),
        Message::SubmitSignup => auth::handle_submit_signup(state),
        Message::SubmitResetEmail => auth::handle_submit_reset_email(state),
        Message::ResendResetEmail => auth::handle_resend_reset_email(state),
        Message::EnterResetCode => auth::handle_enter_reset_code(state),
        Message::SubmitNewPassword => auth::handle_submit_new_password(state),

        // ─────────────────────────────────────────────────────────
        // Profile
        // ─────────────────────────────────────────────────────────
        Message::EditProfile => profile::handle_edit(state),
        Message::CancelProfileEdit => profile::handle_cancel_edit(state),
        Message::SaveProfile => profile::handle_save(state),
        Message::ChangePassword => profile::handle_change_password(state),
        Message::ToggleNotification(kind) => profile::handle_toggle_notification(state, kind),

        // ─────────────────────────────────────────────────────────
        // Portfolio
        // ─────────────────────────────────────────────────────────
        Message::SearchQueryChanged => portfolio::handle_query_changed(state),
        Message::SelectSearchResult(index) => portfolio::handle_select_result(state, index),
        Message::AddHolding => portfolio::handle_add_holding(state),
        Message::CloseAddDialog => portfolio::handle_close_add_dialog(state),
        Message::RemoveHolding { id } => portfolio::handle_remove_holding(state, &id),
        Message::UpdateQuantity { id, quantity } => {
            portfolio::handle_update_quantity(state, &id, quantity)
        }
        Message::AnalyzePortfolio => portfolio::handle_analyze(state),

        // ─────────────────────────────────────────────────────────
        // Advice
        // ─────────────────────────────────────────────────────────
        Message::DownloadReport(format) => advice::handle_download_report(state, format),
        Message::OpenShareDialog => advice::handle_open_share(state),
        Message::CloseShareDialog => advice::handle_close_share(state),
        Message::Share(target) => advice::handle_share(state, target),

        // ─────────────────────────────────────────────────────────
        // Billing
        // ─────────────────────────────────────────────────────────
        Message::SelectPlan(plan) => billing::handle_select_plan(state, plan),
        Message::Pay => billing::handle_pay(state),
        Message::DismissPayment => billing::handle_dismiss_payment(state),
        Message::DownloadReceipt { transaction_id } => {
            billing::handle_download_receipt(state, transaction_id)
        }

        // ─────────────────────────────────────────────────────────
        // Completions
        // ─────────────────────────────────────────────────────────
        Message::SessionRestored { user } => auth::handle_session_restored(state, user),
        Message::AuthCompleted { view, result } => auth::handle_auth_completed(state, view, result),
        Message::ResetEmailSent { result, .. } => auth::handle_reset_email_sent(state, result),
        Message::PasswordResetCompleted { result, .. } => {
            auth::handle_password_reset_completed(state, result)
        }
        Message::PasswordChanged { result, .. } => profile::handle_password_changed(state, result),
        Message::SearchCompleted {
            generation,
            results,
            ..
        } => portfolio::handle_search_completed(state, generation, results),
        Message::AnalysisCompleted { result, .. } => {
            portfolio::handle_analysis_completed(state, result)
        }
        Message::ReportDownloaded { result, .. } => advice::handle_report_downloaded(state, result),
        Message::PaymentCompleted { result, .. } => billing::handle_payment_completed(state, result),
        Message::ReceiptDownloaded { result, .. } => {
            billing::handle_receipt_downloaded(state, result)
        }
    }
}
