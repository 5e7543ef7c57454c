//! Sign-in, sign-up, password reset and session lifecycle handlers

use tracing::{info, warn};

use consultant_core::User;

use crate::message::Message;
use crate::router::{RouteEvent, Screen};
use crate::screens::login::LOGIN_FAILED;
use crate::screens::reset::{ResetStep, EMAIL_NOT_FOUND};
use crate::screens::signup::SIGNUP_FAILED;
use crate::screens::{ActiveView, ViewId};
use crate::services::AuthError;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Shown under the new password when the backend refuses the reset
pub const RESET_FAILED: &str = "Could not reset password. Please try again.";

pub fn handle_session_restored(state: &mut AppState, user: Option<User>) -> UpdateResult {
    if state.session.finish_bootstrap(user) {
        state.route(RouteEvent::SignedIn);
    }
    UpdateResult::none()
}

pub fn handle_submit_login(state: &mut AppState) -> UpdateResult {
    let view = state.view_id;
    let ActiveView::Login(form) = &mut state.view else {
        return UpdateResult::none();
    };
    if form.submitting || state.session.is_loading() {
        return UpdateResult::none();
    }
    if !form.validate() {
        return UpdateResult::none();
    }

    form.submitting = true;
    state.session.begin_auth();
    UpdateResult::action(UpdateAction::Login {
        view,
        email: form.email.value().to_string(),
        password: form.password.value().to_string(),
    })
}

pub fn handle_submit_signup(state: &mut AppState) -> UpdateResult {
    let view = state.view_id;
    let ActiveView::Signup(form) = &mut state.view else {
        return UpdateResult::none();
    };
    if form.submitting || state.session.is_loading() {
        return UpdateResult::none();
    }
    if !form.validate() {
        return UpdateResult::none();
    }

    form.submitting = true;
    state.session.begin_auth();
    UpdateResult::action(UpdateAction::Signup {
        view,
        email: form.email.value().to_string(),
        password: form.password.value().to_string(),
        full_name: form.full_name.value().trim().to_string(),
    })
}

pub fn handle_auth_completed(
    state: &mut AppState,
    view: ViewId,
    result: Result<User, AuthError>,
) -> UpdateResult {
    match result {
        Ok(user) => {
            if state.session.complete_auth(user) {
                state.route(RouteEvent::SignedIn);
            }
        }
        Err(e) => {
            warn!("Authentication failed: {}", e);
            state.session.end_auth();
            if state.is_current_view(view) {
                match &mut state.view {
                    ActiveView::Login(form) => {
                        form.submitting = false;
                        form.errors.general = Some(LOGIN_FAILED);
                    }
                    ActiveView::Signup(form) => {
                        form.submitting = false;
                        form.errors.general = Some(SIGNUP_FAILED);
                    }
                    _ => {}
                }
            }
        }
    }
    UpdateResult::none()
}

pub fn handle_sign_out(state: &mut AppState) -> UpdateResult {
    state.session.sign_out();
    state.route(RouteEvent::SignedOut);
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Password reset
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_submit_reset_email(state: &mut AppState) -> UpdateResult {
    let view = state.view_id;
    let ActiveView::ForgotPassword(flow) = &mut state.view else {
        return UpdateResult::none();
    };
    if flow.step != ResetStep::Email || flow.submitting || !flow.validate_email() {
        return UpdateResult::none();
    }

    flow.submitting = true;
    UpdateResult::action(UpdateAction::SendResetEmail {
        view,
        email: flow.email.value().to_string(),
    })
}

pub fn handle_reset_email_sent(
    state: &mut AppState,
    result: Result<(), AuthError>,
) -> UpdateResult {
    let ActiveView::ForgotPassword(flow) = &mut state.view else {
        return UpdateResult::none();
    };
    flow.submitting = false;
    match result {
        Ok(()) => flow.go_to(ResetStep::Sent),
        Err(e) => {
            warn!("Reset email failed: {}", e);
            flow.errors.email = Some(EMAIL_NOT_FOUND);
        }
    }
    UpdateResult::none()
}

pub fn handle_resend_reset_email(state: &mut AppState) -> UpdateResult {
    if let ActiveView::ForgotPassword(flow) = &mut state.view {
        if flow.step == ResetStep::Sent {
            flow.go_to(ResetStep::Email);
        }
    }
    UpdateResult::none()
}

pub fn handle_enter_reset_code(state: &mut AppState) -> UpdateResult {
    if let ActiveView::ForgotPassword(flow) = &mut state.view {
        if flow.step == ResetStep::Sent {
            flow.go_to(ResetStep::Reset);
        }
    }
    UpdateResult::none()
}

pub fn handle_submit_new_password(state: &mut AppState) -> UpdateResult {
    let view = state.view_id;
    let ActiveView::ForgotPassword(flow) = &mut state.view else {
        return UpdateResult::none();
    };
    if flow.step != ResetStep::Reset || flow.submitting || !flow.validate_new_password() {
        return UpdateResult::none();
    }

    flow.submitting = true;
    UpdateResult::action(UpdateAction::ConfirmPasswordReset {
        view,
        new_password: flow.new_password.value().to_string(),
    })
}

pub fn handle_password_reset_completed(
    state: &mut AppState,
    result: Result<(), AuthError>,
) -> UpdateResult {
    match result {
        Ok(()) => {
            info!("Password reset complete, returning to sign-in");
            UpdateResult::message(Message::Navigate(Screen::Login))
        }
        Err(e) => {
            warn!("Password reset failed: {}", e);
            if let ActiveView::ForgotPassword(flow) = &mut state.view {
                flow.submitting = false;
                flow.errors.password = Some(RESET_FAILED);
            }
            UpdateResult::none()
        }
    }
}
