//! Tests for handler module

use std::path::PathBuf;

use chrono::Local;

use consultant_core::{PlanId, ReportFormat, User};

use super::*;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::router::{RouteEvent, Screen};
use crate::screens::advice::ShareTarget;
use crate::screens::billing::{BillingFocus, PaymentDialog};
use crate::screens::login::{LoginField, LOGIN_FAILED};
use crate::screens::portfolio::PortfolioFocus;
use crate::screens::profile::{NotificationKind, ProfileField, PASSWORD_UPDATED};
use crate::screens::reset::ResetStep;
use crate::screens::signup::SIGNUP_FAILED;
use crate::screens::{ActiveView, ViewId};
use crate::services::{AuthError, PaymentReceipt};
use crate::state::AppState;

fn test_user(full_name: &str, email: &str) -> User {
    User {
        id: "1".to_string(),
        email: email.to_string(),
        full_name: full_name.to_string(),
        avatar: None,
        is_premium: false,
        created_at: Local::now(),
    }
}

/// Bootstrapped with nobody signed in, showing Login
fn signed_out_state() -> AppState {
    let mut state = AppState::default();
    update(&mut state, Message::SessionRestored { user: None });
    state
}

/// Bootstrapped and signed in, showing `screen`
fn signed_in_state(screen: Screen) -> AppState {
    let mut state = AppState::default();
    update(
        &mut state,
        Message::SessionRestored {
            user: Some(test_user("John Doe", "john@example.com")),
        },
    );
    update(&mut state, Message::Navigate(screen));
    state
}

/// Run `msg` and every follow-up message, collecting the actions
fn drive(state: &mut AppState, msg: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(msg);
    while let Some(msg) = next.take() {
        let result = update(state, msg);
        actions.extend(result.action);
        next = result.message;
    }
    actions
}

fn type_text(state: &mut AppState, text: &str) -> Vec<UpdateAction> {
    text.chars()
        .flat_map(|c| drive(state, Message::Key(InputKey::Char(c))))
        .collect()
}

fn press(state: &mut AppState, key: InputKey) -> Vec<UpdateAction> {
    drive(state, Message::Key(key))
}

// ─────────────────────────────────────────────────────────
// Runtime and global keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::default();
    update(&mut state, Message::Quit);
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_and_ctrl_q_quit() {
    let state = AppState::default();
    assert!(matches!(
        keys::handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
    assert!(matches!(
        keys::handle_key(&state, InputKey::CharCtrl('q')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_ctrl_t_toggles_theme_even_on_splash() {
    let mut state = AppState::default();
    assert!(state.show_splash());
    press(&mut state, InputKey::CharCtrl('t'));
    assert!(state.theme.is_dark_mode());
    press(&mut state, InputKey::CharCtrl('t'));
    assert!(!state.theme.is_dark_mode());
}

#[test]
fn test_splash_ignores_form_keys() {
    let state = AppState::default();
    assert!(keys::handle_key(&state, InputKey::Char('a')).is_none());
    assert!(keys::handle_key(&state, InputKey::Enter).is_none());
}

#[test]
fn test_tick_advances_splash_only() {
    let mut state = AppState::default();
    update(&mut state, Message::Tick);
    assert_eq!(state.loading_state.animation_frame, 1);

    update(&mut state, Message::SessionRestored { user: None });
    update(&mut state, Message::Tick);
    assert_eq!(state.loading_state.animation_frame, 1);
}

#[test]
fn test_function_keys_navigate_when_signed_in() {
    let mut state = signed_in_state(Screen::Dashboard);
    press(&mut state, InputKey::F(2));
    assert_eq!(state.current_screen(), Screen::Portfolio);
    press(&mut state, InputKey::F(5));
    assert_eq!(state.current_screen(), Screen::Profile);
}

#[test]
fn test_function_keys_ignored_when_signed_out() {
    let state = signed_out_state();
    assert!(keys::handle_key(&state, InputKey::F(1)).is_none());
}

// ─────────────────────────────────────────────────────────
// Bootstrap and routing guards
// ─────────────────────────────────────────────────────────

#[test]
fn test_bootstrap_without_session_stays_on_login() {
    let state = signed_out_state();
    assert!(!state.show_splash());
    assert!(!state.session.is_loading());
    assert_eq!(state.current_screen(), Screen::Login);
}

#[test]
fn test_bootstrap_with_session_lands_on_dashboard() {
    let mut state = AppState::default();
    update(
        &mut state,
        Message::SessionRestored {
            user: Some(test_user("John Doe", "john@example.com")),
        },
    );
    assert_eq!(state.current_screen(), Screen::Dashboard);
}

#[test]
fn test_member_screen_redirects_to_login_when_signed_out() {
    let mut state = signed_out_state();
    for screen in Screen::NAV {
        update(&mut state, Message::Navigate(screen));
        assert_eq!(state.current_screen(), Screen::Login);
    }
}

#[test]
fn test_auth_screens_redirect_to_dashboard_when_signed_in() {
    let mut state = signed_in_state(Screen::Profile);
    for screen in [Screen::Login, Screen::Signup, Screen::ForgotPassword] {
        update(&mut state, Message::Navigate(screen));
        assert_eq!(state.current_screen(), Screen::Dashboard);
    }
}

#[test]
fn test_navigation_clears_status() {
    let mut state = signed_in_state(Screen::Dashboard);
    state.status = Some("Saved".to_string());
    update(&mut state, Message::Navigate(Screen::Billing));
    assert!(state.status.is_none());
}

// ─────────────────────────────────────────────────────────
// Sign-in
// ─────────────────────────────────────────────────────────

#[test]
fn test_login_with_empty_fields_shows_errors_without_action() {
    let mut state = signed_out_state();
    let actions = press(&mut state, InputKey::Enter);

    assert!(actions.is_empty());
    let ActiveView::Login(form) = &state.view else {
        panic!("expected login view");
    };
    assert_eq!(form.errors.email, Some("Email is required"));
    assert_eq!(form.errors.password, Some("Password is required"));
    assert!(!state.session.is_loading());
}

#[test]
fn test_login_with_malformed_email_is_rejected_locally() {
    let mut state = signed_out_state();
    type_text(&mut state, "jane@example");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "secret1");
    let actions = press(&mut state, InputKey::Enter);

    assert!(actions.is_empty());
    let ActiveView::Login(form) = &state.view else {
        panic!("expected login view");
    };
    assert_eq!(form.errors.email, Some("Please enter a valid email"));
    assert_eq!(form.errors.password, None);
    assert!(!form.submitting);
    assert!(!state.session.is_loading());
}

#[test]
fn test_login_again_with_other_credentials_signs_in() {
    let mut state = signed_out_state();
    type_text(&mut state, "john@example.com");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "secret1");
    press(&mut state, InputKey::Enter);
    let view = state.view_id;
    update(
        &mut state,
        Message::AuthCompleted {
            view,
            result: Ok(test_user("John Doe", "john@example.com")),
        },
    );
    assert!(state.session.is_signed_in());

    update(&mut state, Message::SignOut);
    assert!(!state.session.is_signed_in());

    type_text(&mut state, "someone.else@example.org");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "different-password");
    let actions = press(&mut state, InputKey::Enter);
    assert_eq!(
        actions,
        vec![UpdateAction::Login {
            view: state.view_id,
            email: "someone.else@example.org".to_string(),
            password: "different-password".to_string(),
        }]
    );
    let view = state.view_id;
    update(
        &mut state,
        Message::AuthCompleted {
            view,
            result: Ok(test_user("John Doe", "someone.else@example.org")),
        },
    );

    assert_eq!(state.current_screen(), Screen::Dashboard);
    assert_eq!(
        state.session.user().map(|u| u.email.as_str()),
        Some("someone.else@example.org")
    );
    assert!(!state.session.is_loading());
}

#[test]
fn test_login_typed_through_keys_produces_action() {
    let mut state = signed_out_state();
    type_text(&mut state, "john@example.com");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "secret1");
    let actions = press(&mut state, InputKey::Enter);

    assert_eq!(
        actions,
        vec![UpdateAction::Login {
            view: state.view_id,
            email: "john@example.com".to_string(),
            password: "secret1".to_string(),
        }]
    );
    assert!(state.session.is_loading());
}

#[test]
fn test_login_double_submit_is_noop() {
    let mut state = signed_out_state();
    type_text(&mut state, "john@example.com");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "secret1");

    assert_eq!(drive(&mut state, Message::SubmitLogin).len(), 1);
    assert!(drive(&mut state, Message::SubmitLogin).is_empty());
}

#[test]
fn test_login_link_keys_navigate() {
    let mut state = signed_out_state();
    if let ActiveView::Login(form) = &mut state.view {
        form.focus = LoginField::Signup;
    }
    press(&mut state, InputKey::Enter);
    assert_eq!(state.current_screen(), Screen::Signup);
}

#[test]
fn test_login_show_password_toggles_with_space() {
    let mut state = signed_out_state();
    if let ActiveView::Login(form) = &mut state.view {
        form.focus = LoginField::ShowPassword;
    }
    press(&mut state, InputKey::Char(' '));
    let ActiveView::Login(form) = &state.view else {
        panic!("expected login view");
    };
    assert!(form.show_password);
    assert!(form.password.is_empty());
}

#[test]
fn test_auth_success_signs_in_and_shows_dashboard() {
    let mut state = signed_out_state();
    let view = state.view_id;
    update(
        &mut state,
        Message::AuthCompleted {
            view,
            result: Ok(test_user("John Doe", "john@example.com")),
        },
    );

    assert_eq!(state.current_screen(), Screen::Dashboard);
    assert_eq!(
        state.session.user().map(|u| u.full_name.as_str()),
        Some("John Doe")
    );
    assert!(!state.session.is_loading());
}

#[test]
fn test_auth_failure_shows_banner_and_reenables_form() {
    let mut state = signed_out_state();
    type_text(&mut state, "john@example.com");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "secret1");
    let view = state.view_id;
    drive(&mut state, Message::SubmitLogin);

    update(
        &mut state,
        Message::AuthCompleted {
            view,
            result: Err(AuthError::InvalidCredentials),
        },
    );

    let ActiveView::Login(form) = &state.view else {
        panic!("expected login view");
    };
    assert_eq!(form.errors.general, Some(LOGIN_FAILED));
    assert!(!form.submitting);
    assert!(!state.session.is_loading());
    assert!(!state.session.is_signed_in());
}

#[test]
fn test_auth_success_from_replaced_view_still_signs_in() {
    let mut state = signed_out_state();
    let old_view = state.view_id;
    update(&mut state, Message::Navigate(Screen::Signup));
    assert_ne!(state.view_id, old_view);

    update(
        &mut state,
        Message::AuthCompleted {
            view: old_view,
            result: Ok(test_user("John Doe", "john@example.com")),
        },
    );
    assert!(state.session.is_signed_in());
    assert_eq!(state.current_screen(), Screen::Dashboard);
}

#[test]
fn test_auth_failure_from_replaced_view_leaves_new_form_alone() {
    let mut state = signed_out_state();
    let old_view = state.view_id;
    update(&mut state, Message::Navigate(Screen::Signup));

    update(
        &mut state,
        Message::AuthCompleted {
            view: old_view,
            result: Err(AuthError::RegistrationRejected),
        },
    );
    let ActiveView::Signup(form) = &state.view else {
        panic!("expected signup view");
    };
    assert!(form.errors.general.is_none());
}

// ─────────────────────────────────────────────────────────
// Sign-up
// ─────────────────────────────────────────────────────────

#[test]
fn test_signup_passes_trimmed_name() {
    let mut state = signed_out_state();
    update(&mut state, Message::Navigate(Screen::Signup));
    if let ActiveView::Signup(form) = &mut state.view {
        form.full_name.set("  Jane Doe ");
        form.email.set("jane@example.com");
        form.password.set("Passw0rd1");
        form.confirm_password.set("Passw0rd1");
        form.accept_terms = true;
    }

    let actions = drive(&mut state, Message::SubmitSignup);
    assert_eq!(
        actions,
        vec![UpdateAction::Signup {
            view: state.view_id,
            email: "jane@example.com".to_string(),
            password: "Passw0rd1".to_string(),
            full_name: "Jane Doe".to_string(),
        }]
    );
}

#[test]
fn test_signup_with_malformed_email_is_rejected_locally() {
    let mut state = signed_out_state();
    update(&mut state, Message::Navigate(Screen::Signup));
    if let ActiveView::Signup(form) = &mut state.view {
        form.full_name.set("Jane Doe");
        form.email.set("jane@example");
        form.password.set("Passw0rd1");
        form.confirm_password.set("Passw0rd1");
        form.accept_terms = true;
    }

    assert!(drive(&mut state, Message::SubmitSignup).is_empty());
    let ActiveView::Signup(form) = &state.view else {
        panic!("expected signup view");
    };
    assert_eq!(form.errors.email, Some("Please enter a valid email"));
    assert!(!form.submitting);
    assert!(!state.session.is_loading());
}

#[test]
fn test_signup_without_terms_is_rejected_locally() {
    let mut state = signed_out_state();
    update(&mut state, Message::Navigate(Screen::Signup));
    if let ActiveView::Signup(form) = &mut state.view {
        form.full_name.set("Jane Doe");
        form.email.set("jane@example.com");
        form.password.set("Passw0rd1");
        form.confirm_password.set("Passw0rd1");
    }

    assert!(drive(&mut state, Message::SubmitSignup).is_empty());
    assert!(!state.session.is_loading());
}

#[test]
fn test_signup_failure_banner() {
    let mut state = signed_out_state();
    update(&mut state, Message::Navigate(Screen::Signup));
    let view = state.view_id;
    update(
        &mut state,
        Message::AuthCompleted {
            view,
            result: Err(AuthError::RegistrationRejected),
        },
    );
    let ActiveView::Signup(form) = &state.view else {
        panic!("expected signup view");
    };
    assert_eq!(form.errors.general, Some(SIGNUP_FAILED));
}

#[test]
fn test_signup_escape_returns_to_login() {
    let mut state = signed_out_state();
    update(&mut state, Message::Navigate(Screen::Signup));
    press(&mut state, InputKey::Esc);
    assert_eq!(state.current_screen(), Screen::Login);
}

// ─────────────────────────────────────────────────────────
// Password reset
// ─────────────────────────────────────────────────────────

#[test]
fn test_reset_flow_walks_all_steps() {
    let mut state = signed_out_state();
    update(&mut state, Message::Navigate(Screen::ForgotPassword));
    let view = state.view_id;

    type_text(&mut state, "john@example.com");
    let actions = press(&mut state, InputKey::Enter);
    assert_eq!(
        actions,
        vec![UpdateAction::SendResetEmail {
            view,
            email: "john@example.com".to_string(),
        }]
    );
    assert!(!state.session.is_loading());

    update(&mut state, Message::ResetEmailSent { view, result: Ok(()) });
    update(&mut state, Message::EnterResetCode);
    if let ActiveView::ForgotPassword(flow) = &mut state.view {
        assert_eq!(flow.step, ResetStep::Reset);
        flow.new_password.set("newpassword");
        flow.confirm_password.set("newpassword");
    }

    let actions = drive(&mut state, Message::SubmitNewPassword);
    assert_eq!(
        actions,
        vec![UpdateAction::ConfirmPasswordReset {
            view,
            new_password: "newpassword".to_string(),
        }]
    );

    drive(
        &mut state,
        Message::PasswordResetCompleted { view, result: Ok(()) },
    );
    assert_eq!(state.current_screen(), Screen::Login);
}

#[test]
fn test_reset_resend_goes_back_to_email_step() {
    let mut state = signed_out_state();
    update(&mut state, Message::Navigate(Screen::ForgotPassword));
    let view = state.view_id;
    if let ActiveView::ForgotPassword(flow) = &mut state.view {
        flow.email.set("john@example.com");
    }
    drive(&mut state, Message::SubmitResetEmail);
    update(&mut state, Message::ResetEmailSent { view, result: Ok(()) });
    update(&mut state, Message::ResendResetEmail);

    let ActiveView::ForgotPassword(flow) = &state.view else {
        panic!("expected reset view");
    };
    assert_eq!(flow.step, ResetStep::Email);
}

#[test]
fn test_reset_unknown_email_shows_error() {
    let mut state = signed_out_state();
    update(&mut state, Message::Navigate(Screen::ForgotPassword));
    let view = state.view_id;
    update(
        &mut state,
        Message::ResetEmailSent {
            view,
            result: Err(AuthError::UnknownEmail {
                email: "ghost@example.com".to_string(),
            }),
        },
    );
    let ActiveView::ForgotPassword(flow) = &state.view else {
        panic!("expected reset view");
    };
    assert_eq!(flow.step, ResetStep::Email);
    assert!(flow.errors.email.is_some());
}

// ─────────────────────────────────────────────────────────
// Stale completions
// ─────────────────────────────────────────────────────────

#[test]
fn test_completion_for_replaced_view_is_dropped() {
    let mut state = signed_in_state(Screen::Portfolio);
    let old_view = state.view_id;
    type_text(&mut state, "tcs");

    update(&mut state, Message::Navigate(Screen::Portfolio));
    let result = update(
        &mut state,
        Message::SearchCompleted {
            view: old_view,
            generation: 3,
            results: vec![],
        },
    );
    assert!(result.message.is_none());
    let ActiveView::Portfolio(view) = &state.view else {
        panic!("expected portfolio view");
    };
    assert!(!view.searching);
    assert!(view.query.is_empty());
}

#[test]
fn test_analysis_completion_after_leaving_does_not_navigate() {
    let mut state = signed_in_state(Screen::Portfolio);
    let view = state.view_id;
    drive(&mut state, Message::AnalyzePortfolio);
    update(&mut state, Message::Navigate(Screen::Billing));

    drive(&mut state, Message::AnalysisCompleted { view, result: Ok(()) });
    assert_eq!(state.current_screen(), Screen::Billing);
}

// ─────────────────────────────────────────────────────────
// Profile
// ─────────────────────────────────────────────────────────

#[test]
fn test_profile_save_updates_session() {
    let mut state = signed_in_state(Screen::Profile);
    update(&mut state, Message::EditProfile);
    if let ActiveView::Profile(view) = &mut state.view {
        view.full_name.set("Johnny Doe");
    }
    update(&mut state, Message::SaveProfile);

    assert_eq!(
        state.session.user().map(|u| u.full_name.as_str()),
        Some("Johnny Doe")
    );
    let ActiveView::Profile(view) = &state.view else {
        panic!("expected profile view");
    };
    assert!(!view.editing);
}

#[test]
fn test_profile_save_trims_name_like_signup() {
    let mut state = signed_in_state(Screen::Profile);
    update(&mut state, Message::EditProfile);
    if let ActiveView::Profile(view) = &mut state.view {
        view.full_name.set("  Johnny Doe ");
    }
    update(&mut state, Message::SaveProfile);

    assert_eq!(
        state.session.user().map(|u| u.full_name.as_str()),
        Some("Johnny Doe")
    );
}

#[test]
fn test_profile_cancel_restores_session_values() {
    let mut state = signed_in_state(Screen::Profile);
    update(&mut state, Message::EditProfile);
    type_text(&mut state, "xyz");
    press(&mut state, InputKey::Esc);

    let ActiveView::Profile(view) = &state.view else {
        panic!("expected profile view");
    };
    assert!(!view.editing);
    assert_eq!(view.full_name.value(), "John Doe");
}

#[test]
fn test_password_change_round_trip() {
    let mut state = signed_in_state(Screen::Profile);
    let view_id = state.view_id;
    if let ActiveView::Profile(view) = &mut state.view {
        view.current_password.set("oldpass");
        view.new_password.set("newpassword");
        view.confirm_password.set("newpassword");
    }

    let actions = drive(&mut state, Message::ChangePassword);
    assert_eq!(actions.len(), 1);
    assert!(drive(&mut state, Message::ChangePassword).is_empty());

    update(
        &mut state,
        Message::PasswordChanged {
            view: view_id,
            result: Ok(()),
        },
    );
    let ActiveView::Profile(view) = &state.view else {
        panic!("expected profile view");
    };
    assert_eq!(view.password_notice, Some(PASSWORD_UPDATED));
    assert!(view.current_password.is_empty());
}

#[test]
fn test_notification_toggle_by_key() {
    let mut state = signed_in_state(Screen::Profile);
    if let ActiveView::Profile(view) = &mut state.view {
        view.focus = ProfileField::Notification(NotificationKind::MarketUpdates);
    }
    press(&mut state, InputKey::Char(' '));
    let ActiveView::Profile(view) = &state.view else {
        panic!("expected profile view");
    };
    assert!(view.notifications.get(NotificationKind::MarketUpdates));
}

#[test]
fn test_sign_out_clears_session_and_returns_to_login() {
    let mut state = signed_in_state(Screen::Profile);
    update(&mut state, Message::SignOut);
    assert!(!state.session.is_signed_in());
    assert_eq!(state.current_screen(), Screen::Login);
}

// ─────────────────────────────────────────────────────────
// Portfolio
// ─────────────────────────────────────────────────────────

#[test]
fn test_typing_query_schedules_search_per_keystroke() {
    let mut state = signed_in_state(Screen::Portfolio);
    let actions = type_text(&mut state, "tcs");

    assert_eq!(
        actions,
        vec![UpdateAction::SearchStocks {
            view: state.view_id,
            generation: 3,
            query: "tcs".to_string(),
        }]
    );
}

#[test]
fn test_search_result_to_holding() {
    let mut state = signed_in_state(Screen::Portfolio);
    let view_id = state.view_id;
    type_text(&mut state, "tcs");
    let stock = consultant_core::Holding {
        id: "q1".to_string(),
        ticker: "TCS".to_string(),
        company: "Tata Consultancy Services".to_string(),
        sector: "Technology".to_string(),
        quantity: 0,
        price: 3000.0,
        change: 1.5,
    };
    update(
        &mut state,
        Message::SearchCompleted {
            view: view_id,
            generation: 3,
            results: vec![stock],
        },
    );

    press(&mut state, InputKey::Tab);
    press(&mut state, InputKey::Enter);
    type_text(&mut state, "12");
    press(&mut state, InputKey::Enter);

    let ActiveView::Portfolio(view) = &state.view else {
        panic!("expected portfolio view");
    };
    assert!(view.add_dialog.is_none());
    assert_eq!(view.holdings.len(), 3);
    assert_eq!(view.holdings[2].ticker, "TCS");
    assert_eq!(view.holdings[2].quantity, 12);
    assert!(view.query.is_empty());
}

#[test]
fn test_holding_quantity_keys() {
    let mut state = signed_in_state(Screen::Portfolio);
    if let ActiveView::Portfolio(view) = &mut state.view {
        view.focus = PortfolioFocus::Holdings;
    }
    press(&mut state, InputKey::Char('+'));
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Char('d'));

    let ActiveView::Portfolio(view) = &state.view else {
        panic!("expected portfolio view");
    };
    assert_eq!(view.holdings.len(), 1);
    assert_eq!(view.holdings[0].quantity, 51);
}

#[test]
fn test_analyze_requires_two_holdings() {
    let mut state = signed_in_state(Screen::Portfolio);
    update(
        &mut state,
        Message::RemoveHolding {
            id: "1".to_string(),
        },
    );
    assert!(drive(&mut state, Message::AnalyzePortfolio).is_empty());
}

#[test]
fn test_analysis_navigates_to_advice() {
    let mut state = signed_in_state(Screen::Portfolio);
    let view = state.view_id;
    let actions = drive(&mut state, Message::AnalyzePortfolio);
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::AnalyzePortfolio { holdings, .. }] if holdings.len() == 2
    ));
    assert!(drive(&mut state, Message::AnalyzePortfolio).is_empty());

    drive(&mut state, Message::AnalysisCompleted { view, result: Ok(()) });
    assert_eq!(state.current_screen(), Screen::Advice);
}

// ─────────────────────────────────────────────────────────
// Advice
// ─────────────────────────────────────────────────────────

#[test]
fn test_share_pdf_starts_download() {
    let mut state = signed_in_state(Screen::Advice);
    press(&mut state, InputKey::Char('s'));
    press(&mut state, InputKey::Down);
    let actions = press(&mut state, InputKey::Enter);

    assert_eq!(
        actions,
        vec![UpdateAction::DownloadReport {
            view: state.view_id,
            format: ReportFormat::Pdf,
        }]
    );
    let ActiveView::Advice(view) = &state.view else {
        panic!("expected advice view");
    };
    assert!(view.share_dialog.is_none());
}

#[test]
fn test_share_email_only_closes_dialog() {
    let mut state = signed_in_state(Screen::Advice);
    update(&mut state, Message::OpenShareDialog);
    let actions = drive(&mut state, Message::Share(ShareTarget::Email));
    assert!(actions.is_empty());
    assert!(state.status.is_some());
}

#[test]
fn test_report_download_completion() {
    let mut state = signed_in_state(Screen::Advice);
    let view = state.view_id;
    drive(&mut state, Message::DownloadReport(ReportFormat::Csv));
    assert!(drive(&mut state, Message::DownloadReport(ReportFormat::Pdf)).is_empty());

    update(
        &mut state,
        Message::ReportDownloaded {
            view,
            result: Ok(PathBuf::from("/tmp/portfolio-analysis.csv")),
        },
    );
    let ActiveView::Advice(advice) = &state.view else {
        panic!("expected advice view");
    };
    assert!(advice.downloading.is_none());
    assert_eq!(
        advice.last_download.as_deref(),
        Some(std::path::Path::new("/tmp/portfolio-analysis.csv"))
    );
}

// ─────────────────────────────────────────────────────────
// Billing
// ─────────────────────────────────────────────────────────

#[test]
fn test_payment_dialog_lifecycle() {
    let mut state = signed_in_state(Screen::Billing);
    let view = state.view_id;
    press(&mut state, InputKey::Right);
    let actions = press(&mut state, InputKey::Enter);
    assert_eq!(
        actions,
        vec![UpdateAction::ProcessPayment {
            view,
            plan: PlanId::Enterprise,
        }]
    );

    press(&mut state, InputKey::Esc);
    assert!(matches!(&state.view, ActiveView::Billing(b) if b.is_processing()));

    update(
        &mut state,
        Message::PaymentCompleted {
            view,
            result: Ok(PaymentReceipt {
                plan: PlanId::Enterprise,
                amount: 999,
                reference: "PAY-TEST".to_string(),
            }),
        },
    );
    assert!(matches!(
        &state.view,
        ActiveView::Billing(b) if matches!(b.payment, Some(PaymentDialog::Succeeded(_)))
    ));

    press(&mut state, InputKey::Enter);
    assert!(matches!(&state.view, ActiveView::Billing(b) if b.payment.is_none()));
}

#[test]
fn test_receipt_download_from_transaction_list() {
    let mut state = signed_in_state(Screen::Billing);
    if let ActiveView::Billing(billing) = &mut state.view {
        billing.focus = BillingFocus::Transactions;
    }
    press(&mut state, InputKey::Down);
    let actions = press(&mut state, InputKey::Char('r'));
    assert_eq!(
        actions,
        vec![UpdateAction::DownloadReceipt {
            view: state.view_id,
            transaction_id: "2".to_string(),
        }]
    );
}

#[test]
fn test_receipt_downloaded_after_leaving_is_ignored() {
    let mut state = signed_in_state(Screen::Billing);
    let view = state.view_id;
    update(&mut state, Message::Navigate(Screen::Dashboard));
    update(
        &mut state,
        Message::ReceiptDownloaded {
            view,
            result: Ok(PathBuf::from("receipt-1.pdf")),
        },
    );
    assert!(state.status.is_none());
}

#[test]
fn test_route_event_helper_matches_sign_out() {
    let mut state = signed_in_state(Screen::Advice);
    state.session.sign_out();
    assert_eq!(state.route(RouteEvent::SignedOut), Screen::Login);
    assert_ne!(state.view_id, ViewId(0));
}
