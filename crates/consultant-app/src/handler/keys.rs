//! Key event handlers for each screen

use consultant_core::ReportFormat;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::router::Screen;
use crate::screens::advice::{AdviceFocus, AdviceView};
use crate::screens::billing::{BillingFocus, BillingView};
use crate::screens::dashboard::DashboardView;
use crate::screens::login::{LoginField, LoginForm};
use crate::screens::portfolio::{PortfolioFocus, PortfolioView};
use crate::screens::profile::{ProfileField, ProfileView};
use crate::screens::reset::{ResetField, ResetFlow};
use crate::screens::signup::{SignupField, SignupForm};
use crate::screens::ActiveView;
use crate::state::AppState;

/// Convert key events to messages based on the screen on display
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_global_key(state, key) {
        return Some(msg);
    }
    // Nothing is interactive until the session check finishes
    if state.show_splash() {
        return None;
    }

    let screen_msg = match &state.view {
        ActiveView::Login(form) => handle_key_login(form, key),
        ActiveView::Signup(form) => handle_key_signup(form, key),
        ActiveView::ForgotPassword(flow) => handle_key_reset(flow, key),
        ActiveView::Dashboard(view) => handle_key_dashboard(view, key),
        ActiveView::Profile(view) => handle_key_profile(view, key),
        ActiveView::Portfolio(view) => return handle_key_portfolio(view, key),
        ActiveView::Advice(view) => handle_key_advice(view, key),
        ActiveView::Billing(view) => return handle_key_billing(view, key),
    };
    screen_msg.or_else(|| handle_key_form(key))
}

/// Keys that work everywhere
fn handle_global_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c' | 'q') => Some(Message::Quit),
        InputKey::CharCtrl('t') => Some(Message::ToggleTheme),
        InputKey::F(n @ 1..=5) if state.session.is_signed_in() && !state.show_splash() => {
            Some(Message::Navigate(Screen::NAV[usize::from(n - 1)]))
        }
        _ => None,
    }
}

/// Focus movement and typing, shared by every form
fn handle_key_form(key: InputKey) -> Option<Message> {
    match key {
        k if k.is_focus_next() => Some(Message::FocusNext),
        k if k.is_focus_prev() => Some(Message::FocusPrev),
        InputKey::Char(c) => Some(Message::InputChar(c)),
        InputKey::Backspace => Some(Message::InputBackspace),
        _ => None,
    }
}

fn handle_key_login(form: &LoginForm, key: InputKey) -> Option<Message> {
    match (key, form.focus) {
        (InputKey::Enter | InputKey::Char(' '), LoginField::ShowPassword) => {
            Some(Message::ToggleFocused)
        }
        (InputKey::Enter, LoginField::ForgotPassword) => {
            Some(Message::Navigate(Screen::ForgotPassword))
        }
        (InputKey::Enter, LoginField::Signup) => Some(Message::Navigate(Screen::Signup)),
        (InputKey::Enter, _) => Some(Message::SubmitLogin),
        _ => None,
    }
}

fn handle_key_signup(form: &SignupForm, key: InputKey) -> Option<Message> {
    let on_toggle = matches!(
        form.focus,
        SignupField::ShowPassword | SignupField::ShowConfirm | SignupField::AcceptTerms
    );
    match key {
        InputKey::Enter | InputKey::Char(' ') if on_toggle => Some(Message::ToggleFocused),
        InputKey::Enter if form.focus == SignupField::SignIn => {
            Some(Message::Navigate(Screen::Login))
        }
        InputKey::Enter => Some(Message::SubmitSignup),
        InputKey::Esc => Some(Message::Navigate(Screen::Login)),
        _ => None,
    }
}

fn handle_key_reset(flow: &ResetFlow, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(' ') if flow.focus == ResetField::ShowPassword => {
            Some(Message::ToggleFocused)
        }
        InputKey::Enter => Some(match flow.focus {
            ResetField::Email | ResetField::SendLink => Message::SubmitResetEmail,
            ResetField::Resend => Message::ResendResetEmail,
            ResetField::HaveCode => Message::EnterResetCode,
            ResetField::NewPassword | ResetField::ConfirmPassword | ResetField::SetPassword => {
                Message::SubmitNewPassword
            }
            ResetField::ShowPassword => Message::ToggleFocused,
            ResetField::BackToLogin => Message::Navigate(Screen::Login),
        }),
        InputKey::Esc => Some(Message::Navigate(Screen::Login)),
        _ => None,
    }
}

fn handle_key_dashboard(view: &DashboardView, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::Navigate(view.focus.target())),
        InputKey::Char('p') => Some(Message::Navigate(Screen::Portfolio)),
        InputKey::Char('a') => Some(Message::Navigate(Screen::Advice)),
        InputKey::Char('u') => Some(Message::Navigate(Screen::Billing)),
        _ => None,
    }
}

fn handle_key_profile(view: &ProfileView, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(' ') if matches!(view.focus, ProfileField::Notification(_)) => {
            Some(Message::ToggleFocused)
        }
        InputKey::Enter => Some(match view.focus {
            ProfileField::EditProfile => Message::EditProfile,
            ProfileField::FullName | ProfileField::Email | ProfileField::SaveProfile => {
                Message::SaveProfile
            }
            ProfileField::CancelEdit => Message::CancelProfileEdit,
            ProfileField::CurrentPassword
            | ProfileField::NewPassword
            | ProfileField::ConfirmPassword
            | ProfileField::ChangePassword => Message::ChangePassword,
            ProfileField::Notification(_) => Message::ToggleFocused,
            ProfileField::SignOut => Message::SignOut,
        }),
        InputKey::Esc if view.editing => Some(Message::CancelProfileEdit),
        _ => None,
    }
}

/// Portfolio keys; falls back to form keys itself since list focus
/// claims the arrow keys
fn handle_key_portfolio(view: &PortfolioView, key: InputKey) -> Option<Message> {
    if view.add_dialog.is_some() {
        return match key {
            InputKey::Enter => Some(Message::AddHolding),
            InputKey::Esc => Some(Message::CloseAddDialog),
            InputKey::Char(c) if c.is_ascii_digit() => Some(Message::InputChar(c)),
            InputKey::Backspace => Some(Message::InputBackspace),
            _ => None,
        };
    }

    let list_focus = matches!(
        view.focus,
        PortfolioFocus::Results | PortfolioFocus::Holdings
    );
    match key {
        InputKey::Up if list_focus => return Some(Message::SelectPrev),
        InputKey::Down if list_focus => return Some(Message::SelectNext),
        _ => {}
    }

    match view.focus {
        PortfolioFocus::Search => handle_key_form(key),
        PortfolioFocus::Results => match key {
            InputKey::Enter if !view.results.is_empty() => {
                Some(Message::SelectSearchResult(view.selected_result))
            }
            InputKey::Tab => Some(Message::FocusNext),
            InputKey::BackTab => Some(Message::FocusPrev),
            _ => None,
        },
        PortfolioFocus::Holdings => {
            let holding = view.selected_holding();
            match key {
                InputKey::Char('+' | '=') => holding.map(|h| Message::UpdateQuantity {
                    id: h.id.clone(),
                    quantity: h.quantity.saturating_add(1),
                }),
                InputKey::Char('-') => holding
                    .filter(|h| h.quantity > 1)
                    .map(|h| Message::UpdateQuantity {
                        id: h.id.clone(),
                        quantity: h.quantity - 1,
                    }),
                InputKey::Char('d') | InputKey::Delete => {
                    holding.map(|h| Message::RemoveHolding { id: h.id.clone() })
                }
                InputKey::Tab => Some(Message::FocusNext),
                InputKey::BackTab => Some(Message::FocusPrev),
                _ => None,
            }
        }
        PortfolioFocus::Analyze => match key {
            InputKey::Enter => Some(Message::AnalyzePortfolio),
            k if k.is_focus_next() => Some(Message::FocusNext),
            k if k.is_focus_prev() => Some(Message::FocusPrev),
            _ => None,
        },
    }
}

fn handle_key_advice(view: &AdviceView, key: InputKey) -> Option<Message> {
    if let Some(target) = view.share_dialog {
        return match key {
            InputKey::Enter => Some(Message::Share(target)),
            InputKey::Esc => Some(Message::CloseShareDialog),
            InputKey::Up | InputKey::BackTab => Some(Message::SelectPrev),
            InputKey::Down | InputKey::Tab => Some(Message::SelectNext),
            _ => None,
        };
    }

    match key {
        InputKey::Up if view.focus == AdviceFocus::Recommendations => Some(Message::SelectPrev),
        InputKey::Down if view.focus == AdviceFocus::Recommendations => Some(Message::SelectNext),
        InputKey::Enter => match view.focus {
            AdviceFocus::Recommendations => None,
            AdviceFocus::Share => Some(Message::OpenShareDialog),
            AdviceFocus::DownloadPdf => Some(Message::DownloadReport(ReportFormat::Pdf)),
            AdviceFocus::DownloadCsv => Some(Message::DownloadReport(ReportFormat::Csv)),
            AdviceFocus::BackToPortfolio => Some(Message::Navigate(Screen::Portfolio)),
        },
        InputKey::Char('s') => Some(Message::OpenShareDialog),
        InputKey::Char('p') => Some(Message::DownloadReport(ReportFormat::Pdf)),
        InputKey::Char('c') => Some(Message::DownloadReport(ReportFormat::Csv)),
        _ => None,
    }
}

/// Billing keys; arrows belong to the plan and transaction lists
fn handle_key_billing(view: &BillingView, key: InputKey) -> Option<Message> {
    if view.payment.is_some() {
        return match key {
            InputKey::Enter | InputKey::Esc if !view.is_processing() => {
                Some(Message::DismissPayment)
            }
            _ => None,
        };
    }

    match (view.focus, key) {
        (BillingFocus::Plans, InputKey::Left | InputKey::Up) => Some(Message::SelectPrev),
        (BillingFocus::Plans, InputKey::Right | InputKey::Down) => Some(Message::SelectNext),
        (BillingFocus::Plans | BillingFocus::Pay, InputKey::Enter) => Some(Message::Pay),
        (BillingFocus::Transactions, InputKey::Up) => Some(Message::SelectPrev),
        (BillingFocus::Transactions, InputKey::Down) => Some(Message::SelectNext),
        (BillingFocus::Transactions, InputKey::Enter | InputKey::Char('r')) => view
            .selected_transaction_id()
            .map(|id| Message::DownloadReceipt {
                transaction_id: id.to_string(),
            }),
        (_, InputKey::Tab) => Some(Message::FocusNext),
        (_, InputKey::BackTab) => Some(Message::FocusPrev),
        (BillingFocus::Pay, InputKey::Down) => Some(Message::FocusNext),
        (BillingFocus::Pay, InputKey::Up) => Some(Message::FocusPrev),
        _ => None,
    }
}
