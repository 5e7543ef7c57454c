//! Generic editing of the view on display: typing, toggles, list selection

use crate::message::Message;
use crate::screens::advice::AdviceFocus;
use crate::screens::billing::BillingFocus;
use crate::screens::login::LoginField;
use crate::screens::portfolio::PortfolioFocus;
use crate::screens::profile::ProfileField;
use crate::screens::reset::ResetField;
use crate::screens::signup::SignupField;
use crate::screens::{ActiveView, TextInput};
use crate::state::AppState;

use super::UpdateResult;

/// Apply `edit` to the focused text field.
///
/// Editing the portfolio search query follows up with
/// [`Message::SearchQueryChanged`].
pub fn handle_input(state: &mut AppState, edit: impl FnOnce(&mut TextInput)) -> UpdateResult {
    let Some(input) = state.view.as_form().focused_input() else {
        return UpdateResult::none();
    };
    edit(input);

    match &state.view {
        ActiveView::Portfolio(portfolio)
            if portfolio.add_dialog.is_none() && portfolio.focus == PortfolioFocus::Search =>
        {
            UpdateResult::message(Message::SearchQueryChanged)
        }
        _ => UpdateResult::none(),
    }
}

pub fn handle_toggle_focused(state: &mut AppState) -> UpdateResult {
    match &mut state.view {
        ActiveView::Login(form) if form.focus == LoginField::ShowPassword => {
            form.show_password = !form.show_password;
        }
        ActiveView::Signup(form) => match form.focus {
            SignupField::ShowPassword => form.show_password = !form.show_password,
            SignupField::ShowConfirm => form.show_confirm = !form.show_confirm,
            SignupField::AcceptTerms => form.toggle_terms(),
            _ => {}
        },
        ActiveView::ForgotPassword(flow) if flow.focus == ResetField::ShowPassword => {
            flow.show_password = !flow.show_password;
        }
        ActiveView::Profile(view) => {
            if let ProfileField::Notification(kind) = view.focus {
                return UpdateResult::message(Message::ToggleNotification(kind));
            }
        }
        _ => {}
    }
    UpdateResult::none()
}

pub fn handle_select(state: &mut AppState, forward: bool) -> UpdateResult {
    match &mut state.view {
        ActiveView::Portfolio(portfolio) => match portfolio.focus {
            PortfolioFocus::Results => portfolio.select_result(forward),
            PortfolioFocus::Holdings => portfolio.select_holding(forward),
            _ => {}
        },
        ActiveView::Advice(advice) => {
            if advice.share_dialog.is_some() {
                advice.cycle_share(forward);
            } else if advice.focus == AdviceFocus::Recommendations {
                advice.select(forward);
            }
        }
        ActiveView::Billing(billing) => match billing.focus {
            BillingFocus::Plans => billing.select_plan(forward),
            BillingFocus::Transactions => billing.select_transaction(forward),
            BillingFocus::Pay => {}
        },
        _ => {}
    }
    UpdateResult::none()
}
