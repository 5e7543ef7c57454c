//! Billing handlers: plan selection, payment, receipt downloads

use std::path::PathBuf;

use tracing::{info, warn};

use consultant_core::PlanId;

use crate::screens::ActiveView;
use crate::services::PaymentReceipt;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_select_plan(state: &mut AppState, plan: PlanId) -> UpdateResult {
    if let ActiveView::Billing(billing) = &mut state.view {
        if !billing.is_processing() {
            billing.selected_plan = plan;
        }
    }
    UpdateResult::none()
}

pub fn handle_pay(state: &mut AppState) -> UpdateResult {
    let view = state.view_id;
    let ActiveView::Billing(billing) = &mut state.view else {
        return UpdateResult::none();
    };
    match billing.begin_payment() {
        Some(plan) => {
            info!("Starting payment for {:?}", plan);
            UpdateResult::action(UpdateAction::ProcessPayment { view, plan })
        }
        None => UpdateResult::none(),
    }
}

pub fn handle_payment_completed(
    state: &mut AppState,
    result: Result<PaymentReceipt, String>,
) -> UpdateResult {
    if let ActiveView::Billing(billing) = &mut state.view {
        match &result {
            Ok(receipt) => info!("Payment {} succeeded", receipt.reference),
            Err(e) => warn!("Payment failed: {}", e),
        }
        billing.finish_payment(result);
    }
    UpdateResult::none()
}

pub fn handle_dismiss_payment(state: &mut AppState) -> UpdateResult {
    if let ActiveView::Billing(billing) = &mut state.view {
        billing.dismiss_payment();
    }
    UpdateResult::none()
}

pub fn handle_download_receipt(state: &mut AppState, transaction_id: String) -> UpdateResult {
    if !matches!(state.view, ActiveView::Billing(_)) {
        return UpdateResult::none();
    }
    UpdateResult::action(UpdateAction::DownloadReceipt {
        view: state.view_id,
        transaction_id,
    })
}

pub fn handle_receipt_downloaded(
    state: &mut AppState,
    result: Result<PathBuf, String>,
) -> UpdateResult {
    let ActiveView::Billing(billing) = &mut state.view else {
        return UpdateResult::none();
    };
    state.status = Some(match &result {
        Ok(path) => format!("Saved {}", path.display()),
        Err(e) => {
            warn!("Receipt download failed: {}", e);
            format!("Download failed: {e}")
        }
    });
    billing.finish_receipt(result);
    UpdateResult::none()
}
