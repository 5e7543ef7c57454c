//! Billing screen: plan selection, payment dialog and receipts

use std::path::PathBuf;

use consultant_core::fixtures::transactions;
use consultant_core::PlanId;

use super::{cycle, FormView, TextInput};

use crate::services::PaymentReceipt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillingFocus {
    #[default]
    Plans,
    Pay,
    Transactions,
}

impl BillingFocus {
    pub const ORDER: [BillingFocus; 3] = [
        BillingFocus::Plans,
        BillingFocus::Pay,
        BillingFocus::Transactions,
    ];
}

/// Modal shown after "Pay"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentDialog {
    Processing { plan: PlanId },
    Succeeded(PaymentReceipt),
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct BillingView {
    pub selected_plan: PlanId,
    pub payment: Option<PaymentDialog>,
    pub selected_transaction: usize,
    pub last_receipt: Option<PathBuf>,
    pub receipt_error: Option<String>,
    pub focus: BillingFocus,
}

impl BillingView {
    pub fn is_processing(&self) -> bool {
        matches!(self.payment, Some(PaymentDialog::Processing { .. }))
    }

    pub fn begin_payment(&mut self) -> Option<PlanId> {
        if self.is_processing() {
            return None;
        }
        self.payment = Some(PaymentDialog::Processing {
            plan: self.selected_plan,
        });
        Some(self.selected_plan)
    }

    pub fn finish_payment(&mut self, result: Result<PaymentReceipt, String>) {
        self.payment = Some(match result {
            Ok(receipt) => PaymentDialog::Succeeded(receipt),
            Err(e) => PaymentDialog::Failed(e),
        });
    }

    /// Close a finished payment dialog; a running payment cannot be dismissed
    pub fn dismiss_payment(&mut self) {
        if !self.is_processing() {
            self.payment = None;
        }
    }

    pub fn select_plan(&mut self, forward: bool) {
        if self.is_processing() {
            return;
        }
        self.selected_plan = if forward {
            self.selected_plan.next()
        } else {
            self.selected_plan.prev()
        };
    }

    pub fn select_transaction(&mut self, forward: bool) {
        let len = transactions().len();
        if len == 0 {
            return;
        }
        self.selected_transaction = if forward {
            (self.selected_transaction + 1).min(len - 1)
        } else {
            self.selected_transaction.saturating_sub(1)
        };
    }

    pub fn selected_transaction_id(&self) -> Option<&'static str> {
        transactions().get(self.selected_transaction).map(|t| t.id)
    }

    pub fn finish_receipt(&mut self, result: Result<PathBuf, String>) {
        match result {
            Ok(path) => {
                self.last_receipt = Some(path);
                self.receipt_error = None;
            }
            Err(e) => self.receipt_error = Some(e),
        }
    }
}

impl FormView for BillingView {
    fn focused_input(&mut self) -> Option<&mut TextInput> {
        None
    }

    fn focus_next(&mut self) {
        self.focus = cycle(&BillingFocus::ORDER, self.focus, true);
    }

    fn focus_prev(&mut self) {
        self.focus = cycle(&BillingFocus::ORDER, self.focus, false);
    }
}
