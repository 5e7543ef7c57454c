//! Message processing: runs the update loop and dispatches actions

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::services::{AuthService, BillingService, MarketService, Services};
use crate::state::AppState;

/// Process a message through the TEA update function.
///
/// Follow-up messages are processed immediately; actions are handed to the
/// executor, which posts their completions back on `msg_tx`.
pub fn process_message<A, M, B>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    services: &Services<A, M, B>,
) where
    A: AuthService + Send + Sync + 'static,
    M: MarketService + Send + Sync + 'static,
    B: BillingService + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, services, msg_tx.clone(), &state.settings);
        }

        msg = result.message;
    }
}
