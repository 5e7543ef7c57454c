//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use consultant_app::actions::handle_action;
use consultant_app::message::Message;
use consultant_app::process::process_message;
use consultant_app::services::{AuthService, BillingService, MarketService};
use consultant_app::{signals, AppState, Services, Settings, UpdateAction};
use consultant_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI until the user quits or a signal arrives
pub async fn run<A, M, B>(settings: Settings, services: Services<A, M, B>) -> Result<()>
where
    A: AuthService + Send + Sync + 'static,
    M: MarketService + Send + Sync + 'static,
    B: BillingService + Send + Sync + 'static,
{
    terminal::install_panic_hook();
    info!(
        "Starting Stock Consultant (dark_mode={})",
        settings.ui.dark_mode
    );

    let mut term = ratatui::init();
    let mut state = AppState::new(settings);

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Sends Message::Quit on SIGINT/SIGTERM
    signals::spawn_signal_handler(msg_tx.clone());

    // The splash stays up until this completes
    handle_action(
        UpdateAction::RestoreSession,
        &services,
        msg_tx.clone(),
        &state.settings,
    );

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &services);

    ratatui::restore();
    info!("Stock Consultant exited");
    result
}

fn run_loop<A, M, B>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    services: &Services<A, M, B>,
) -> Result<()>
where
    A: AuthService + Send + Sync + 'static,
    M: MarketService + Send + Sync + 'static,
    B: BillingService + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Completions from background tasks and the signal handler
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, services);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, services);
        }
    }

    Ok(())
}
