//! Quit on SIGINT/SIGTERM (Ctrl+C on Windows)
//!
//! Raw mode swallows Ctrl+C as a key press, so this mostly matters for
//! `kill` and for terminals closed underneath the app.

use tokio::sync::mpsc;

use consultant_core::prelude::*;

use crate::message::Message;

/// Post [`Message::Quit`] once a termination signal arrives
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match shutdown_signal().await {
            Ok(name) => {
                info!("{} received, closing Stock Consultant", name);
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Event loop already gone, nothing to stop");
                }
            }
            Err(e) => warn!("Signals unavailable, quit with Ctrl+Q: {}", e),
        }
    });
}

#[cfg(unix)]
async fn shutdown_signal() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: &str| {
        signal(kind).map_err(|e| Error::terminal(format!("cannot listen for {name}: {e}")))
    };
    let mut interrupt = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut terminate = listen(SignalKind::terminate(), "SIGTERM")?;

    Ok(tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
    })
}

#[cfg(not(unix))]
async fn shutdown_signal() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("cannot listen for Ctrl+C: {e}")))?;
    Ok("Ctrl+C")
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    #[tokio::test]
    async fn test_handler_stays_quiet_until_signalled() {
        let (tx, mut rx) = mpsc::channel(1);
        spawn_signal_handler(tx);

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(rx.try_recv().is_err());
    }
}
