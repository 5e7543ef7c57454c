//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every action runs on its own tokio task and reports back by posting a
//! completion [`Message`] on the channel. Nothing here touches `AppState`.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{info, warn};

use consultant_core::{ReportFormat, Result};

use crate::config::Settings;
use crate::downloads;
use crate::message::Message;
use crate::screens::ViewId;
use crate::services::{AuthService, BillingService, MarketService, Services};
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<A, M, B>(
    action: UpdateAction,
    services: &Services<A, M, B>,
    msg_tx: mpsc::Sender<Message>,
    settings: &Settings,
) where
    A: AuthService + Send + Sync + 'static,
    M: MarketService + Send + Sync + 'static,
    B: BillingService + Send + Sync + 'static,
{
    match action {
        UpdateAction::RestoreSession => {
            let auth = Arc::clone(&services.auth);
            tokio::spawn(async move {
                let user = auth.restore_session().await;
                let _ = msg_tx.send(Message::SessionRestored { user }).await;
            });
        }

        UpdateAction::Login {
            view,
            email,
            password,
        } => {
            info!("Signing in {}", email);
            let auth = Arc::clone(&services.auth);
            tokio::spawn(async move {
                let result = auth.login(&email, &password).await;
                let _ = msg_tx.send(Message::AuthCompleted { view, result }).await;
            });
        }

        UpdateAction::Signup {
            view,
            email,
            password,
            full_name,
        } => {
            info!("Registering {}", email);
            let auth = Arc::clone(&services.auth);
            tokio::spawn(async move {
                let result = auth.signup(&email, &password, &full_name).await;
                let _ = msg_tx.send(Message::AuthCompleted { view, result }).await;
            });
        }

        UpdateAction::SendResetEmail { view, email } => {
            info!("Sending password reset email to {}", email);
            let auth = Arc::clone(&services.auth);
            tokio::spawn(async move {
                let result = auth.reset_password(&email).await;
                let _ = msg_tx.send(Message::ResetEmailSent { view, result }).await;
            });
        }

        UpdateAction::ConfirmPasswordReset { view, new_password } => {
            let auth = Arc::clone(&services.auth);
            tokio::spawn(async move {
                let result = auth.confirm_password_reset(&new_password).await;
                let _ = msg_tx
                    .send(Message::PasswordResetCompleted { view, result })
                    .await;
            });
        }

        UpdateAction::ChangePassword {
            view,
            current,
            new_password,
        } => {
            let auth = Arc::clone(&services.auth);
            tokio::spawn(async move {
                let result = auth.change_password(&current, &new_password).await;
                let _ = msg_tx.send(Message::PasswordChanged { view, result }).await;
            });
        }

        UpdateAction::SearchStocks {
            view,
            generation,
            query,
        } => {
            spawn_search(
                Arc::clone(&services.market),
                msg_tx,
                settings.latency.search_debounce(),
                view,
                generation,
                query,
            );
        }

        UpdateAction::AnalyzePortfolio { view, holdings } => {
            info!("Analyzing {} holdings", holdings.len());
            let market = Arc::clone(&services.market);
            tokio::spawn(async move {
                let result = market
                    .analyze_portfolio(&holdings)
                    .await
                    .map_err(|e| e.to_string());
                let _ = msg_tx.send(Message::AnalysisCompleted { view, result }).await;
            });
        }

        UpdateAction::DownloadReport { view, format } => {
            spawn_report_download(
                Arc::clone(&services.market),
                msg_tx,
                settings.downloads.resolve_dir(),
                view,
                format,
            );
        }

        UpdateAction::ProcessPayment { view, plan } => {
            let billing = Arc::clone(&services.billing);
            tokio::spawn(async move {
                let result = billing
                    .process_payment(plan)
                    .await
                    .map_err(|e| e.to_string());
                let _ = msg_tx.send(Message::PaymentCompleted { view, result }).await;
            });
        }

        UpdateAction::DownloadReceipt {
            view,
            transaction_id,
        } => {
            spawn_receipt_download(
                Arc::clone(&services.billing),
                msg_tx,
                settings.downloads.resolve_dir(),
                view,
                transaction_id,
            );
        }
    }
}

/// Wait out the debounce period, then search.
///
/// Superseded searches still run to completion; the portfolio view drops
/// any result whose generation is not the latest.
fn spawn_search<M>(
    market: Arc<M>,
    msg_tx: mpsc::Sender<Message>,
    debounce: Duration,
    view: ViewId,
    generation: u64,
    query: String,
) where
    M: MarketService + Send + Sync + 'static,
{
    tokio::spawn(async move {
        tokio::time::sleep(debounce).await;
        let results = market.search(&query).await;
        let _ = msg_tx
            .send(Message::SearchCompleted {
                view,
                generation,
                results,
            })
            .await;
    });
}

fn spawn_report_download<M>(
    market: Arc<M>,
    msg_tx: mpsc::Sender<Message>,
    dir: PathBuf,
    view: ViewId,
    format: ReportFormat,
) where
    M: MarketService + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let result: Result<PathBuf> = async {
            let content = market.generate_report(format).await?;
            downloads::save(&dir, &downloads::report_file_name(format), &content).await
        }
        .await;

        if let Err(e) = &result {
            warn!("Failed to save {} report: {}", format, e);
        }
        let result = result.map_err(|e| e.to_string());
        let _ = msg_tx.send(Message::ReportDownloaded { view, result }).await;
    });
}

fn spawn_receipt_download<B>(
    billing: Arc<B>,
    msg_tx: mpsc::Sender<Message>,
    dir: PathBuf,
    view: ViewId,
    transaction_id: String,
) where
    B: BillingService + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let result: Result<PathBuf> = async {
            let content = billing.receipt(&transaction_id).await?;
            downloads::save(
                &dir,
                &downloads::receipt_file_name(&transaction_id),
                &content,
            )
            .await
        }
        .await;

        if let Err(e) = &result {
            warn!("Failed to save receipt {}: {}", transaction_id, e);
        }
        let result = result.map_err(|e| e.to_string());
        let _ = msg_tx.send(Message::ReceiptDownloaded { view, result }).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::Path;

    use tempfile::TempDir;

    use consultant_core::PlanId;

    use crate::config::LatencySettings;
    use crate::services::MockServices;

    fn instant_setup(dir: &Path) -> (MockServices, Settings) {
        let mut settings = Settings::instant();
        settings.downloads.directory = Some(dir.to_path_buf());
        (MockServices::mock(LatencySettings::instant()), settings)
    }

    #[tokio::test]
    async fn test_login_posts_auth_completed() {
        let temp = TempDir::new().unwrap();
        let (services, settings) = instant_setup(temp.path());
        let (tx, mut rx) = mpsc::channel(8);

        handle_action(
            UpdateAction::Login {
                view: ViewId(4),
                email: "a@b.co".to_string(),
                password: "secret1".to_string(),
            },
            &services,
            tx,
            &settings,
        );

        match rx.recv().await {
            Some(Message::AuthCompleted { view, result }) => {
                assert_eq!(view, ViewId(4));
                let user = result.unwrap();
                assert_eq!(user.email, "a@b.co");
                assert_eq!(user.full_name, "John Doe");
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_restore_session_reports_no_user() {
        let temp = TempDir::new().unwrap();
        let (services, settings) = instant_setup(temp.path());
        let (tx, mut rx) = mpsc::channel(8);

        handle_action(UpdateAction::RestoreSession, &services, tx, &settings);

        assert!(matches!(
            rx.recv().await,
            Some(Message::SessionRestored { user: None })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_waits_for_debounce() {
        let services = MockServices::mock(LatencySettings::instant());
        let settings = Settings::default();
        let (tx, mut rx) = mpsc::channel(8);

        handle_action(
            UpdateAction::SearchStocks {
                view: ViewId(1),
                generation: 7,
                query: "bank".to_string(),
            },
            &services,
            tx,
            &settings,
        );

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert!(rx.try_recv().is_err());

        match rx.recv().await {
            Some(Message::SearchCompleted {
                generation,
                results,
                ..
            }) => {
                assert_eq!(generation, 7);
                let tickers: Vec<_> = results.iter().map(|h| h.ticker.as_str()).collect();
                assert_eq!(tickers, vec!["HDFCBANK", "ICICIBANK", "SBIN"]);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_exact_ticker_search_surfaces_one_result() {
        let services = MockServices::mock(LatencySettings::instant());
        let settings = Settings::default();
        let (tx, mut rx) = mpsc::channel(8);

        handle_action(
            UpdateAction::SearchStocks {
                view: ViewId(1),
                generation: 1,
                query: "TCS".to_string(),
            },
            &services,
            tx,
            &settings,
        );

        tokio::time::sleep(Duration::from_millis(500)).await;
        let Some(Message::SearchCompleted { results, .. }) = rx.recv().await else {
            panic!("expected SearchCompleted");
        };
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].ticker, "TCS");
    }

    #[tokio::test]
    async fn test_report_download_writes_file() {
        let temp = TempDir::new().unwrap();
        let (services, settings) = instant_setup(temp.path());
        let (tx, mut rx) = mpsc::channel(8);

        handle_action(
            UpdateAction::DownloadReport {
                view: ViewId(2),
                format: ReportFormat::Csv,
            },
            &services,
            tx,
            &settings,
        );

        let Some(Message::ReportDownloaded { result, .. }) = rx.recv().await else {
            panic!("expected ReportDownloaded");
        };
        let path = result.unwrap();
        assert_eq!(path, temp.path().join("portfolio-analysis.csv"));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Stock Analysis Report - CSV"
        );
    }

    #[tokio::test]
    async fn test_receipt_download_writes_file() {
        let temp = TempDir::new().unwrap();
        let (services, settings) = instant_setup(temp.path());
        let (tx, mut rx) = mpsc::channel(8);

        handle_action(
            UpdateAction::DownloadReceipt {
                view: ViewId(2),
                transaction_id: "3".to_string(),
            },
            &services,
            tx,
            &settings,
        );

        let Some(Message::ReceiptDownloaded { result, .. }) = rx.recv().await else {
            panic!("expected ReceiptDownloaded");
        };
        let path = result.unwrap();
        assert_eq!(path, temp.path().join("receipt-3.pdf"));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Receipt for transaction 3"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_payment_takes_configured_time() {
        let services = MockServices::mock(LatencySettings::default());
        let settings = Settings::default();
        let (tx, mut rx) = mpsc::channel(8);

        handle_action(
            UpdateAction::ProcessPayment {
                view: ViewId(3),
                plan: PlanId::Basic,
            },
            &services,
            tx,
            &settings,
        );

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert!(rx.try_recv().is_err());

        let Some(Message::PaymentCompleted { result, .. }) = rx.recv().await else {
            panic!("expected PaymentCompleted");
        };
        let receipt = result.unwrap();
        assert_eq!(receipt.plan, PlanId::Basic);
        assert_eq!(receipt.amount, 99);
    }
}
