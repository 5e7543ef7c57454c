//! Advice handlers: report downloads and the share dialog

use std::path::PathBuf;

use tracing::{info, warn};

use consultant_core::ReportFormat;

use crate::message::Message;
use crate::screens::advice::ShareTarget;
use crate::screens::ActiveView;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_download_report(state: &mut AppState, format: ReportFormat) -> UpdateResult {
    let view = state.view_id;
    let ActiveView::Advice(advice) = &mut state.view else {
        return UpdateResult::none();
    };
    if !advice.begin_download(format) {
        return UpdateResult::none();
    }
    UpdateResult::action(UpdateAction::DownloadReport { view, format })
}

pub fn handle_report_downloaded(
    state: &mut AppState,
    result: Result<PathBuf, String>,
) -> UpdateResult {
    let ActiveView::Advice(advice) = &mut state.view else {
        return UpdateResult::none();
    };
    state.status = Some(match &result {
        Ok(path) => format!("Saved {}", path.display()),
        Err(e) => {
            warn!("Report download failed: {}", e);
            format!("Download failed: {e}")
        }
    });
    advice.finish_download(result);
    UpdateResult::none()
}

pub fn handle_open_share(state: &mut AppState) -> UpdateResult {
    if let ActiveView::Advice(advice) = &mut state.view {
        advice.open_share();
    }
    UpdateResult::none()
}

pub fn handle_close_share(state: &mut AppState) -> UpdateResult {
    if let ActiveView::Advice(advice) = &mut state.view {
        advice.close_share();
    }
    UpdateResult::none()
}

pub fn handle_share(state: &mut AppState, target: ShareTarget) -> UpdateResult {
    let ActiveView::Advice(advice) = &mut state.view else {
        return UpdateResult::none();
    };
    advice.close_share();
    info!("Share requested: {}", target.label());

    match target {
        ShareTarget::Email => {
            state.status = Some("Report shared via email".to_string());
            UpdateResult::none()
        }
        ShareTarget::Pdf => UpdateResult::message(Message::DownloadReport(ReportFormat::Pdf)),
        ShareTarget::Csv => UpdateResult::message(Message::DownloadReport(ReportFormat::Csv)),
    }
}
