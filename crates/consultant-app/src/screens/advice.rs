//! Advice screen: recommendations, report download and the share dialog

use std::path::PathBuf;

use consultant_core::fixtures::stock_advice;
use consultant_core::ReportFormat;

use super::{cycle, FormView, TextInput};

/// Ways a report can be shared from the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    Email,
    Pdf,
    Csv,
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 3] = [ShareTarget::Email, ShareTarget::Pdf, ShareTarget::Csv];

    pub fn label(&self) -> &'static str {
        match self {
            ShareTarget::Email => "Share via Email",
            ShareTarget::Pdf => "Download PDF",
            ShareTarget::Csv => "Download CSV",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdviceFocus {
    #[default]
    Recommendations,
    Share,
    DownloadPdf,
    DownloadCsv,
    BackToPortfolio,
}

impl AdviceFocus {
    pub const ORDER: [AdviceFocus; 5] = [
        AdviceFocus::Recommendations,
        AdviceFocus::Share,
        AdviceFocus::DownloadPdf,
        AdviceFocus::DownloadCsv,
        AdviceFocus::BackToPortfolio,
    ];
}

#[derive(Debug, Clone, Default)]
pub struct AdviceView {
    pub selected: usize,
    /// Format of the report currently being generated
    pub downloading: Option<ReportFormat>,
    pub last_download: Option<PathBuf>,
    pub download_error: Option<String>,
    /// `Some` while the share dialog is open, holding the highlighted target
    pub share_dialog: Option<ShareTarget>,
    pub focus: AdviceFocus,
}

impl AdviceView {
    pub fn select(&mut self, forward: bool) {
        let len = stock_advice().len();
        if len == 0 {
            return;
        }
        self.selected = if forward {
            (self.selected + 1).min(len - 1)
        } else {
            self.selected.saturating_sub(1)
        };
    }

    pub fn begin_download(&mut self, format: ReportFormat) -> bool {
        if self.downloading.is_some() {
            return false;
        }
        self.downloading = Some(format);
        self.download_error = None;
        true
    }

    pub fn finish_download(&mut self, result: Result<PathBuf, String>) {
        self.downloading = None;
        match result {
            Ok(path) => self.last_download = Some(path),
            Err(e) => self.download_error = Some(e),
        }
    }

    pub fn open_share(&mut self) {
        self.share_dialog = Some(ShareTarget::Email);
    }

    pub fn close_share(&mut self) {
        self.share_dialog = None;
    }

    pub fn cycle_share(&mut self, forward: bool) {
        if let Some(target) = self.share_dialog {
            self.share_dialog = Some(cycle(&ShareTarget::ALL, target, forward));
        }
    }
}

impl FormView for AdviceView {
    fn focused_input(&mut self) -> Option<&mut TextInput> {
        None
    }

    fn focus_next(&mut self) {
        if self.share_dialog.is_some() {
            self.cycle_share(true);
        } else {
            self.focus = cycle(&AdviceFocus::ORDER, self.focus, true);
        }
    }

    fn focus_prev(&mut self) {
        if self.share_dialog.is_some() {
            self.cycle_share(false);
        } else {
            self.focus = cycle(&AdviceFocus::ORDER, self.focus, false);
        }
    }
}
