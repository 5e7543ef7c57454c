//! Client-side file downloads (analysis reports and receipts)

use std::path::{Path, PathBuf};

use consultant_core::prelude::*;
use consultant_core::ReportFormat;

/// `portfolio-analysis.<ext>`
pub fn report_file_name(format: ReportFormat) -> String {
    format!("portfolio-analysis.{}", format.extension())
}

/// `receipt-<id>.pdf`
pub fn receipt_file_name(transaction_id: &str) -> String {
    format!("receipt-{}.pdf", transaction_id)
}

/// Write `content` to `dir/file_name`, creating `dir` if needed.
///
/// An existing file of the same name is overwritten.
pub async fn save(dir: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(file_name);

    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| Error::download(&path, e.to_string()))?;
    tokio::fs::write(&path, content)
        .await
        .map_err(|e| Error::download(&path, e.to_string()))?;

    info!("Saved {} ({} bytes)", path.display(), content.len());
    Ok(path)
}
