use crate::error::MatchCopyError;
use crate::models::TransferRecord;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Receipt filenames embed the local run time at minute granularity; two
/// runs starting in the same minute will overwrite each other.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%I%M%p";

/// Persist the run's transfer records to `receipts_<timestamp>.txt` under
/// `output_dir` and return the receipt's path.
///
/// Format: a header line with the total count, a blank line, then an
/// `Old:`/`New:` line pair per record, each pair followed by a blank line,
/// in record order.
pub fn write_receipt(
    records: &[TransferRecord],
    output_dir: &Path,
) -> Result<PathBuf, MatchCopyError> {
    let timestamp = Local::now().format(TIMESTAMP_FORMAT);
    let path = output_dir.join(format!("receipts_{}.txt", timestamp));

    fs::write(&path, render_receipt(records))?;

    info!("Wrote {} receipts to {}", records.len(), path.display());
    Ok(path)
}

fn render_receipt(records: &[TransferRecord]) -> String {
    let mut out = format!(
        "Total number of files copied/moved: {}\n\n",
        records.len()
    );
    for record in records {
        out.push_str(&format!("Old: {}\n", record.old_path.display()));
        out.push_str(&format!("New: {}\n\n", record.new_path.display()));
    }
    out
}
