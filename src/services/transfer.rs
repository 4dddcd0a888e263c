use crate::error::MatchCopyError;
use crate::models::{TransferMode, TransferRecord};
use filetime::FileTime;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Copy or move one matched file into the destination tree.
///
/// The destination is `dst_root` joined with `path` minus its `src_root`
/// prefix, so intermediate directory names are preserved verbatim. Missing
/// ancestor directories are created first.
pub fn transfer_file(
    path: &Path,
    src_root: &Path,
    dst_root: &Path,
    mode: TransferMode,
) -> Result<TransferRecord, MatchCopyError> {
    let relative = path.strip_prefix(src_root).map_err(|_| {
        MatchCopyError::Configuration(format!(
            "matched path {} is not under source root {}",
            path.display(),
            src_root.display()
        ))
    })?;
    let new_path = dst_root.join(relative);

    if let Some(parent) = new_path.parent() {
        fs::create_dir_all(parent).map_err(|e| transfer_error(&new_path, e))?;
    }

    match mode {
        TransferMode::Copy => copy_with_metadata(path, &new_path)?,
        TransferMode::Move => move_file(path, &new_path)?,
    }

    debug!("{} -> {}", path.display(), new_path.display());
    Ok(TransferRecord::new(path.to_path_buf(), new_path))
}

/// Transfer every match sequentially, failing fast: the first error aborts
/// the remaining matches. Completed transfers stay on disk.
pub fn transfer_all(
    matches: &[PathBuf],
    src_root: &Path,
    dst_root: &Path,
    mode: TransferMode,
) -> Result<Vec<TransferRecord>, MatchCopyError> {
    let mut records = Vec::with_capacity(matches.len());

    for path in matches {
        records.push(transfer_file(path, src_root, dst_root, mode)?);
    }

    info!(
        "Transferred {} files to {}",
        records.len(),
        dst_root.display()
    );
    Ok(records)
}

/// Copy contents plus permission bits, then carry the source mtime over.
fn copy_with_metadata(src: &Path, dst: &Path) -> Result<(), MatchCopyError> {
    fs::copy(src, dst).map_err(|e| transfer_error(src, e))?;

    let metadata = fs::metadata(src).map_err(|e| transfer_error(src, e))?;
    let mtime = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_mtime(dst, mtime).map_err(|e| transfer_error(dst, e))?;

    Ok(())
}

/// Rename, falling back to copy-then-delete when the destination sits on a
/// different volume.
fn move_file(src: &Path, dst: &Path) -> Result<(), MatchCopyError> {
    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(_) => {
            copy_with_metadata(src, dst)?;
            fs::remove_file(src).map_err(|e| transfer_error(src, e))
        }
    }
}

fn transfer_error(path: &Path, source: io::Error) -> MatchCopyError {
    MatchCopyError::Transfer {
        path: path.to_path_buf(),
        source,
    }
}
