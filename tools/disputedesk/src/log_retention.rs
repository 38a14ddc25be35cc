use crate::errors::DisputeDeskError;
use std::fs;
use std::path::{Path, PathBuf};

/// Delete the oldest `.jsonl` files in `dir` until the directory's log
/// footprint fits under `budget_bytes`. Non-log files are left alone.
pub fn enforce_log_budget(
    dir: &Path,
    budget_bytes: u64,
) -> Result<Vec<PathBuf>, DisputeDeskError> {
    let mut files = fs::read_dir(dir)
        .map_err(|e| DisputeDeskError::Io(e.to_string()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().map(|ext| ext == "jsonl").unwrap_or(false)
        })
        .collect::<Vec<_>>();

    files.sort_by(|a, b| {
        let ma = fs::metadata(a).ok().and_then(|m| m.modified().ok());
        let mb = fs::metadata(b).ok().and_then(|m| m.modified().ok());
        ma.cmp(&mb)
    });

    let mut total = files
        .iter()
        .filter_map(|path| fs::metadata(path).ok().map(|meta| meta.len()))
        .sum::<u64>();

    let mut deleted = Vec::new();
    for path in files {
        if total <= budget_bytes {
            break;
        }
        let len = fs::metadata(&path)
            .map_err(|e| DisputeDeskError::Io(e.to_string()))?
            .len();
        fs::remove_file(&path).map_err(|e| DisputeDeskError::Io(e.to_string()))?;
        total = total.saturating_sub(len);
        deleted.push(path);
    }

    Ok(deleted)
}
