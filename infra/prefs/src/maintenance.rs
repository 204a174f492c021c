use crate::engine::TMP_MARKER;
use std::path::Path;
use std::time::{Duration, SystemTime};
use tracing::{info, warn};

/// Leftovers younger than this are assumed to belong to an in-flight write.
const STALE_AFTER: Duration = Duration::from_secs(300);

/// Removes abandoned temp files from the preference root.
///
/// The root is flat (one file per key), so a single directory scan suffices.
/// Every failure here is downgraded to a log line; cleanup must never block
/// engine startup.
pub(crate) async fn purge_tmp(root: &Path) {
    let now = SystemTime::now();
    let mut removed = 0usize;
    let mut failed = 0usize;

    let mut entries = match tokio::fs::read_dir(root).await {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %root.display(), error = %e, "Temp sweep skipped: cannot scan root");
            return;
        },
    };

    while let Ok(Some(entry)) = entries.next_entry().await {
        let path = entry.path();
        let is_tmp = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.contains(TMP_MARKER));
        if !is_tmp || !is_stale(&entry, now).await {
            continue;
        }

        match tokio::fs::remove_file(&path).await {
            Ok(()) => removed += 1,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to remove stale temp file");
                failed += 1;
            },
        }
    }

    if removed > 0 || failed > 0 {
        info!(removed, failed, "Cleaned up temporary files");
    }
}

async fn is_stale(entry: &tokio::fs::DirEntry, now: SystemTime) -> bool {
    let Ok(meta) = entry.metadata().await else { return true };
    if !meta.is_file() {
        return false;
    }
    meta.modified()
        .ok()
        .and_then(|modified| now.duration_since(modified).ok())
        .is_none_or(|age| age > STALE_AFTER)
}
