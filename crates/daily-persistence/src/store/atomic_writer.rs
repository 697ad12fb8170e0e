use daily_core::DailyResult;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Replace the task file at `path` with `data` without ever exposing a
/// half-written document.
///
/// The whole collection is rewritten on every mutation, so a crash
/// mid-write would otherwise truncate the user's entire task list. The
/// bytes go to a temp file in the target's directory (same filesystem,
/// so the rename stays atomic on POSIX), are flushed to disk, and then
/// renamed over the original in one step.
pub async fn replace_file(path: &Path, data: &[u8]) -> DailyResult<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let temp = tempfile::NamedTempFile::new_in(parent)?;
    let temp_path = temp.path().to_path_buf();

    let mut file = fs::File::create(&temp_path).await?;
    file.write_all(data).await?;
    // The rename is only safe once the bytes behind it are durable
    file.sync_all().await?;
    drop(file);

    fs::rename(&temp_path, path).await?;

    tracing::debug!("Replaced {} ({} bytes)", path.display(), data.len());
    Ok(())
}
