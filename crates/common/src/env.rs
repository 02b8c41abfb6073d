//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

use tracing::info;

/// Create the parent directory of the SQLite file so `mode=rwc` can create it.
pub async fn ensure_data_dir(db_file: Option<&Path>) -> anyhow::Result<()> {
    let Some(parent) = db_file.and_then(Path::parent) else { return Ok(()) };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    if tokio::fs::metadata(parent).await.is_err() {
        info!(data_dir = %parent.display(), "creating data directory");
    }
    tokio::fs::create_dir_all(parent)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    Ok(())
}
