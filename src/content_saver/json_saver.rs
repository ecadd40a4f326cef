use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::time::timeout;

use crate::scrape::ProductRecord;

/// Timeout for blocking JSON serialization
/// Prevents hangs on pathological data structures
const BLOCKING_SERIALIZATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Save the scraped records as `<output_dir>/<search>.json`.
///
/// The output directory is created when absent. The file is a pretty-printed
/// JSON array of records, one object per product, UTF-8 encoded. The search
/// term is sanitized before it becomes a file name so a hostile term can't
/// escape the output directory.
pub async fn save_products(
    search: &str,
    records: &[ProductRecord],
    output_dir: &Path,
) -> Result<PathBuf> {
    let file_name = format!("{}.json", sanitize_filename::sanitize(search));
    let path = output_dir.join(file_name);

    tokio::fs::create_dir_all(output_dir)
        .await
        .with_context(|| {
            format!(
                "Failed to create output directory {}",
                output_dir.display()
            )
        })?;

    // JSON serialization (keep spawn_blocking - CPU intensive)
    let owned: Vec<ProductRecord> = records.to_vec();
    let blocking_task = tokio::task::spawn_blocking(move || serde_json::to_string_pretty(&owned));

    let json = match timeout(BLOCKING_SERIALIZATION_TIMEOUT, blocking_task).await {
        Ok(Ok(result)) => result.context("Failed to serialize records to JSON")?,
        Ok(Err(e)) => return Err(anyhow::anyhow!("JSON serialization task panicked: {}", e)),
        Err(_) => {
            log::warn!(
                "JSON serialization timeout (timeout: {:?})",
                BLOCKING_SERIALIZATION_TIMEOUT
            );
            return Err(anyhow::anyhow!(
                "JSON serialization timed out after {:?}",
                BLOCKING_SERIALIZATION_TIMEOUT
            ));
        }
    };

    tokio::fs::write(&path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("Saved {} records to {}", records.len(), path.display());
    Ok(path)
}
