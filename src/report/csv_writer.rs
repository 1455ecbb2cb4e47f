use std::path::Path;
use tracing::{debug, info};

use super::columns::{OutputRow, header};
use crate::error::AppError;

/// Renders the header and rows into an in-memory CSV document.
pub fn render_csv(rows: &[OutputRow]) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(header())?;
    for row in rows {
        writer.write_record(row.cells())?;
    }
    writer
        .into_inner()
        .map_err(|e| AppError::Io(e.into_error()))
}

/// Writes the report to `path` in a single call, replacing any existing file.
pub async fn write_report(path: &Path, rows: &[OutputRow]) -> Result<(), AppError> {
    let document = render_csv(rows)?;
    debug!("Rendered {} bytes of CSV", document.len());

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        tokio::fs::create_dir_all(parent).await?;
    }

    tokio::fs::write(path, document).await?;
    info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
