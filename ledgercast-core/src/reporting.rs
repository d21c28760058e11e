//! Ledger export — the flat CSV listing of a projection.

use anyhow::{Context, Result};
use std::path::Path;

use crate::domain::LedgerRecord;

/// Write one `YYYY-MM-DD,<balance>` row per record, no header.
///
/// Balances are rendered with two decimal places. The writer is flushed
/// before returning, so a failed write surfaces as an error instead of
/// being swallowed when the file handle is dropped.
pub fn write_ledger_csv(path: &Path, records: &[LedgerRecord]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("create ledger CSV {}", path.display()))?;

    for record in records {
        writer
            .write_record([record.date.to_string(), format!("{:.2}", record.balance)])
            .with_context(|| format!("write ledger row for {}", record.date))?;
    }

    writer
        .flush()
        .with_context(|| format!("flush ledger CSV {}", path.display()))?;
    Ok(())
}
