use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::record::AnomalyRecord;

const CSV_COLUMNS: [&str; 7] = [
    "cell_id",
    "band",
    "anomaly_type",
    "anomaly",
    "recommended_fix",
    "source_id",
    "creation_date",
];

/// Write all records as a pretty-printed JSON array. Optional fields are
/// omitted per record when absent.
pub fn write_json(path: &Path, records: &[AnomalyRecord]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), records)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Write all records as CSV with the fixed seven-column header. Missing
/// fields render as empty cells.
pub fn write_csv(path: &Path, records: &[AnomalyRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    writer.write_record(CSV_COLUMNS)?;
    for r in records {
        writer.write_record([
            r.cell_id.to_string(),
            r.band.to_string(),
            r.anomaly_type.label().to_string(),
            r.anomaly.clone(),
            r.recommended_fix.clone().unwrap_or_default(),
            meta_cell(r.source_id.as_ref()),
            meta_cell(r.creation_date.as_ref()),
        ])?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Render an opaque metadata value as a CSV cell: strings bare, everything
/// else as compact JSON.
fn meta_cell(value: Option<&Value>) -> String {
    match value {
        None => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
