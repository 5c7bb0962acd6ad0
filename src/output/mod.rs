
use std::path::Path;

use thiserror::Error;

use crate::generator::MetricRow;

const CSV_HEADER: [&str; 4] = [
    "date_time",
    "host_name",
    "cpu_used_percent",
    "mem_used_percent",
];

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write output file {path}: {source}")]
    Write { path: String, source: csv::Error },
}

/// Serializes the full dataset to `path`, overwriting any existing file.
pub fn write_csv(path: impl AsRef<Path>, rows: &[MetricRow]) -> Result<(), OutputError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();
    let wrap = |source: csv::Error| OutputError::Write {
        path: path_str.clone(),
        source,
    };

    let mut writer = csv::WriterBuilder::new().from_path(path).map_err(&wrap)?;
    // serde-driven writes emit the header with the first row; an empty
    // dataset still gets a header-only file.
    if rows.is_empty() {
        writer.write_record(CSV_HEADER).map_err(&wrap)?;
    }
    for row in rows {
        writer.serialize(row).map_err(&wrap)?;
    }
    writer
        .flush()
        .map_err(|source| wrap(csv::Error::from(source)))?;
    Ok(())
}
