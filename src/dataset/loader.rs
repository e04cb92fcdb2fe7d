//! CSV loading for the adverse-event dataset.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{DataError, Result};

use super::{Dataset, Record};

/// Load an ADAE CSV file into an immutable [`Dataset`].
///
/// All values are kept as strings; typed interpretation happens at
/// evaluation time. A missing file is fatal (`DataError::SourceMissing`).
pub fn load_csv(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DataError::SourceMissing(path.display().to_string()).into());
    }

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(DataError::Csv)?;

    let headers = reader.headers().map_err(DataError::Csv)?.clone();
    if headers.is_empty() {
        return Err(DataError::EmptyHeader.into());
    }
    let columns: Vec<String> = headers.iter().map(str::to_string).collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(DataError::Csv)?;
        let record: Record = headers
            .iter()
            .zip(row.iter())
            .map(|(h, v)| (h.to_string(), v.to_string()))
            .collect();
        records.push(record);
    }

    tracing::info!(
        path = %path.display(),
        rows = records.len(),
        columns = columns.len(),
        "loaded adverse-event dataset"
    );

    Ok(Dataset::new(columns, records))
}
