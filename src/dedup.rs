use crate::error::{Result, ScanError};
use crate::utils::network_location;
use csv::StringRecord;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Name of the column whose network location keys each row
pub const URL_COLUMN: &str = "URL";

/// What a deduplication pass did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DedupSummary {
    pub rows_read: usize,
    pub rows_kept: usize,
    pub output_path: PathBuf,
}

/// Keeps the first row for each network location of the URL column, in order.
///
/// Rows without a usable URL share the empty key, so at most one of them survives.
/// Without a URL column every row has the empty key.
pub fn retain_first_per_domain(
    rows: Vec<StringRecord>,
    url_column: Option<usize>,
) -> Vec<StringRecord> {
    let mut seen_domains = HashSet::new();

    rows.into_iter()
        .filter(|row| {
            let url = url_column.and_then(|i| row.get(i)).unwrap_or_default();
            let domain = network_location(url);
            if seen_domains.insert(domain.clone()) {
                true
            } else {
                ::log::debug!("Dropping duplicate row for domain '{}'", domain);
                false
            }
        })
        .collect()
}

/// Reads `input`, drops rows whose domain was already seen and writes the rest
/// to `output` under the same header.
///
/// Failing to read the input is a `ReadFailure`; failing to write the output a
/// `WriteFailure`.
pub fn deduplicate_file(input: &Path, output: &Path) -> Result<DedupSummary> {
    let read_failure = |source: csv::Error| ScanError::ReadFailure {
        path: input.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(input)
        .map_err(read_failure)?;

    let headers = reader.headers().map_err(read_failure)?.clone();
    let url_column = headers.iter().position(|name| name == URL_COLUMN);
    if url_column.is_none() {
        ::log::warn!(
            "{} has no '{}' column; all rows share one domain",
            input.display(),
            URL_COLUMN
        );
    }

    let rows = reader
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(read_failure)?;
    let rows_read = rows.len();

    let unique_rows = retain_first_per_domain(rows, url_column);

    write_rows(output, &headers, &unique_rows).map_err(|source| ScanError::WriteFailure {
        path: output.to_path_buf(),
        source,
    })?;

    ::log::info!(
        "Processed {} unique entries. Saved to {}.",
        unique_rows.len(),
        output.display()
    );

    Ok(DedupSummary {
        rows_read,
        rows_kept: unique_rows.len(),
        output_path: output.to_path_buf(),
    })
}

fn write_rows(
    path: &Path,
    headers: &StringRecord,
    rows: &[StringRecord],
) -> std::result::Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(path)?;

    if !headers.is_empty() {
        writer.write_record(headers)?;
    }
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
