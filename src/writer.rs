use crate::error::{Result, ScanError};
use crate::results::JobRecord;
use std::path::Path;

/// Output column names, in record field order
pub const HEADER: [&str; 4] = ["Job Title", "URL", "Pay Rate", "Description"];

/// Writes `records` to `path` as CSV, replacing any existing file.
///
/// The header row is always written, even for an empty slice.
pub fn write_records(path: &Path, records: &[JobRecord]) -> Result<usize> {
    write_inner(path, records).map_err(|source| ScanError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })?;

    ::log::info!("Jobs successfully saved to {}", path.display());
    Ok(records.len())
}

fn write_inner(path: &Path, records: &[JobRecord]) -> std::result::Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn record(title: &str, url: &str) -> JobRecord {
        JobRecord::new(
            title.to_string(),
            url.to_string(),
            "Not mentioned".to_string(),
            "Not available".to_string(),
        )
    }

    #[test]
    fn test_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.csv");

        let records = vec![
            record("Transcriber", "https://a.com/1"),
            JobRecord::new(
                "Editor, Audio".to_string(),
                "https://b.com/2".to_string(),
                "$0.50".to_string(),
                "Says \"hi\"".to_string(),
            ),
        ];
        assert_eq!(write_records(&path, &records).unwrap(), 2);

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written.lines().collect::<Vec<_>>(),
            vec![
                "Job Title,URL,Pay Rate,Description",
                "Transcriber,https://a.com/1,Not mentioned,Not available",
                r#""Editor, Audio",https://b.com/2,$0.50,"Says ""hi""""#,
            ]
        );
    }

    #[test]
    fn test_empty_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.csv");

        assert_eq!(write_records(&path, &[]).unwrap(), 0);
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written.lines().collect::<Vec<_>>(),
            vec!["Job Title,URL,Pay Rate,Description"]
        );
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.csv");
        fs::write(&path, "stale contents\nmore\nlines\n").unwrap();

        write_records(&path, &[record("Typist", "https://c.com/")]).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(!written.contains("stale"));
        assert_eq!(written.lines().count(), 2);
    }

    #[test]
    fn test_records_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.csv");
        let records = vec![record("Transcriber", "https://a.com/1")];
        write_records(&path, &records).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let read: Vec<JobRecord> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(read, records);
    }

    #[test]
    fn test_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("jobs.csv");

        let result = write_records(&path, &[]);
        assert!(matches!(result, Err(ScanError::WriteFailure { .. })));
    }
}
