//! Delimited results table reader.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::domain::{AppError, ResultsTable};

/// Field delimiter implied by the file extension: tab for `.tsv`/`.tab`, else comma.
pub fn delimiter_for(path: &Path) -> u8 {
    match path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase).as_deref() {
        Some("tsv" | "tab") => b'\t',
        _ => b',',
    }
}

/// Read a headered table from `path`.
pub fn read_table(path: &Path) -> Result<ResultsTable, AppError> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            AppError::SourceNotFound(path.display().to_string())
        } else {
            AppError::Io(e)
        }
    })?;
    let table_error =
        |e: csv::Error| AppError::Table { path: path.display().to_string(), details: e.to_string() };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter_for(path))
        .flexible(true)
        .from_reader(file);

    let headers = to_vec(reader.headers().map_err(table_error)?);
    let rows = reader
        .records()
        .map(|record| record.map(|record| to_vec(&record)).map_err(table_error))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ResultsTable::new(headers, rows))
}

fn to_vec(record: &StringRecord) -> Vec<String> {
    record.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_tab_separated_reports() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.full.tsv");
        std::fs::write(&path, "SAMPLE\tNAME\tREAD_COUNT\ns1\tE. coli\t42\n").unwrap();

        let table = read_table(&path).unwrap();
        assert_eq!(table.headers, vec!["SAMPLE", "NAME", "READ_COUNT"]);
        assert_eq!(table.rows, vec![vec!["s1", "E. coli", "42"]]);
    }

    #[test]
    fn reads_comma_separated_by_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.csv");
        std::fs::write(&path, "a,b\n1,2\n3,4\n").unwrap();

        let table = read_table(&path).unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["3", "4"]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = read_table(Path::new("/nonexistent/results.csv")).unwrap_err();
        assert!(matches!(err, AppError::SourceNotFound(_)));
    }

    #[test]
    fn delimiter_follows_extension() {
        assert_eq!(delimiter_for(Path::new("x.TSV")), b'\t');
        assert_eq!(delimiter_for(Path::new("x.tab")), b'\t');
        assert_eq!(delimiter_for(Path::new("x.csv")), b',');
        assert_eq!(delimiter_for(Path::new("x")), b',');
    }
}
