//! CSV reader for balance source files

use crate::error::{Error, Result};
use crate::table::Table;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read a CSV source file into a Table.
///
/// Rows keep their raw width: a row shorter or longer than the header is
/// returned as-is and left to the renderer, which pads but never truncates.
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let reader = BufReader::new(file);
    read_from(reader, path)
}

/// Read a CSV source from a string (useful for testing)
pub fn read_source_str(content: &str, source_name: &str) -> Result<Table> {
    read_from(content.as_bytes(), Path::new(source_name))
}

fn read_from<R: std::io::Read>(reader: R, path: &Path) -> Result<Table> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // Allow varying number of fields
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(|e| Error::Csv {
        path: path.to_path_buf(),
        source: e,
    })?;

    let header: Vec<String> = headers.iter().map(str::to_string).collect();

    if header.is_empty() {
        return Err(Error::EmptySource {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| Error::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;

        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table {
        header,
        rows,
        source_path: path.to_path_buf(),
    })
}
