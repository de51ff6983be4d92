//! Docs-directory scanner
//!
//! Diagnostic discovery of CSV files in the docs directory, cross-checked
//! against the source manifest. Generation never consults this; it backs
//! the `sources` CLI command.

use crate::error::Result;
use crate::manifest::{SourceSpec, SOURCES};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One CSV file found in the docs directory
#[derive(Debug, Clone)]
pub struct ScanEntry {
    /// Full path to the file
    pub path: PathBuf,
    /// Manifest entry this file backs, if any
    pub source: Option<&'static SourceSpec>,
}

impl ScanEntry {
    /// Whether this file belongs to the manifest
    pub fn is_known(&self) -> bool {
        self.source.is_some()
    }
}

/// Result of scanning a docs directory
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// The directory that was scanned
    pub docs_dir: PathBuf,
    /// CSV files found, sorted by path
    pub entries: Vec<ScanEntry>,
    /// Manifest sources with no file in the directory
    pub missing: Vec<&'static SourceSpec>,
}

impl ScanReport {
    /// Files present but not part of the manifest
    pub fn extras(&self) -> Vec<&ScanEntry> {
        self.entries.iter().filter(|e| !e.is_known()).collect()
    }
}

/// Scan a docs directory for CSV files and match them against the manifest
pub fn scan_docs_dir<P: AsRef<Path>>(docs_dir: P) -> Result<ScanReport> {
    let docs_dir = docs_dir.as_ref();

    let mut entries: Vec<ScanEntry> = Vec::new();
    for entry in WalkDir::new(docs_dir).follow_links(true) {
        let entry = entry?;
        let path = entry.path();

        if path.extension().is_some_and(|ext| ext == "csv") {
            let file_name = path.file_name().and_then(|n| n.to_str());
            let source = file_name.and_then(|name| SOURCES.iter().find(|s| s.file == name));

            entries.push(ScanEntry {
                path: path.to_path_buf(),
                source,
            });
        }
    }

    entries.sort_by(|a, b| a.path.cmp(&b.path));

    let missing: Vec<&'static SourceSpec> = SOURCES
        .iter()
        .filter(|spec| {
            !entries
                .iter()
                .any(|e| e.source.is_some_and(|s| s.file == spec.file))
        })
        .collect();

    Ok(ScanReport {
        docs_dir: docs_dir.to_path_buf(),
        entries,
        missing,
    })
}
