//! Document assembly and the generate pipeline
//!
//! Assembles the full reference document in memory, in fixed section
//! order, then writes it out in a single pass. All sources are read before
//! anything is written, so a read failure never clobbers an existing
//! output file.

use crate::error::{Error, Result};
use crate::group::group_by_category;
use crate::manifest::{Layout, SourceSpec, SOURCES};
use crate::reader::read_source;
use crate::render::render_table;
use crate::table::Table;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the generated document inside the docs directory
pub const OUTPUT_FILE: &str = "REFERENCE.md";

/// Result of a successful generation run
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Path the document was written to
    pub output_path: PathBuf,
    /// Data row count per source, in manifest order
    pub source_rows: Vec<(&'static str, usize)>,
}

impl GenerateResult {
    /// Total data rows across all sources
    pub fn total_rows(&self) -> usize {
        self.source_rows.iter().map(|(_, n)| n).sum()
    }
}

/// Assemble the full reference document from parsed sources.
///
/// `generated_at` is embedded in the timestamp line; callers pass
/// `Local::now()` outside of tests.
pub fn build_document(sections: &[(SourceSpec, Table)], generated_at: DateTime<Local>) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("# Fish Food - Game Reference".to_string());
    lines.push(String::new());
    lines.push(format!(
        "*Auto-generated from CSV files on {}*",
        generated_at.format("%Y-%m-%d %H:%M")
    ));
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());

    for (spec, table) in sections {
        lines.push(format!("## {}", spec.title));
        lines.push(String::new());

        if let Some(intro) = spec.intro {
            lines.push(intro.to_string());
            lines.push(String::new());
        }

        match spec.layout {
            Layout::Flat => {
                lines.push(render_table(&table.header, &table.rows));
                lines.push(String::new());
            }
            Layout::Grouped { columns } => {
                for group in group_by_category(&table.rows) {
                    lines.push(format!("### {} Tags", group.category));
                    lines.push(String::new());
                    lines.push(render_table(columns, &group.rows));
                    lines.push(String::new());
                }
            }
        }
    }

    lines.join("\n")
}

/// Write the assembled document, overwriting any existing file
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Run the full pipeline: read every source in manifest order, assemble
/// the document, write it to `output` (default: `<docs_dir>/REFERENCE.md`).
///
/// Aborts on the first unreadable source, before the output is touched.
pub fn generate<P: AsRef<Path>>(docs_dir: P, output: Option<&Path>) -> Result<GenerateResult> {
    let docs_dir = docs_dir.as_ref();

    let mut sections: Vec<(SourceSpec, Table)> = Vec::with_capacity(SOURCES.len());
    for spec in SOURCES {
        let table = read_source(docs_dir.join(spec.file))?;
        sections.push((*spec, table));
    }

    let content = build_document(&sections, Local::now());

    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => docs_dir.join(OUTPUT_FILE),
    };
    write_document(&output_path, &content)?;

    Ok(GenerateResult {
        output_path,
        source_rows: sections
            .iter()
            .map(|(spec, table)| (spec.name, table.row_count()))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs;

    fn ts() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 15, 12, 30, 0).unwrap()
    }

    fn table(header: &[&str], rows: &[&[&str]], path: &str) -> Table {
        Table {
            header: header.iter().map(|c| c.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
            source_path: PathBuf::from(path),
        }
    }

    const WEAPONS: SourceSpec = SourceSpec {
        name: "weapons",
        file: "weapons.csv",
        title: "Weapons",
        intro: None,
        layout: Layout::Flat,
    };

    const TAGS: SourceSpec = SourceSpec {
        name: "tags",
        file: "tags.csv",
        title: "Tags Reference",
        intro: Some("Tags are used for encounter weighting, weapon synergies, and damage bonuses."),
        layout: Layout::Grouped {
            columns: crate::manifest::TAG_COLUMNS,
        },
    };

    #[test]
    fn test_flat_section_layout() {
        let sections = vec![(
            WEAPONS,
            table(&["Name", "DMG"], &[&["Spear", "5"]], "weapons.csv"),
        )];

        let doc = build_document(&sections, ts());

        assert_eq!(
            doc,
            "# Fish Food - Game Reference\n\
             \n\
             *Auto-generated from CSV files on 2024-01-15 12:30*\n\
             \n\
             ---\n\
             \n\
             ## Weapons\n\
             \n\
             | Name | DMG |\n\
             | --- | --- |\n\
             | Spear | 5 |\n"
        );
    }

    #[test]
    fn test_grouped_section_layout() {
        let sections = vec![(
            TAGS,
            table(
                &["Category", "Name", "ID", "Description"],
                &[
                    &["Combat", "Sharp", "tag_sharp", "Bonus damage"],
                    &["Combat", "Blunt", "tag_blunt", "Stun chance"],
                    &["Synergy", "Set", "tag_set", "Set bonus"],
                ],
                "tags.csv",
            ),
        )];

        let doc = build_document(&sections, ts());

        // The source's own header is ignored; per-category tables use the
        // fixed three-column header.
        let expected_tail = "## Tags Reference\n\
             \n\
             Tags are used for encounter weighting, weapon synergies, and damage bonuses.\n\
             \n\
             ### Combat Tags\n\
             \n\
             | Name | ID | Description |\n\
             | --- | --- | --- |\n\
             | Sharp | tag_sharp | Bonus damage |\n\
             | Blunt | tag_blunt | Stun chance |\n\
             \n\
             ### Synergy Tags\n\
             \n\
             | Name | ID | Description |\n\
             | --- | --- | --- |\n\
             | Set | tag_set | Set bonus |\n";
        assert!(doc.ends_with(expected_tail), "got:\n{doc}");
    }

    #[test]
    fn test_document_ends_with_single_newline() {
        let sections = vec![(WEAPONS, table(&["Name"], &[], "weapons.csv"))];
        let doc = build_document(&sections, ts());

        assert!(doc.ends_with('\n'));
        assert!(!doc.ends_with("\n\n"));
    }

    fn write_fixture_sources(dir: &Path) {
        let fixtures: &[(&str, &str)] = &[
            ("decks.csv", "Name,ID,Cost\nStarter,deck_starter,0\n"),
            ("meta_upgrades.csv", "Name,Stat,Cost\nVitality,max_hp,100\n"),
            ("weapons.csv", "Name,DMG\nSpear,5\nHarpoon,9\n"),
            ("artifacts.csv", "Name,Effect\nPearl,+1 luck\n"),
            ("enemies.csv", "Name,HP\nAngler,30\n"),
            ("effects.csv", "Name,Behavior\nPierce,passes through\n"),
            (
                "tags.csv",
                "Category,Name,ID,Description\nCombat,Sharp,tag_sharp,Bonus damage\n",
            ),
        ];
        for (file, content) in fixtures {
            fs::write(dir.join(file), content).unwrap();
        }
    }

    #[test]
    fn test_generate_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture_sources(dir.path());

        let result = generate(dir.path(), None).unwrap();

        assert_eq!(result.output_path, dir.path().join("REFERENCE.md"));
        assert_eq!(result.total_rows(), 8);

        let doc = fs::read_to_string(&result.output_path).unwrap();
        assert!(doc.starts_with("# Fish Food - Game Reference\n"));
        assert!(doc.contains("## Weapons"));
        assert!(doc.contains("### Combat Tags"));
    }

    #[test]
    fn test_generate_is_idempotent_modulo_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture_sources(dir.path());

        let first = generate(dir.path(), None).unwrap();
        let doc_a = fs::read_to_string(&first.output_path).unwrap();
        let second = generate(dir.path(), None).unwrap();
        let doc_b = fs::read_to_string(&second.output_path).unwrap();

        let strip_stamp = |doc: &str| {
            doc.lines()
                .filter(|l| !l.starts_with("*Auto-generated"))
                .collect::<Vec<_>>()
                .join("\n")
        };
        assert_eq!(strip_stamp(&doc_a), strip_stamp(&doc_b));
    }

    #[test]
    fn test_missing_source_leaves_output_untouched() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture_sources(dir.path());

        let output = dir.path().join("REFERENCE.md");
        fs::write(&output, "previous run\n").unwrap();
        fs::remove_file(dir.path().join("enemies.csv")).unwrap();

        let err = generate(dir.path(), None).unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous run\n");
    }

    #[test]
    fn test_generate_overwrites_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture_sources(dir.path());

        fs::write(dir.path().join("REFERENCE.md"), "stale\n").unwrap();
        let result = generate(dir.path(), None).unwrap();

        let doc = fs::read_to_string(&result.output_path).unwrap();
        assert!(doc.starts_with("# Fish Food - Game Reference\n"));
    }

    #[test]
    fn test_generate_with_explicit_output() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture_sources(dir.path());

        let out = dir.path().join("custom.md");
        let result = generate(dir.path(), Some(&out)).unwrap();

        assert_eq!(result.output_path, out);
        assert!(out.exists());
    }
}
