//! The fixed manifest of balance CSV sources
//!
//! Sources are listed in document order. Titles and intro text match the
//! section headings of the generated reference.

/// How a source's rows are laid out in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One flat table rendered with the source's own header
    Flat,
    /// Rows grouped by their first column, one sub-table per category
    /// rendered with the given column names
    Grouped { columns: &'static [&'static str] },
}

/// One entry in the source manifest
#[derive(Debug, Clone, Copy)]
pub struct SourceSpec {
    /// Short name used on the CLI (e.g. "decks")
    pub name: &'static str,
    /// File name inside the docs directory
    pub file: &'static str,
    /// Section heading in the generated document
    pub title: &'static str,
    /// Static descriptive text under the heading, if any
    pub intro: Option<&'static str>,
    /// Table layout for this source
    pub layout: Layout,
}

/// Columns of the per-category tag tables
pub const TAG_COLUMNS: &[&str] = &["Name", "ID", "Description"];

/// All balance sources, in the order their sections appear in the document
pub const SOURCES: &[SourceSpec] = &[
    SourceSpec {
        name: "decks",
        file: "decks.csv",
        title: "Decks (Upgrade Packs)",
        intro: Some("Decks determine which upgrades, weapons, and artifacts are available during a run."),
        layout: Layout::Flat,
    },
    SourceSpec {
        name: "meta_upgrades",
        file: "meta_upgrades.csv",
        title: "Meta Upgrades (Permanent)",
        intro: Some("Permanent stat upgrades purchased with souls between runs."),
        layout: Layout::Flat,
    },
    SourceSpec {
        name: "weapons",
        file: "weapons.csv",
        title: "Weapons",
        intro: None,
        layout: Layout::Flat,
    },
    SourceSpec {
        name: "artifacts",
        file: "artifacts.csv",
        title: "Artifacts",
        intro: Some("Passive items that provide stat bonuses or special effects."),
        layout: Layout::Flat,
    },
    SourceSpec {
        name: "enemies",
        file: "enemies.csv",
        title: "Enemies",
        intro: None,
        layout: Layout::Flat,
    },
    SourceSpec {
        name: "effects",
        file: "effects.csv",
        title: "Effects",
        intro: Some("Effects define mechanical behaviors that projectiles can have."),
        layout: Layout::Flat,
    },
    SourceSpec {
        name: "tags",
        file: "tags.csv",
        title: "Tags Reference",
        intro: Some("Tags are used for encounter weighting, weapon synergies, and damage bonuses."),
        layout: Layout::Grouped {
            columns: TAG_COLUMNS,
        },
    },
];

/// Find a manifest entry by its short name
pub fn find_source(name: &str) -> Option<&'static SourceSpec> {
    SOURCES.iter().find(|s| s.name == name)
}
