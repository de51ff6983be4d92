//! Game Reference Generator CLI
//!
//! Command-line tool for regenerating REFERENCE.md from the balance CSV
//! files. Run with no arguments to regenerate with the default layout
//! (`docs/*.csv` -> `docs/REFERENCE.md`).

use clap::{Parser, Subcommand};
use refgen_core::{
    find_source, generate, group_by_category, read_source, render_table, scan_docs_dir, Layout,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "refgen")]
#[command(about = "Game reference document generator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the reference document from the CSV sources
    Generate {
        /// Directory containing the CSV sources
        #[arg(short, long, default_value = "docs")]
        docs_dir: PathBuf,

        /// Output file path (default: <docs-dir>/REFERENCE.md)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the configured sources and CSV files found in the docs directory
    Sources {
        /// Directory containing the CSV sources
        #[arg(short, long, default_value = "docs")]
        docs_dir: PathBuf,
    },

    /// Render a single source to stdout
    Show {
        /// Directory containing the CSV sources
        #[arg(short, long, default_value = "docs")]
        docs_dir: PathBuf,

        /// Source name (e.g. "weapons")
        #[arg(short, long)]
        source: String,

        /// Maximum number of rows to display
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> refgen_core::Result<()> {
    let cli = Cli::parse();

    // Bare `refgen` regenerates with the default layout
    let command = cli.command.unwrap_or(Commands::Generate {
        docs_dir: PathBuf::from("docs"),
        output: None,
    });

    match command {
        Commands::Generate { docs_dir, output } => cmd_generate(&docs_dir, output.as_deref()),
        Commands::Sources { docs_dir } => cmd_sources(&docs_dir),
        Commands::Show {
            docs_dir,
            source,
            limit,
            format,
        } => cmd_show(&docs_dir, &source, limit, &format),
    }
}

fn cmd_generate(docs_dir: &Path, output: Option<&Path>) -> refgen_core::Result<()> {
    let result = generate(docs_dir, output)?;
    println!("Generated {}", result.output_path.display());
    Ok(())
}

fn cmd_sources(docs_dir: &Path) -> refgen_core::Result<()> {
    let report = scan_docs_dir(docs_dir)?;

    println!("Sources in {}:", report.docs_dir.display());
    println!();

    for spec in refgen_core::SOURCES {
        let entry = report
            .entries
            .iter()
            .find(|e| e.source.is_some_and(|s| s.name == spec.name));

        match entry {
            Some(entry) => match read_source(&entry.path) {
                Ok(table) => println!(
                    "  {} ({} rows, {} columns)",
                    spec.name,
                    table.row_count(),
                    table.column_count()
                ),
                Err(e) => println!("  {} (unreadable: {})", spec.name, e),
            },
            None => println!("  {} (missing: {})", spec.name, spec.file),
        }
    }

    let extras = report.extras();
    if !extras.is_empty() {
        println!();
        println!("Extra CSV files not part of the reference:");
        for entry in extras {
            println!("  {}", entry.path.display());
        }
    }

    Ok(())
}

fn cmd_show(
    docs_dir: &Path,
    source_name: &str,
    limit: Option<usize>,
    format: &str,
) -> refgen_core::Result<()> {
    let spec = find_source(source_name)
        .ok_or_else(|| refgen_core::Error::SourceNotFound(source_name.to_string()))?;

    let table = read_source(docs_dir.join(spec.file))?;

    match format.to_lowercase().as_str() {
        "table" => {
            let row_limit = limit.unwrap_or(table.rows.len()).min(table.rows.len());
            let rows = &table.rows[..row_limit];

            match spec.layout {
                Layout::Flat => println!("{}", render_table(&table.header, rows)),
                Layout::Grouped { columns } => {
                    for group in group_by_category(rows) {
                        println!("### {} Tags", group.category);
                        println!();
                        println!("{}", render_table(columns, &group.rows));
                        println!();
                    }
                }
            }

            if table.rows.len() > row_limit {
                println!("... ({} more rows)", table.rows.len() - row_limit);
            }
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        _ => {
            eprintln!("Unknown format: {}. Supported formats: table, json", format);
            std::process::exit(1);
        }
    }

    Ok(())
}
