use anyhow::{Context, Result};
use clap::Parser;

use pdf_abbrev::cli::Args;
use pdf_abbrev::config::AbbreviationTable;
use pdf_abbrev::render::RebuildOptions;
use pdf_abbrev::process_document;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    // Dictionary load is fail-open: a missing or malformed file degrades
    // to a no-op pass-through rather than aborting the run
    let table = AbbreviationTable::load(&args.abbreviations);
    if table.is_empty() {
        log::warn!(
            "No abbreviations loaded from {}; output will be a plain re-render",
            args.abbreviations.display()
        );
    }

    let output_path = args.output_path();
    let options = RebuildOptions {
        include_reference_pages: args.reference_pages,
    };

    let report = process_document(&args.input, &output_path, &table, &options)
        .with_context(|| format!("Failed to rebuild {}", args.input.display()))?;

    println!("Minimized PDF saved to {}", report.output_path.display());
    println!("Pages processed: {}", report.pages.len());

    if report.record.is_empty() {
        println!("No abbreviations applied");
    } else {
        println!("Replacements:");
        for (term, replacement) in report.record.iter() {
            println!(
                "  {} \u{279D} {} (x{})",
                term, replacement.abbreviation, replacement.count
            );
        }
    }

    let saved = report.original_size.saturating_sub(report.minimized_size);
    let percent = if report.original_size > 0 {
        saved as f64 * 100.0 / report.original_size as f64
    } else {
        0.0
    };
    println!(
        "Size: {} bytes -> {} bytes ({:.1}% saved)",
        report.original_size, report.minimized_size, percent
    );

    Ok(())
}
