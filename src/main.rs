/*!
 * Command-line interface for projdoc
 */

use std::process;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::error;
use tracing_subscriber::EnvFilter;

use projdoc::config::{Args, Config};
use projdoc::report::{ListingReport, Reporter};
use projdoc::writer::MarkdownWriter;
use projdoc::Result;

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose, args.quiet);

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("projdoc: {}", e);
        process::exit(1);
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    let config = Config::from_args(args)?;
    config.validate()?;

    let progress = if config.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(0)
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ⏱️  {elapsed_precise}")
    {
        progress.set_style(style);
    }
    progress.enable_steady_tick(Duration::from_millis(100));
    progress.set_prefix("📂 Listing");
    progress.set_message(format!("Scanning {}", config.target_dir.display()));

    let start_time = Instant::now();

    let listing = projdoc::generate(&config, Arc::new(progress.clone()))?;

    progress.set_message(format!("Writing {}", config.output_file.display()));
    let writer = MarkdownWriter::new(&config.output_file);
    let output_size = writer.write(&listing.document)?;

    let duration = start_time.elapsed();
    progress.finish_and_clear();

    let report = ListingReport {
        output_file: config.output_file.display().to_string(),
        output_size,
        duration,
        directories: listing.tree.directories,
        files_listed: listing.tree.files,
        files_written: listing.content.files_written,
        files_skipped: listing.content.files_skipped,
        total_lines: listing.content.total_lines,
        file_details: listing.content.file_details,
    };

    if !config.quiet {
        Reporter::print_report(&report);
    }

    Ok(())
}
