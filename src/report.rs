/*!
 * Reporting functionality for projdoc
 *
 * Prints a summary of a finished listing with the tabled library.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::utils::format_file_size;

/// Number of files shown when the listing is large
const TOP_FILES: usize = 10;

/// Information about a file in the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileReportInfo {
    /// Number of lines in the file
    pub lines: usize,
    /// Number of characters in the file
    pub chars: usize,
}

/// Statistics for a finished listing
#[derive(Debug, Clone)]
pub struct ListingReport {
    /// Output file path
    pub output_file: String,
    /// Bytes written
    pub output_size: u64,
    /// Time taken to scan, render and write
    pub duration: Duration,
    /// Directories in the structure section
    pub directories: usize,
    /// Files in the structure section
    pub files_listed: usize,
    /// Files with a content section
    pub files_written: usize,
    /// Files skipped because they could not be read
    pub files_skipped: usize,
    /// Total number of lines written
    pub total_lines: usize,
    /// Details for each written file
    pub file_details: Vec<(String, FileReportInfo)>,
}

/// Report generator for finished listings
pub struct Reporter;

impl Reporter {
    /// Format a number with human-readable units
    fn format_number(num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Print the report to stdout
    pub fn print_report(report: &ListingReport) {
        println!("\n{}", Self::generate_report(report));
    }

    /// Generate the report text
    pub fn generate_report(report: &ListingReport) -> String {
        let files_title = if report.file_details.len() > TOP_FILES {
            "📋  LARGEST FILES BY CHARACTER COUNT"
        } else {
            "📋  WRITTEN FILES"
        };

        format!(
            "{}\n{}\n\n✅  LISTING COMPLETE\n{}",
            files_title,
            Self::create_files_table(report),
            Self::create_summary_table(report)
        )
    }

    fn create_summary_table(report: &ListingReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: &'static str,

            #[tabled(rename = "Value")]
            value: String,
        }

        let rows = vec![
            SummaryRow {
                key: "📂 Output File",
                value: report.output_file.clone(),
            },
            SummaryRow {
                key: "💾 Output Size",
                value: format_file_size(report.output_size),
            },
            SummaryRow {
                key: "⏱️ Process Time",
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "🗂️ Directories",
                value: Self::format_number(report.directories),
            },
            SummaryRow {
                key: "📄 Files Listed",
                value: Self::format_number(report.files_listed),
            },
            SummaryRow {
                key: "📝 Files Written",
                value: Self::format_number(report.files_written),
            },
            SummaryRow {
                key: "⚠️ Files Skipped",
                value: Self::format_number(report.files_skipped),
            },
            SummaryRow {
                key: "📏 Total Lines",
                value: Self::format_number(report.total_lines),
            },
        ];

        Self::styled(Table::new(rows))
    }

    fn create_files_table(report: &ListingReport) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Lines")]
            lines: String,

            #[tabled(rename = "Chars")]
            chars: String,
        }

        let mut files: Vec<_> = report.file_details.iter().collect();
        files.sort_by(|(_, a), (_, b)| b.chars.cmp(&a.chars));
        files.truncate(TOP_FILES);

        let rows: Vec<FileRow> = files
            .into_iter()
            .map(|(path, info)| FileRow {
                path: path.clone(),
                lines: Self::format_number(info.lines),
                chars: Self::format_number(info.chars),
            })
            .collect();

        Self::styled(Table::new(rows))
    }

    fn styled(mut table: Table) -> String {
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));
        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(files: usize) -> ListingReport {
        ListingReport {
            output_file: "proj_listing.md".to_string(),
            output_size: 2048,
            duration: Duration::from_millis(12),
            directories: 3,
            files_listed: files,
            files_written: files,
            files_skipped: 0,
            total_lines: 1500,
            file_details: (0..files)
                .map(|i| {
                    (
                        format!("src/file{}.cs", i),
                        FileReportInfo { lines: i, chars: i * 10 },
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn test_format_number() {
        assert_eq!(Reporter::format_number(999), "999");
        assert_eq!(Reporter::format_number(1_500), "1.5K");
        assert_eq!(Reporter::format_number(2_000_000), "2.0M");
    }

    #[test]
    fn test_report_contains_summary() {
        let text = Reporter::generate_report(&report(2));
        assert!(text.contains("WRITTEN FILES"));
        assert!(text.contains("proj_listing.md"));
        assert!(text.contains("2.00 KB"));
        assert!(text.contains("1.5K"));
        assert!(text.contains("src/file1.cs"));
    }

    #[test]
    fn test_large_report_shows_top_files_only() {
        let text = Reporter::generate_report(&report(15));
        assert!(text.contains("LARGEST FILES"));
        assert!(text.contains("src/file14.cs"));
        assert!(!text.contains("src/file0.cs"));
    }
}
