/*!
 * Configuration handling for projdoc
 */

use std::env;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};

use crate::error::Result;
use crate::filter::ExclusionRules;
use crate::repo::{parse_repo_url, RepoInfo};
use crate::{ensure, error};

/// Directory, under the working directory, receiving listings of repositories
pub const REPO_OUTPUT_DIR: &str = "Outputs";

/// Suffix appended to the project name to form the default output file name
pub const LISTING_SUFFIX: &str = "_listing.md";

/// Command-line arguments for projdoc
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "projdoc",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate a single Markdown listing of a project's structure and file contents",
    long_about = "Walks a project directory, renders its filtered structure as a tree and appends the full text of every included file, producing one Markdown document."
)]
pub struct Args {
    /// Project directory to process
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Output Markdown file (default: <DIRECTORY>/<name>_listing.md)
    pub output_file: Option<String>,

    /// URL of the repository the directory is a checkout of; labels the tree root
    #[clap(long)]
    pub repo_url: Option<String>,

    /// Label for the tree root instead of the directory name
    #[clap(long)]
    pub root_label: Option<String>,

    /// JSON file with additional exclusion rules
    #[clap(long)]
    pub rules: Option<String>,

    /// Comma-separated directory names to exclude
    #[clap(long, value_delimiter = ',')]
    pub exclude_dirs: Vec<String>,

    /// Comma-separated file extensions to exclude
    #[clap(long, value_delimiter = ',')]
    pub exclude_extensions: Vec<String>,

    /// Comma-separated exact file names to exclude
    #[clap(long, value_delimiter = ',')]
    pub exclude_files: Vec<String>,

    /// Comma-separated glob patterns matched against entry names
    #[clap(long, value_delimiter = ',')]
    pub ignore_patterns: Vec<String>,

    /// Start from empty exclusion lists instead of the defaults
    #[clap(long)]
    pub no_default_excludes: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable logging
    #[clap(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Project directory to process
    pub target_dir: PathBuf,

    /// Output Markdown file path
    pub output_file: PathBuf,

    /// Label shown on the `[ROOT]` line, if not the directory name
    pub root_label: Option<String>,

    /// Repository the directory was checked out from
    pub repo: Option<RepoInfo>,

    /// Rules deciding which entries are listed
    pub rules: ExclusionRules,

    /// Log verbosity
    pub verbose: u8,

    /// Logging disabled
    pub quiet: bool,
}

impl Config {
    /// Configuration for `target_dir` with default rules and output location
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        let target_dir = target_dir.into();
        Self {
            output_file: default_output_file(&target_dir, None),
            target_dir,
            root_label: None,
            repo: None,
            rules: ExclusionRules::default(),
            verbose: 0,
            quiet: false,
        }
    }

    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Result<Self> {
        let target_dir = PathBuf::from(&args.directory_path);

        let repo = args
            .repo_url
            .as_deref()
            .map(parse_repo_url)
            .transpose()?;

        let mut rules = if args.no_default_excludes {
            ExclusionRules::empty()
        } else {
            ExclusionRules::default()
        };
        if let Some(path) = &args.rules {
            rules = rules.with_rules_file(Path::new(path))?;
        }
        let rules = rules
            .with_dirs(&args.exclude_dirs)
            .with_extensions(&args.exclude_extensions)
            .with_files(&args.exclude_files)
            .with_patterns(&args.ignore_patterns);

        let output_file = match args.output_file {
            Some(path) => PathBuf::from(path),
            None => default_output_file(&target_dir, repo.as_ref()),
        };

        let root_label = args
            .root_label
            .or_else(|| repo.as_ref().map(|r| r.name.clone()));

        Ok(Self {
            target_dir,
            output_file,
            root_label,
            repo,
            rules,
            verbose: args.verbose,
            quiet: args.quiet,
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.target_dir.is_dir(),
            PathNotFound,
            "Target directory not found: {}",
            self.target_dir.display()
        );

        if let Some(label) = &self.root_label {
            ensure!(!label.trim().is_empty(), Config, "Root label must not be empty");
        }

        // Only the repository output directory is created on demand
        if self.repo.is_none() {
            if let Some(parent) = self.output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(error!(
                        PathNotFound,
                        "Output directory not found: {}",
                        parent.display()
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Default output location for a listing.
///
/// Local projects get `<dir>/<name>_listing.md`; repository checkouts get
/// `Outputs/<repo>_listing.md` under the working directory.
pub fn default_output_file(target_dir: &Path, repo: Option<&RepoInfo>) -> PathBuf {
    match repo {
        Some(repo) => {
            let base = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            base.join(REPO_OUTPUT_DIR)
                .join(format!("{}{}", repo.name, LISTING_SUFFIX))
        }
        None => {
            let name = project_name(target_dir);
            target_dir.join(format!("{}{}", name, LISTING_SUFFIX))
        }
    }
}

/// Display name of a project directory, resolving `.` and friends
fn project_name(target_dir: &Path) -> String {
    target_dir
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        .or_else(|| target_dir.file_name().map(|n| n.to_string_lossy().to_string()))
        .unwrap_or_else(|| "project".to_string())
}
