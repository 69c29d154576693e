//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Placeholder path meaning "read from standard input".
const STDIN_PATH: &str = "-";

/// Page title used when neither a title nor an input file name is available.
const DEFAULT_TITLE: &str = "markline";

/// Command line configuration for Markline.
#[derive(Debug, Clone, Parser)]
#[command(name = "markline", version, about, long_about = None)]
pub struct Config {
    /// Markdown input file (reads stdin when omitted or "-")
    pub input: Option<PathBuf>,

    /// Output file (writes stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Wrap output in a complete HTML page
    #[arg(long)]
    pub standalone: bool,

    /// Record title, renders output inside a titled detail card
    #[arg(long)]
    pub title: Option<String>,

    /// Open the output file in the default browser
    #[arg(long)]
    pub open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input path does not exist or is not a file, or
    /// if `--open` is requested without an output file.
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = self.input_path() {
            if !path.exists() {
                bail!("Input file does not exist: {}", path.display());
            }
            if !path.is_file() {
                bail!("Input path is not a file: {}", path.display());
            }
        }

        if self.open && self.output.is_none() {
            bail!("--open requires --output");
        }

        Ok(())
    }

    /// Returns the input file path, or `None` when reading stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| *path != Path::new(STDIN_PATH))
    }

    /// Returns document title from configuration or input file name.
    ///
    /// Falls back to the input file stem, then to a fixed default when
    /// reading stdin.
    pub fn document_title(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }

        self.input_path()
            .and_then(|path| path.file_stem())
            .and_then(|stem| stem.to_str())
            .unwrap_or(DEFAULT_TITLE)
            .to_string()
    }

    /// Returns the page title when standalone output is requested.
    pub fn page_title(&self) -> Option<String> {
        self.standalone.then(|| self.document_title())
    }
}
