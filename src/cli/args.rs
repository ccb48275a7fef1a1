//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigFetcher};
use crate::utils::parse_date;

/// Default network timeout for the downloader, in seconds
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum FetcherKind {
    /// Run wget with resume and unlimited retries (default)
    #[default]
    Wget,
    /// Built-in HTTP download with Range resume
    Native,
}

#[derive(Parser, Debug)]
#[command(name = "cambly-dl")]
#[command(about = "Download your completed Cambly lesson recordings", version)]
pub(crate) struct Cli {
    /// Your session id (value of the `session` cookie)
    #[arg(short, long = "session", value_name = "SESSION")]
    pub(crate) session: String,

    /// Download videos on or after this date (YYYYMMDD or YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date)]
    pub(crate) date: Option<NaiveDate>,

    /// Show debug messages
    #[arg(short, long)]
    pub(crate) verbose: bool,

    /// Directory to save videos in (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub(crate) output_dir: Option<PathBuf>,

    /// Timezone for the cutoff and file dates (e.g., "Asia/Shanghai", "UTC", "local")
    #[arg(long, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// How recordings are transferred
    #[arg(long, value_enum)]
    pub(crate) fetcher: Option<FetcherKind>,

    /// Continue with the remaining videos when one download fails
    #[arg(short, long)]
    pub(crate) keep_going: bool,

    /// Print the planned file names without downloading
    #[arg(short = 'n', long)]
    pub(crate) dry_run: bool,

    /// Disable colored output
    #[arg(long)]
    pub(crate) no_color: bool,

    #[arg(skip)]
    pub(crate) timeout_secs: Option<u64>,

    #[arg(skip)]
    pub(crate) wget_path: Option<PathBuf>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // Boolean flags: config can only switch them on
        if !self.verbose && config.verbose {
            self.verbose = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.keep_going && config.keep_going {
            self.keep_going = true;
        }

        if self.fetcher.is_none() {
            self.fetcher = config.fetcher.map(|f| match f {
                ConfigFetcher::Wget => FetcherKind::Wget,
                ConfigFetcher::Native => FetcherKind::Native,
            });
        }

        // String options: only apply if CLI didn't set them
        if self.output_dir.is_none() {
            self.output_dir = config.output_dir.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if self.timeout_secs.is_none() {
            self.timeout_secs = config.timeout_secs;
        }
        if self.wget_path.is_none() {
            self.wget_path = config.wget_path.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }

    pub(crate) fn fetcher_kind(&self) -> FetcherKind {
        self.fetcher.unwrap_or_default()
    }

    pub(crate) fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    pub(crate) fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
