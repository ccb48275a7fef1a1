mod api;
mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod fetcher;
#[cfg(test)]
mod testing;
mod utils;

use clap::Parser;

use api::{ApiClient, UreqTransport};
use app::{RunOptions, download_videos};
use cli::{Cli, FetcherKind};
use config::Config;
use error::AppError;
use fetcher::{Fetcher, HttpFetcher, WgetFetcher};
use utils::{Logger, Timezone};

fn main() {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);
    let logger = Logger::new(cli.verbose, cli.use_color());

    if let Err(e) = run(&cli, &logger) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli, logger: &Logger) -> Result<(), AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;

    let fetcher: Box<dyn Fetcher> = match cli.fetcher_kind() {
        FetcherKind::Wget => Box::new(WgetFetcher::new(cli.wget_path.clone(), cli.timeout_secs())),
        FetcherKind::Native => Box::new(HttpFetcher::new(cli.timeout_secs(), true)),
    };

    let client = ApiClient::new(UreqTransport::new(&cli.session));
    let options = RunOptions {
        cutoff: cli.date,
        timezone,
        output_dir: cli.output_dir(),
        keep_going: cli.keep_going,
        dry_run: cli.dry_run,
    };

    let summary = download_videos(&client, fetcher.as_ref(), &options, logger)?;
    if !cli.dry_run && summary.planned > 0 {
        logger.info(format!(
            "Downloaded {} of {} videos",
            summary.downloaded, summary.planned
        ));
    }
    Ok(())
}
