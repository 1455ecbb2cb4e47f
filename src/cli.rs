use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use std::path::PathBuf;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// FACEIT championship exporter
///
/// Fetches a championship and all of its matches from the FACEIT Data API and
/// writes one CSV row per match: tournament name, start, region and prize pool,
/// followed by up to nine winner and nine loser player names.
///
/// The API key is read from FACEIT_API_KEY (a .env file in the working
/// directory is loaded first).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Championship (tournament) ID to export
    #[arg(value_name = "TOURNAMENT_ID")]
    pub tournament_id: String,

    /// Output file. Defaults to `<TOURNAMENT_ID>.csv` in the working directory.
    #[arg(short = 'o', long = "output", help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// Number of matches requested per page.
    #[arg(
        long = "page-size",
        default_value_t = faceit_export::constants::DEFAULT_PAGE_SIZE as u64,
        value_parser = clap::value_parser!(u64).range(1..),
        help_heading = "Output"
    )]
    pub page_size: u64,

    /// Log at debug level, including every page request.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// Resolved output path
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.csv", self.tournament_id)))
    }
}
