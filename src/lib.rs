//! FACEIT championship CSV exporter
//!
//! This library fetches a championship and its match list from the FACEIT
//! Data API and flattens every match into a fixed-width CSV row.
//!
//! # Examples
//!
//! ```rust,no_run
//! use faceit_export::{AppError, Config, run_export};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let summary = run_export(&config, "championship-id", 100, Path::new("out.csv")).await?;
//!     println!("{} rows written", summary.rows_written);
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod report;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use commands::{ExportSummary, export_championship, run_export};
pub use config::Config;
pub use data_fetcher::models::{Championship, Match, MatchRecord, TournamentMetadata};
pub use error::AppError;
pub use report::OutputRow;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
