// src/main.rs
mod cli;
mod logging;

use clap::Parser;
use cli::Args;
use faceit_export::{AppError, Config, run_export};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; the variables may come from the shell
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    // Load config before logging so a custom log path is honoured, but report
    // config errors only once logging is up
    let config = Config::load().await;

    let (log_file_path, _guard) = logging::setup_logging(&args, config.as_ref().ok()).await?;
    tracing::debug!("Logs are being written to: {log_file_path}");

    let result = export(&args, config).await;
    if let Err(e) = &result {
        tracing::error!("Export failed: {e}");
    }
    result
}

async fn export(args: &Args, config: Result<Config, AppError>) -> Result<(), AppError> {
    let config = config?;
    let output_path = args.output_path();
    let page_size = usize::try_from(args.page_size)
        .map_err(|_| AppError::invalid_argument("page size does not fit in memory"))?;

    let summary = run_export(&config, &args.tournament_id, page_size, &output_path).await?;

    println!(
        "Successfully saved data to {}",
        summary.output_path.display()
    );
    Ok(())
}
