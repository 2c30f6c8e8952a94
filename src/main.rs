use clap::Parser;
use tracing::info;

use nhl_schedule::cli::{Args, is_config_operation};
use nhl_schedule::config::Config;
use nhl_schedule::display::{DisplayRow, format_schedule_table};
use nhl_schedule::error::AppError;
use nhl_schedule::logging::setup_logging;
use nhl_schedule::schedule::api::http_client::create_http_client_with_timeout;
use nhl_schedule::schedule::{fetch_season_schedule, resolve_season_dates};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Config management runs without logging setup; it only touches the
    // config file and prints to stdout.
    if is_config_operation(&args) {
        return handle_config_operation(&args).await;
    }

    let Some(year) = args.year else {
        return Err(AppError::config_error(
            "A season end year is required, e.g. `nhl_schedule 2025` for the 2024-2025 season",
        ));
    };

    let (log_file_path, _guard) = setup_logging(&args).await?;
    info!("Logging to {log_file_path}");

    let config = Config::load().await?;
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    let season_dates = resolve_season_dates(&client, &config, year).await?;

    if args.dates_only {
        println!("{season_dates}");
        return Ok(());
    }

    let table = fetch_season_schedule(&client, &config, &season_dates).await?;

    if table.is_empty() {
        println!("No games found for season {}", season_dates.season_id);
        return Ok(());
    }

    let shown = args.limit.unwrap_or(table.len()).min(table.len());
    let display_rows: Vec<DisplayRow> = table.rows()[..shown].iter().map(Into::into).collect();
    println!("{}", format_schedule_table(display_rows));
    if shown < table.len() {
        println!("({shown} of {} rows shown)", table.len());
    }
    println!("{} games, season {}", table.len(), season_dates.season_id);

    Ok(())
}

async fn handle_config_operation(args: &Args) -> Result<(), AppError> {
    if let Some(new_domain) = &args.new_api_domain {
        let mut config = Config::load().await?;
        config.api_domain = new_domain.clone();
        config.save().await?;
        println!("API domain updated");
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        let mut config = Config::load().await?;
        config.log_file_path = Some(new_log_path.clone());
        config.save().await?;
        println!("Log file path updated");
    }

    if args.clear_log_file_path {
        let mut config = Config::load().await?;
        config.log_file_path = None;
        config.save().await?;
        println!("Log file path cleared; using default location");
    }

    if args.list_config {
        Config::display().await?;
    }

    Ok(())
}
