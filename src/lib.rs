//! NHL Season Schedule Loader Library
//!
//! Fetches one NHL season's schedule from the api-web service and flattens
//! it into a tabular, one-row-per-game dataset for downstream analysis.
//!
//! The pipeline has two explicit steps: resolve the season's boundary dates
//! once, then paginate week by week through the regular and post season.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nhl_schedule::config::Config;
//! use nhl_schedule::error::AppError;
//! use nhl_schedule::schedule::api::http_client::create_http_client_with_timeout;
//! use nhl_schedule::schedule::{fetch_season_schedule, resolve_season_dates};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!
//!     // Step 1: one lookup request yields the season's boundary dates
//!     let season_dates = resolve_season_dates(&client, &config, 2025).await?;
//!     println!("{season_dates}");
//!
//!     // Step 2: walk the season week by week into a flat table
//!     let table = fetch_season_schedule(&client, &config, &season_dates).await?;
//!     println!("{} games", table.len());
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod logging;
pub mod schedule;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use schedule::api::{fetch_season_schedule, resolve_season_dates};
pub use schedule::models::{GameRow, ScheduleResponse, ScheduleTable, SeasonDates};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
