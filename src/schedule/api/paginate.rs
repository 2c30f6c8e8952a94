//! Week-by-week schedule pagination
//!
//! The schedule endpoint returns one game week per page plus a
//! `nextStartDate` cursor. The loop walks the cursor from the regular
//! season start until the page after the post-season end, flattening each
//! page into rows as it goes.

use chrono::NaiveDate;
use reqwest::Client;
use tracing::{info, instrument};

use super::fetch_utils::fetch;
use super::urls::build_schedule_url;
use crate::config::Config;
use crate::error::AppError;
use crate::schedule::flatten::flatten_page;
use crate::schedule::models::{ScheduleResponse, ScheduleTable, SeasonDates};

/// How one fetched page affects the pagination loop.
///
/// An absent cursor is the API's end-of-data signal, not an error; it gets
/// its own variant so callers never have to catch anything to stop cleanly.
/// Transport and parse failures stay on the `Err` path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// The page provides a cursor for the following week.
    Advance { next_cursor: NaiveDate },
    /// The page carries no cursor: there is no further data.
    End,
}

/// Classifies a page by its cursor field. A present-but-unparsable cursor
/// is a shape error, not an end-of-data signal.
pub fn classify_page(response: &ScheduleResponse, url: &str) -> Result<PageOutcome, AppError> {
    match response.next_start_date.as_deref() {
        None => Ok(PageOutcome::End),
        Some(raw) => {
            let next_cursor = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
                AppError::api_unexpected_structure(
                    format!("unparsable nextStartDate '{raw}': {e}"),
                    url,
                )
            })?;
            Ok(PageOutcome::Advance { next_cursor })
        }
    }
}

/// Fetches the full regular- and post-season schedule as a flat table.
///
/// Seeds the cursor with the regular season start and loops sequentially,
/// one page in flight at a time. A page is appended only after its cursor
/// passes both stop checks, so the final page of a run never contributes
/// rows.
///
/// Termination: the cursor must strictly advance and the boundary is a
/// fixed date, so the loop is bounded. A page pointing at or before its own
/// start date is reported as an error instead of looping forever.
#[instrument(skip(client, config, season_dates))]
pub async fn fetch_season_schedule(
    client: &Client,
    config: &Config,
    season_dates: &SeasonDates,
) -> Result<ScheduleTable, AppError> {
    let mut table = ScheduleTable::new();
    let mut cursor = season_dates.regular_season_start;
    info!(
        "Fetching schedule for season {} starting at {}",
        season_dates.season_id, cursor
    );

    loop {
        let url = build_schedule_url(&config.api_domain, &cursor.to_string());
        let page: ScheduleResponse = fetch(client, &url).await?;

        let next_cursor = match classify_page(&page, &url)? {
            PageOutcome::End => {
                info!("Page at {cursor} has no cursor, ending pagination");
                break;
            }
            PageOutcome::Advance { next_cursor } => next_cursor,
        };

        if next_cursor > season_dates.post_season_end {
            info!(
                "Cursor {next_cursor} is past post-season end {}, ending pagination",
                season_dates.post_season_end
            );
            break;
        }

        if next_cursor <= cursor {
            return Err(AppError::non_advancing_cursor(cursor, next_cursor));
        }

        let rows = flatten_page(&page)?;
        info!("Appending {} rows from week starting {cursor}", rows.len());
        table.extend(rows);
        cursor = next_cursor;
    }

    info!(
        "Collected {} rows for season {}",
        table.len(),
        season_dates.season_id
    );
    Ok(table)
}
