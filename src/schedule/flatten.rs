//! Flattening of nested game-week JSON into per-game rows

use chrono::NaiveDate;

use crate::error::AppError;
use crate::schedule::models::{GameDay, GameRow, ScheduleResponse};

/// Date components of one output row: the owning day's calendar date and
/// weekday abbreviation, repeated once per game scheduled on that day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayStamp {
    pub date: NaiveDate,
    pub day_abbrev: String,
}

/// Expands each day into `numberOfGames` copies of its date components.
/// A day with three games contributes three identical stamps; a day with
/// zero games contributes nothing.
pub fn expand_game_week(days: &[GameDay]) -> Result<Vec<DayStamp>, AppError> {
    let mut stamps = Vec::new();
    for day in days {
        let date = NaiveDate::parse_from_str(&day.date, "%Y-%m-%d").map_err(|e| {
            AppError::datetime_parse_error(format!("invalid game day date '{}': {e}", day.date))
        })?;
        for _ in 0..day.number_of_games {
            stamps.push(DayStamp {
                date,
                day_abbrev: day.day_abbrev.clone(),
            });
        }
    }
    Ok(stamps)
}

/// Flattens one page into its game rows.
///
/// The expanded date stamps align positionally with the page's games in
/// day order, mirroring the column-wise concatenation of the output table.
/// Alignment is by position only; `numberOfGames` is trusted, not checked
/// against the game lists.
pub fn flatten_page(response: &ScheduleResponse) -> Result<Vec<GameRow>, AppError> {
    let stamps = expand_game_week(&response.game_week)?;
    let games = response.game_week.iter().flat_map(|day| day.games.iter());

    Ok(stamps
        .iter()
        .zip(games)
        .map(|(stamp, game)| GameRow::new(stamp.date, &stamp.day_abbrev, game))
        .collect())
}
