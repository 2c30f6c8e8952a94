//! Shared builders for schedule fixtures used by unit and integration tests.
//!
//! Kept in the library (not `#[cfg(test)]`) so the `tests/` directory can
//! reuse the same fixtures without duplicating them.

use crate::schedule::models::{
    ApiGame, ApiTeam, GameDay, LocalizedName, PeriodDescriptor, ScheduleResponse,
};

fn named(value: &str) -> LocalizedName {
    LocalizedName {
        default: value.to_string(),
    }
}

fn make_team(id: i32, place: &str, name: &str, abbrev: &str) -> ApiTeam {
    ApiTeam {
        id,
        common_name: named(name),
        place_name: named(place),
        place_name_with_preposition: named(place),
        abbrev: abbrev.to_string(),
        logo: format!("https://assets.nhle.com/logos/nhl/svg/{abbrev}_light.svg"),
        dark_logo: format!("https://assets.nhle.com/logos/nhl/svg/{abbrev}_dark.svg"),
        away_split_squad: None,
        home_split_squad: None,
    }
}

/// Builds a regular-season game with a distinguishable id.
pub fn make_game(id: i64) -> ApiGame {
    ApiGame {
        id,
        season: 20242025,
        game_type: 2,
        neutral_site: false,
        start_time_utc: "2024-10-04T23:00:00Z".to_string(),
        eastern_utc_offset: "-04:00".to_string(),
        venue_utc_offset: "-04:00".to_string(),
        venue_timezone: "America/New_York".to_string(),
        game_state: "FUT".to_string(),
        game_schedule_state: "OK".to_string(),
        venue: named("Madison Square Garden"),
        away_team: make_team(1, "New Jersey", "Devils", "NJD"),
        home_team: make_team(3, "New York", "Rangers", "NYR"),
        period_descriptor: PeriodDescriptor {
            max_regulation_periods: 3,
        },
    }
}

/// Builds one scheduled day; `numberOfGames` tracks the game list length.
pub fn make_day(date: &str, day_abbrev: &str, games: Vec<ApiGame>) -> GameDay {
    GameDay {
        date: date.to_string(),
        day_abbrev: day_abbrev.to_string(),
        number_of_games: games.len() as u32,
        games,
    }
}

/// Builds one pagination page with the given cursor and game week.
pub fn make_page(next_start_date: Option<&str>, game_week: Vec<GameDay>) -> ScheduleResponse {
    ScheduleResponse {
        next_start_date: next_start_date.map(str::to_string),
        previous_start_date: None,
        pre_season_start_date: None,
        regular_season_start_date: None,
        regular_season_end_date: None,
        playoff_end_date: None,
        game_week,
    }
}

/// Builds a resolver page carrying the four served boundary dates.
pub fn make_boundary_page(
    pre_season_start: &str,
    regular_season_start: &str,
    regular_season_end: &str,
    playoff_end: &str,
) -> ScheduleResponse {
    ScheduleResponse {
        next_start_date: None,
        previous_start_date: None,
        pre_season_start_date: Some(pre_season_start.to_string()),
        regular_season_start_date: Some(regular_season_start.to_string()),
        regular_season_end_date: Some(regular_season_end.to_string()),
        playoff_end_date: Some(playoff_end.to_string()),
        game_week: vec![],
    }
}
