use super::api::ScheduleResponse;
use crate::error::AppError;
use chrono::NaiveDate;
use std::fmt;

/// Boundary dates for one NHL season.
///
/// Derived once from a single `schedule/{date}` response and read-only
/// afterwards. Two of the seven values are not served by the API and are
/// computed here: the pre-season ends the day before the regular season
/// starts, and the post-season starts the day after the regular season ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonDates {
    /// Concatenation of the two consecutive season years, e.g. "20242025"
    pub season_id: String,
    pub pre_season_start: NaiveDate,
    pub pre_season_end: NaiveDate,
    pub regular_season_start: NaiveDate,
    pub regular_season_end: NaiveDate,
    pub post_season_start: NaiveDate,
    pub post_season_end: NaiveDate,
}

impl SeasonDates {
    /// Builds the season identifier for a season ending in `end_year`.
    pub fn season_id_for(end_year: i32) -> String {
        format!("{}{}", end_year - 1, end_year)
    }

    /// Extracts the four served boundary dates from a schedule response and
    /// derives the remaining two.
    ///
    /// A missing or unparsable boundary field is fatal here: unlike the
    /// pagination cursor, these fields are present on every valid schedule
    /// response, so their absence means the response shape changed.
    pub fn from_response(
        end_year: i32,
        response: &ScheduleResponse,
        url: &str,
    ) -> Result<Self, AppError> {
        let pre_season_start =
            parse_boundary(&response.pre_season_start_date, "preSeasonStartDate", url)?;
        let regular_season_start = parse_boundary(
            &response.regular_season_start_date,
            "regularSeasonStartDate",
            url,
        )?;
        let regular_season_end = parse_boundary(
            &response.regular_season_end_date,
            "regularSeasonEndDate",
            url,
        )?;
        let post_season_end = parse_boundary(&response.playoff_end_date, "playoffEndDate", url)?;

        let pre_season_end = regular_season_start.pred_opt().ok_or_else(|| {
            AppError::datetime_parse_error("date underflow computing pre-season end")
        })?;
        let post_season_start = regular_season_end.succ_opt().ok_or_else(|| {
            AppError::datetime_parse_error("date overflow computing post-season start")
        })?;

        Ok(SeasonDates {
            season_id: Self::season_id_for(end_year),
            pre_season_start,
            pre_season_end,
            regular_season_start,
            regular_season_end,
            post_season_start,
            post_season_end,
        })
    }
}

fn parse_boundary(
    value: &Option<String>,
    field: &'static str,
    url: &str,
) -> Result<NaiveDate, AppError> {
    let raw = value
        .as_deref()
        .ok_or_else(|| AppError::season_boundary_missing(field, url))?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| AppError::datetime_parse_error(format!("invalid {field} '{raw}': {e}")))
}

impl fmt::Display for SeasonDates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Season {}", self.season_id)?;
        writeln!(
            f,
            "  Pre-season:     {} to {}",
            self.pre_season_start, self.pre_season_end
        )?;
        writeln!(
            f,
            "  Regular season: {} to {}",
            self.regular_season_start, self.regular_season_end
        )?;
        write!(
            f,
            "  Post-season:    {} to {}",
            self.post_season_start, self.post_season_end
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boundary_response() -> ScheduleResponse {
        ScheduleResponse {
            next_start_date: Some("2024-09-08".to_string()),
            previous_start_date: None,
            pre_season_start_date: Some("2024-09-20".to_string()),
            regular_season_start_date: Some("2024-10-04".to_string()),
            regular_season_end_date: Some("2025-04-17".to_string()),
            playoff_end_date: Some("2025-06-30".to_string()),
            game_week: vec![],
        }
    }

    #[test]
    fn test_season_id_concatenates_consecutive_years() {
        assert_eq!(SeasonDates::season_id_for(2025), "20242025");
        assert_eq!(SeasonDates::season_id_for(2000), "19992000");
    }

    #[test]
    fn test_from_response_derives_adjacent_boundaries() {
        let dates = SeasonDates::from_response(2025, &boundary_response(), "https://x").unwrap();

        assert_eq!(dates.season_id, "20242025");
        assert_eq!(dates.pre_season_start.to_string(), "2024-09-20");
        assert_eq!(dates.regular_season_start.to_string(), "2024-10-04");
        assert_eq!(dates.regular_season_end.to_string(), "2025-04-17");
        assert_eq!(dates.post_season_end.to_string(), "2025-06-30");
        // Derived values sit exactly one day off their neighbors
        assert_eq!(dates.post_season_start.to_string(), "2025-04-18");
        assert_eq!(dates.pre_season_end.to_string(), "2024-10-03");
    }

    #[test]
    fn test_adjacency_invariants_hold_across_year_boundary() {
        let mut response = boundary_response();
        response.regular_season_start_date = Some("2025-01-01".to_string());
        response.regular_season_end_date = Some("2025-12-31".to_string());

        let dates = SeasonDates::from_response(2025, &response, "https://x").unwrap();

        assert_eq!(
            dates.pre_season_end.succ_opt().unwrap(),
            dates.regular_season_start
        );
        assert_eq!(
            dates.regular_season_end.succ_opt().unwrap(),
            dates.post_season_start
        );
        assert_eq!(dates.pre_season_end.to_string(), "2024-12-31");
        assert_eq!(dates.post_season_start.to_string(), "2026-01-01");
    }

    #[test]
    fn test_missing_boundary_field_is_fatal() {
        let mut response = boundary_response();
        response.playoff_end_date = None;

        let err = SeasonDates::from_response(2025, &response, "https://x").unwrap_err();
        assert!(matches!(
            err,
            AppError::SeasonBoundaryMissing { ref field, .. } if field == "playoffEndDate"
        ));
    }

    #[test]
    fn test_unparsable_boundary_field_is_fatal() {
        let mut response = boundary_response();
        response.regular_season_end_date = Some("April 17th".to_string());

        let err = SeasonDates::from_response(2025, &response, "https://x").unwrap_err();
        assert!(matches!(err, AppError::DateTimeParse(_)));
    }

    #[test]
    fn test_display_renders_iso_dates() {
        let dates = SeasonDates::from_response(2025, &boundary_response(), "https://x").unwrap();
        let rendered = dates.to_string();
        assert!(rendered.contains("Season 20242025"));
        assert!(rendered.contains("2024-10-04 to 2025-04-17"));
        assert!(rendered.contains("2025-04-18 to 2025-06-30"));
    }
}
