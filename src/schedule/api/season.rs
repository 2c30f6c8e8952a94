//! Season date resolution
//!
//! One `schedule/{date}` lookup per season is enough to learn all of its
//! boundary dates; every response carries them alongside the game week.

use chrono::NaiveDate;
use reqwest::Client;
use tracing::{error, info, instrument};

use super::fetch_utils::fetch;
use super::urls::build_schedule_url;
use crate::config::Config;
use crate::constants::season;
use crate::error::AppError;
use crate::schedule::models::{ScheduleResponse, SeasonDates};

/// The date used for the boundary lookup request: September 1st of the
/// season's first calendar year. The API answers any in-season date with
/// the same boundary fields, so one fixed anchor works for every season,
/// including the delayed 2020-21 start.
pub fn lookup_start_date(end_year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(end_year - 1, season::LOOKUP_MONTH, season::LOOKUP_DAY)
        .expect("September 1st exists in every year")
}

fn validate_end_year(end_year: i32) -> Result<(), AppError> {
    if (season::MIN_END_YEAR..=season::MAX_END_YEAR).contains(&end_year) {
        Ok(())
    } else {
        Err(AppError::SeasonYearOutOfRange {
            year: end_year,
            min: season::MIN_END_YEAR,
            max: season::MAX_END_YEAR,
        })
    }
}

/// Resolves the boundary dates for the season ending in `end_year`.
///
/// Issues one GET against the schedule endpoint and parses the four served
/// boundary fields into a [`SeasonDates`] record. Transport and HTTP
/// failures propagate as-is; a missing boundary field is fatal. A 404 is
/// reported as an unknown season.
#[instrument(skip(client, config))]
pub async fn resolve_season_dates(
    client: &Client,
    config: &Config,
    end_year: i32,
) -> Result<SeasonDates, AppError> {
    validate_end_year(end_year)?;

    let lookup_date = lookup_start_date(end_year);
    let url = build_schedule_url(&config.api_domain, &lookup_date.to_string());
    info!(
        "Resolving season dates for {} via {}",
        SeasonDates::season_id_for(end_year),
        lookup_date
    );

    let response: ScheduleResponse = match fetch(client, &url).await {
        Ok(response) => response,
        Err(e) => {
            error!("Failed to fetch season boundary page for {end_year}: {e}");
            return match e {
                AppError::ApiNotFound { .. } => Err(AppError::api_season_not_found(end_year)),
                _ => Err(e),
            };
        }
    };

    let dates = SeasonDates::from_response(end_year, &response, &url)?;
    info!(
        "Resolved season {}: regular season {} to {}, playoffs end {}",
        dates.season_id, dates.regular_season_start, dates.regular_season_end, dates.post_season_end
    );
    Ok(dates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::api::http_client::create_test_http_client;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn mock_config(api_domain: String) -> Config {
        Config {
            api_domain,
            log_file_path: None,
            http_timeout_seconds: crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
        }
    }

    fn boundary_body() -> serde_json::Value {
        serde_json::json!({
            "preSeasonStartDate": "2024-09-20",
            "regularSeasonStartDate": "2024-10-04",
            "regularSeasonEndDate": "2025-04-17",
            "playoffEndDate": "2025-06-30",
            "gameWeek": []
        })
    }

    #[test]
    fn test_lookup_start_date_is_september_first_of_prior_year() {
        assert_eq!(lookup_start_date(2025).to_string(), "2024-09-01");
        // The pandemic-delayed season still anchors on the same date
        assert_eq!(lookup_start_date(2020).to_string(), "2019-09-01");
    }

    #[test]
    fn test_validate_end_year_bounds() {
        assert!(validate_end_year(1918).is_ok());
        assert!(validate_end_year(2025).is_ok());
        assert!(matches!(
            validate_end_year(1917),
            Err(AppError::SeasonYearOutOfRange { year: 1917, .. })
        ));
        assert!(matches!(
            validate_end_year(2200),
            Err(AppError::SeasonYearOutOfRange { .. })
        ));
    }

    #[tokio::test]
    async fn test_resolve_season_dates_success() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();
        let config = mock_config(mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/schedule/2024-09-01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(boundary_body()))
            .mount(&mock_server)
            .await;

        let dates = resolve_season_dates(&client, &config, 2025).await.unwrap();

        assert_eq!(dates.season_id, "20242025");
        assert_eq!(dates.post_season_start.to_string(), "2025-04-18");
        assert_eq!(dates.pre_season_end.to_string(), "2024-10-03");
    }

    #[tokio::test]
    async fn test_resolve_season_dates_maps_404_to_season_not_found() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();
        let config = mock_config(mock_server.uri());

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let err = resolve_season_dates(&client, &config, 2025)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ApiSeasonNotFound { year: 2025 }));
    }

    #[tokio::test]
    async fn test_resolve_season_dates_missing_boundary_is_fatal() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();
        let config = mock_config(mock_server.uri());

        let mut body = boundary_body();
        body.as_object_mut().unwrap().remove("regularSeasonEndDate");

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&mock_server)
            .await;

        let err = resolve_season_dates(&client, &config, 2025)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::SeasonBoundaryMissing { ref field, .. } if field == "regularSeasonEndDate"
        ));
    }

    #[tokio::test]
    async fn test_resolve_season_dates_rejects_out_of_range_year_without_request() {
        // No mock server at all: validation must fail before any request
        let client = create_test_http_client();
        let config = mock_config("http://127.0.0.1:9".to_string());

        let err = resolve_season_dates(&client, &config, 1900)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::SeasonYearOutOfRange { .. }));
    }
}
