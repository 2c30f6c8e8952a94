//! Generic HTTP fetching with comprehensive error classification

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches a URL and deserializes the JSON body.
///
/// Each request is issued exactly once: transient failures are not retried
/// and responses are not cached. What this function does do is keep the
/// error taxonomy sharp, so callers can tell transport failures, HTTP
/// status failures, and shape mismatches apart from one another.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - URL to fetch data from
///
/// # Returns
/// * `Result<T, AppError>` - Parsed response data or error
#[instrument(skip(client))]
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        // Return specific error types based on HTTP status code
        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            500..=599 => {
                if status_code == 502 || status_code == 503 {
                    AppError::api_service_unavailable(status_code, reason, url)
                } else {
                    AppError::api_server_error(status_code, reason, url)
                }
            }
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                &response_text.chars().take(200).collect::<String>()
            );

            // Check if it's malformed JSON vs unexpected structure
            if response_text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    url,
                ))
            } else {
                // Valid JSON but unexpected structure
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::api::http_client::create_test_http_client;
    use crate::schedule::models::ScheduleResponse;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_parses_valid_json() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/schedule/2024-10-04"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"nextStartDate":"2024-10-14","gameWeek":[]}"#),
            )
            .mount(&mock_server)
            .await;

        let url = format!("{}/schedule/2024-10-04", mock_server.uri());
        let response: ScheduleResponse = fetch(&client, &url).await.unwrap();
        assert_eq!(response.next_start_date, Some("2024-10-14".to_string()));
    }

    #[tokio::test]
    async fn test_fetch_maps_404_to_not_found() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let url = format!("{}/schedule/2024-10-04", mock_server.uri());
        let err = fetch::<ScheduleResponse>(&client, &url).await.unwrap_err();
        assert!(matches!(err, AppError::ApiNotFound { .. }));
    }

    #[tokio::test]
    async fn test_fetch_maps_500_to_server_error() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let url = format!("{}/schedule/2024-10-04", mock_server.uri());
        let err = fetch::<ScheduleResponse>(&client, &url).await.unwrap_err();
        assert!(matches!(err, AppError::ApiServerError { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_fetch_maps_503_to_service_unavailable() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let url = format!("{}/schedule/2024-10-04", mock_server.uri());
        let err = fetch::<ScheduleResponse>(&client, &url).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::ApiServiceUnavailable { status: 503, .. }
        ));
    }

    #[tokio::test]
    async fn test_fetch_distinguishes_empty_body() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(""))
            .mount(&mock_server)
            .await;

        let url = format!("{}/schedule/2024-10-04", mock_server.uri());
        let err = fetch::<ScheduleResponse>(&client, &url).await.unwrap_err();
        assert!(matches!(err, AppError::ApiNoData { .. }));
    }

    #[tokio::test]
    async fn test_fetch_distinguishes_non_json_body() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&mock_server)
            .await;

        let url = format!("{}/schedule/2024-10-04", mock_server.uri());
        let err = fetch::<ScheduleResponse>(&client, &url).await.unwrap_err();
        assert!(matches!(err, AppError::ApiMalformedJson { .. }));
    }

    #[tokio::test]
    async fn test_fetch_distinguishes_unexpected_structure() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        // Valid JSON whose shape doesn't match the target type
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"gameWeek":"not-a-list"}"#))
            .mount(&mock_server)
            .await;

        let url = format!("{}/schedule/2024-10-04", mock_server.uri());
        let err = fetch::<ScheduleResponse>(&client, &url).await.unwrap_err();
        assert!(matches!(err, AppError::ApiUnexpectedStructure { .. }));
    }
}
