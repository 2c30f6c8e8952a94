//! URL building utilities for API endpoints

/// Builds a schedule URL for one game-week page.
/// The same endpoint serves both the season-date lookup and pagination;
/// only the date segment changes.
///
/// # Arguments
/// * `api_domain` - The base API domain, including the version segment
/// * `date` - The page start date in YYYY-MM-DD format
///
/// # Returns
/// * `String` - The complete schedule URL
///
/// # Example
/// ```
/// use nhl_schedule::schedule::api::build_schedule_url;
///
/// let url = build_schedule_url("https://api-web.nhle.com/v1", "2024-10-04");
/// assert_eq!(url, "https://api-web.nhle.com/v1/schedule/2024-10-04");
/// ```
pub fn build_schedule_url(api_domain: &str, date: &str) -> String {
    format!("{api_domain}/schedule/{date}")
}
