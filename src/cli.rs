use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the invocation only manages configuration and should not
/// fetch any schedule data.
pub fn is_config_operation(args: &Args) -> bool {
    args.new_api_domain.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// NHL Season Schedule Loader
///
/// Fetches a full NHL season's schedule from the api-web service and
/// flattens it into one row per game: identifiers, scheduling, venue and
/// both teams' attributes. Pagination walks the season week by week using
/// the cursor each page returns.
///
/// The season is addressed by its end year: 2025 means the 2024-2025 season.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Season end year in YYYY format, e.g. 2025 for the 2024-2025 season.
    /// Required unless a configuration flag is used.
    pub year: Option<i32>,

    /// Resolve and print the season's boundary dates, then exit without
    /// fetching the schedule.
    #[arg(long = "dates-only", help_heading = "Display Options")]
    pub dates_only: bool,

    /// Print at most this many rows of the schedule table.
    /// The full table is still fetched; only the output is capped.
    #[arg(long = "limit", short = 'n', help_heading = "Display Options")]
    pub limit: Option<usize>,

    /// Update API domain in config.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "API_DOMAIN"
    )]
    pub new_api_domain: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode: logs are mirrored to stdout at debug level.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_is_parsed_as_positional() {
        let args = Args::parse_from(["nhl_schedule", "2025"]);
        assert_eq!(args.year, Some(2025));
        assert!(!args.dates_only);
        assert!(!is_config_operation(&args));
    }

    #[test]
    fn test_config_flags_mark_config_operation() {
        let args = Args::parse_from(["nhl_schedule", "--list-config"]);
        assert!(is_config_operation(&args));

        let args = Args::parse_from(["nhl_schedule", "--config", "https://example.com"]);
        assert!(is_config_operation(&args));
    }

    #[test]
    fn test_dates_only_and_limit() {
        let args = Args::parse_from(["nhl_schedule", "2025", "--dates-only"]);
        assert!(args.dates_only);

        let args = Args::parse_from(["nhl_schedule", "2025", "-n", "25"]);
        assert_eq!(args.limit, Some(25));
    }
}
