pub mod http_client;
pub mod paginate;
pub mod season;
pub mod urls;

mod fetch_utils;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
#[allow(unused_imports)]
pub use http_client::*;
// Re-export the resolver and paginator entry points
pub use paginate::{PageOutcome, fetch_season_schedule};
pub use season::resolve_season_dates;
