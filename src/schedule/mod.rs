pub mod api;
pub mod flatten;
pub mod models;

pub use api::{fetch_season_schedule, resolve_season_dates};
pub use models::{GameRow, ScheduleTable, SeasonDates};
