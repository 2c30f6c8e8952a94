pub mod api;
pub mod season;
pub mod table;

pub use api::{ApiGame, ApiTeam, GameDay, LocalizedName, PeriodDescriptor, ScheduleResponse};
pub use season::SeasonDates;
pub use table::{GameRow, ScheduleTable};
