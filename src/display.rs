use tabled::{
    Table, Tabled,
    settings::{Alignment, Style, object::Columns, style::HorizontalLine},
};

use crate::schedule::models::GameRow;

// Condensed per-game view for terminal output. The full ~28-column record
// stays on GameRow; this picks what fits on a screen.
#[derive(Tabled)]
pub struct DisplayRow {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Day")]
    pub day: String,
    #[tabled(rename = "Game")]
    pub id: i64,
    #[tabled(rename = "Type")]
    pub game_type: i32,
    #[tabled(rename = "Matchup")]
    pub matchup: String,
    #[tabled(rename = "Start (UTC)")]
    pub start: String,
    #[tabled(rename = "Venue")]
    pub venue: String,
    #[tabled(rename = "State")]
    pub state: String,
}

impl From<&GameRow> for DisplayRow {
    fn from(row: &GameRow) -> Self {
        DisplayRow {
            date: row.date.to_string(),
            day: row.day_abbrev.clone(),
            id: row.id,
            game_type: row.game_type,
            matchup: format!("{} @ {}", row.away_abbrev, row.home_abbrev),
            start: row.start_time_utc.clone(),
            venue: row.venue.clone(),
            state: row.game_state.clone(),
        }
    }
}

pub fn format_schedule_table(display_rows: Vec<DisplayRow>) -> Table {
    let table_style = Style::modern()
        .horizontals([(1, HorizontalLine::inherit(Style::modern()))])
        .remove_horizontal()
        .remove_frame();

    let mut table = Table::new(display_rows);
    table
        .with(table_style)
        .modify(Columns::one(2), Alignment::right());

    table
}
