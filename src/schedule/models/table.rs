use super::api::ApiGame;
use chrono::NaiveDate;

/// One flattened record per scheduled game.
///
/// Statically enumerates the columns of the output table: the owning day's
/// date components followed by the fixed whitelist of per-game detail
/// fields. Every field is populated explicitly from the parsed response;
/// values the API omits fall back to their wire-level defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRow {
    // Date components, shared by every game of the same day
    pub date: NaiveDate,
    pub day_abbrev: String,

    // Game identity and scheduling
    pub id: i64,
    pub season: i64,
    pub game_type: i32,
    pub neutral_site: bool,
    pub start_time_utc: String,
    pub eastern_utc_offset: String,
    pub venue_utc_offset: String,
    pub venue_timezone: String,
    pub game_state: String,
    pub game_schedule_state: String,
    pub venue: String,

    // Away team attributes
    pub away_team_id: i32,
    pub away_common_name: String,
    pub away_place_name: String,
    pub away_place_name_with_preposition: String,
    pub away_abbrev: String,
    pub away_logo: String,
    pub away_dark_logo: String,
    pub away_split_squad: bool,

    // Home team attributes
    pub home_team_id: i32,
    pub home_common_name: String,
    pub home_place_name: String,
    pub home_place_name_with_preposition: String,
    pub home_abbrev: String,
    pub home_logo: String,
    pub home_dark_logo: String,
    pub home_split_squad: bool,

    pub max_regulation_periods: i32,
}

impl GameRow {
    /// Combines one day's date components with one game's detail fields.
    pub fn new(date: NaiveDate, day_abbrev: &str, game: &ApiGame) -> Self {
        GameRow {
            date,
            day_abbrev: day_abbrev.to_string(),
            id: game.id,
            season: game.season,
            game_type: game.game_type,
            neutral_site: game.neutral_site,
            start_time_utc: game.start_time_utc.clone(),
            eastern_utc_offset: game.eastern_utc_offset.clone(),
            venue_utc_offset: game.venue_utc_offset.clone(),
            venue_timezone: game.venue_timezone.clone(),
            game_state: game.game_state.clone(),
            game_schedule_state: game.game_schedule_state.clone(),
            venue: game.venue.default.clone(),
            away_team_id: game.away_team.id,
            away_common_name: game.away_team.common_name.default.clone(),
            away_place_name: game.away_team.place_name.default.clone(),
            away_place_name_with_preposition: game
                .away_team
                .place_name_with_preposition
                .default
                .clone(),
            away_abbrev: game.away_team.abbrev.clone(),
            away_logo: game.away_team.logo.clone(),
            away_dark_logo: game.away_team.dark_logo.clone(),
            away_split_squad: game.away_team.away_split_squad.unwrap_or(false),
            home_team_id: game.home_team.id,
            home_common_name: game.home_team.common_name.default.clone(),
            home_place_name: game.home_team.place_name.default.clone(),
            home_place_name_with_preposition: game
                .home_team
                .place_name_with_preposition
                .default
                .clone(),
            home_abbrev: game.home_team.abbrev.clone(),
            home_logo: game.home_team.logo.clone(),
            home_dark_logo: game.home_team.dark_logo.clone(),
            home_split_squad: game.home_team.home_split_squad.unwrap_or(false),
            max_regulation_periods: game.period_descriptor.max_regulation_periods,
        }
    }
}

/// Ordered collection of flattened game rows.
///
/// Insertion order is chronological fetch order. No uniqueness constraint
/// is enforced; overlapping API pages would produce duplicate rows.
#[derive(Debug, Clone, Default)]
pub struct ScheduleTable {
    rows: Vec<GameRow>,
}

impl ScheduleTable {
    pub fn new() -> Self {
        ScheduleTable::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[GameRow] {
        &self.rows
    }

    pub fn extend(&mut self, rows: Vec<GameRow>) {
        self.rows.extend(rows);
    }

    pub fn into_rows(self) -> Vec<GameRow> {
        self.rows
    }
}

impl IntoIterator for ScheduleTable {
    type Item = GameRow;
    type IntoIter = std::vec::IntoIter<GameRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a ScheduleTable {
    type Item = &'a GameRow;
    type IntoIter = std::slice::Iter<'a, GameRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
