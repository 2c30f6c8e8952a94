use serde::{Deserialize, Serialize};

/// A name object carrying the default-locale spelling.
/// The api-web service localizes venue and team names this way.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalizedName {
    #[serde(default)]
    pub default: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodDescriptor {
    #[serde(rename = "maxRegulationPeriods", default = "default_regulation_periods")]
    pub max_regulation_periods: i32,
}

fn default_regulation_periods() -> i32 {
    3
}

impl Default for PeriodDescriptor {
    fn default() -> Self {
        PeriodDescriptor {
            max_regulation_periods: default_regulation_periods(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiTeam {
    pub id: i32,
    #[serde(rename = "commonName", default)]
    pub common_name: LocalizedName,
    #[serde(rename = "placeName", default)]
    pub place_name: LocalizedName,
    #[serde(rename = "placeNameWithPreposition", default)]
    pub place_name_with_preposition: LocalizedName,
    #[serde(default)]
    pub abbrev: String,
    #[serde(default)]
    pub logo: String,
    #[serde(rename = "darkLogo", default)]
    pub dark_logo: String,
    /// Present only on away-side entries, and only during split-squad pre-season games
    #[serde(rename = "awaySplitSquad", default)]
    pub away_split_squad: Option<bool>,
    /// Present only on home-side entries, and only during split-squad pre-season games
    #[serde(rename = "homeSplitSquad", default)]
    pub home_split_squad: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiGame {
    pub id: i64,
    pub season: i64,
    #[serde(rename = "gameType")]
    pub game_type: i32,
    #[serde(rename = "neutralSite", default)]
    pub neutral_site: bool,
    #[serde(rename = "startTimeUTC")]
    pub start_time_utc: String,
    #[serde(rename = "easternUTCOffset", default)]
    pub eastern_utc_offset: String,
    #[serde(rename = "venueUTCOffset", default)]
    pub venue_utc_offset: String,
    #[serde(rename = "venueTimezone", default)]
    pub venue_timezone: String,
    #[serde(rename = "gameState", default)]
    pub game_state: String,
    #[serde(rename = "gameScheduleState", default)]
    pub game_schedule_state: String,
    #[serde(default)]
    pub venue: LocalizedName,
    #[serde(rename = "awayTeam")]
    pub away_team: ApiTeam,
    #[serde(rename = "homeTeam")]
    pub home_team: ApiTeam,
    #[serde(rename = "periodDescriptor", default)]
    pub period_descriptor: PeriodDescriptor,
}

/// One scheduled day inside a game week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDay {
    pub date: String,
    #[serde(rename = "dayAbbrev")]
    pub day_abbrev: String,
    #[serde(rename = "numberOfGames")]
    pub number_of_games: u32,
    #[serde(default)]
    pub games: Vec<ApiGame>,
}

/// Model for one `schedule/{date}` response.
///
/// The same endpoint serves two purposes: every response carries the season
/// boundary dates used by the resolver, and the `gameWeek`/`nextStartDate`
/// pair drives pagination. All boundary and cursor fields are optional at the
/// wire level; their presence requirements differ per caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    #[serde(rename = "nextStartDate", default)]
    pub next_start_date: Option<String>,
    #[serde(rename = "previousStartDate", default)]
    pub previous_start_date: Option<String>,
    #[serde(rename = "preSeasonStartDate", default)]
    pub pre_season_start_date: Option<String>,
    #[serde(rename = "regularSeasonStartDate", default)]
    pub regular_season_start_date: Option<String>,
    #[serde(rename = "regularSeasonEndDate", default)]
    pub regular_season_end_date: Option<String>,
    #[serde(rename = "playoffEndDate", default)]
    pub playoff_end_date: Option<String>,
    #[serde(rename = "gameWeek", default)]
    pub game_week: Vec<GameDay>,
}
