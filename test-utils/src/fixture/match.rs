//! Match fixtures for creating in-memory test data.

use chrono::{NaiveDate, NaiveTime};
use entity::r#match;

/// Default division ID for matches.
pub const DEFAULT_DIVISION_ID: i32 = 1;

/// Default matchweek for matches.
pub const DEFAULT_MATCHWEEK: i32 = 1;

/// Default kickoff date, a Saturday early in the 2026-2027 season.
pub fn default_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 12).unwrap_or_default()
}

/// Default kickoff time.
pub fn default_time() -> NaiveTime {
    NaiveTime::from_hms_opt(15, 0, 0).unwrap_or_default()
}

/// Creates an unplayed match entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - division_id: `1`
/// - matchweek: `1`
/// - date / time: `2026-09-12` / `15:00:00`
/// - home_team_id / away_team_id: `1` / `2`
/// - goals, status and referee: `None`
pub fn entity() -> r#match::Model {
    entity_builder().build()
}

/// Creates a match entity builder for customization.
pub fn entity_builder() -> MatchEntityBuilder {
    MatchEntityBuilder::default()
}

/// Builder for creating customized match entity models.
pub struct MatchEntityBuilder {
    id: i32,
    division_id: i32,
    matchweek: i32,
    date: NaiveDate,
    time: NaiveTime,
    home_team_id: i32,
    away_team_id: i32,
    goals_home_team: Option<i32>,
    goals_away_team: Option<i32>,
    status_id: Option<i32>,
    referee_id: Option<i32>,
}

impl Default for MatchEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            division_id: DEFAULT_DIVISION_ID,
            matchweek: DEFAULT_MATCHWEEK,
            date: default_date(),
            time: default_time(),
            home_team_id: 1,
            away_team_id: 2,
            goals_home_team: None,
            goals_away_team: None,
            status_id: None,
            referee_id: None,
        }
    }
}

impl MatchEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn division_id(mut self, division_id: i32) -> Self {
        self.division_id = division_id;
        self
    }

    pub fn matchweek(mut self, matchweek: i32) -> Self {
        self.matchweek = matchweek;
        self
    }

    pub fn kickoff(mut self, date: NaiveDate, time: NaiveTime) -> Self {
        self.date = date;
        self.time = time;
        self
    }

    pub fn teams(mut self, home_team_id: i32, away_team_id: i32) -> Self {
        self.home_team_id = home_team_id;
        self.away_team_id = away_team_id;
        self
    }

    pub fn score(mut self, goals_home_team: i32, goals_away_team: i32) -> Self {
        self.goals_home_team = Some(goals_home_team);
        self.goals_away_team = Some(goals_away_team);
        self
    }

    pub fn status_id(mut self, status_id: Option<i32>) -> Self {
        self.status_id = status_id;
        self
    }

    pub fn referee_id(mut self, referee_id: Option<i32>) -> Self {
        self.referee_id = referee_id;
        self
    }

    pub fn build(self) -> r#match::Model {
        r#match::Model {
            id: self.id,
            division_id: self.division_id,
            matchweek: self.matchweek,
            date: self.date,
            time: self.time,
            home_team_id: self.home_team_id,
            away_team_id: self.away_team_id,
            goals_home_team: self.goals_home_team,
            goals_away_team: self.goals_away_team,
            status_id: self.status_id,
            referee_id: self.referee_id,
        }
    }
}
