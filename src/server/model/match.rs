//! Domain & parameter models for match operations
//!
//! Defines the match domain model, the match parameter model and the double
//! booking rule applied whenever a referee is assigned.

use chrono::{NaiveDate, NaiveTime};

use crate::model::r#match::{MatchDto, MatchPayloadDto};

/// The match domain model
///
/// Team ids refer to teams owned by the teams service and are not validated here.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: i32,
    pub division_id: i32,
    pub matchweek: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub goals_home_team: Option<i32>,
    pub goals_away_team: Option<i32>,
    pub status_id: Option<i32>,
    pub referee_id: Option<i32>,
}

impl Match {
    pub fn from_entity(entity: entity::r#match::Model) -> Self {
        Self {
            id: entity.id,
            division_id: entity.division_id,
            matchweek: entity.matchweek,
            date: entity.date,
            time: entity.time,
            home_team_id: entity.home_team_id,
            away_team_id: entity.away_team_id,
            goals_home_team: entity.goals_home_team,
            goals_away_team: entity.goals_away_team,
            status_id: entity.status_id,
            referee_id: entity.referee_id,
        }
    }

    pub fn into_dto(self) -> MatchDto {
        MatchDto {
            id: self.id,
            division: self.division_id,
            matchweek: self.matchweek,
            date: self.date,
            time: self.time,
            hometeam: self.home_team_id,
            awayteam: self.away_team_id,
            goalshome: self.goals_home_team,
            goalsaway: self.goals_away_team,
            status: self.status_id,
            referee: self.referee_id,
        }
    }
}

/// Parameters for creating or replacing a match
#[derive(Debug, Clone)]
pub struct MatchParam {
    pub division_id: i32,
    pub matchweek: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub goals_home_team: Option<i32>,
    pub goals_away_team: Option<i32>,
    pub status_id: Option<i32>,
    pub referee_id: Option<i32>,
}

impl From<MatchPayloadDto> for MatchParam {
    fn from(dto: MatchPayloadDto) -> Self {
        Self {
            division_id: dto.division,
            matchweek: dto.matchweek,
            date: dto.date,
            time: dto.time,
            home_team_id: dto.hometeam,
            away_team_id: dto.awayteam,
            goals_home_team: dto.goalshome,
            goals_away_team: dto.goalsaway,
            status_id: dto.status,
            referee_id: dto.referee,
        }
    }
}

/// Finds a booking of the referee that kicks off at the same date and time.
///
/// `bookings` are the matches the referee is already assigned to. The match being
/// updated, if any, is passed as `exclude` so it never collides with itself.
///
/// # Arguments
/// - `bookings` - Matches currently assigned to the referee
/// - `date` - Kickoff date of the new or updated match
/// - `time` - Kickoff time of the new or updated match
/// - `exclude` - ID of the match being updated
///
/// # Returns
/// - `Some(&Match)` - The first conflicting booking
/// - `None` - The slot is free
pub fn find_double_booking(
    bookings: &[Match],
    date: NaiveDate,
    time: NaiveTime,
    exclude: Option<i32>,
) -> Option<&Match> {
    bookings
        .iter()
        .find(|booking| Some(booking.id) != exclude && booking.date == date && booking.time == time)
}
