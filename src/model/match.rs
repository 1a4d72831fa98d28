use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MatchDto {
    pub id: i32,
    pub division: i32,
    pub matchweek: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub hometeam: i32,
    pub awayteam: i32,
    pub goalshome: Option<i32>,
    pub goalsaway: Option<i32>,
    pub status: Option<i32>,
    pub referee: Option<i32>,
}

impl MatchDto {
    /// Both scores, if the match has been played.
    pub fn score(&self) -> Option<(i32, i32)> {
        self.goalshome.zip(self.goalsaway)
    }

    pub fn involves(&self, team_id: i32) -> bool {
        self.hometeam == team_id || self.awayteam == team_id
    }

    /// Payload that recreates this match unchanged, used as the base for edits.
    pub fn to_payload(&self) -> MatchPayloadDto {
        MatchPayloadDto {
            division: self.division,
            matchweek: self.matchweek,
            date: self.date,
            time: self.time,
            hometeam: self.hometeam,
            awayteam: self.awayteam,
            goalshome: self.goalshome,
            goalsaway: self.goalsaway,
            status: self.status,
            referee: self.referee,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MatchListDto {
    pub matches: Vec<MatchDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MatchPayloadDto {
    pub division: i32,
    pub matchweek: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub hometeam: i32,
    pub awayteam: i32,
    #[serde(default)]
    pub goalshome: Option<i32>,
    #[serde(default)]
    pub goalsaway: Option<i32>,
    #[serde(default)]
    pub status: Option<i32>,
    #[serde(default)]
    pub referee: Option<i32>,
}
