use crate::server::{data::r#match::MatchRepository, model::r#match::MatchParam};
use chrono::{NaiveDate, NaiveTime};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_by_division;
mod create;
mod delete;
mod get_by_referee;
mod update;

fn param(division_id: i32) -> MatchParam {
    MatchParam {
        division_id,
        matchweek: 4,
        date: NaiveDate::from_ymd_opt(2026, 10, 3).unwrap(),
        time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
        home_team_id: 11,
        away_team_id: 12,
        goals_home_team: None,
        goals_away_team: None,
        status_id: None,
        referee_id: None,
    }
}
