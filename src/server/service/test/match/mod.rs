use crate::server::{
    error::AppError,
    model::r#match::MatchParam,
    service::r#match::{MatchService, MATCH_NOT_FOUND, REFEREE_DOUBLE_BOOKED},
};
use chrono::{NaiveDate, NaiveTime};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

fn kickoff() -> (NaiveDate, NaiveTime) {
    (
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
        NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
    )
}

fn param(division_id: i32, referee_id: Option<i32>) -> MatchParam {
    let (date, time) = kickoff();
    MatchParam {
        division_id,
        matchweek: 7,
        date,
        time,
        home_team_id: 3,
        away_team_id: 4,
        goals_home_team: None,
        goals_away_team: None,
        status_id: None,
        referee_id,
    }
}

fn assert_double_booked(result: Result<impl std::fmt::Debug, AppError>) {
    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, REFEREE_DOUBLE_BOOKED),
        other => panic!("expected double booking error, got {:?}", other),
    }
}
