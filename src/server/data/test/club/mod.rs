use crate::server::{
    data::{club::ClubRepository, team::TeamRepository},
    model::club::ClubParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod update;

fn param(stamnumber: i32) -> ClubParam {
    ClubParam {
        stamnumber,
        name: "KFC Renamed".to_string(),
        address: "Sportlaan 3".to_string(),
        zipcode: 9050,
        city: "Gentbrugge".to_string(),
        website: Some("https://kfc.test".to_string()),
    }
}
