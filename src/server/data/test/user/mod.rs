use crate::server::{data::user::UserRepository, model::user::UserParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_email;
mod update;

fn param(email: &str) -> UserParam {
    UserParam {
        username: "secretary".to_string(),
        password: "secret".to_string(),
        email: email.to_string(),
        club: Some("1234".to_string()),
        admin: false,
        super_admin: false,
    }
}
