use crate::server::{
    error::AppError,
    model::user::UserParam,
    service::user::{UserService, EMAIL_TAKEN},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

fn param(email: &str) -> UserParam {
    UserParam {
        username: "treasurer".to_string(),
        password: "secret".to_string(),
        email: email.to_string(),
        club: None,
        admin: false,
        super_admin: false,
    }
}
