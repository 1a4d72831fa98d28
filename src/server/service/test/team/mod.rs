use crate::server::{
    error::AppError,
    model::team::TeamParam,
    service::team::{TeamService, CLUB_MISSING},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
