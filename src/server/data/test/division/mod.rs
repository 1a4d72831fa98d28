use crate::server::{data::division::DivisionRepository, model::division::DivisionParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
