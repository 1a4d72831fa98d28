use crate::server::{
    error::AppError,
    service::division::{DivisionService, DIVISION_HAS_MATCHES, DIVISION_NOT_FOUND},
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
