pub mod prelude;

pub mod club;
pub mod division;
pub mod r#match;
pub mod referee;
pub mod status;
pub mod team;
pub mod user;
