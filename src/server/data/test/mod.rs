mod club;
mod division;
mod r#match;
mod team;
mod user;
