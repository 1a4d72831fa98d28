pub use super::club::Entity as Club;
pub use super::division::Entity as Division;
pub use super::r#match::Entity as Match;
pub use super::referee::Entity as Referee;
pub use super::status::Entity as Status;
pub use super::team::Entity as Team;
pub use super::user::Entity as User;
