//! Domain & parameter models for user operations

use crate::model::user::{UserDto, UserPayloadDto};

/// The user domain model
///
/// Passwords are stored and compared as plaintext; the client service matches them
/// directly against login form input.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub email: String,
    pub club: Option<String>,
    pub admin: bool,
    pub super_admin: bool,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            password: entity.password,
            email: entity.email,
            club: entity.club,
            admin: entity.admin,
            super_admin: entity.super_admin,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            password: self.password,
            email: self.email,
            club: self.club,
            admin: self.admin,
            superadmin: self.super_admin,
        }
    }
}

/// Parameters for creating or replacing a user
#[derive(Debug, Clone)]
pub struct UserParam {
    pub username: String,
    pub password: String,
    pub email: String,
    pub club: Option<String>,
    pub admin: bool,
    pub super_admin: bool,
}

impl From<UserPayloadDto> for UserParam {
    fn from(dto: UserPayloadDto) -> Self {
        Self {
            username: dto.username,
            password: dto.password,
            email: dto.email,
            club: dto.club,
            admin: dto.admin,
            super_admin: dto.superadmin,
        }
    }
}
