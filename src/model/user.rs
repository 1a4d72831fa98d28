use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub email: String,
    pub club: Option<String>,
    pub admin: bool,
    pub superadmin: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserListDto {
    pub users: Vec<UserDto>,
}

/// Body of user create and update requests.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserPayloadDto {
    pub username: String,
    pub password: String,
    pub email: String,
    #[serde(default)]
    pub club: Option<String>,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub superadmin: bool,
}
