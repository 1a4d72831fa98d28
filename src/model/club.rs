use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClubDto {
    pub stamnumber: i32,
    pub name: String,
    pub address: String,
    pub zipcode: i32,
    pub city: String,
    pub website: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClubListDto {
    pub clubs: Vec<ClubDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClubPayloadDto {
    pub stamnumber: i32,
    pub name: String,
    pub address: String,
    pub zipcode: i32,
    pub city: String,
    #[serde(default)]
    pub website: Option<String>,
}
