use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeamDto {
    pub id: i32,
    pub stamnumber: i32,
    pub suffix: Option<String>,
    pub color: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeamListDto {
    pub teams: Vec<TeamDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeamPayloadDto {
    pub stamnumber: i32,
    #[serde(default)]
    pub suffix: Option<String>,
    pub color: String,
}
