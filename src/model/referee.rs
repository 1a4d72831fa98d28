use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RefereeDto {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub address: String,
    pub zipcode: i32,
    pub city: String,
    pub phonenumber: String,
    pub email: String,
    pub birthdate: NaiveDate,
}

impl RefereeDto {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RefereeListDto {
    pub referees: Vec<RefereeDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RefereePayloadDto {
    pub firstname: String,
    pub lastname: String,
    pub address: String,
    pub zipcode: i32,
    pub city: String,
    pub phonenumber: String,
    pub email: String,
    pub birthdate: NaiveDate,
}
