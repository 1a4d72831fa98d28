//! Domain & parameter models for referee operations

use chrono::NaiveDate;

use crate::model::referee::{RefereeDto, RefereePayloadDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Referee {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub zip_code: i32,
    pub city: String,
    pub phone_number: String,
    pub email: String,
    pub birth_date: NaiveDate,
}

impl Referee {
    pub fn from_entity(entity: entity::referee::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            address: entity.address,
            zip_code: entity.zip_code,
            city: entity.city,
            phone_number: entity.phone_number,
            email: entity.email,
            birth_date: entity.birth_date,
        }
    }

    pub fn into_dto(self) -> RefereeDto {
        RefereeDto {
            id: self.id,
            firstname: self.first_name,
            lastname: self.last_name,
            address: self.address,
            zipcode: self.zip_code,
            city: self.city,
            phonenumber: self.phone_number,
            email: self.email,
            birthdate: self.birth_date,
        }
    }
}

/// Parameters for creating or replacing a referee
#[derive(Debug, Clone)]
pub struct RefereeParam {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub zip_code: i32,
    pub city: String,
    pub phone_number: String,
    pub email: String,
    pub birth_date: NaiveDate,
}

impl From<RefereePayloadDto> for RefereeParam {
    fn from(dto: RefereePayloadDto) -> Self {
        Self {
            first_name: dto.firstname,
            last_name: dto.lastname,
            address: dto.address,
            zip_code: dto.zipcode,
            city: dto.city,
            phone_number: dto.phonenumber,
            email: dto.email,
            birth_date: dto.birthdate,
        }
    }
}
