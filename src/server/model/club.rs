//! Domain & parameter models for club operations

use crate::model::club::{ClubDto, ClubPayloadDto};

/// The club domain model, keyed by its federation registration number
#[derive(Debug, Clone, PartialEq)]
pub struct Club {
    pub stamnumber: i32,
    pub name: String,
    pub address: String,
    pub zipcode: i32,
    pub city: String,
    pub website: Option<String>,
}

impl Club {
    pub fn from_entity(entity: entity::club::Model) -> Self {
        Self {
            stamnumber: entity.stamnumber,
            name: entity.name,
            address: entity.address,
            zipcode: entity.zipcode,
            city: entity.city,
            website: entity.website,
        }
    }

    pub fn into_dto(self) -> ClubDto {
        ClubDto {
            stamnumber: self.stamnumber,
            name: self.name,
            address: self.address,
            zipcode: self.zipcode,
            city: self.city,
            website: self.website,
        }
    }
}

/// Parameters for creating or replacing a club
///
/// On update the stamnumber may differ from the current one; teams follow the club.
#[derive(Debug, Clone)]
pub struct ClubParam {
    pub stamnumber: i32,
    pub name: String,
    pub address: String,
    pub zipcode: i32,
    pub city: String,
    pub website: Option<String>,
}

impl From<ClubPayloadDto> for ClubParam {
    fn from(dto: ClubPayloadDto) -> Self {
        Self {
            stamnumber: dto.stamnumber,
            name: dto.name,
            address: dto.address,
            zipcode: dto.zipcode,
            city: dto.city,
            website: dto.website.filter(|website| !website.is_empty()),
        }
    }
}
