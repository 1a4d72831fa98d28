//! Domain & parameter models for match status operations

use crate::model::status::{StatusDto, StatusPayloadDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub id: i32,
    pub name: String,
}

impl Status {
    pub fn from_entity(entity: entity::status::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> StatusDto {
        StatusDto {
            id: self.id,
            statusname: self.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusParam {
    pub name: String,
}

impl From<StatusPayloadDto> for StatusParam {
    fn from(dto: StatusPayloadDto) -> Self {
        Self {
            name: dto.statusname,
        }
    }
}
