//! Domain & parameter models for division operations

use crate::model::division::{DivisionDto, DivisionPayloadDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Division {
    pub id: i32,
    pub name: String,
}

impl Division {
    pub fn from_entity(entity: entity::division::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> DivisionDto {
        DivisionDto {
            id: self.id,
            divisionname: self.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DivisionParam {
    pub name: String,
}

impl From<DivisionPayloadDto> for DivisionParam {
    fn from(dto: DivisionPayloadDto) -> Self {
        Self {
            name: dto.divisionname,
        }
    }
}
