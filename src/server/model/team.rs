//! Domain & parameter models for team operations

use crate::model::team::{TeamDto, TeamPayloadDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    pub stamnumber: i32,
    pub suffix: Option<String>,
    pub color: String,
}

impl Team {
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            stamnumber: entity.stamnumber,
            suffix: entity.suffix,
            color: entity.color,
        }
    }

    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.id,
            stamnumber: self.stamnumber,
            suffix: self.suffix,
            color: self.color,
        }
    }
}

/// Parameters for creating or replacing a team
#[derive(Debug, Clone)]
pub struct TeamParam {
    pub stamnumber: i32,
    pub suffix: Option<String>,
    pub color: String,
}

impl From<TeamPayloadDto> for TeamParam {
    fn from(dto: TeamPayloadDto) -> Self {
        Self {
            stamnumber: dto.stamnumber,
            suffix: dto.suffix.filter(|suffix| !suffix.is_empty()),
            color: dto.color,
        }
    }
}
