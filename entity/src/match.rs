use sea_orm::entity::prelude::*;

/// A scheduled fixture between two teams of a division.
///
/// Team ids reference the teams service and are not constrained here. Goals are
/// both `None` until the match has been played.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub division_id: i32,
    pub matchweek: i32,
    pub date: Date,
    pub time: Time,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub goals_home_team: Option<i32>,
    pub goals_away_team: Option<i32>,
    pub status_id: Option<i32>,
    pub referee_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::division::Entity",
        from = "Column::DivisionId",
        to = "super::division::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Division,
    #[sea_orm(
        belongs_to = "super::status::Entity",
        from = "Column::StatusId",
        to = "super::status::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Status,
    #[sea_orm(
        belongs_to = "super::referee::Entity",
        from = "Column::RefereeId",
        to = "super::referee::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Referee,
}

impl Related<super::division::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Division.def()
    }
}

impl Related<super::status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Status.def()
    }
}

impl Related<super::referee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Referee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
