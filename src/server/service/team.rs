use sea_orm::DatabaseConnection;

use crate::server::{
    data::{club::ClubRepository, team::TeamRepository},
    error::{AppError, INVALID_INPUT_DATA, INVALID_PAYLOAD},
    model::team::{Team, TeamParam},
};

pub const TEAM_CREATED: &str = "Team successfully created!";
pub const TEAM_NOT_FOUND: &str = "Team does not exist";
pub const TEAM_UPDATED: &str = "Team updated.";
pub const TEAM_DELETED: &str = "Team deleted";
pub const TEAM_DELETE_FAILED: &str = "Failed to delete team";
pub const CLUB_MISSING: &str = "No club found with that stamnumber.";

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a team for an existing club.
    pub async fn create(&self, param: TeamParam) -> Result<Team, AppError> {
        self.require_club(param.stamnumber).await?;

        let team = TeamRepository::new(self.db)
            .create(param)
            .await
            .map_err(|e| AppError::from_constraint(e, INVALID_PAYLOAD))?;

        tracing::info!("Created team {} for club {}", team.id, team.stamnumber);

        Ok(team)
    }

    pub async fn get(&self, id: i32) -> Result<Team, AppError> {
        TeamRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(TEAM_NOT_FOUND.to_string()))
    }

    pub async fn get_all(&self) -> Result<Vec<Team>, AppError> {
        Ok(TeamRepository::new(self.db).get_all().await?)
    }

    /// Replaces a team; the club it moves to must exist.
    pub async fn update(&self, id: i32, param: TeamParam) -> Result<Team, AppError> {
        let repo = TeamRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(TEAM_NOT_FOUND.to_string()));
        }

        self.require_club(param.stamnumber).await?;

        repo.update(id, param)
            .await
            .map_err(|e| AppError::from_constraint(e, INVALID_INPUT_DATA))?
            .ok_or_else(|| AppError::NotFound(TEAM_NOT_FOUND.to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = TeamRepository::new(self.db)
            .delete(id)
            .await
            .map_err(|e| AppError::from_constraint(e, TEAM_DELETE_FAILED))?;

        if !deleted {
            return Err(AppError::NotFound(TEAM_NOT_FOUND.to_string()));
        }

        Ok(())
    }

    async fn require_club(&self, stamnumber: i32) -> Result<(), AppError> {
        match ClubRepository::new(self.db)
            .find_by_stamnumber(stamnumber)
            .await?
        {
            Some(_) => Ok(()),
            None => Err(AppError::BadRequest(CLUB_MISSING.to_string())),
        }
    }
}
