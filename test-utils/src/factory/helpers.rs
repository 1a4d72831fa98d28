//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a club with two teams, used as the home and away side of a fixture.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((club, home, away))` - The club and both of its teams
/// - `Err(DbErr)` - Database error during creation
pub async fn create_club_with_teams(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::club::Model,
        entity::team::Model,
        entity::team::Model,
    ),
    DbErr,
> {
    let club = crate::factory::club::create_club(db).await?;
    let home = crate::factory::team::create_team(db, club.stamnumber).await?;
    let away = crate::factory::team::TeamFactory::new(db, club.stamnumber)
        .suffix(Some("B"))
        .build()
        .await?;

    Ok((club, home, away))
}

/// Creates a division with a referee and one match refereed by them.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((division, referee, match))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_match_with_referee(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::division::Model,
        entity::referee::Model,
        entity::r#match::Model,
    ),
    DbErr,
> {
    let division = crate::factory::division::create_division(db).await?;
    let referee = crate::factory::referee::create_referee(db).await?;
    let fixture = crate::factory::r#match::MatchFactory::new(db, division.id)
        .referee(Some(referee.id))
        .build()
        .await?;

    Ok((division, referee, fixture))
}
