use std::collections::HashMap;

use crate::model::{club::ClubDto, referee::RefereeDto, status::StatusDto, team::TeamDto};

/// Display name of a team: its club's name, followed by the suffix when there is one.
pub fn team_display_name(club_name: &str, suffix: Option<&str>) -> String {
    match suffix {
        Some(suffix) if !suffix.is_empty() => format!("{} {}", club_name, suffix),
        _ => club_name.to_string(),
    }
}

/// Lookup tables turning the ids stored on a match into display text.
///
/// Ids that cannot be resolved are shown as the raw id.
#[derive(Debug, Clone, Default)]
pub struct Names {
    teams: HashMap<i32, String>,
    statuses: HashMap<i32, String>,
    referees: HashMap<i32, String>,
}

impl Names {
    pub fn new(
        clubs: &[ClubDto],
        teams: &[TeamDto],
        statuses: &[StatusDto],
        referees: &[RefereeDto],
    ) -> Self {
        let club_names: HashMap<i32, &str> = clubs
            .iter()
            .map(|club| (club.stamnumber, club.name.as_str()))
            .collect();

        let teams = teams
            .iter()
            .map(|team| {
                let name = match club_names.get(&team.stamnumber) {
                    Some(club) => team_display_name(club, team.suffix.as_deref()),
                    None => team.id.to_string(),
                };
                (team.id, name)
            })
            .collect();

        Self {
            teams,
            statuses: statuses
                .iter()
                .map(|status| (status.id, status.statusname.clone()))
                .collect(),
            referees: referees
                .iter()
                .map(|referee| (referee.id, referee.full_name()))
                .collect(),
        }
    }

    pub fn team(&self, id: i32) -> String {
        self.teams
            .get(&id)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }

    /// Empty when the match has no status.
    pub fn status(&self, id: Option<i32>) -> String {
        Self::optional(&self.statuses, id)
    }

    /// Empty when no referee is assigned.
    pub fn referee(&self, id: Option<i32>) -> String {
        Self::optional(&self.referees, id)
    }

    fn optional(table: &HashMap<i32, String>, id: Option<i32>) -> String {
        match id {
            Some(id) => table.get(&id).cloned().unwrap_or_else(|| id.to_string()),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_is_appended_when_present() {
        assert_eq!(team_display_name("KAA Gent", Some("B")), "KAA Gent B");
        assert_eq!(team_display_name("KAA Gent", Some("")), "KAA Gent");
        assert_eq!(team_display_name("KAA Gent", None), "KAA Gent");
    }

    #[test]
    fn unresolved_ids_fall_back_to_raw_id() {
        let names = Names::default();

        assert_eq!(names.team(12), "12");
        assert_eq!(names.referee(Some(4)), "4");
        assert_eq!(names.status(None), "");
    }

    #[test]
    fn known_referee_shows_full_name() {
        let referee = RefereeDto {
            id: 4,
            firstname: "Lotte".to_string(),
            lastname: "Peeters".to_string(),
            address: "Kouter 1".to_string(),
            zipcode: 9000,
            city: "Gent".to_string(),
            phonenumber: "0470123456".to_string(),
            email: "lotte@league.be".to_string(),
            birthdate: chrono::NaiveDate::from_ymd_opt(1988, 4, 12).unwrap(),
        };
        let names = Names::new(&[], &[], &[], &[referee]);

        assert_eq!(names.referee(Some(4)), "Lotte Peeters");
        assert_eq!(names.referee(Some(5)), "5");
        assert_eq!(names.referee(None), "");
    }
}
