use chrono::{NaiveDate, NaiveTime};

use crate::{client::league::names::Names, model::r#match::MatchDto};

/// A match as shown in a fixture list.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureEntry {
    pub id: i32,
    pub matchweek: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub home_id: i32,
    pub away_id: i32,
    pub home: String,
    pub away: String,
    pub status: String,
    pub score: String,
    pub referee: String,
}

/// Optional narrowing of a fixture list. `team` must equal a resolved display name
/// exactly.
#[derive(Debug, Clone, Default)]
pub struct FixtureFilter {
    pub matchweek: Option<i32>,
    pub team: Option<String>,
}

/// `"H - A"` for a played match, empty otherwise.
pub fn format_score(fixture: &MatchDto) -> String {
    match fixture.score() {
        Some((home, away)) => format!("{} - {}", home, away),
        None => String::new(),
    }
}

pub fn entry(fixture: &MatchDto, names: &Names) -> FixtureEntry {
    FixtureEntry {
        id: fixture.id,
        matchweek: fixture.matchweek,
        date: fixture.date,
        time: fixture.time,
        home_id: fixture.hometeam,
        away_id: fixture.awayteam,
        home: names.team(fixture.hometeam),
        away: names.team(fixture.awayteam),
        status: names.status(fixture.status),
        score: format_score(fixture),
        referee: names.referee(fixture.referee),
    }
}

/// Resolves and filters `matches`, ordered by matchweek.
///
/// Matches of the same matchweek keep their input order.
pub fn build(matches: &[MatchDto], names: &Names, filter: &FixtureFilter) -> Vec<FixtureEntry> {
    let mut entries: Vec<FixtureEntry> = matches
        .iter()
        .filter(|fixture| {
            filter
                .matchweek
                .is_none_or(|matchweek| fixture.matchweek == matchweek)
        })
        .map(|fixture| entry(fixture, names))
        .filter(|entry| {
            filter
                .team
                .as_deref()
                .is_none_or(|team| entry.home == team || entry.away == team)
        })
        .collect();

    entries.sort_by_key(|entry| entry.matchweek);
    entries
}
