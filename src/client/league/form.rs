use chrono::NaiveDate;

use crate::model::r#match::MatchDto;

/// Number of results shown on a team page.
pub const RECENT_FORM_LENGTH: usize = 5;

/// `W`, `L` or `D` from `team_id`'s point of view; `None` when unplayed or when the
/// team did not take part.
pub fn result_for(fixture: &MatchDto, team_id: i32) -> Option<char> {
    let (home, away) = fixture.score()?;
    let (scored, conceded) = if fixture.hometeam == team_id {
        (home, away)
    } else if fixture.awayteam == team_id {
        (away, home)
    } else {
        return None;
    };

    Some(match scored.cmp(&conceded) {
        std::cmp::Ordering::Greater => 'W',
        std::cmp::Ordering::Less => 'L',
        std::cmp::Ordering::Equal => 'D',
    })
}

/// Form string over the `count` played matches of `team_id` closest to `today`,
/// nearest first. Matches equally far away keep their input order.
pub fn recent_form(matches: &[MatchDto], team_id: i32, today: NaiveDate, count: usize) -> String {
    let mut played: Vec<&MatchDto> = matches
        .iter()
        .filter(|fixture| fixture.involves(team_id) && fixture.score().is_some())
        .collect();

    played.sort_by_key(|fixture| (fixture.date - today).num_days().abs());

    played
        .into_iter()
        .take(count)
        .filter_map(|fixture| result_for(fixture, team_id))
        .collect()
}
