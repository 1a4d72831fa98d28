use std::collections::HashSet;

use crate::model::r#match::MatchDto;

pub const POINTS_WIN: u32 = 3;
pub const POINTS_TIE: u32 = 1;

/// One row of a league table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Standing {
    pub team_id: i32,
    pub played: u32,
    pub win: u32,
    pub loss: u32,
    pub tie: u32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub clean_sheets: u32,
    pub points: u32,
}

impl Standing {
    pub fn goal_difference(&self) -> i32 {
        self.goals_for - self.goals_against
    }
}

/// Computes the table for `matches`, which should already be limited to one division
/// and one season.
///
/// Every team appearing in a match gets a row, in the order teams are first seen.
/// Matches without both scores count for nothing. Rows are then stable-sorted by
/// points, highest first; equal points keep first-seen order.
pub fn compute(matches: &[MatchDto]) -> Vec<Standing> {
    let mut seen = HashSet::new();
    let mut table = Vec::new();

    for fixture in matches {
        for team_id in [fixture.hometeam, fixture.awayteam] {
            if seen.insert(team_id) {
                table.push(score_team(team_id, matches));
            }
        }
    }

    table.sort_by(|a, b| b.points.cmp(&a.points));
    table
}

fn score_team(team_id: i32, matches: &[MatchDto]) -> Standing {
    let mut row = Standing {
        team_id,
        ..Default::default()
    };

    for fixture in matches {
        let Some((home, away)) = fixture.score() else {
            continue;
        };
        let (scored, conceded) = if fixture.hometeam == team_id {
            (home, away)
        } else if fixture.awayteam == team_id {
            (away, home)
        } else {
            continue;
        };

        row.played += 1;
        row.goals_for += scored;
        row.goals_against += conceded;
        if conceded == 0 {
            row.clean_sheets += 1;
        }

        if scored > conceded {
            row.win += 1;
            row.points += POINTS_WIN;
        } else if scored < conceded {
            row.loss += 1;
        } else {
            row.tie += 1;
            row.points += POINTS_TIE;
        }
    }

    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn played(home: i32, away: i32, goals: Option<(i32, i32)>) -> MatchDto {
        MatchDto {
            id: 0,
            division: 1,
            matchweek: 1,
            date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
            hometeam: home,
            awayteam: away,
            goalshome: goals.map(|g| g.0),
            goalsaway: goals.map(|g| g.1),
            status: None,
            referee: None,
        }
    }

    fn sample() -> Vec<MatchDto> {
        vec![
            played(1, 2, Some((3, 2))),
            played(3, 4, Some((0, 0))),
            played(2, 3, Some((1, 4))),
            played(4, 1, Some((2, 2))),
            played(1, 3, None),
            played(2, 4, Some((0, 1))),
        ]
    }

    #[test]
    fn results_add_up_to_games_played() {
        for row in compute(&sample()) {
            assert_eq!(row.win + row.loss + row.tie, row.played);
            assert_eq!(row.points, POINTS_WIN * row.win + POINTS_TIE * row.tie);
        }
    }

    #[test]
    fn table_is_ordered_by_points() {
        let table = compute(&sample());

        assert!(table.windows(2).all(|pair| pair[0].points >= pair[1].points));
    }

    #[test]
    fn unplayed_match_is_not_counted() {
        let table = compute(&sample());
        let team_one = table.iter().find(|row| row.team_id == 1).unwrap();

        assert_eq!(team_one.played, 2);
        assert_eq!(team_one.goals_for, 5);
        assert_eq!(team_one.goals_against, 4);
        assert_eq!(team_one.points, 4);
    }

    #[test]
    fn equal_points_keep_first_seen_order() {
        let table = compute(&[played(5, 6, Some((1, 1))), played(7, 8, Some((0, 0)))]);
        let order: Vec<i32> = table.iter().map(|row| row.team_id).collect();

        assert_eq!(order, vec![5, 6, 7, 8]);
        assert_eq!(table[2].clean_sheets, 1);
    }

    #[test]
    fn goal_difference_does_not_break_ties() {
        let table = compute(&[played(1, 2, Some((1, 0))), played(3, 4, Some((6, 0)))]);

        assert_eq!(table[0].team_id, 1);
        assert_eq!(table[1].team_id, 3);
    }
}
