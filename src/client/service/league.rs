use chrono::NaiveDate;

use crate::{
    client::{
        api::{club, division, r#match, referee, status, team, weather},
        config::ClientConfig,
        error::ClientError,
        league::{
            fixture::{self, FixtureEntry, FixtureFilter},
            form::{recent_form, RECENT_FORM_LENGTH},
            names::{team_display_name, Names},
            season::Season,
            standings::{self, Standing},
        },
    },
    model::{
        club::ClubDto, division::DivisionDto, r#match::MatchDto, referee::RefereeDto,
        team::TeamDto,
    },
};

pub struct TablePage {
    pub division: DivisionDto,
    pub season: Season,
    /// Standings with the team display name of each row.
    pub rows: Vec<(Standing, String)>,
}

pub struct FixturesPage {
    pub division: DivisionDto,
    pub entries: Vec<FixtureEntry>,
}

pub struct TeamPage {
    pub team: TeamDto,
    pub club: ClubDto,
    pub name: String,
    pub form: String,
    pub upcoming: Vec<FixtureEntry>,
}

pub struct MatchPage {
    pub fixture: MatchDto,
    pub entry: FixtureEntry,
    pub division: DivisionDto,
    pub forecast: Option<weather::Forecast>,
    pub referees: Vec<RefereeDto>,
}

/// Builds the league pages from the teams and matches services.
pub struct LeagueService<'a> {
    http: &'a reqwest::Client,
    config: &'a ClientConfig,
}

impl<'a> LeagueService<'a> {
    pub fn new(http: &'a reqwest::Client, config: &'a ClientConfig) -> Self {
        Self { http, config }
    }

    pub async fn divisions(&self) -> Result<Vec<DivisionDto>, ClientError> {
        Ok(division::get_all_divisions(self.http, &self.config.matches_api).await?)
    }

    /// Lookup tables for team, status and referee names.
    pub async fn names(&self) -> Result<Names, ClientError> {
        Ok(self.names_and_referees().await?.0)
    }

    /// Name lookups together with the referee list they were built from.
    async fn names_and_referees(&self) -> Result<(Names, Vec<RefereeDto>), ClientError> {
        let (clubs, teams, statuses, referees) = tokio::try_join!(
            club::get_all_clubs(self.http, &self.config.teams_api),
            team::get_all_teams(self.http, &self.config.teams_api),
            status::get_all_status(self.http, &self.config.matches_api),
            referee::get_all_referees(self.http, &self.config.matches_api),
        )?;

        Ok((Names::new(&clubs, &teams, &statuses, &referees), referees))
    }

    async fn division_matches(&self, division_id: i32) -> Result<Vec<MatchDto>, ClientError> {
        let matches = r#match::get_all_matches(self.http, &self.config.matches_api).await?;

        Ok(matches
            .into_iter()
            .filter(|fixture| fixture.division == division_id)
            .collect())
    }

    /// League table of a division over one season.
    pub async fn table(&self, division_id: i32, season: Season) -> Result<TablePage, ClientError> {
        let division = division::get_division(self.http, &self.config.matches_api, division_id)
            .await?;
        let matches: Vec<MatchDto> = self
            .division_matches(division_id)
            .await?
            .into_iter()
            .filter(|fixture| season.contains(fixture.date))
            .collect();
        let names = self.names().await?;

        let rows = standings::compute(&matches)
            .into_iter()
            .map(|row| {
                let name = names.team(row.team_id);
                (row, name)
            })
            .collect();

        Ok(TablePage {
            division,
            season,
            rows,
        })
    }

    pub async fn fixtures(
        &self,
        division_id: i32,
        filter: &FixtureFilter,
    ) -> Result<FixturesPage, ClientError> {
        let division = division::get_division(self.http, &self.config.matches_api, division_id)
            .await?;
        let matches = self.division_matches(division_id).await?;
        let names = self.names().await?;

        Ok(FixturesPage {
            division,
            entries: fixture::build(&matches, &names, filter),
        })
    }

    /// Club details, recent form and the unplayed matches from `today` on.
    pub async fn team(&self, team_id: i32, today: NaiveDate) -> Result<TeamPage, ClientError> {
        let team = team::get_team(self.http, &self.config.teams_api, team_id).await?;
        let club = club::get_club(self.http, &self.config.teams_api, team.stamnumber).await?;
        let matches: Vec<MatchDto> =
            r#match::get_all_matches(self.http, &self.config.matches_api)
                .await?
                .into_iter()
                .filter(|fixture| fixture.involves(team_id))
                .collect();
        let names = self.names().await?;

        let mut upcoming: Vec<&MatchDto> = matches
            .iter()
            .filter(|fixture| fixture.score().is_none() && fixture.date >= today)
            .collect();
        upcoming.sort_by_key(|fixture| (fixture.date, fixture.time));

        Ok(TeamPage {
            name: team_display_name(&club.name, team.suffix.as_deref()),
            form: recent_form(&matches, team_id, today, RECENT_FORM_LENGTH),
            upcoming: upcoming
                .into_iter()
                .map(|fixture| fixture::entry(fixture, &names))
                .collect(),
            team,
            club,
        })
    }

    /// Match details, with a forecast when the match is within the next seven days.
    pub async fn match_detail(&self, id: i32, today: NaiveDate) -> Result<MatchPage, ClientError> {
        let fixture = r#match::get_match(self.http, &self.config.matches_api, id).await?;
        let division =
            division::get_division(self.http, &self.config.matches_api, fixture.division).await?;
        let (names, referees) = self.names_and_referees().await?;
        let forecast =
            weather::get_forecast(self.http, &self.config.weather_api, fixture.date, today).await?;

        Ok(MatchPage {
            entry: fixture::entry(&fixture, &names),
            fixture,
            division,
            forecast,
            referees,
        })
    }

    /// Stamnumber of the club fielding the home team of match `id`.
    pub async fn home_club(&self, id: i32) -> Result<i32, ClientError> {
        let fixture = r#match::get_match(self.http, &self.config.matches_api, id).await?;
        let home = team::get_team(self.http, &self.config.teams_api, fixture.hometeam).await?;

        Ok(home.stamnumber)
    }

    pub async fn enter_score(
        &self,
        id: i32,
        goals_home: i32,
        goals_away: i32,
    ) -> Result<String, ClientError> {
        let fixture = r#match::get_match(self.http, &self.config.matches_api, id).await?;

        let mut payload = fixture.to_payload();
        payload.goalshome = Some(goals_home);
        payload.goalsaway = Some(goals_away);

        let message =
            r#match::update_match(self.http, &self.config.matches_api, id, &payload).await?;
        tracing::info!("Score {}-{} entered for match {}", goals_home, goals_away, id);

        Ok(message)
    }

    /// Assigns `referee_id` to match `id`, or clears the assignment. A double booking
    /// is refused by the matches service.
    pub async fn assign_referee(
        &self,
        id: i32,
        referee_id: Option<i32>,
    ) -> Result<String, ClientError> {
        let fixture = r#match::get_match(self.http, &self.config.matches_api, id).await?;

        let mut payload = fixture.to_payload();
        payload.referee = referee_id;

        let message =
            r#match::update_match(self.http, &self.config.matches_api, id, &payload).await?;
        tracing::info!("Referee {:?} assigned to match {}", referee_id, id);

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server, ServerGuard};
    use url::Url;

    fn config(server: &ServerGuard) -> ClientConfig {
        let base = Url::parse(&format!("{}/", server.url())).unwrap();
        ClientConfig {
            jwt_secret: "test-secret".to_string(),
            users_api: base.clone(),
            teams_api: base.clone(),
            matches_api: base.clone(),
            weather_api: base.join("v1/forecast").unwrap(),
            bind_address: "127.0.0.1:0".to_string(),
        }
    }

    async fn mock_get(server: &mut ServerGuard, path: &str, data: &str) {
        server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!(r#"{{"status": "success", "data": {}}}"#, data))
            .create_async()
            .await;
    }

    fn fixture(id: i32, division: i32, date: &str, home: i32, away: i32, goals: &str) -> String {
        format!(
            r#"{{"id": {id}, "division": {division}, "matchweek": {id}, "date": "{date}",
                "time": "15:00:00", "hometeam": {home}, "awayteam": {away}, {goals},
                "status": null, "referee": null}}"#
        )
    }

    async fn league(server: &mut ServerGuard) {
        mock_get(server, "/divisions/1", r#"{"id": 1, "divisionname": "Eerste"}"#).await;
        mock_get(
            server,
            "/clubs",
            r#"{"clubs": [
                {"stamnumber": 7, "name": "Gent", "address": "a", "zipcode": 9000, "city": "Gent", "website": null},
                {"stamnumber": 8, "name": "Brugge", "address": "b", "zipcode": 8000, "city": "Brugge", "website": null}
            ]}"#,
        )
        .await;
        mock_get(
            server,
            "/teams",
            r#"{"teams": [
                {"id": 1, "stamnumber": 7, "suffix": null, "color": "Blue"},
                {"id": 2, "stamnumber": 8, "suffix": null, "color": "Black"},
                {"id": 3, "stamnumber": 7, "suffix": "B", "color": "White"}
            ]}"#,
        )
        .await;
        mock_get(server, "/status", r#"{"status": []}"#).await;
        mock_get(server, "/referees", r#"{"referees": []}"#).await;
        let matches = [
            fixture(1, 1, "2026-09-12", 1, 2, r#""goalshome": 0, "goalsaway": 2"#),
            fixture(2, 1, "2026-09-19", 2, 3, r#""goalshome": 1, "goalsaway": 1"#),
            fixture(3, 1, "2025-10-04", 1, 3, r#""goalshome": 5, "goalsaway": 0"#),
            fixture(4, 2, "2026-09-19", 1, 3, r#""goalshome": 3, "goalsaway": 0"#),
            fixture(5, 1, "2026-10-24", 3, 1, r#""goalshome": null, "goalsaway": null"#),
        ];
        mock_get(
            server,
            "/matches",
            &format!(r#"{{"matches": [{}]}}"#, matches.join(",")),
        )
        .await;
    }

    #[tokio::test]
    async fn table_only_counts_division_and_season() {
        let mut server = Server::new_async().await;
        league(&mut server).await;
        let config = config(&server);
        let http = reqwest::Client::new();

        let page = LeagueService::new(&http, &config)
            .table(1, Season::new(2026))
            .await
            .unwrap();

        let table: Vec<(&str, u32, u32)> = page
            .rows
            .iter()
            .map(|(row, name)| (name.as_str(), row.played, row.points))
            .collect();
        assert_eq!(
            table,
            vec![("Brugge", 2, 4), ("Gent B", 1, 1), ("Gent", 1, 0)]
        );
    }

    #[tokio::test]
    async fn team_page_shows_form_and_upcoming() {
        let mut server = Server::new_async().await;
        league(&mut server).await;
        mock_get(
            &mut server,
            "/teams/3",
            r#"{"id": 3, "stamnumber": 7, "suffix": "B", "color": "White"}"#,
        )
        .await;
        mock_get(
            &mut server,
            "/clubs/7",
            r#"{"stamnumber": 7, "name": "Gent", "address": "a", "zipcode": 9000, "city": "Gent", "website": null}"#,
        )
        .await;
        let config = config(&server);
        let http = reqwest::Client::new();
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();

        let page = LeagueService::new(&http, &config)
            .team(3, today)
            .await
            .unwrap();

        assert_eq!(page.name, "Gent B");
        assert_eq!(page.form, "DLL");
        assert_eq!(page.upcoming.len(), 1);
        assert_eq!(page.upcoming[0].away, "Gent");
    }

    #[tokio::test]
    async fn double_booking_is_reported() {
        let mut server = Server::new_async().await;
        mock_get(
            &mut server,
            "/matches/5",
            &fixture(5, 1, "2026-10-24", 3, 1, r#""goalshome": null, "goalsaway": null"#),
        )
        .await;
        server
            .mock("PUT", "/matches/5")
            .match_body(Matcher::PartialJsonString(r#"{"referee": 4}"#.to_string()))
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status": "fail", "message": "Referee double booked"}"#)
            .create_async()
            .await;
        let config = config(&server);
        let http = reqwest::Client::new();

        let result = LeagueService::new(&http, &config)
            .assign_referee(5, Some(4))
            .await;

        match result {
            Err(ClientError::Api(err)) => assert_eq!(err.message, "Referee double booked"),
            other => panic!("expected backend error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn match_detail_fetches_referees_once() {
        let mut server = Server::new_async().await;
        mock_get(
            &mut server,
            "/matches/5",
            r#"{"id": 5, "division": 1, "matchweek": 6, "date": "2026-10-24",
                "time": "15:00:00", "hometeam": 1, "awayteam": 2,
                "goalshome": null, "goalsaway": null, "status": null, "referee": 4}"#,
        )
        .await;
        mock_get(&mut server, "/divisions/1", r#"{"id": 1, "divisionname": "Eerste"}"#).await;
        mock_get(
            &mut server,
            "/clubs",
            r#"{"clubs": [
                {"stamnumber": 7, "name": "Gent", "address": "a", "zipcode": 9000, "city": "Gent",
                 "website": null}
            ]}"#,
        )
        .await;
        mock_get(
            &mut server,
            "/teams",
            r#"{"teams": [
                {"id": 1, "stamnumber": 7, "suffix": null, "color": "Blue"},
                {"id": 2, "stamnumber": 7, "suffix": "B", "color": "White"}
            ]}"#,
        )
        .await;
        mock_get(&mut server, "/status", r#"{"status": []}"#).await;
        let referees = server
            .mock("GET", "/referees")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"status": "success", "data": {"referees": [
                    {"id": 4, "firstname": "Lotte", "lastname": "Peeters", "address": "a",
                     "zipcode": 9000, "city": "Gent", "phonenumber": "0470", "email": "l@p.be",
                     "birthdate": "1988-04-12"}
                ]}}"#,
            )
            .expect(1)
            .create_async()
            .await;
        let config = config(&server);
        let http = reqwest::Client::new();
        let today = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();

        let page = LeagueService::new(&http, &config)
            .match_detail(5, today)
            .await
            .unwrap();

        referees.assert_async().await;
        assert_eq!(page.entry.referee, "Lotte Peeters");
        assert_eq!(page.entry.away, "Gent B");
        assert_eq!(page.referees.len(), 1);
        assert!(page.forecast.is_none());
    }
}
