use axum::http::{header, Method, StatusCode};
use mockito::{Matcher, Server, ServerGuard};

use super::{access_cookie, client, send, user};

async fn mock_get(server: &mut ServerGuard, path: &str, data: &str) {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(r#"{{"status": "success", "data": {}}}"#, data))
        .create_async()
        .await;
}

/// Match 1: team 1 of club 7 at home, not played yet.
async fn fixture(server: &mut ServerGuard) {
    mock_get(
        server,
        "/matches/1",
        r#"{"id": 1, "division": 1, "matchweek": 3, "date": "2026-10-24",
            "time": "15:00:00", "hometeam": 1, "awayteam": 2,
            "goalshome": null, "goalsaway": null, "status": null, "referee": null}"#,
    )
    .await;
    mock_get(
        server,
        "/teams/1",
        r#"{"id": 1, "stamnumber": 7, "suffix": null, "color": "Blue"}"#,
    )
    .await;
}

#[tokio::test]
async fn score_entry_requires_login() {
    let server = Server::new_async().await;
    let router = client(&server);

    let response = send(
        &router,
        Method::POST,
        "/matches/1/score",
        None,
        Some("goalshome=2&goalsaway=1"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
}

#[tokio::test]
async fn home_club_member_enters_score() {
    let mut server = Server::new_async().await;
    fixture(&mut server).await;
    let update = server
        .mock("PUT", "/matches/1")
        .match_body(Matcher::PartialJsonString(
            r#"{"goalshome": 2, "goalsaway": 1}"#.to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status": "success", "message": "Match updated."}"#)
        .create_async()
        .await;
    let router = client(&server);
    let cookie = access_cookie(&user(Some("7"), false));

    let response = send(
        &router,
        Method::POST,
        "/matches/1/score",
        Some(&cookie),
        Some("goalshome=2&goalsaway=1"),
    )
    .await;

    update.assert_async().await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/matches/1");
}

#[tokio::test]
async fn other_club_cannot_enter_score() {
    let mut server = Server::new_async().await;
    fixture(&mut server).await;
    let update = server
        .mock("PUT", "/matches/1")
        .expect(0)
        .create_async()
        .await;
    let router = client(&server);
    let cookie = access_cookie(&user(Some("8"), false));

    let response = send(
        &router,
        Method::POST,
        "/matches/1/score",
        Some(&cookie),
        Some("goalshome=2&goalsaway=1"),
    )
    .await;

    update.assert_async().await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn non_admin_cannot_assign_referee() {
    let server = Server::new_async().await;
    let router = client(&server);
    let cookie = access_cookie(&user(Some("7"), false));

    let response = send(
        &router,
        Method::POST,
        "/matches/1/referee",
        Some(&cookie),
        Some("referee=4"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn non_numeric_match_id_is_not_found() {
    let server = Server::new_async().await;
    let router = client(&server);

    let response = send(&router, Method::GET, "/matches/abc", None, None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
