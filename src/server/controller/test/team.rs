use axum::http::{Method, StatusCode};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

use super::send;
use crate::server::{router::teams_router, state::AppState};

/// Tests creating a team and reading it back.
///
/// Expected: 201 with "Team successfully created!", then GET returns the same fields
#[tokio::test]
async fn creates_then_gets_team() {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let club = factory::create_club(db).await.unwrap();
    let router = teams_router().with_state(AppState::new(db.clone()));

    let (status, created) = send(
        &router,
        Method::POST,
        "/teams",
        Some(json!({ "stamnumber": club.stamnumber, "suffix": "B", "color": "Blue-White" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["message"], "Team successfully created!");
    assert_eq!(created["data"]["stamnumber"], club.stamnumber);
    assert_eq!(created["data"]["suffix"], "B");
    assert_eq!(created["data"]["color"], "Blue-White");

    let id = created["data"]["id"].as_i64().unwrap();
    let (status, fetched) = send(&router, Method::GET, &format!("/teams/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"], created["data"]);
}

/// Tests replacing a team and reading the change back.
///
/// Expected: 200 with "Team updated.", then GET reflects the new color
#[tokio::test]
async fn updates_then_gets_team() {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let club = factory::create_club(db).await.unwrap();
    let team = factory::create_team(db, club.stamnumber).await.unwrap();
    let router = teams_router().with_state(AppState::new(db.clone()));

    let uri = format!("/teams/{}", team.id);
    let update = json!({ "stamnumber": club.stamnumber, "suffix": null, "color": "Red" });
    let (status, body) = send(&router, Method::PUT, &uri, Some(update)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "success", "message": "Team updated." }));

    let (_, fetched) = send(&router, Method::GET, &uri, None).await;

    assert_eq!(
        fetched["data"],
        json!({ "id": team.id, "stamnumber": club.stamnumber, "suffix": null, "color": "Red" })
    );
}

/// Tests reading and updating unknown or non-numeric team ids.
///
/// Expected: 404 with "Team does not exist", also for a body-less PUT
#[tokio::test]
async fn unknown_team_is_not_found() {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let router = teams_router().with_state(AppState::new(test.db.as_ref().unwrap().clone()));

    for uri in ["/teams/999", "/teams/blah"] {
        for method in [Method::GET, Method::PUT] {
            let (status, body) = send(&router, method, uri, None).await;

            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body["message"], "Team does not exist");
        }
    }
}

/// Tests creating a team from an empty object.
///
/// Expected: 400 with "Invalid payload."
#[tokio::test]
async fn rejects_empty_team_payload() {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let router = teams_router().with_state(AppState::new(test.db.as_ref().unwrap().clone()));

    let (status, body) = send(&router, Method::POST, "/teams", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "status": "fail", "message": "Invalid payload." }));
}
