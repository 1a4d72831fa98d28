use axum::http::{Method, StatusCode};
use serde_json::json;
use test_utils::builder::TestBuilder;

use super::send;
use crate::server::{router::users_router, state::AppState};

fn payload(email: &str) -> serde_json::Value {
    json!({
        "username": "jdoe",
        "password": "secret",
        "email": email,
        "club": "1234"
    })
}

/// Tests registering a user and reading it back.
///
/// Expected: 201 with "<email> was added!", then 200 with identical fields
#[tokio::test]
async fn creates_then_gets_user() {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let router = users_router().with_state(AppState::new(test.db.as_ref().unwrap().clone()));

    let (status, created) =
        send(&router, Method::POST, "/users", Some(payload("jdoe@league.be"))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "success");
    assert_eq!(created["message"], "jdoe@league.be was added!");

    let id = created["data"]["id"].as_i64().unwrap();
    let (status, fetched) = send(&router, Method::GET, &format!("/users/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"], created["data"]);
    assert_eq!(fetched["data"]["club"], "1234");
    assert_eq!(fetched["data"]["admin"], false);
}

/// Tests registering a user with a body that lacks a required field.
///
/// Expected: 400 with "Invalid payload."
#[tokio::test]
async fn rejects_incomplete_payload() {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let router = users_router().with_state(AppState::new(test.db.as_ref().unwrap().clone()));

    let (status, body) = send(
        &router,
        Method::POST,
        "/users",
        Some(json!({ "username": "jdoe" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "status": "fail", "message": "Invalid payload." }));
}

/// Tests registering two users with the same email.
///
/// Expected: 400 with the duplicate email message
#[tokio::test]
async fn rejects_duplicate_email() {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let router = users_router().with_state(AppState::new(test.db.as_ref().unwrap().clone()));

    send(&router, Method::POST, "/users", Some(payload("dup@league.be"))).await;
    let (status, body) =
        send(&router, Method::POST, "/users", Some(payload("dup@league.be"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Sorry. That email already exists.");
}

/// Tests fetching a user with an id that is not a number.
///
/// Expected: 404 with "User does not exist"
#[tokio::test]
async fn treats_non_numeric_id_as_missing() {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let router = users_router().with_state(AppState::new(test.db.as_ref().unwrap().clone()));

    let (status, body) = send(&router, Method::GET, "/users/abc", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "status": "fail", "message": "User does not exist" }));
}

/// Tests listing users.
///
/// Expected: 200 with the users under `data.users`
#[tokio::test]
async fn lists_users() {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    test_utils::factory::create_user(db).await.unwrap();
    test_utils::factory::create_user(db).await.unwrap();
    let router = users_router().with_state(AppState::new(db.clone()));

    let (status, body) = send(&router, Method::GET, "/users", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["users"].as_array().unwrap().len(), 2);
}
