use axum::{
    body::Body,
    http::{header, Method, Request, Response},
    Router,
};
use chrono::Utc;
use mockito::ServerGuard;
use tower::ServiceExt;
use url::Url;

use crate::{
    client::{
        auth::token::{issue, Claims, TokenKind, ACCESS_TOKEN_COOKIE},
        config::{ClientConfig, DEFAULT_WEATHER_API_URL},
        router::router,
        state::ClientState,
    },
    model::user::UserDto,
};

mod r#match;

pub const SECRET: &str = "route-test-secret";

/// Client router with every backend pointed at `server`.
fn client(server: &ServerGuard) -> Router {
    let base = Url::parse(&format!("{}/", server.url())).unwrap();
    let config = ClientConfig {
        jwt_secret: SECRET.to_string(),
        users_api: base.clone(),
        teams_api: base.clone(),
        matches_api: base,
        weather_api: Url::parse(DEFAULT_WEATHER_API_URL).unwrap(),
        bind_address: "127.0.0.1:0".to_string(),
    };

    router(ClientState::new(reqwest::Client::new(), config))
}

fn user(club: Option<&str>, admin: bool) -> UserDto {
    UserDto {
        id: 1,
        username: "jdoe".to_string(),
        password: "secret".to_string(),
        email: "jdoe@league.be".to_string(),
        club: club.map(str::to_string),
        admin,
        superadmin: false,
    }
}

/// Cookie header value carrying a fresh access token for `user`.
fn access_cookie(user: &UserDto) -> String {
    let claims = Claims::for_user(user, TokenKind::Access, Utc::now());
    format!("{}={}", ACCESS_TOKEN_COOKIE, issue(SECRET, &claims).unwrap())
}

async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    form: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = match form {
        Some(form) => builder
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    router.clone().oneshot(request).await.unwrap()
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
