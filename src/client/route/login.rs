use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use serde::Deserialize;

use crate::client::{
    auth::{
        guard::MaybeUser,
        login_cookies, logout_cookies, refreshed_cookie,
        token::{verify, TokenKind, REFRESH_TOKEN_COOKIE},
    },
    component::layout::{escape, page},
    error::{AuthError, ClientError},
    service::account::authenticate,
    state::ClientState,
};

pub const INVALID_CREDENTIALS: &str = "Invalid username or password.";

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

fn login_form(error: Option<&str>) -> String {
    let error = error
        .map(|message| format!("<p class=\"error\">{}</p>\n", escape(message)))
        .unwrap_or_default();

    format!(
        "{error}<form method=\"post\" action=\"/login\">\n\
         <label>Username <input name=\"username\" required></label>\n\
         <label>Password <input name=\"password\" type=\"password\" required></label>\n\
         <button type=\"submit\">Log in</button>\n\
         </form>"
    )
}

pub async fn login_page(MaybeUser(user): MaybeUser) -> Html<String> {
    page("Log in", user.as_ref(), &login_form(None))
}

/// Checks the credentials against the users service and sets the login cookies.
pub async fn login(
    State(state): State<ClientState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, ClientError> {
    let user = authenticate(
        &state.http,
        &state.config.users_api,
        &form.username,
        &form.password,
    )
    .await?;

    let Some(user) = user else {
        tracing::warn!("Failed login for {}", form.username);
        let html = page("Log in", None, &login_form(Some(INVALID_CREDENTIALS)));
        return Ok((StatusCode::UNAUTHORIZED, html).into_response());
    };

    let jar = login_cookies(jar, &state.config.jwt_secret, &user, Utc::now())?;
    tracing::info!("User {} logged in", user.id);

    Ok((jar, Redirect::to("/")).into_response())
}

pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (logout_cookies(jar), Redirect::to("/"))
}

/// Exchanges the refresh cookie for a new access cookie.
pub async fn refresh(
    State(state): State<ClientState>,
    jar: CookieJar,
) -> Result<Response, ClientError> {
    let token = jar
        .get(REFRESH_TOKEN_COOKIE)
        .ok_or(AuthError::MissingToken)?
        .value()
        .to_string();
    let claims = verify(&state.config.jwt_secret, &token, TokenKind::Refresh)?;

    let jar = refreshed_cookie(jar, &state.config.jwt_secret, &claims, Utc::now())?;

    Ok((jar, Redirect::to("/")).into_response())
}
