//! Login cookies.
//!
//! A successful login stores two HS256 JWTs in `HttpOnly` cookies: a short-lived
//! access token checked on every guarded request and a long-lived refresh token that
//! can only be exchanged for a new access token.

pub mod guard;
pub mod token;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{DateTime, Utc};

use crate::{
    client::{
        auth::token::{
            issue, Claims, TokenKind, ACCESS_TOKEN_COOKIE, ACCESS_TOKEN_MINUTES,
            REFRESH_TOKEN_COOKIE, REFRESH_TOKEN_DAYS,
        },
        error::ClientError,
    },
    model::user::UserDto,
};

fn token_cookie(name: &'static str, token: String, max_age: time::Duration) -> Cookie<'static> {
    Cookie::build((name, token))
        .http_only(true)
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(max_age)
        .build()
}

/// Adds a fresh access and refresh cookie for `user`.
pub fn login_cookies(
    jar: CookieJar,
    secret: &str,
    user: &UserDto,
    now: DateTime<Utc>,
) -> Result<CookieJar, ClientError> {
    let access = issue(secret, &Claims::for_user(user, TokenKind::Access, now))?;
    let refresh = issue(secret, &Claims::for_user(user, TokenKind::Refresh, now))?;

    Ok(jar
        .add(token_cookie(
            ACCESS_TOKEN_COOKIE,
            access,
            time::Duration::minutes(ACCESS_TOKEN_MINUTES),
        ))
        .add(token_cookie(
            REFRESH_TOKEN_COOKIE,
            refresh,
            time::Duration::days(REFRESH_TOKEN_DAYS),
        )))
}

/// Adds a new access cookie carrying the identity of a verified refresh token.
pub fn refreshed_cookie(
    jar: CookieJar,
    secret: &str,
    refresh: &Claims,
    now: DateTime<Utc>,
) -> Result<CookieJar, ClientError> {
    let access = issue(secret, &refresh.reissue(TokenKind::Access, now))?;

    Ok(jar.add(token_cookie(
        ACCESS_TOKEN_COOKIE,
        access,
        time::Duration::minutes(ACCESS_TOKEN_MINUTES),
    )))
}

pub fn logout_cookies(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(ACCESS_TOKEN_COOKIE).path("/"))
        .remove(Cookie::build(REFRESH_TOKEN_COOKIE).path("/"))
}
