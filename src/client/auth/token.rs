use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{client::error::AuthError, model::user::UserDto};

pub const ACCESS_TOKEN_COOKIE: &str = "access_token_cookie";
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token_cookie";
pub const ACCESS_TOKEN_MINUTES: i64 = 15;
pub const REFRESH_TOKEN_DAYS: i64 = 30;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Identity carried by both login tokens.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub username: String,
    /// Stamnumber of the club the user belongs to.
    pub club: Option<String>,
    pub admin: bool,
    pub kind: TokenKind,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn for_user(user: &UserDto, kind: TokenKind, now: DateTime<Utc>) -> Self {
        Self {
            sub: user.id.to_string(),
            username: user.username.clone(),
            club: user.club.clone(),
            admin: user.admin,
            kind,
            iat: now.timestamp(),
            exp: (now + lifetime(kind)).timestamp(),
        }
    }

    /// Same identity in a new token of `kind`.
    pub fn reissue(&self, kind: TokenKind, now: DateTime<Utc>) -> Self {
        Self {
            kind,
            iat: now.timestamp(),
            exp: (now + lifetime(kind)).timestamp(),
            ..self.clone()
        }
    }
}

fn lifetime(kind: TokenKind) -> Duration {
    match kind {
        TokenKind::Access => Duration::minutes(ACCESS_TOKEN_MINUTES),
        TokenKind::Refresh => Duration::days(REFRESH_TOKEN_DAYS),
    }
}

pub fn issue(secret: &str, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Checks signature and expiry, and that the token is of the `expected` kind.
pub fn verify(secret: &str, token: &str, expected: TokenKind) -> Result<Claims, AuthError> {
    let validation = Validation::new(Algorithm::HS256);

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| AuthError::InvalidToken(e.to_string()))?
    .claims;

    if claims.kind != expected {
        return Err(AuthError::InvalidToken(format!(
            "expected {:?} token, got {:?}",
            expected, claims.kind
        )));
    }

    Ok(claims)
}
