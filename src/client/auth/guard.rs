use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;

use crate::client::{
    auth::token::{verify, Claims, TokenKind, ACCESS_TOKEN_COOKIE},
    error::{AuthError, ClientError},
    state::ClientState,
};

pub enum Permission {
    Admin,
    /// Admin, or member of the club with this stamnumber.
    Club(i32),
}

/// The logged-in user, taken from a valid access cookie.
///
/// Extraction fails with `AuthError`, which redirects to the login page.
pub struct CurrentUser(pub Claims);

impl CurrentUser {
    pub fn require(&self, permission: Permission) -> Result<(), AuthError> {
        let claims = &self.0;
        if claims.admin {
            return Ok(());
        }

        match permission {
            Permission::Admin => Err(AuthError::AccessDenied(
                "Only administrators can do this.".to_string(),
            )),
            Permission::Club(stamnumber) => {
                if claims.club.as_deref() == Some(stamnumber.to_string().as_str()) {
                    Ok(())
                } else {
                    tracing::warn!(
                        "User {} denied access to club {}",
                        claims.username,
                        stamnumber
                    );
                    Err(AuthError::AccessDenied(
                        "Only members of the home club can do this.".to_string(),
                    ))
                }
            }
        }
    }
}

impl FromRequestParts<ClientState> for CurrentUser {
    type Rejection = ClientError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ClientState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let cookie = jar
            .get(ACCESS_TOKEN_COOKIE)
            .ok_or(AuthError::MissingToken)?;

        let claims = verify(&state.config.jwt_secret, cookie.value(), TokenKind::Access)?;

        Ok(Self(claims))
    }
}

/// The logged-in user if there is one; pages readable by anyone use this to show the
/// account links.
pub struct MaybeUser(pub Option<Claims>);

impl FromRequestParts<ClientState> for MaybeUser {
    type Rejection = ClientError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ClientState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(
            CurrentUser::from_request_parts(parts, state)
                .await
                .ok()
                .map(|user| user.0),
        ))
    }
}
