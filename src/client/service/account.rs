use reqwest::Client;
use url::Url;

use crate::{
    client::{api::user::get_all_users, error::ClientError},
    model::user::UserDto,
};

/// Finds the user with this username and password.
///
/// Passwords are stored and compared as plaintext.
pub async fn authenticate(
    http: &Client,
    users_api: &Url,
    username: &str,
    password: &str,
) -> Result<Option<UserDto>, ClientError> {
    let users = get_all_users(http, users_api).await?;

    Ok(users
        .into_iter()
        .find(|user| user.username == username && user.password == password))
}
