use reqwest::Client;
use url::Url;

use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::user::{UserDto, UserListDto},
};

pub async fn get_all_users(http: &Client, base: &Url) -> Result<Vec<UserDto>, ApiError> {
    let response = send_request(get(http, base, "users")?).await?;
    let list: UserListDto = parse_response(response).await?;
    Ok(list.users)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn unwraps_user_list() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/users")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "status": "success",
                    "data": {"users": [{
                        "id": 1, "username": "jdoe", "password": "secret",
                        "email": "jdoe@league.be", "club": "1234",
                        "admin": false, "superadmin": false
                    }]}
                }"#,
            )
            .create_async()
            .await;

        let base = Url::parse(&format!("{}/", server.url())).unwrap();
        let users = get_all_users(&Client::new(), &base).await.unwrap();

        mock.assert_async().await;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].club.as_deref(), Some("1234"));
    }
}
