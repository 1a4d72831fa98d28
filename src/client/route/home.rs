use axum::{extract::State, response::Html};

use crate::client::{
    auth::guard::MaybeUser,
    component::layout::{escape, link, page},
    error::ClientError,
    service::league::LeagueService,
    state::ClientState,
};

/// Lists the divisions with links to their table and fixtures.
pub async fn home(
    State(state): State<ClientState>,
    MaybeUser(user): MaybeUser,
) -> Result<Html<String>, ClientError> {
    let divisions = LeagueService::new(&state.http, &state.config)
        .divisions()
        .await?;

    let mut content = String::from("<ul class=\"divisions\">\n");
    for division in &divisions {
        content.push_str(&format!(
            "<li>{} ({} | {})</li>\n",
            escape(&division.divisionname),
            link(&format!("/divisions/{}/table", division.id), "table"),
            link(&format!("/divisions/{}/fixtures", division.id), "fixtures"),
        ));
    }
    content.push_str("</ul>");

    Ok(page("Divisions", user.as_ref(), &content))
}
