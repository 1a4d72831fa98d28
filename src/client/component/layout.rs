use std::borrow::Cow;

use axum::response::Html;

use crate::client::auth::token::Claims;

pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

pub fn escape_attribute(text: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(text)
}

pub fn link(href: &str, text: &str) -> String {
    format!("<a href=\"{}\">{}</a>", escape_attribute(href), escape(text))
}

/// Wraps `content` in the page skeleton with the navigation bar.
///
/// `content` is inserted as is and must already be escaped.
pub fn page(title: &str, user: Option<&Claims>, content: &str) -> Html<String> {
    let account = match user {
        Some(claims) => format!(
            "<span>{}</span> <a href=\"/logout\">Log out</a>",
            escape(&claims.username)
        ),
        None => "<a href=\"/login\">Log in</a>".to_string(),
    };

    Html(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{title} | League</title></head>\n\
         <body>\n\
         <nav><a href=\"/\">League</a> {account}</nav>\n\
         <main>\n<h1>{title}</h1>\n{content}\n</main>\n\
         </body>\n\
         </html>\n",
        title = escape(title),
    ))
}
