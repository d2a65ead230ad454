use crate::models::Account;
use crate::models::IndexTemplate;
use crate::responses::error_page;
use crate::responses::error_response;
use askama::Template;
use axum::Extension;
use axum::http::StatusCode;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Response;

pub async fn index(Extension(Account(account)): Extension<Account>) -> Response {
    let template = IndexTemplate { account };
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(_) => error_response(StatusCode::INTERNAL_SERVER_ERROR, "Template error"),
    }
}

pub async fn whoami(Extension(Account(account)): Extension<Account>) -> String {
    account
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn handle_404() -> impl IntoResponse {
    error_page(StatusCode::NOT_FOUND, "Page not found")
}
