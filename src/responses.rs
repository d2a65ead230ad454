use crate::models::ErrorTemplate;
use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

pub fn error_response(status: StatusCode, message: &'static str) -> Response {
    (status, message).into_response()
}

/// Renders the HTML error page, degrading to plain text if the template fails.
pub fn error_page(status: StatusCode, message: &'static str) -> Response {
    let template = ErrorTemplate {
        error_code: status.as_u16().to_string(),
        error_message: message.to_string(),
    };

    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!("Failed to render error page: {}", e);
            error_response(status, message)
        }
    }
}
