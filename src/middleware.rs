use crate::models::{Account, AppState};
use crate::responses::error_page;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tower_cookies::Cookies;
use tracing::debug;

/// Lets the request through only when `accName`/`authKey` check out. Fails closed.
pub async fn require_auth(
    State(state): State<AppState>,
    cookies: Cookies,
    mut request: Request,
    next: Next,
) -> Response {
    match state.checker.authorized_account(&cookies) {
        Some(account) => {
            debug!("Authorized {} for {}", account, request.uri().path());
            request.extensions_mut().insert(Account(account));
            next.run(request).await
        }
        None => {
            debug!("Rejected unauthorized request to {}", request.uri().path());
            error_page(StatusCode::UNAUTHORIZED, "Unauthorized")
        }
    }
}
