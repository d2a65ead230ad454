pub mod general;

use crate::middleware::require_auth;
use crate::models::AppState;
use axum::{Router, middleware, routing::get};
use tower_cookies::CookieManagerLayer;

pub fn app(state: AppState) -> Router {
    let protected = Router::new()
        .route("/", get(general::index))
        .route("/whoami", get(general::whoami))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(protected)
        .route("/health", get(general::health))
        .fallback(general::handle_404)
        .with_state(state)
        .layer(CookieManagerLayer::new())
}
