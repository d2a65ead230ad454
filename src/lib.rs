pub mod auth;
pub mod config;
pub mod middleware;
pub mod models;
pub mod responses;
pub mod routes;

pub use auth::{AuthChecker, CookieSource};
pub use config::Config;
pub use models::AppState;
pub use routes::app;
