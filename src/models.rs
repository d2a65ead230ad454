use crate::auth::AuthChecker;
use askama::Template;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub checker: Arc<AuthChecker>,
}

impl AppState {
    pub fn new(checker: AuthChecker) -> Self {
        Self {
            checker: Arc::new(checker),
        }
    }
}

/// Account name of a request that passed the cookie check.
#[derive(Clone)]
pub struct Account(pub String);

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub account: String,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub error_code: String,
    pub error_message: String,
}
