use sha2::{Digest, Sha256};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use subtle::ConstantTimeEq;
use tower_cookies::Cookies;
use tracing::debug;

pub const AUTH_KEY_COOKIE: &str = "authKey";
pub const ACC_NAME_COOKIE: &str = "accName";

/// Secret the tokens were historically derived from. Used when nothing else is configured.
pub const LEGACY_SECRET: &str = "wnode_auth_secret_key_2024";

/// Anything that can hand out cookie values by name.
pub trait CookieSource {
    fn cookie(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl CookieSource for HashMap<String, String> {
    fn cookie(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl CookieSource for BTreeMap<String, String> {
    fn cookie(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl CookieSource for Cookies {
    fn cookie(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|c| Cow::Owned(c.value().to_string()))
    }
}

/// Checks `authKey` against `hex(sha256(accName + secret))`.
#[derive(Clone)]
pub struct AuthChecker {
    secret: String,
}

impl AuthChecker {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn expected_token(&self, account: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(account.as_bytes());
        hasher.update(self.secret.as_bytes());
        hex::encode(hasher.finalize())
    }

    pub fn is_authorized<C: CookieSource + ?Sized>(&self, cookies: &C) -> bool {
        self.authorized_account(cookies).is_some()
    }

    /// Same check as [`is_authorized`](Self::is_authorized), handing back the account name on success.
    pub fn authorized_account<C: CookieSource + ?Sized>(&self, cookies: &C) -> Option<String> {
        let auth_key = non_empty(cookies.cookie(AUTH_KEY_COOKIE));
        let account = non_empty(cookies.cookie(ACC_NAME_COOKIE));

        let (Some(auth_key), Some(account)) = (auth_key, account) else {
            debug!("Authorization denied: missing credential cookie");
            return None;
        };

        let expected = self.expected_token(&account);
        if verify_token(&auth_key, &expected) {
            Some(account.into_owned())
        } else {
            debug!("Authorization denied for account {}: token mismatch", account);
            None
        }
    }
}

impl fmt::Debug for AuthChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthChecker")
            .field("secret", &"<redacted>")
            .finish()
    }
}

fn non_empty(value: Option<Cow<'_, str>>) -> Option<Cow<'_, str>> {
    value.filter(|v| !v.is_empty())
}

// Constant-time. Unequal lengths compare false.
fn verify_token(provided: &str, expected: &str) -> bool {
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}
