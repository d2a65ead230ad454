use crate::auth::LEGACY_SECRET;
use std::env;
use std::fmt;
use std::net::SocketAddr;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_ADDR is not a valid socket address: {0}")]
    InvalidBindAddr(String),
    #[error("AUTH_SECRET is set but empty")]
    EmptySecret,
}

#[derive(Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub auth_secret: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bind_addr", &self.bind_addr)
            .field("auth_secret", &"<redacted>")
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::var("BIND_ADDR").ok(), env::var("AUTH_SECRET").ok())
    }

    fn from_vars(bind_addr: Option<String>, auth_secret: Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = bind_addr.unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr))?;

        let auth_secret = match auth_secret {
            Some(secret) if secret.is_empty() => return Err(ConfigError::EmptySecret),
            Some(secret) => secret,
            None => {
                warn!("AUTH_SECRET not set, falling back to the built-in legacy secret");
                LEGACY_SECRET.to_string()
            }
        };

        Ok(Self {
            bind_addr,
            auth_secret,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(config.auth_secret, LEGACY_SECRET);
    }

    #[test]
    fn explicit_values_win() {
        let config =
            Config::from_vars(Some("127.0.0.1:8080".to_string()), Some("s3cret".to_string()))
                .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.auth_secret, "s3cret");
    }

    #[test]
    fn bad_bind_addr_is_rejected() {
        let err = Config::from_vars(Some("not-an-addr".to_string()), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr(ref v) if v == "not-an-addr"));
    }

    #[test]
    fn empty_secret_is_rejected() {
        let err = Config::from_vars(None, Some(String::new())).unwrap_err();
        assert!(matches!(err, ConfigError::EmptySecret));
    }

    #[test]
    fn debug_hides_secret() {
        let config = Config::from_vars(None, Some("hunter2".to_string())).unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("0.0.0.0:3000"));
    }
}
