//! Credentials and the `Authorization` header they produce.

pub mod login;

use std::fmt;

use estatus_core::config::BackendConfig;
use estatus_core::errors::BackendError;
use reqwest::Url;

use crate::transport::Transport;

pub use login::{login, AuthToken};

/// How requests to the backend are authenticated.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// No `Authorization` header.
    None,
    /// `Authorization: Bearer <token>`.
    BearerToken(String),
    /// `Authorization: Key <key>`.
    ApiKey(String),
    /// Exchanged for a bearer token at the login endpoint.
    UserPassword { user: String, password: String },
}

impl Credentials {
    /// Pick credentials from config: access token, then API key, then
    /// user/password, then none.
    pub fn from_config(config: &BackendConfig) -> Self {
        let set = |v: &Option<String>| v.as_deref().filter(|s| !s.is_empty()).map(str::to_string);

        if let Some(token) = set(&config.access_token) {
            Credentials::BearerToken(token)
        } else if let Some(key) = set(&config.api_key) {
            Credentials::ApiKey(key)
        } else if let Some(user) = set(&config.user) {
            Credentials::UserPassword {
                user,
                password: config.password.clone().unwrap_or_default(),
            }
        } else {
            Credentials::None
        }
    }

    pub fn method_name(&self) -> &'static str {
        match self {
            Credentials::None => "none",
            Credentials::BearerToken(_) => "bearer",
            Credentials::ApiKey(_) => "api_key",
            Credentials::UserPassword { .. } => "login",
        }
    }

    /// The `Authorization` value to send with every page request.
    ///
    /// Only the user/password variant talks to the backend.
    pub fn authorization<T>(&self, transport: &T, api_url: &Url) -> Result<Option<String>, BackendError>
    where
        T: Transport + ?Sized,
    {
        match self {
            Credentials::None => Ok(None),
            Credentials::BearerToken(token) => Ok(Some(format!("Bearer {token}"))),
            Credentials::ApiKey(key) => Ok(Some(format!("Key {key}"))),
            Credentials::UserPassword { user, password } => {
                let token = login(transport, api_url, user, password)?;
                Ok(Some(format!("Bearer {}", token.access_token)))
            }
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::None => f.write_str("None"),
            Credentials::BearerToken(_) => f.write_str("BearerToken(<redacted>)"),
            Credentials::ApiKey(_) => f.write_str("ApiKey(<redacted>)"),
            Credentials::UserPassword { user, .. } => f
                .debug_struct("UserPassword")
                .field("user", user)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}
