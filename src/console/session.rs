//! Console-side session handling.
//!
//! The session is an explicit context created by [`SessionContext::login`]
//! and passed to whatever needs it, never a process-wide flag. Init
//! and teardown rules: on startup, [`SessionStore::rehydrate`] restores
//! a previously persisted session (only ever written when the user
//! asked to be remembered); logout clears both the client token and
//! the persisted copy.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::http::{ApiClient, ClientError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionContext {
    pub token: String,
    pub username: String,
    pub remember_me: bool,
}

#[derive(Serialize)]
struct LoginForm<'a> {
    #[serde(rename = "usernameOrEmail")]
    username_or_email: &'a str,
    password: &'a str,
    #[serde(rename = "rememberMe")]
    remember_me: bool,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

impl SessionContext {
    /// Authenticates against the backend and arms the client with the
    /// returned bearer token.
    pub async fn login(
        api: &mut ApiClient,
        username: &str,
        password: &str,
        remember_me: bool,
    ) -> Result<Self, ClientError> {
        let form = LoginForm {
            username_or_email: username,
            password,
            remember_me,
        };
        let response: LoginResponse = api.post_json("/Account/login", &form).await?;
        api.set_token(Some(response.token.clone()));

        Ok(Self {
            token: response.token,
            username: username.to_string(),
            remember_me,
        })
    }

    /// Re-arms a client from a rehydrated session.
    pub fn apply(&self, api: &mut ApiClient) {
        api.set_token(Some(self.token.clone()));
    }

    /// Tears the session down: the client loses its token and the
    /// persisted copy, if any, is removed.
    pub fn logout(self, api: &mut ApiClient, store: &SessionStore) -> io::Result<()> {
        api.set_token(None);
        store.clear()
    }
}

/// Disk-backed replacement for the browser's local storage.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Persists the session only when the user asked to be
    /// remembered; otherwise any stale copy is dropped.
    pub fn save(&self, session: &SessionContext) -> io::Result<()> {
        if !session.remember_me {
            return self.clear();
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let body = serde_json::to_string_pretty(session)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, body)
    }

    /// Restores a persisted session, if one exists and still parses.
    pub fn rehydrate(&self) -> Option<SessionContext> {
        let body = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&body).ok()
    }

    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}
