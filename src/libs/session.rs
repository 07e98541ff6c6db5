//! Explicit session context for authenticated calls.
//!
//! The context is created once at startup ([`SessionContext::restore`]),
//! handed to every command and API client that needs the bearer credential,
//! and torn down with [`SessionContext::sign_out`]. Nothing reads the token
//! from ambient state.

use super::secret::Secret;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Encrypted file holding the serialized session.
pub const SESSION_FILE: &str = ".session";

/// Role assigned by the authentication service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    #[serde(untagged)]
    Other(String),
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "admin" => Role::Admin,
            "user" => Role::User,
            other => Role::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::User => write!(f, "user"),
            Role::Other(role) => write!(f, "{}", role),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct StoredSession {
    token: String,
    role: Role,
}

#[derive(Debug, Clone)]
pub struct SessionContext {
    token: Option<String>,
    role: Option<Role>,
    store: Secret,
}

impl SessionContext {
    /// Loads the persisted session, or an empty one when none is stored or
    /// the stored blob cannot be decrypted.
    pub fn restore() -> Self {
        Self::restore_from(Secret::new(SESSION_FILE))
    }

    pub fn restore_from(store: Secret) -> Self {
        let stored = store.read().ok().and_then(|raw| serde_json::from_str::<StoredSession>(&raw).ok());
        match stored {
            Some(session) => {
                debug!(role = %session.role, "restored session");
                Self {
                    token: Some(session.token),
                    role: Some(session.role),
                    store,
                }
            }
            None => Self::anonymous(store),
        }
    }

    pub fn anonymous(store: Secret) -> Self {
        Self { token: None, role: None, store }
    }

    pub fn sign_in(&mut self, token: &str, role: Role) -> Result<()> {
        let stored = StoredSession {
            token: token.to_string(),
            role: role.clone(),
        };
        self.store.write(&serde_json::to_string(&stored)?)?;
        self.token = Some(stored.token);
        self.role = Some(role);
        Ok(())
    }

    pub fn sign_out(&mut self) -> Result<()> {
        self.token = None;
        self.role = None;
        self.store.delete()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn role(&self) -> Option<&Role> {
        self.role.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.is_signed_in() && self.role == Some(Role::Admin)
    }
}
