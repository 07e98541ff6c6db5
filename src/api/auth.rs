use serde::{Deserialize, Serialize};

#[derive(Serialize, Clone, Debug)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Body of a successful login. Both fields are optional on the wire; the
/// login command rejects responses missing either one.
#[derive(Deserialize, Debug, Default)]
pub struct AuthResponse {
    pub token: Option<String>,
    pub role: Option<String>,
}

impl AuthResponse {
    /// Token and role when both are present and non-empty.
    pub fn into_parts(self) -> Option<(String, String)> {
        match (self.token, self.role) {
            (Some(token), Some(role)) if !token.is_empty() && !role.is_empty() => Some((token, role)),
            _ => None,
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("all fields are required")]
    MissingFields,
    #[error("passwords do not match")]
    PasswordMismatch,
}

impl Registration {
    /// Checks the sign-up form and builds the request body. Name and email
    /// are trimmed; the password is sent as typed.
    pub fn from_form(name: &str, email: &str, password: &str, confirm_password: &str) -> Result<Self, RegistrationError> {
        if [name, email, password, confirm_password].iter().any(|value| value.is_empty()) {
            return Err(RegistrationError::MissingFields);
        }
        if password != confirm_password {
            return Err(RegistrationError::PasswordMismatch);
        }
        Ok(Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        })
    }
}
