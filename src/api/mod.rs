//! Client for the battery-log REST service.
//!
//! The service owns storage, search and export of charging records and
//! issues bearer tokens. This module only shapes requests and classifies
//! responses.
//!
//! ## Error classification
//!
//! - **401 / 403, or no token in the session**: [`ApiError::SessionInvalid`].
//!   Callers sign the user out rather than retrying.
//! - **Any other non-success status**: [`ApiError::Rejected`], carrying the
//!   `message` field of the response body when the service sent one.
//! - **Connection or decoding problems**: [`ApiError::Transport`] /
//!   [`ApiError::InvalidResponse`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use battlog::api::{ApiClient, RecordStore};
//! use battlog::libs::record::ChargingRecord;
//! use battlog::libs::session::SessionContext;
//!
//! # async fn run() -> Result<(), battlog::api::ApiError> {
//! let session = SessionContext::restore();
//! let client = ApiClient::new("http://localhost:5000").with_session(&session);
//! client.create_record(&ChargingRecord::default()).await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::record::ChargingRecord;
use reqwest::StatusCode;

pub mod auth;
pub mod client;

pub use auth::{AuthResponse, LoginCredentials, Registration, RegistrationError};
pub use client::{ApiClient, SearchRow};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("session is missing or no longer valid")]
    SessionInvalid,
    #[error("request rejected with status {status}")]
    Rejected { status: StatusCode, message: Option<String> },
    #[error("invalid response from server: {0}")]
    InvalidResponse(String),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Human-readable message supplied by the service, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_session_invalid(&self) -> bool {
        matches!(self, ApiError::SessionInvalid)
    }
}

/// Persists charging records.
///
/// Implemented by [`ApiClient`] against the REST service; tests provide
/// in-memory implementations.
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    async fn create_record(&self, record: &ChargingRecord) -> Result<(), ApiError>;
}
