use super::{ApiError, AuthResponse, LoginCredentials, RecordStore, Registration};
use crate::libs::record::ChargingRecord;
use crate::libs::session::SessionContext;
use reqwest::{header, Client, Response, StatusCode};
use serde_json::{Map, Value};
use tracing::{debug, warn};

const LOGIN_URL: &str = "auth/login";
const REGISTER_URL: &str = "auth/register";
const ROWS_URL: &str = "rows";
const SEARCH_URL: &str = "admin/rows/search";
const EXPORT_URL: &str = "admin/rows/export";

/// One search result row, keys in the order the service sent them.
pub type SearchRow = Map<String, Value>;

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attaches the session's bearer credential to authenticated calls.
    pub fn with_session(mut self, session: &SessionContext) -> Self {
        self.token = session.token().map(str::to_string);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn bearer(&self) -> Result<&str, ApiError> {
        self.token.as_deref().ok_or(ApiError::SessionInvalid)
    }

    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, ApiError> {
        let res = self.client.post(self.url(LOGIN_URL)).json(credentials).send().await?;
        let res = Self::check(res, false).await?;
        res.json::<AuthResponse>().await.map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    /// Registers a new account. Only 200 and 201 count as success; any
    /// other status is returned as [`ApiError::Rejected`].
    pub async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        let res = self.client.post(self.url(REGISTER_URL)).json(registration).send().await?;
        let res = Self::check(res, false).await?;
        match res.status() {
            StatusCode::OK | StatusCode::CREATED => Ok(()),
            status => Err(ApiError::Rejected {
                status,
                message: Self::error_message(res).await,
            }),
        }
    }

    pub async fn search(&self, battery_id: &str) -> Result<Vec<SearchRow>, ApiError> {
        let res = self
            .client
            .get(self.url(SEARCH_URL))
            .bearer_auth(self.bearer()?)
            .query(&[("batteryId", battery_id)])
            .send()
            .await?;
        let res = Self::check(res, true).await?;
        let body = res.json::<Value>().await.map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        let rows = match body {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::Object(row) => Some(row),
                    _ => None,
                })
                .collect(),
            other => {
                warn!(body = %other, "search response is not an array");
                Vec::new()
            }
        };
        debug!(battery_id, rows = rows.len(), "search completed");
        Ok(rows)
    }

    /// Downloads the service-generated CSV export for `battery_id`.
    pub async fn export_csv(&self, battery_id: &str) -> Result<Vec<u8>, ApiError> {
        let res = self
            .client
            .get(self.url(EXPORT_URL))
            .bearer_auth(self.bearer()?)
            .header(header::ACCEPT, "text/csv")
            .query(&[("batteryId", battery_id)])
            .send()
            .await?;
        let res = Self::check(res, true).await?;
        Ok(res.bytes().await?.to_vec())
    }

    async fn check(res: Response, authenticated: bool) -> Result<Response, ApiError> {
        let status = res.status();
        if authenticated && matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            debug!(%status, "session rejected by service");
            return Err(ApiError::SessionInvalid);
        }
        if !status.is_success() {
            return Err(ApiError::Rejected {
                status,
                message: Self::error_message(res).await,
            });
        }
        Ok(res)
    }

    /// Extracts the `message` field from an error body.
    async fn error_message(res: Response) -> Option<String> {
        let body = res.json::<Value>().await.ok()?;
        body.get("message").and_then(Value::as_str).map(str::to_string).filter(|m| !m.is_empty())
    }
}

impl RecordStore for ApiClient {
    async fn create_record(&self, record: &ChargingRecord) -> Result<(), ApiError> {
        let res = self
            .client
            .post(self.url(ROWS_URL))
            .bearer_auth(self.bearer()?)
            .json(record)
            .send()
            .await?;
        Self::check(res, true).await?;
        debug!(battery_id = %record.battery_id, "record created");
        Ok(())
    }
}
