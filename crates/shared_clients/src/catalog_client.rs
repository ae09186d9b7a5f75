use async_trait::async_trait;
use catalog::CreateRequest;
use common::config::CatalogConnectionConfig;
use common::error::diagnostics::DiagnosticMessage;
use common::types::FullyQualifiedEntityName;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Response, StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const VERSION_PATH: &str = "system/version";

#[derive(Debug, Error)]
pub enum CatalogClientError {
    #[error("entity not found: {context}")]
    NotFound { context: DiagnosticMessage },
    #[error("connectivity error: {context}")]
    FailedToConnect { context: DiagnosticMessage },
    #[error("request rejected: {context}")]
    Rejected { context: DiagnosticMessage },
    #[error("unauthorized: {context}")]
    Unauthorized { context: DiagnosticMessage },
    #[error("invalid client configuration: {context}")]
    InvalidConfig { context: DiagnosticMessage },
    #[error("unexpected response: {context}")]
    UnexpectedError { context: DiagnosticMessage },
}

impl CatalogClientError {
    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            context: DiagnosticMessage::new(message.into()),
        }
    }

    #[track_caller]
    pub fn failed_to_connect(message: impl Into<String>) -> Self {
        Self::FailedToConnect {
            context: DiagnosticMessage::new(message.into()),
        }
    }

    #[track_caller]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            context: DiagnosticMessage::new(message.into()),
        }
    }

    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            context: DiagnosticMessage::new(message.into()),
        }
    }

    #[track_caller]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            context: DiagnosticMessage::new(message.into()),
        }
    }

    #[track_caller]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::UnexpectedError {
            context: DiagnosticMessage::new(message.into()),
        }
    }
}

impl From<reqwest::Error> for CatalogClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            CatalogClientError::failed_to_connect(err.to_string())
        } else if let Some(status) = err.status() {
            match status {
                StatusCode::NOT_FOUND => CatalogClientError::not_found(err.to_string()),
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    CatalogClientError::unauthorized(err.to_string())
                }
                _ => CatalogClientError::unexpected(format!(
                    "Unexpected error due to {} - status code {}",
                    err, status
                )),
            }
        } else {
            CatalogClientError::unexpected(format!(
                "Unexpected error trying to send catalog request: {}",
                err
            ))
        }
    }
}

#[derive(Deserialize)]
struct CatalogErrorBody {
    message: String,
}

/// Operations the fixtures need from a catalog server.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `true` when the server answers its version endpoint successfully.
    async fn health_check(&self) -> Result<bool, CatalogClientError>;

    /// Create the entity, or update it if one with the same FQN exists.
    /// Returns the entity as stored by the server.
    async fn create_or_update<R>(&self, request: &R) -> Result<Value, CatalogClientError>
    where
        R: CreateRequest;

    async fn get_by_name(
        &self,
        endpoint: &str,
        fqn: &FullyQualifiedEntityName,
    ) -> Result<Option<Value>, CatalogClientError>;

    async fn delete(
        &self,
        endpoint: &str,
        id: &str,
        recursive: bool,
        hard_delete: bool,
    ) -> Result<(), CatalogClientError>;
}

#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    http: Client,
}

impl CatalogClient {
    pub fn new(config: &CatalogConnectionConfig) -> Result<Self, CatalogClientError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = config.bearer_token() {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| CatalogClientError::invalid_config(format!("bad jwt token: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CatalogClientError::invalid_config(e.to_string()))?;

        Ok(Self {
            base_url: config.host_port.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `path` with `segment` appended as one percent-encoded path segment,
    /// so names holding `/`, `?` or `#` cannot address another resource.
    fn url_with_segment(&self, path: &str, segment: &str) -> Result<Url, CatalogClientError> {
        let mut url = Url::parse(&self.url(path))
            .map_err(|e| CatalogClientError::invalid_config(format!("bad catalog url: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| {
                CatalogClientError::invalid_config(format!(
                    "catalog url {} cannot be extended with a path",
                    self.base_url
                ))
            })?
            .push(segment);
        Ok(url)
    }

    async fn error_message(resp: Response, fallback: &str) -> String {
        resp.json::<CatalogErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| fallback.to_string())
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn health_check(&self) -> Result<bool, CatalogClientError> {
        let url = self.url(VERSION_PATH);
        let resp = self.http.get(&url).send().await?;
        let status = resp.status();

        if status.is_success() {
            let body: Value = resp.json().await.unwrap_or(Value::Null);
            info!(%url, "catalog is healthy, server version {}", body["version"]);
            Ok(true)
        } else {
            warn!(%url, %status, "catalog health check failed");
            Ok(false)
        }
    }

    async fn create_or_update<R>(&self, request: &R) -> Result<Value, CatalogClientError>
    where
        R: CreateRequest,
    {
        let url = self.url(request.endpoint());
        debug!(%url, name = %request.name(), "create or update");
        let resp = self.http.put(&url).json(request).send().await?;

        match resp.status() {
            status if status.is_success() => Ok(resp.json().await?),
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT => {
                let message = Self::error_message(resp, "could not parse error body").await;
                Err(CatalogClientError::rejected(message))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                let message = Self::error_message(resp, "not authorized").await;
                Err(CatalogClientError::unauthorized(message))
            }
            status => Err(CatalogClientError::unexpected(format!(
                "Unexpected error creating {} - status code {}",
                request.name(),
                status.as_u16()
            ))),
        }
    }

    async fn get_by_name(
        &self,
        endpoint: &str,
        fqn: &FullyQualifiedEntityName,
    ) -> Result<Option<Value>, CatalogClientError> {
        let url = self.url_with_segment(&format!("{endpoint}/name"), fqn.as_str())?;
        debug!(%url, "get by name");
        let resp = self.http.get(url).send().await?;

        match resp.status() {
            status if status.is_success() => Ok(Some(resp.json().await?)),
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(CatalogClientError::unexpected(format!(
                "Failed to fetch {} - status code {}",
                fqn,
                status.as_u16()
            ))),
        }
    }

    async fn delete(
        &self,
        endpoint: &str,
        id: &str,
        recursive: bool,
        hard_delete: bool,
    ) -> Result<(), CatalogClientError> {
        let url = self.url_with_segment(endpoint, id)?;
        let resp = self
            .http
            .delete(url)
            .query(&[("recursive", recursive), ("hardDelete", hard_delete)])
            .send()
            .await?;

        match resp.status() {
            status if status.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Err(CatalogClientError::not_found(format!(
                "{endpoint}/{id}"
            ))),
            status => Err(CatalogClientError::unexpected(format!(
                "Failed to delete {endpoint}/{id} - status code {}",
                status.as_u16()
            ))),
        }
    }
}
