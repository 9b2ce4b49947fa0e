//! # Article API Service
//!
//! The backend collaborator: an async trait the controller talks to, a
//! reqwest implementation of it against the REST surface, and the error
//! taxonomy shared by both.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::RequestBuilder;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::{ApiConfig, REQUEST_TIMEOUT_SECS};
use crate::panel::models::{Article, ArticleId, Draft, ListQuery};

/// Anti-forgery token header carried on mutating requests.
pub const HEADER_CSRF_TOKEN: &str = "X-CSRF-TOKEN";
/// Request marker so the backend answers JSON instead of a redirect.
pub const HEADER_REQUESTED_WITH: &str = "X-Requested-With";
pub const REQUESTED_WITH_AJAX: &str = "XMLHttpRequest";

/// API layer error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (connectivity, timeout, bad payload).
    #[error("network error: {detail}")]
    Network { detail: String },

    /// The server answered non-2xx with a structured message.
    #[error("server rejected the request (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },
}

impl ApiError {
    /// The server-provided message, when there is one to surface.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => Some(message),
            ApiError::Network { .. } => None,
        }
    }
}

/// Backend REST surface consumed by the controller.
#[async_trait]
pub trait ArticleApi: Send + Sync {
    /// GET the filtered article list.
    async fn list(&self, query: &ListQuery) -> Result<Vec<Article>, ApiError>;

    /// POST a new article from the draft buffer.
    async fn create(&self, draft: &Draft) -> Result<(), ApiError>;

    /// PUT the draft buffer over an existing article.
    async fn update(&self, id: ArticleId, draft: &Draft) -> Result<(), ApiError>;

    /// DELETE an article.
    async fn delete(&self, id: ArticleId) -> Result<(), ApiError>;
}

/// `ArticleApi` over HTTP.
pub struct HttpArticleApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpArticleApi {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, config })
    }

    /// Headers every request carries; mutating requests also get the
    /// anti-forgery token.
    fn decorate(&self, request: RequestBuilder, mutating: bool) -> RequestBuilder {
        let request = request
            .header(ACCEPT, "application/json")
            .header(HEADER_REQUESTED_WITH, REQUESTED_WITH_AJAX);
        if mutating {
            request.header(HEADER_CSRF_TOKEN, &self.config.csrf_token)
        } else {
            request
        }
    }

    /// Send the request and map the outcome into the error taxonomy.
    async fn execute(&self, request: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await.map_err(|e| ApiError::Network {
            detail: e.to_string(),
        })?;

        let status = response.status();
        tracing::debug!("response status: {status}");
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(rejection_from(status.as_u16(), &body))
    }
}

/// Decode a non-2xx body as `{message}` JSON, falling back to a generic
/// message when the body is missing or not what we expect.
fn rejection_from(status: u16, body: &str) -> ApiError {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .unwrap_or_else(|| format!("unexpected server response (HTTP {status})"));

    ApiError::Rejected { status, message }
}

#[async_trait]
impl ArticleApi for HttpArticleApi {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Article>, ApiError> {
        let url = self.config.articles_url();
        tracing::debug!("GET {url} search={:?}", query.search);

        let request = self.decorate(self.client.get(&url).query(&query.query_pairs()), false);
        let response = self.execute(request).await?;

        response
            .json::<Vec<Article>>()
            .await
            .map_err(|e| ApiError::Network {
                detail: e.to_string(),
            })
    }

    async fn create(&self, draft: &Draft) -> Result<(), ApiError> {
        let url = self.config.articles_url();
        tracing::debug!("POST {url}");

        let request = self.decorate(self.client.post(&url).json(draft), true);
        self.execute(request).await.map(|_| ())
    }

    async fn update(&self, id: ArticleId, draft: &Draft) -> Result<(), ApiError> {
        let url = self.config.article_url(id);
        tracing::debug!("PUT {url}");

        let request = self.decorate(self.client.put(&url).json(draft), true);
        self.execute(request).await.map(|_| ())
    }

    async fn delete(&self, id: ArticleId) -> Result<(), ApiError> {
        let url = self.config.article_url(id);
        tracing::debug!("DELETE {url}");

        let request = self.decorate(self.client.delete(&url), true);
        self.execute(request).await.map(|_| ())
    }
}
