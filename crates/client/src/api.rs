//! REST client for the article API.
//!
//! Mirrors every `/api/articles` endpoint using [`reqwest`] and reports
//! failures as [`ClientError`].

use folio_core::article::{ArticleDto, ArticleInput};
use folio_core::types::DbId;

use crate::config::ClientConfig;

/// Path of the article collection, relative to the base URL.
const ARTICLES_PATH: &str = "/api/articles";

/// Errors from the article API client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Article API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl ClientError {
    /// `true` when the API answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::ApiError { status: 404, .. })
    }
}

/// HTTP client for a single article API deployment.
#[derive(Debug, Clone)]
pub struct ArticleApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ArticleApiClient {
    /// Create a new API client.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/articles`
    pub async fn list_articles(&self) -> Result<Vec<ArticleDto>, ClientError> {
        let response = self.client.get(self.collection_url()).send().await?;

        Self::parse_response(response).await
    }

    /// `GET /api/articles/{id}`
    pub async fn get_article(&self, id: DbId) -> Result<ArticleDto, ClientError> {
        let response = self.client.get(self.article_url(id)).send().await?;

        Self::parse_response(response).await
    }

    /// `POST /api/articles`, returning the created record.
    pub async fn create_article(&self, input: &ArticleInput) -> Result<ArticleDto, ClientError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(input)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `PUT /api/articles/{id}`
    pub async fn update_article(&self, id: DbId, input: &ArticleInput) -> Result<(), ClientError> {
        let response = self
            .client
            .put(self.article_url(id))
            .json(input)
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// `DELETE /api/articles/{id}`
    pub async fn delete_article(&self, id: DbId) -> Result<(), ClientError> {
        let response = self.client.delete(self.article_url(id)).send().await?;

        Self::check_status(response).await
    }

    // ---- private helpers ----

    fn collection_url(&self) -> String {
        format!("{}{ARTICLES_PATH}", self.base_url)
    }

    fn article_url(&self, id: DbId) -> String {
        format!("{}{ARTICLES_PATH}/{id}", self.base_url)
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`ClientError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), ClientError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}
