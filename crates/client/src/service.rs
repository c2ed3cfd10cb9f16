//! Soft-failure article service.
//!
//! Every operation logs a failed call and returns an empty value: an empty
//! list, `None`, or `false`. An absent article and an unreachable API look
//! the same to callers of this type; use [`ArticleService::api`] to tell
//! them apart.

use folio_core::article::{ArticleDto, ArticleInput};
use folio_core::types::DbId;

use crate::api::ArticleApiClient;
use crate::config::ClientConfig;

#[derive(Debug, Clone)]
pub struct ArticleService {
    api: ArticleApiClient,
}

impl ArticleService {
    pub fn new(config: &ClientConfig) -> Self {
        Self::from_api(ArticleApiClient::from_config(config))
    }

    pub fn from_api(api: ArticleApiClient) -> Self {
        Self { api }
    }

    /// The underlying client, which reports failures instead of hiding them.
    pub fn api(&self) -> &ArticleApiClient {
        &self.api
    }

    /// All articles, or an empty list if the call failed.
    pub async fn list_articles(&self) -> Vec<ArticleDto> {
        match self.api.list_articles().await {
            Ok(articles) => articles,
            Err(e) => {
                tracing::error!(error = %e, "Failed to list articles");
                Vec::new()
            }
        }
    }

    /// The article with `id`, or `None` if it is missing or the call failed.
    pub async fn get_article(&self, id: DbId) -> Option<ArticleDto> {
        match self.api.get_article(id).await {
            Ok(article) => Some(article),
            Err(e) => {
                tracing::error!(article_id = id, error = %e, "Failed to fetch article");
                None
            }
        }
    }

    /// The created article, or `None` if the API rejected it or the call failed.
    pub async fn create_article(&self, input: &ArticleInput) -> Option<ArticleDto> {
        match self.api.create_article(input).await {
            Ok(article) => Some(article),
            Err(e) => {
                tracing::error!(error = %e, "Failed to create article");
                None
            }
        }
    }

    pub async fn update_article(&self, id: DbId, input: &ArticleInput) -> bool {
        match self.api.update_article(id, input).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(article_id = id, error = %e, "Failed to update article");
                false
            }
        }
    }

    pub async fn delete_article(&self, id: DbId) -> bool {
        match self.api.delete_article(id).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(article_id = id, error = %e, "Failed to delete article");
                false
            }
        }
    }
}
