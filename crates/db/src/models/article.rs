//! Article model.

use folio_core::article::ArticleDto;
use folio_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `articles` table.
#[derive(Debug, Clone, FromRow)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        ArticleDto {
            id: article.id,
            title: article.title,
            content: article.content,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
