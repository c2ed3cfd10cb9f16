//! Repository for the `articles` table.

use chrono::Utc;
use folio_core::article::ArticleFields;
use folio_core::types::{DbId, Timestamp};
use sqlx::{Sqlite, SqlitePool};

use crate::models::article::Article;

/// Column list for articles queries.
const COLUMNS: &str = "id, title, content, created_at, updated_at";

/// Result of [`ArticleRepo::update`].
///
/// A write that does not land is followed by an existence re-check: a record
/// that disappeared in the meantime is `NotFound`, anything else is a `Fault`
/// the caller must treat as fatal.
#[derive(Debug)]
pub enum UpdateOutcome {
    Updated(Article),
    NotFound,
    Fault(sqlx::Error),
}

/// Provides CRUD operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// List all articles in storage order (ascending id).
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles ORDER BY id ASC");
        sqlx::query_as::<_, Article>(&query).fetch_all(pool).await
    }

    /// Find an article by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = ?1");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new article stamped with the current time, returning the
    /// created row. Fields are stored exactly as given.
    pub async fn create(pool: &SqlitePool, fields: &ArticleFields) -> Result<Article, sqlx::Error> {
        Self::insert_at(pool, fields, Utc::now()).await
    }

    /// Overwrite title and content and stamp `updated_at`.
    pub async fn update(pool: &SqlitePool, id: DbId, fields: &ArticleFields) -> UpdateOutcome {
        let query = format!(
            "UPDATE articles SET
                title = ?2,
                content = ?3,
                updated_at = ?4
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        let result = sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(&fields.title)
            .bind(&fields.content)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await;

        match result {
            Ok(Some(article)) => UpdateOutcome::Updated(article),
            Ok(None) => {
                let fault =
                    sqlx::Error::Protocol(format!("update of article {id} matched no rows"));
                Self::recheck_after_missed_write(pool, id, fault).await
            }
            Err(err) => Self::recheck_after_missed_write(pool, id, err).await,
        }
    }

    /// Delete an article by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Check whether an article with the given ID exists.
    pub async fn exists(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let found: i64 =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM articles WHERE id = ?1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(found != 0)
    }

    /// Count all articles.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM articles")
            .fetch_one(pool)
            .await
    }

    /// Insert an article with an explicit creation time.
    pub(crate) async fn insert_at<'e, E>(
        executor: E,
        fields: &ArticleFields,
        created_at: Timestamp,
    ) -> Result<Article, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let query = format!(
            "INSERT INTO articles (title, content, created_at, updated_at)
             VALUES (?1, ?2, ?3, NULL)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&fields.title)
            .bind(&fields.content)
            .bind(created_at)
            .fetch_one(executor)
            .await
    }

    async fn recheck_after_missed_write(
        pool: &SqlitePool,
        id: DbId,
        fault: sqlx::Error,
    ) -> UpdateOutcome {
        match Self::exists(pool, id).await {
            Ok(false) => UpdateOutcome::NotFound,
            Ok(true) => {
                tracing::warn!(article_id = id, error = %fault, "Article update failed on an existing row");
                UpdateOutcome::Fault(fault)
            }
            Err(check_err) => {
                tracing::warn!(
                    article_id = id,
                    error = %fault,
                    check_error = %check_err,
                    "Existence re-check after failed article update also failed",
                );
                UpdateOutcome::Fault(fault)
            }
        }
    }
}
