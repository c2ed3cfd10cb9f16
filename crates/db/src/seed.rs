//! Sample data inserted into an empty database at startup.

use chrono::{Duration, Utc};
use folio_core::article::ArticleFields;

use crate::repositories::ArticleRepo;
use crate::DbPool;

/// A fixed sample article and how long before "now" it was created.
struct SampleArticle {
    title: &'static str,
    content: &'static str,
    age_hours: i64,
}

const SAMPLE_ARTICLES: &[SampleArticle] = &[
    SampleArticle {
        title: "Welcome to the Folio article API",
        content: "Folio is a small article management service built with axum and sqlx. \
                  It lets you create, read, update and delete articles over a JSON HTTP API.",
        age_hours: 48,
    },
    SampleArticle {
        title: "Getting started with sqlx",
        content: "sqlx is an async, pure Rust SQL toolkit. It supports compile-time checked \
                  queries, connection pooling, migrations and several database backends.",
        age_hours: 24,
    },
    SampleArticle {
        title: "Building HTTP services with axum",
        content: "axum is a web framework built on tokio, tower and hyper. Handlers are plain \
                  async functions and middleware comes from the tower ecosystem.",
        age_hours: 6,
    },
];

/// Insert the sample articles if the `articles` table is empty.
///
/// Runs in a single transaction. Returns the number of rows inserted, which
/// is `0` when the table already had data.
pub async fn seed_if_empty(pool: &DbPool) -> Result<usize, sqlx::Error> {
    if ArticleRepo::count(pool).await? > 0 {
        return Ok(0);
    }

    let now = Utc::now();
    let mut tx = pool.begin().await?;
    for sample in SAMPLE_ARTICLES {
        let fields = ArticleFields::new(sample.title, sample.content);
        ArticleRepo::insert_at(&mut *tx, &fields, now - Duration::hours(sample.age_hours)).await?;
    }
    tx.commit().await?;

    tracing::info!(count = SAMPLE_ARTICLES.len(), "Seeded sample articles");
    Ok(SAMPLE_ARTICLES.len())
}
