use anyhow::Context;
use async_trait::async_trait;
use deadpool_postgres::{Config, Pool, Runtime};
use tokio_postgres::types::Json;
use tokio_postgres::{NoTls, Row};
use uuid::Uuid;
use wikilens_core::{AnalysisRecord, CollectionView, NewSavedArticle, SavedArticle};

use super::ArticleStore;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS saved_articles (
    id          UUID PRIMARY KEY,
    title       TEXT NOT NULL,
    url         TEXT NOT NULL,
    summary     TEXT NOT NULL,
    analisis    JSONB NOT NULL,
    note        TEXT,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE INDEX IF NOT EXISTS saved_articles_created_at_idx ON saved_articles (created_at);
";

const COLUMNS: &str = "id, title, url, summary, analisis, note, created_at";

/// PostgreSQL-backed store with a connection pool.
#[derive(Clone)]
pub struct PostgresStore {
    pool: Pool,
}

impl PostgresStore {
    /// Builds the pool and creates the schema if needed.
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let config = Config { url: Some(database_url.to_string()), ..Default::default() };
        let pool = config.create_pool(Some(Runtime::Tokio1), NoTls).context("Failed to create database pool")?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    async fn migrate(&self) -> anyhow::Result<()> {
        let client = self.pool.get().await.context("Failed to connect to database")?;
        client.batch_execute(SCHEMA).await.context("Failed to create schema")?;
        tracing::info!("database schema ready");
        Ok(())
    }

    async fn client(&self) -> anyhow::Result<deadpool_postgres::Object> {
        self.pool.get().await.context("Failed to get database connection")
    }
}

fn from_row(row: &Row) -> anyhow::Result<SavedArticle> {
    let Json(analisis): Json<AnalysisRecord> = row.try_get("analisis")?;

    Ok(SavedArticle {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        url: row.try_get("url")?,
        summary: row.try_get("summary")?,
        analisis,
        note: row.try_get("note")?,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl ArticleStore for PostgresStore {
    async fn create(&self, article: NewSavedArticle) -> anyhow::Result<SavedArticle> {
        let saved = article.into_saved();
        let client = self.client().await?;

        client
            .execute(
                "INSERT INTO saved_articles (id, title, url, summary, analisis, note, created_at)
                 VALUES ($1, $2, $3, $4, $5, $6, $7)",
                &[
                    &saved.id,
                    &saved.title,
                    &saved.url,
                    &saved.summary,
                    &Json(&saved.analisis),
                    &saved.note,
                    &saved.created_at,
                ],
            )
            .await
            .context("Failed to insert saved article")?;

        Ok(saved)
    }

    async fn list(&self) -> anyhow::Result<CollectionView> {
        let client = self.client().await?;
        let rows = client
            .query(&format!("SELECT {COLUMNS} FROM saved_articles ORDER BY created_at, id"), &[])
            .await
            .context("Failed to list saved articles")?;

        let articles = rows.iter().map(from_row).collect::<anyhow::Result<Vec<_>>>()?;
        Ok(CollectionView::new(articles))
    }

    async fn get(&self, id: Uuid) -> anyhow::Result<Option<SavedArticle>> {
        let client = self.client().await?;
        let row = client
            .query_opt(&format!("SELECT {COLUMNS} FROM saved_articles WHERE id = $1"), &[&id])
            .await
            .context("Failed to load saved article")?;

        row.as_ref().map(from_row).transpose()
    }

    async fn update_note(&self, id: Uuid, note: Option<String>) -> anyhow::Result<Option<SavedArticle>> {
        let client = self.client().await?;
        let row = client
            .query_opt(
                &format!("UPDATE saved_articles SET note = $2 WHERE id = $1 RETURNING {COLUMNS}"),
                &[&id, &note],
            )
            .await
            .context("Failed to update note")?;

        row.as_ref().map(from_row).transpose()
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let client = self.client().await?;
        let removed = client
            .execute("DELETE FROM saved_articles WHERE id = $1", &[&id])
            .await
            .context("Failed to delete saved article")?;
        Ok(removed > 0)
    }
}
