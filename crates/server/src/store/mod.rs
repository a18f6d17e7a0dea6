//! Saved-article persistence.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

use async_trait::async_trait;
use uuid::Uuid;
use wikilens_core::{CollectionView, NewSavedArticle, SavedArticle};

/// Storage for the saved-article collection.
///
/// `list` returns an immutable snapshot; callers filter and aggregate on the
/// snapshot instead of holding the store.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    async fn create(&self, article: NewSavedArticle) -> anyhow::Result<SavedArticle>;

    async fn list(&self) -> anyhow::Result<CollectionView>;

    async fn get(&self, id: Uuid) -> anyhow::Result<Option<SavedArticle>>;

    /// Replaces the note; `None` clears it. Returns `None` for unknown ids.
    async fn update_note(&self, id: Uuid, note: Option<String>) -> anyhow::Result<Option<SavedArticle>>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
}
