use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;
use wikilens_core::{CollectionView, NewSavedArticle, SavedArticle};

use super::ArticleStore;

/// Process-local store, used when no database is configured.
#[derive(Debug, Default)]
pub struct MemoryStore {
    articles: RwLock<HashMap<Uuid, SavedArticle>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleStore for MemoryStore {
    async fn create(&self, article: NewSavedArticle) -> anyhow::Result<SavedArticle> {
        let saved = article.into_saved();
        self.articles.write().await.insert(saved.id, saved.clone());
        Ok(saved)
    }

    async fn list(&self) -> anyhow::Result<CollectionView> {
        let articles = self.articles.read().await.values().cloned().collect();
        Ok(CollectionView::new(articles))
    }

    async fn get(&self, id: Uuid) -> anyhow::Result<Option<SavedArticle>> {
        Ok(self.articles.read().await.get(&id).cloned())
    }

    async fn update_note(&self, id: Uuid, note: Option<String>) -> anyhow::Result<Option<SavedArticle>> {
        let mut articles = self.articles.write().await;
        Ok(articles.get_mut(&id).map(|article| {
            article.note = note;
            article.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        Ok(self.articles.write().await.remove(&id).is_some())
    }
}
