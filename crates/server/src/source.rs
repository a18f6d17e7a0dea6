//! Where article text comes from.

use async_trait::async_trait;
use wikilens_core::{ArticleSummary, Result, SearchHit, WikiClient};

/// Upstream encyclopedia operations the handlers need.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>>;

    async fn summary(&self, title: &str) -> Result<ArticleSummary>;
}

#[async_trait]
impl ArticleSource for WikiClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        WikiClient::search(self, query).await
    }

    async fn summary(&self, title: &str) -> Result<ArticleSummary> {
        WikiClient::summary(self, title).await
    }
}
