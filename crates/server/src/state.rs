use std::sync::Arc;

use wikilens_core::Analyzer;

use crate::auth::Authenticator;
use crate::source::ArticleSource;
use crate::store::ArticleStore;

/// Shared handler state; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    pub source: Arc<dyn ArticleSource>,
    pub store: Arc<dyn ArticleStore>,
    pub auth: Arc<dyn Authenticator>,
}

impl AppState {
    pub fn new(
        analyzer: Analyzer,
        source: Arc<dyn ArticleSource>,
        store: Arc<dyn ArticleStore>,
        auth: Arc<dyn Authenticator>,
    ) -> Self {
        Self { analyzer: Arc::new(analyzer), source, store, auth }
    }
}
