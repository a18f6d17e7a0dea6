//! Encyclopedia API client.
//!
//! Wraps the three MediaWiki calls the application needs: full-text search
//! with intro extracts and thumbnails, the REST page summary, and the full
//! plain-text extract of a page. Failures here are fetch failures and are
//! reported as [`WikilensError`] values; they never reach the analyzer.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::analyzer::canonical_url;
use crate::{Result, WikilensError};

/// HTTP client configuration for the encyclopedia API.
#[derive(Debug, Clone)]
pub struct WikiConfig {
    /// Language subdomain, e.g. `en` or `es`.
    pub language: String,
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
    /// Maximum number of search hits.
    pub search_limit: usize,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            timeout: 30,
            user_agent: "wikilens/0.1 (article analysis)".to_string(),
            search_limit: 10,
        }
    }
}

impl WikiConfig {
    /// Site root, e.g. `https://en.wikipedia.org/`.
    pub fn site_url(&self) -> Result<Url> {
        let valid = !self.language.is_empty()
            && self.language.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
        if !valid {
            return Err(WikilensError::InvalidUrl(format!("Invalid language code: {:?}", self.language)));
        }

        Url::parse(&format!("https://{}.wikipedia.org/", self.language))
            .map_err(|e| WikilensError::InvalidUrl(e.to_string()))
    }

    /// Base for canonical page links, e.g. `https://en.wikipedia.org/wiki/`.
    pub fn page_base_url(&self) -> Result<Url> {
        self.site_url()?.join("wiki/").map_err(|e| WikilensError::InvalidUrl(e.to_string()))
    }
}

/// Thumbnail attached to a search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub source: String,
}

/// One search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub pageid: u64,
    pub title: String,
    #[serde(default)]
    pub extract: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Thumbnail>,
}

/// Page summary from the REST API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub title: String,
    pub extract: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    pages: HashMap<String, SearchPage>,
}

#[derive(Debug, Deserialize)]
struct SearchPage {
    pageid: u64,
    title: String,
    #[serde(default)]
    index: u32,
    #[serde(default)]
    extract: String,
    #[serde(default)]
    thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    title: String,
    #[serde(default)]
    extract: String,
    #[serde(default)]
    content_urls: Option<ContentUrls>,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
    desktop: Option<PageUrl>,
}

#[derive(Debug, Deserialize)]
struct PageUrl {
    page: String,
}

#[derive(Debug, Deserialize)]
struct ExtractResponse {
    query: ExtractQuery,
}

#[derive(Debug, Deserialize)]
struct ExtractQuery {
    #[serde(default)]
    pages: Vec<ExtractPage>,
}

#[derive(Debug, Deserialize)]
struct ExtractPage {
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    extract: String,
}

/// Client for one encyclopedia language edition.
#[derive(Debug, Clone)]
pub struct WikiClient {
    client: Client,
    config: WikiConfig,
    site: Url,
}

impl WikiClient {
    /// Builds a client; fails only on an invalid language code or TLS setup.
    pub fn new(config: WikiConfig) -> Result<Self> {
        let site = config.site_url()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(WikilensError::HttpError)?;

        Ok(Self { client, config, site })
    }

    pub fn config(&self) -> &WikiConfig {
        &self.config
    }

    /// Searches page titles and text; hits come back in search-rank order.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        let url = self.search_url(query)?;
        tracing::debug!(%url, "searching");

        let response: SearchResponse = self.get_json(url).await?;
        Ok(hits_from_response(response))
    }

    /// Fetches the REST summary for `title`.
    ///
    /// # Errors
    ///
    /// [`WikilensError::ArticleNotFound`] when the page does not exist.
    pub async fn summary(&self, title: &str) -> Result<ArticleSummary> {
        let url = self.summary_url(title)?;
        tracing::debug!(%url, "fetching summary");

        let response = self.send(url).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(WikilensError::ArticleNotFound(title.to_string()));
        }
        let response = check_status(response)?;
        let summary: SummaryResponse = response.json().await?;

        let fallback = self.page_url(title)?;
        Ok(summary_from_response(summary, fallback))
    }

    /// Fetches the full plain-text extract of `title`.
    pub async fn full_extract(&self, title: &str) -> Result<String> {
        let url = self.extract_url(title)?;
        tracing::debug!(%url, "fetching full extract");

        let response: ExtractResponse = self.get_json(url).await?;
        match response.query.pages.into_iter().next() {
            Some(page) if !page.missing => Ok(page.extract),
            _ => Err(WikilensError::ArticleNotFound(title.to_string())),
        }
    }

    /// Canonical page URL for `title`.
    pub fn page_url(&self, title: &str) -> Result<String> {
        Ok(canonical_url(&self.config.page_base_url()?, title))
    }

    fn api_url(&self) -> Result<Url> {
        self.site.join("w/api.php").map_err(|e| WikilensError::InvalidUrl(e.to_string()))
    }

    fn search_url(&self, query: &str) -> Result<Url> {
        let limit = self.config.search_limit.to_string();
        let mut url = self.api_url()?;
        url.query_pairs_mut()
            .append_pair("action", "query")
            .append_pair("format", "json")
            .append_pair("prop", "extracts|pageimages")
            .append_pair("exintro", "1")
            .append_pair("explaintext", "1")
            .append_pair("exlimit", "max")
            .append_pair("piprop", "thumbnail")
            .append_pair("pithumbsize", "200")
            .append_pair("generator", "search")
            .append_pair("gsrsearch", query)
            .append_pair("gsrlimit", &limit)
            .append_pair("origin", "*");
        Ok(url)
    }

    fn summary_url(&self, title: &str) -> Result<Url> {
        let mut url = self.site.clone();
        url.path_segments_mut()
            .map_err(|_| WikilensError::InvalidUrl(self.site.to_string()))?
            .pop_if_empty()
            .extend(["api", "rest_v1", "page", "summary"])
            .push(&title.trim().replace(' ', "_"));
        Ok(url)
    }

    fn extract_url(&self, title: &str) -> Result<Url> {
        let mut url = self.api_url()?;
        url.query_pairs_mut()
            .append_pair("action", "query")
            .append_pair("format", "json")
            .append_pair("formatversion", "2")
            .append_pair("prop", "extracts")
            .append_pair("explaintext", "1")
            .append_pair("redirects", "1")
            .append_pair("titles", title.trim());
        Ok(url)
    }

    async fn send(&self, url: Url) -> Result<reqwest::Response> {
        self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                WikilensError::Timeout { timeout: self.config.timeout }
            } else {
                WikilensError::HttpError(e)
            }
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = check_status(self.send(url).await?)?;
        Ok(response.json().await?)
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(WikilensError::UpstreamResponse(format!("{} from {}", status, response.url())))
    }
}

fn hits_from_response(response: SearchResponse) -> Vec<SearchHit> {
    let mut pages: Vec<SearchPage> = response.query.map(|q| q.pages.into_values().collect()).unwrap_or_default();
    pages.sort_by(|a, b| a.index.cmp(&b.index).then(a.pageid.cmp(&b.pageid)));

    pages
        .into_iter()
        .map(|page| SearchHit {
            pageid: page.pageid,
            title: page.title,
            extract: page.extract,
            thumbnail: page.thumbnail,
        })
        .collect()
}

fn summary_from_response(response: SummaryResponse, fallback_url: String) -> ArticleSummary {
    let url = response.content_urls.and_then(|c| c.desktop).map(|d| d.page).unwrap_or(fallback_url);
    ArticleSummary { title: response.title, extract: response.extract, url }
}
