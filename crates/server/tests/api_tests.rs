//! HTTP API integration tests
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use wikilens_core::{Analyzer, ArticleSummary, Result, SearchHit, Thumbnail, WikilensError};
use wikilens_server::{AppState, ArticleSource, MemoryStore, StaticCredentials, create_app};

const GATO: &str = "El gato es feliz. El gato juega mucho. El perro duerme.";

/// Canned encyclopedia: knows "Gato", fails on "Caida", misses everything else.
struct StubSource;

#[async_trait]
impl ArticleSource for StubSource {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        if query == "caida" {
            return Err(WikilensError::UpstreamResponse("503 Service Unavailable".to_string()));
        }
        Ok(vec![
            SearchHit {
                pageid: 1,
                title: "Gato".to_string(),
                extract: GATO.to_string(),
                thumbnail: Some(Thumbnail { source: "https://upload.example/gato.jpg".to_string() }),
            },
            SearchHit { pageid: 2, title: "Gato montés".to_string(), extract: String::new(), thumbnail: None },
        ])
    }

    async fn summary(&self, title: &str) -> Result<ArticleSummary> {
        match title {
            "Gato" => Ok(ArticleSummary {
                title: "Gato".to_string(),
                extract: GATO.to_string(),
                url: "https://es.wikipedia.org/wiki/Gato".to_string(),
            }),
            "Caida" => Err(WikilensError::UpstreamResponse("500 from upstream".to_string())),
            other => Err(WikilensError::ArticleNotFound(other.to_string())),
        }
    }
}

fn app() -> Router {
    let state = AppState::new(
        Analyzer::new(),
        Arc::new(StubSource),
        Arc::new(MemoryStore::new()),
        Arc::new(StaticCredentials::new().with_user("ana", "secreto")),
    );
    create_app(state, Duration::from_secs(5))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, value)
}

async fn save_gato(app: &Router, note: Option<&str>) -> Value {
    let (_, article) = send(app, Method::GET, "/articles/Gato", None).await;
    let mut payload = article.clone();
    payload["note"] = note.map(Value::from).unwrap_or(Value::Null);

    let (status, saved) = send(app, Method::POST, "/saved_articles/", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    saved
}

#[tokio::test]
async fn test_root_and_health() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());
    assert!(body["version"].is_string());

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_login() {
    let app = app();

    let (status, body) =
        send(&app, Method::POST, "/login", Some(json!({ "username": "ana", "password": "secreto" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["authenticated"], true);

    let (status, body) =
        send(&app, Method::POST, "/login", Some(json!({ "username": "ana", "password": "nope" }))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_login_malformed_body() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/login", Some(json!({ "username": "ana" }))).await;
    assert!(status.is_client_error());
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_search() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/search?q=gato", None).await;
    assert_eq!(status, StatusCode::OK);
    let hits = body.as_array().unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0]["title"], "Gato");
    assert_eq!(hits[0]["thumbnail"]["source"], "https://upload.example/gato.jpg");
    assert!(hits[1].get("thumbnail").is_none());
}

#[tokio::test]
async fn test_search_requires_query() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/search", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("'q'"));

    let (status, _) = send(&app, Method::GET, "/search?q=%20%20", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_upstream_failure() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/search?q=caida", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_article_detail() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/articles/Gato", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Gato");
    assert_eq!(body["url"], "https://es.wikipedia.org/wiki/Gato");
    assert_eq!(body["summary"], GATO);

    let analisis = &body["analisis"];
    assert_eq!(analisis["sentences"], 3);
    assert_eq!(analisis["word_count"], 11);
    assert_eq!(analisis["estimated_reading_time"], 1);
    assert_eq!(analisis["complexity"], "simple");
    assert_eq!(analisis["sentiment"], "positivo");
    assert!(analisis["topics"].as_array().unwrap().contains(&json!("gato")));
    assert!(!analisis["key_insights"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_article_not_found() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/articles/Nada", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].as_str().unwrap().contains("Nada"));
}

#[tokio::test]
async fn test_article_upstream_failure_is_not_a_404() {
    let app = app();
    let (status, _) = send(&app, Method::GET, "/articles/Caida", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_analyze_endpoint() {
    let app = app();

    let (status, body) =
        send(&app, Method::POST, "/analyze", Some(json!({ "title": "Guerra", "body": "guerra muerte miedo" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["word_count"], 3);
    assert_eq!(body["sentiment"], "negativo");
    assert_eq!(body["url"], "https://en.wikipedia.org/wiki/Guerra");
}

#[tokio::test]
async fn test_analyze_empty_body() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/analyze", Some(json!({ "title": "", "body": "" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["word_count"], 0);
    assert_eq!(body["sentences"], 0);
    assert_eq!(body["estimated_reading_time"], 0);
    assert_eq!(body["sentiment"], "neutro");
}

#[tokio::test]
async fn test_saved_articles_crud() {
    let app = app();

    let saved = save_gato(&app, Some("Para leer")).await;
    let id = saved["id"].as_str().unwrap().to_string();
    assert_eq!(saved["title"], "Gato");
    assert_eq!(saved["note"], "Para leer");
    assert!(saved["created_at"].is_string());
    assert_eq!(saved["analisis"]["word_count"], 11);

    let (status, list) = send(&app, Method::GET, "/saved_articles/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, one) = send(&app, Method::GET, &format!("/saved_articles/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(one["id"], id.as_str());

    let (status, updated) =
        send(&app, Method::PUT, &format!("/saved_articles/{}", id), Some(json!({ "note": "Leído" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["note"], "Leído");

    let (status, cleared) =
        send(&app, Method::PUT, &format!("/saved_articles/{}", id), Some(json!({ "note": "  " }))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(cleared["note"].is_null());

    let (status, _) = send(&app, Method::DELETE, &format!("/saved_articles/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::GET, &format!("/saved_articles/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].is_string());

    let (status, _) = send(&app, Method::DELETE, &format!("/saved_articles/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_saved_article_without_note() {
    let app = app();
    let saved = save_gato(&app, None).await;
    assert!(saved["note"].is_null());
}

#[tokio::test]
async fn test_saved_article_requires_title() {
    let app = app();
    let (_, article) = send(&app, Method::GET, "/articles/Gato", None).await;
    let mut payload = article;
    payload["title"] = json!("   ");

    let (status, body) = send(&app, Method::POST, "/saved_articles/", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("title"));
}

#[tokio::test]
async fn test_saved_article_invalid_id() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/saved_articles/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("not-a-uuid"));
}

#[tokio::test]
async fn test_saved_articles_filter_and_stats() {
    let app = app();
    save_gato(&app, Some("favorito")).await;
    save_gato(&app, None).await;

    let (_, filtered) = send(&app, Method::GET, "/saved_articles/?q=FAVORITO", None).await;
    assert_eq!(filtered.as_array().unwrap().len(), 1);

    let (status, stats) = send(&app, Method::GET, "/saved_articles/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total"], 2);
    assert_eq!(stats["with_notes"], 1);
    assert_eq!(stats["sentiment"]["positivo"], 2);
    assert_eq!(stats["complexity"]["simple"], 2);
}
