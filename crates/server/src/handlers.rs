use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use uuid::Uuid;
use wikilens_core::{
    AnalysisRecord, ArticleText, CollectionStats, NewSavedArticle, NoteUpdate, SavedArticle, SearchHit,
};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
}

/// Article detail: the summary plus its analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleAnalysis {
    pub title: String,
    pub url: String,
    pub summary: String,
    pub analisis: AnalysisRecord,
}

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Wikilens backend running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(request) = payload?;

    if state.auth.verify(&request.username, &request.password) {
        tracing::info!(username = %request.username, "login succeeded");
        Ok(Json(json!({ "authenticated": true, "username": request.username })))
    } else {
        tracing::info!(username = %request.username, "login rejected");
        Err(ApiError::unauthorized("Invalid username or password"))
    }
}

pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult<Json<Vec<SearchHit>>> {
    let Query(params) = params?;
    let query = params.q.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Err(ApiError::bad_request("Query parameter 'q' must not be empty"));
    }

    let hits = state.source.search(query).await?;
    Ok(Json(hits))
}

pub async fn get_article(State(state): State<AppState>, Path(title): Path<String>) -> ApiResult<Json<ArticleAnalysis>> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ApiError::bad_request("Article title must not be empty"));
    }

    let summary = state.source.summary(title).await?;
    let analisis = analyze_blocking(&state, ArticleText::new(summary.title.clone(), summary.extract.clone())).await?;

    Ok(Json(ArticleAnalysis { title: summary.title, url: summary.url, summary: summary.extract, analisis }))
}

pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<ArticleText>, JsonRejection>,
) -> ApiResult<Json<AnalysisRecord>> {
    let Json(article) = payload?;
    Ok(Json(analyze_blocking(&state, article).await?))
}

/// Runs the analyzer off the async workers; long bodies are CPU-bound.
async fn analyze_blocking(state: &AppState, article: ArticleText) -> ApiResult<AnalysisRecord> {
    let analyzer = state.analyzer.clone();
    tokio::task::spawn_blocking(move || analyzer.analyze_text(&article))
        .await
        .map_err(|e| ApiError::from(anyhow::Error::new(e)))
}

pub async fn create_saved(
    State(state): State<AppState>,
    payload: Result<Json<NewSavedArticle>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(article) = payload?;
    let article = article.validated()?;

    let saved = state.store.create(article).await?;
    tracing::info!(id = %saved.id, title = %saved.title, "article saved");
    Ok((StatusCode::CREATED, Json(saved)))
}

pub async fn list_saved(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> ApiResult<Json<Vec<SavedArticle>>> {
    let Query(params) = params?;
    let view = state.store.list().await?;

    let articles = match params.q.as_deref() {
        Some(q) => view.filter(q).into_iter().cloned().collect(),
        None => view.into_articles(),
    };
    Ok(Json(articles))
}

pub async fn saved_stats(State(state): State<AppState>) -> ApiResult<Json<CollectionStats>> {
    Ok(Json(state.store.list().await?.stats()))
}

pub async fn get_saved(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Json<SavedArticle>> {
    let id = parse_id(&id)?;
    state.store.get(id).await?.map(Json).ok_or_else(|| saved_not_found(id))
}

pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NoteUpdate>, JsonRejection>,
) -> ApiResult<Json<SavedArticle>> {
    let id = parse_id(&id)?;
    let Json(update) = payload?;

    state.store.update_note(id, update.normalized()).await?.map(Json).ok_or_else(|| saved_not_found(id))
}

pub async fn delete_saved(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;

    if state.store.delete(id).await? {
        tracing::info!(%id, "saved article deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(saved_not_found(id))
    }
}

fn parse_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ApiError::bad_request(format!("Invalid article id: {}", raw)))
}

fn saved_not_found(id: Uuid) -> ApiError {
    ApiError::not_found(format!("Saved article {} not found", id))
}
