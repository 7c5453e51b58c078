use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use stargazer_core::browse::{browse, CatalogView};
use stargazer_core::catalog;
use stargazer_core::models::*;
use stargazer_core::share::{object_share_text, APP_NAME, APP_SHARE_TEXT};
use stargazer_core::view::InstallHint;

use crate::detail::DetailClient;

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

fn entry_or_404(id: &str) -> Result<&'static CatalogEntry, (StatusCode, String)> {
    catalog::entry(id).ok_or_else(|| {
        tracing::debug!(object = id, "Unknown object requested");
        (StatusCode::NOT_FOUND, "Object not found".to_string())
    })
}

// ============================================================
// Health
// ============================================================

pub async fn health(State(client): State<DetailClient>) -> impl IntoResponse {
    let service = if client.is_configured() {
        "configured"
    } else {
        "unconfigured"
    };
    Json(serde_json::json!({ "status": "ok", "generativeService": service }))
}

// ============================================================
// App
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppResponse {
    pub name: String,
    pub share_text: String,
    pub install_hint: InstallHint,
}

pub async fn get_app() -> Json<AppResponse> {
    Json(AppResponse {
        name: APP_NAME.to_string(),
        share_text: APP_SHARE_TEXT.to_string(),
        install_hint: InstallHint::default(),
    })
}

// ============================================================
// Catalog
// ============================================================

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub q: Option<String>,
}

pub async fn get_catalog(Query(query): Query<CatalogQuery>) -> Json<CatalogView> {
    let today = chrono::Local::now().date_naive();
    let term = query.q.unwrap_or_default();
    Json(browse(catalog::calendar(), &term, today))
}

pub async fn get_month(Path(month): Path<u32>) -> ApiResult<MonthEntry> {
    catalog::month(month)
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Month not found".to_string()))
}

// ============================================================
// Objects
// ============================================================

pub async fn get_object(Path(id): Path<String>) -> ApiResult<CatalogEntry> {
    entry_or_404(&id).cloned().map(Json)
}

pub async fn get_object_details(
    State(client): State<DetailClient>,
    Path(id): Path<String>,
) -> ApiResult<DetailResponse> {
    let entry = entry_or_404(&id)?;
    Ok(Json(client.fetch_details(&entry.name).await))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageResponse {
    /// `data:` URI of the generated illustration, `null` when unavailable.
    pub image: Option<String>,
}

pub async fn get_object_image(
    State(client): State<DetailClient>,
    Path(id): Path<String>,
) -> ApiResult<ImageResponse> {
    let entry = entry_or_404(&id)?;
    let image = client.fetch_image(&entry.name).await;
    Ok(Json(ImageResponse { image }))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareResponse {
    pub title: String,
    pub text: String,
}

/// Compose share text from details the caller already has on screen.
pub async fn share_object(
    Path(id): Path<String>,
    Json(detail): Json<DetailResponse>,
) -> ApiResult<ShareResponse> {
    let entry = entry_or_404(&id)?;
    Ok(Json(ShareResponse {
        title: entry.name.clone(),
        text: object_share_text(entry, &detail),
    }))
}
