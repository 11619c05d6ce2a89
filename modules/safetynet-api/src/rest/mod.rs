pub mod submit;

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use tracing::{info, warn};

use safetynet_common::{Report, ReportStatus, SafetyNetError, StatusFilter};

use crate::auth::ApiAdmin;
use crate::AppState;

// --- Errors ---

/// JSON error body `{"error": "..."}` with a status matching the variant.
#[derive(Debug)]
pub struct ApiError(pub SafetyNetError);

impl From<SafetyNetError> for ApiError {
    fn from(err: SafetyNetError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            SafetyNetError::Validation(_) => StatusCode::BAD_REQUEST,
            SafetyNetError::Unauthorized => StatusCode::UNAUTHORIZED,
            SafetyNetError::Forbidden => StatusCode::FORBIDDEN,
            SafetyNetError::NotFound(_) => StatusCode::NOT_FOUND,
            SafetyNetError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            SafetyNetError::Intake(_) => StatusCode::BAD_GATEWAY,
            SafetyNetError::Config(_) | SafetyNetError::Anyhow(_) => {
                warn!(error = %self.0, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let message = match &self.0 {
            SafetyNetError::Validation(msg) => msg.clone(),
            other => other.to_string(),
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

// --- Query structs ---

/// `?q=&status=` as used by both the admin page and the JSON list.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub status: Option<String>,
}

impl ListQuery {
    pub fn search(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    pub fn filter(&self) -> StatusFilter {
        self.status
            .as_deref()
            .map(StatusFilter::parse)
            .unwrap_or_default()
    }
}

#[derive(Deserialize)]
pub struct StatusUpdate {
    status: String,
}

// --- Handlers ---

pub async fn api_reports(
    _admin: ApiAdmin,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    let filter = query.filter();
    let store = state.store.read().await;
    let reports = store.list(query.search(), filter);
    Json(serde_json::json!({
        "filter": filter.key(),
        "stats": store.stats(),
        "reports": reports,
    }))
}

pub async fn api_report_detail(
    _admin: ApiAdmin,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Report>, ApiError> {
    let store = state.store.read().await;
    store
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| SafetyNetError::NotFound(format!("report {id}")).into())
}

pub async fn api_set_status(
    admin: ApiAdmin,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<StatusUpdate>,
) -> Result<Json<Report>, ApiError> {
    let status: ReportStatus = body.status.parse().map_err(SafetyNetError::Validation)?;
    let updated = state.store.write().await.set_status(&id, status);
    match updated {
        Some(report) => {
            info!(report_id = %id, status = %status, admin_id = %admin.identity.id, "Status set via API");
            Ok(Json(report))
        }
        None => Err(SafetyNetError::NotFound(format!("report {id}")).into()),
    }
}
