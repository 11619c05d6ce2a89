use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{info, warn};

use safetynet_common::{ContactMessage, ReportSubmission, SafetyNetError, SubmissionReceipt};

use crate::rest::ApiError;
use crate::AppState;

/// Validate, rate limit, then hand the report to the intake sink.
pub async fn intake_report(
    state: &AppState,
    ip: IpAddr,
    submission: &ReportSubmission,
) -> Result<SubmissionReceipt, SafetyNetError> {
    submission.validate()?;
    if !state.intake_limiter.allow(ip).await {
        return Err(SafetyNetError::RateLimited(
            state.intake_limiter.max_per_hour(),
        ));
    }
    let receipt = state.intake.submit_report(submission).await.map_err(|e| {
        warn!(error = %e, "Report intake failed");
        e
    })?;
    info!(reference = %receipt.reference, "Report submission received");
    Ok(receipt)
}

/// Same pipeline for contact-page messages.
pub async fn intake_contact(
    state: &AppState,
    ip: IpAddr,
    message: &ContactMessage,
) -> Result<SubmissionReceipt, SafetyNetError> {
    message.validate()?;
    if !state.intake_limiter.allow(ip).await {
        return Err(SafetyNetError::RateLimited(
            state.intake_limiter.max_per_hour(),
        ));
    }
    let receipt = state.intake.submit_contact(message).await.map_err(|e| {
        warn!(error = %e, "Contact intake failed");
        e
    })?;
    info!(reference = %receipt.reference, "Contact message received");
    Ok(receipt)
}

pub async fn api_submit_report(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(body): Json<ReportSubmission>,
) -> Result<impl IntoResponse, ApiError> {
    let receipt = intake_report(&state, addr.ip(), &body).await?;
    Ok((
        StatusCode::ACCEPTED,
        Json(serde_json::json!({
            "status": "accepted",
            "reference": receipt.reference.to_string(),
            "received_at": receipt.received_at,
        })),
    ))
}
