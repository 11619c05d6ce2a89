use std::sync::Arc;

use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tokio::sync::RwLock;
use tower_http::set_header::SetResponseHeaderLayer;
use typed_builder::TypedBuilder;

use safetynet_common::Config;
use safetynet_session::{Authenticator, StaticCredentialAuthenticator};
use safetynet_triage::TriageStore;

pub mod auth;
pub mod components;
pub mod intake;
pub mod notice;
pub mod pages;
pub mod rate_limit;
pub mod rest;
pub mod templates;

use intake::{IntakeSink, SimulatedIntake};
use rate_limit::RateLimiter;

/// Shared server state. One instance per process, handed to every handler.
#[derive(TypedBuilder)]
pub struct AppState {
    pub config: Config,
    #[builder(default = RwLock::new(TriageStore::seeded()))]
    pub store: RwLock<TriageStore>,
    pub authenticator: Arc<dyn Authenticator>,
    pub intake: Arc<dyn IntakeSink>,
    pub intake_limiter: RateLimiter,
    pub login_limiter: RateLimiter,
}

impl AppState {
    /// Production wiring: static credential check, simulated intake, seeded store.
    pub fn from_config(config: Config) -> Self {
        let authenticator = Arc::new(StaticCredentialAuthenticator::new(
            config.admin_email.clone(),
            config.admin_password.clone(),
        ));
        let intake = Arc::new(SimulatedIntake::new(config.intake_latency_ms));
        let per_hour = config.rate_limit_per_hour;

        AppState::builder()
            .config(config)
            .authenticator(authenticator)
            .intake(intake)
            .intake_limiter(RateLimiter::new(per_hour))
            .login_limiter(RateLimiter::new(per_hour))
            .build()
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/healthz", get(|| async { "ok" }))
        // Public pages (Dioxus SSR)
        .route("/", get(pages::home_page))
        .route("/report", get(pages::report_page).post(pages::report_submit))
        .route("/dashboard", get(pages::dashboard_page))
        .route("/community", get(pages::community_page))
        .route("/about", get(pages::about_page))
        .route("/contact", get(pages::contact_page).post(pages::contact_submit))
        .route("/emergencycontacts", get(pages::emergency_contacts_page))
        .route("/resources_safe", get(pages::resources_page))
        // Session
        .route("/login", get(pages::login_page).post(pages::login_submit))
        .route("/logout", post(pages::logout))
        // Admin console
        .route("/admin", get(pages::admin_page))
        .route("/admin/reports/{id}", get(pages::report_detail_page))
        .route("/admin/reports/{id}/{action}", post(pages::report_action))
        // JSON API
        .route("/api/reports", post(rest::submit::api_submit_report))
        .route("/api/admin/reports", get(rest::api_reports))
        .route("/api/admin/reports/{id}", get(rest::api_report_detail))
        .route("/api/admin/reports/{id}/status", post(rest::api_set_status))
        .fallback(pages::not_found)
        .with_state(state)
        // CORS
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Privacy headers: no caching
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
        // Logging layer: method + path only (no query params, no IP)
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}
