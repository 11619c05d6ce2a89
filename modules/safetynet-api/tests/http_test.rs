//! End-to-end behaviour of the HTTP surface, driven through the router
//! without a listening socket.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::connect_info::MockConnectInfo,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use async_trait::async_trait;
use http_body_util::BodyExt;
use tower::ServiceExt;

use safetynet_api::{
    auth::encode_identity, intake::IntakeSink, rate_limit::RateLimiter, router, AppState,
};
use safetynet_common::{
    Config, ContactMessage, Identity, ReportStatus, ReportSubmission, Role, SafetyNetError,
    SubmissionReceipt,
};
use safetynet_session::StaticCredentialAuthenticator;

const FORM: &str = "application/x-www-form-urlencoded";

fn config() -> Config {
    Config {
        intake_latency_ms: 0,
        rate_limit_per_hour: 3,
        ..Config::default()
    }
}

fn setup(config: Config) -> (Arc<AppState>, Router) {
    with_state(AppState::from_config(config))
}

fn with_state(state: AppState) -> (Arc<AppState>, Router) {
    let state = Arc::new(state);
    let app = router(state.clone()).layer(MockConnectInfo(SocketAddr::from(([127, 0, 0, 1], 4000))));
    (state, app)
}

/// Intake backend that is always down.
struct OfflineIntake;

#[async_trait]
impl IntakeSink for OfflineIntake {
    async fn submit_report(&self, _: &ReportSubmission) -> Result<SubmissionReceipt, SafetyNetError> {
        Err(SafetyNetError::Intake("backend offline".to_string()))
    }

    async fn submit_contact(&self, _: &ContactMessage) -> Result<SubmissionReceipt, SafetyNetError> {
        Err(SafetyNetError::Intake("backend offline".to_string()))
    }
}

fn offline_state() -> AppState {
    AppState::builder()
        .config(config())
        .authenticator(Arc::new(StaticCredentialAuthenticator::new(
            "admin@safetynet.com",
            "admin123",
        )))
        .intake(Arc::new(OfflineIntake))
        .intake_limiter(RateLimiter::new(10))
        .login_limiter(RateLimiter::new(10))
        .build()
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn post(uri: &str, content_type: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// `name=value` pair from the response's Set-Cookie header.
fn cookie_pair(response: &Response) -> Option<String> {
    let raw = response.headers().get(header::SET_COOKIE)?.to_str().ok()?;
    raw.split(';').next().map(str::to_string)
}

async fn admin_cookie(app: &Router) -> String {
    let response = send(
        app,
        post("/login", FORM, "email=admin%40safetynet.com&password=admin123", None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    cookie_pair(&response).expect("login sets the identity cookie")
}

fn resident_cookie() -> String {
    let resident = Identity {
        id: "user-7".to_string(),
        name: "Resident".to_string(),
        email: "resident@example.com".to_string(),
        role: Role::User,
    };
    // Default config signs with the admin password.
    let value = encode_identity(&resident, "admin123").unwrap();
    format!("sn_identity={value}")
}

// =========================================================================
// Access gate
// =========================================================================

#[tokio::test]
async fn admin_without_identity_redirects_to_login() {
    let (_, app) = setup(config());
    let response = send(&app, get("/admin", None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn login_sets_cookie_and_opens_admin() {
    let (_, app) = setup(config());
    let response = send(
        &app,
        post("/login", FORM, "email=admin%40safetynet.com&password=admin123", None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin");
    let set_cookie = response.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    assert!(set_cookie.contains("HttpOnly"));

    let cookie = cookie_pair(&response).unwrap();
    let page = send(&app, get("/admin", Some(&cookie))).await;
    assert_eq!(page.status(), StatusCode::OK);
    let html = body_string(page).await;
    assert!(html.contains("Admin Dashboard"));
    for id in ["REP-001", "REP-002", "REP-003", "REP-004", "REP-005"] {
        assert!(html.contains(id), "{id} missing from admin list");
    }
}

#[tokio::test]
async fn wrong_credentials_are_rejected_generically() {
    let (_, app) = setup(config());
    let response = send(
        &app,
        post("/login", FORM, "email=admin%40safetynet.com&password=nope", None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert!(body_string(response).await.contains("Invalid email or password"));
}

#[tokio::test]
async fn successful_logins_do_not_spend_the_budget() {
    let (_, app) = setup(config());
    for _ in 0..5 {
        admin_cookie(&app).await;
    }
}

#[tokio::test]
async fn repeated_failed_logins_are_rate_limited() {
    let (_, app) = setup(config());
    for _ in 0..3 {
        let response = send(
            &app,
            post("/login", FORM, "email=admin%40safetynet.com&password=nope", None),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    let locked = send(
        &app,
        post("/login", FORM, "email=admin%40safetynet.com&password=admin123", None),
    )
    .await;
    assert_eq!(locked.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(locked.headers().get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn tampered_cookie_is_anonymous() {
    let (_, app) = setup(config());
    let cookie = admin_cookie(&app).await;
    let tampered = format!("{cookie}00");
    let response = send(&app, get("/admin", Some(&tampered))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn non_admin_is_sent_to_dashboard() {
    let (_, app) = setup(config());
    let response = send(&app, get("/admin", Some(&resident_cookie()))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");
}

#[tokio::test]
async fn logout_clears_the_cookie() {
    let (_, app) = setup(config());
    let cookie = admin_cookie(&app).await;
    let response = send(&app, post("/logout", FORM, "", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/?notice=logged_out");
    let set_cookie = response.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    assert!(set_cookie.contains("Max-Age=0"));

    let home = send(&app, get("/?notice=logged_out", None)).await;
    assert!(body_string(home).await.contains("You have been logged out"));
}

// =========================================================================
// Triage actions
// =========================================================================

#[tokio::test]
async fn action_from_detail_updates_store_and_redirects_with_notice() {
    let (state, app) = setup(config());
    let cookie = admin_cookie(&app).await;

    let response = send(
        &app,
        post("/admin/reports/REP-001/approve", FORM, "", Some(&cookie)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let target = location(&response).to_string();
    assert_eq!(target, "/admin/reports/REP-001?report=REP-001&notice=approved");
    assert_eq!(
        state.store.read().await.get("REP-001").unwrap().status,
        ReportStatus::Approved
    );

    let page = body_string(send(&app, get(&target, Some(&cookie))).await).await;
    assert!(page.contains("Report Approved"));
    assert!(page.contains("Report #REP-001 has been approved and sent to law enforcement."));
}

#[tokio::test]
async fn action_accepts_a_bare_post() {
    let (state, app) = setup(config());
    let cookie = admin_cookie(&app).await;

    let request = Request::builder()
        .method("POST")
        .uri("/admin/reports/REP-001/approve")
        .header(header::COOKIE, &cookie)
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response),
        "/admin/reports/REP-001?report=REP-001&notice=approved"
    );
    assert_eq!(
        state.store.read().await.get("REP-001").unwrap().status,
        ReportStatus::Approved
    );
}

#[tokio::test]
async fn action_from_list_returns_to_same_tab() {
    let (state, app) = setup(config());
    let cookie = admin_cookie(&app).await;

    let response = send(
        &app,
        post(
            "/admin/reports/REP-004/mark-critical",
            FORM,
            "from=list&q=&status=pending",
            Some(&cookie),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response),
        "/admin?status=pending&report=REP-004&notice=critical"
    );
    assert_eq!(
        state.store.read().await.get("REP-004").unwrap().status,
        ReportStatus::Critical
    );
}

#[tokio::test]
async fn action_on_unknown_report_is_not_found_and_changes_nothing() {
    let (state, app) = setup(config());
    let cookie = admin_cookie(&app).await;
    let before = state.store.read().await.all().to_vec();

    let response = send(
        &app,
        post("/admin/reports/REP-999/reject", FORM, "", Some(&cookie)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(state.store.read().await.all(), before.as_slice());

    let bogus = send(
        &app,
        post("/admin/reports/REP-001/delete", FORM, "", Some(&cookie)),
    )
    .await;
    assert_eq!(bogus.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admin_list_filters_by_tab_and_search() {
    let (_, app) = setup(config());
    let cookie = admin_cookie(&app).await;

    let html = body_string(send(&app, get("/admin?status=needsInfo", Some(&cookie))).await).await;
    assert!(html.contains("REP-005"));
    assert!(!html.contains("REP-001"));

    let html = body_string(send(&app, get("/admin?q=zzzz", Some(&cookie))).await).await;
    assert!(html.contains("No reports found matching your search criteria"));
}

#[tokio::test]
async fn detail_page_falls_back_to_coordinates_without_tiles() {
    let (_, app) = setup(Config {
        map_tile_url: None,
        ..config()
    });
    let cookie = admin_cookie(&app).await;
    let html = body_string(send(&app, get("/admin/reports/REP-003", Some(&cookie))).await).await;
    assert!(html.contains("Location coordinates:"));
    assert!(!html.contains("report-map"));
}

#[tokio::test]
async fn detail_page_draws_map_with_tiles() {
    let (_, app) = setup(config());
    let cookie = admin_cookie(&app).await;
    let html = body_string(send(&app, get("/admin/reports/REP-003", Some(&cookie))).await).await;
    assert!(html.contains("report-map"));
    assert!(html.contains("noscript"));
}

#[tokio::test]
async fn missing_report_detail_is_not_found() {
    let (_, app) = setup(config());
    let cookie = admin_cookie(&app).await;
    let response = send(&app, get("/admin/reports/REP-404", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =========================================================================
// Public pages
// =========================================================================

#[tokio::test]
async fn unknown_route_renders_not_found() {
    let (_, app) = setup(config());
    let response = send(&app, get("/no/such/page", None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("Page not found"));
}

#[tokio::test]
async fn public_pages_render() {
    let (_, app) = setup(config());
    for path in [
        "/",
        "/report",
        "/dashboard",
        "/community",
        "/about",
        "/contact",
        "/login",
        "/emergencycontacts",
        "/resources_safe",
    ] {
        let response = send(&app, get(path, None)).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-store"
        );
    }
}

#[tokio::test]
async fn blank_report_form_rerenders_with_error() {
    let (_, app) = setup(config());
    let response = send(
        &app,
        post("/report", FORM, "description=+++&address=Oak+St", None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = body_string(response).await;
    assert!(html.contains("Please describe the incident"));
    assert!(html.contains("Oak St"));
}

#[tokio::test]
async fn report_form_submission_redirects_with_notice() {
    let (state, app) = setup(config());
    let response = send(
        &app,
        post("/report", FORM, "description=Broken+street+light&address=Oak+St", None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/report?notice=report_submitted");
    assert_eq!(state.store.read().await.len(), 5);
}

#[tokio::test]
async fn contact_form_validates_email() {
    let (_, app) = setup(config());
    let response = send(
        &app,
        post(
            "/contact",
            FORM,
            "name=Asha&email=not-an-email&subject=&message=Hello",
            None,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_string(response).await.contains("Please enter a valid email address"));
}

#[tokio::test]
async fn emergency_contacts_are_searchable() {
    let (_, app) = setup(config());
    let html = body_string(send(&app, get("/emergencycontacts?q=cyber", None)).await).await;
    assert!(html.contains("1930"));
    assert!(!html.contains("Ambulance"));
}

// =========================================================================
// JSON API
// =========================================================================

#[tokio::test]
async fn healthz_is_ok() {
    let (_, app) = setup(config());
    let response = send(&app, get("/healthz", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn api_intake_validates_and_rate_limits() {
    let (_, app) = setup(config());

    let invalid = send(
        &app,
        post("/api/reports", "application/json", r#"{"description":"   "}"#, None),
    )
    .await;
    assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_str(&body_string(invalid).await).unwrap();
    assert_eq!(body["error"], "Please describe the incident");

    let missing = send(
        &app,
        post("/api/reports", "application/json", r#"{"address":"Oak St"}"#, None),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_str(&body_string(missing).await).unwrap();
    assert_eq!(body["error"], "Please describe the incident");

    for _ in 0..3 {
        let accepted = send(
            &app,
            post("/api/reports", "application/json", r#"{"description":"Loose dog"}"#, None),
        )
        .await;
        assert_eq!(accepted.status(), StatusCode::ACCEPTED);
    }

    let limited = send(
        &app,
        post("/api/reports", "application/json", r#"{"description":"Loose dog"}"#, None),
    )
    .await;
    assert_eq!(limited.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn api_admin_routes_answer_401_and_403() {
    let (_, app) = setup(config());

    let anonymous = send(&app, get("/api/admin/reports", None)).await;
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    let resident = send(&app, get("/api/admin/reports", Some(&resident_cookie()))).await;
    assert_eq!(resident.status(), StatusCode::FORBIDDEN);

    let cookie = admin_cookie(&app).await;
    let admin = send(&app, get("/api/admin/reports?status=critical", Some(&cookie))).await;
    assert_eq!(admin.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(admin).await).unwrap();
    assert_eq!(body["filter"], "critical");
    assert_eq!(body["stats"]["total"], 5);
    assert_eq!(body["reports"].as_array().unwrap().len(), 1);
    assert_eq!(body["reports"][0]["id"], "REP-003");
}

#[tokio::test]
async fn api_set_status_accepts_labels_and_404s_unknown_ids() {
    let (state, app) = setup(config());
    let cookie = admin_cookie(&app).await;

    let response = send(
        &app,
        post(
            "/api/admin/reports/REP-002/status",
            "application/json",
            r#"{"status":"Needs Info"}"#,
            Some(&cookie),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "Needs Info");
    assert_eq!(
        state.store.read().await.get("REP-002").unwrap().status,
        ReportStatus::NeedsInfo
    );

    let missing = send(
        &app,
        post(
            "/api/admin/reports/REP-999/status",
            "application/json",
            r#"{"status":"Approved"}"#,
            Some(&cookie),
        ),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let bad = send(
        &app,
        post(
            "/api/admin/reports/REP-002/status",
            "application/json",
            r#"{"status":"Archived"}"#,
            Some(&cookie),
        ),
    )
    .await;
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn intake_outage_surfaces_as_bad_gateway() {
    let (_, app) = with_state(offline_state());

    let api = send(
        &app,
        post("/api/reports", "application/json", r#"{"description":"Loose dog"}"#, None),
    )
    .await;
    assert_eq!(api.status(), StatusCode::BAD_GATEWAY);

    let page = send(&app, post("/report", FORM, "description=Loose+dog", None)).await;
    assert_eq!(page.status(), StatusCode::BAD_GATEWAY);
    let html = body_string(page).await;
    assert!(html.contains("Submission failed, please try again."));
    assert!(html.contains("Loose dog"));
}
