use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, ConnectInfo, Path, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::info;

use safetynet_common::{ContactMessage, ReportSubmission, SafetyNetError, StatusFilter};
use safetynet_triage::TriageAction;

use crate::auth::{AdminSession, Viewer};
use crate::components::public::ContactFormView;
use crate::components::report_form::ReportFormView;
use crate::components::{
    admin_list_view, render_about, render_admin, render_community, render_contact,
    render_dashboard, render_emergency_contacts, render_home, render_login, render_not_found,
    render_report_detail, render_report_page, render_resources, report_to_view, PageChrome,
};
use crate::notice::{with_notice, Notice, NoticeKind, NoticeQuery};
use crate::rest::submit::{intake_contact, intake_report};
use crate::rest::ListQuery;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

impl SearchQuery {
    fn term(self) -> String {
        self.q.unwrap_or_default()
    }
}

/// Status, toast and inline message for a failed public form submission.
fn form_failure(err: &SafetyNetError) -> (StatusCode, Notice, String) {
    match err {
        SafetyNetError::Validation(msg) => {
            (StatusCode::BAD_REQUEST, Notice::destructive(msg.clone()), msg.clone())
        }
        SafetyNetError::RateLimited(_) => {
            let msg = "Too many submissions. Try again later.".to_string();
            (StatusCode::TOO_MANY_REQUESTS, Notice::destructive(msg.clone()), msg)
        }
        _ => {
            let notice = NoticeKind::SubmitFailed.notice(None);
            let msg = notice.title.clone();
            (StatusCode::BAD_GATEWAY, notice, msg)
        }
    }
}

fn not_found_response(chrome: PageChrome, path: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(render_not_found(chrome, path.to_string())),
    )
        .into_response()
}

// --- Public pages ---

pub async fn home_page(viewer: Viewer, Query(nq): Query<NoticeQuery>) -> impl IntoResponse {
    Html(render_home(PageChrome::new(viewer.nav(), nq.resolve())))
}

pub async fn report_page(viewer: Viewer, Query(nq): Query<NoticeQuery>) -> impl IntoResponse {
    Html(render_report_page(
        PageChrome::new(viewer.nav(), nq.resolve()),
        ReportFormView::default(),
    ))
}

#[derive(Debug, Default, Deserialize)]
pub struct ReportForm {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub lng: String,
    /// Present ("on") only when the checkbox is ticked.
    pub is_anonymous: Option<String>,
    #[serde(default)]
    pub contact: String,
    /// File input; urlencoded forms carry the file name only.
    #[serde(default)]
    pub image: String,
}

fn parse_coordinate(raw: &str, name: &str) -> Result<Option<f64>, SafetyNetError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Some)
        .ok_or_else(|| SafetyNetError::validation(format!("{name} must be a number")))
}

impl ReportForm {
    pub fn to_submission(&self) -> Result<ReportSubmission, SafetyNetError> {
        let contact = self.contact.trim();
        let image = self.image.trim();
        Ok(ReportSubmission {
            description: self.description.clone(),
            address: self.address.trim().to_string(),
            lat: parse_coordinate(&self.lat, "Latitude")?,
            lng: parse_coordinate(&self.lng, "Longitude")?,
            is_anonymous: self.is_anonymous.is_some(),
            contact: (!contact.is_empty()).then(|| contact.to_string()),
            images: if image.is_empty() {
                Vec::new()
            } else {
                vec![image.to_string()]
            },
        })
    }

    fn to_view(&self, error: String) -> ReportFormView {
        ReportFormView {
            description: self.description.clone(),
            address: self.address.clone(),
            lat: self.lat.clone(),
            lng: self.lng.clone(),
            is_anonymous: self.is_anonymous.is_some(),
            contact: self.contact.clone(),
            error: Some(error),
        }
    }
}

pub async fn report_submit(
    viewer: Viewer,
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Form(form): Form<ReportForm>,
) -> Response {
    let result = match form.to_submission() {
        Ok(submission) => intake_report(&state, addr.ip(), &submission).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => Redirect::to(&with_notice("/report", NoticeKind::ReportSubmitted, &[])).into_response(),
        Err(e) => {
            let (status, notice, msg) = form_failure(&e);
            let chrome = PageChrome::new(viewer.nav(), Some(notice));
            (status, Html(render_report_page(chrome, form.to_view(msg)))).into_response()
        }
    }
}

pub async fn dashboard_page(viewer: Viewer, Query(nq): Query<NoticeQuery>) -> impl IntoResponse {
    Html(render_dashboard(PageChrome::new(viewer.nav(), nq.resolve())))
}

pub async fn community_page(viewer: Viewer, Query(search): Query<SearchQuery>) -> impl IntoResponse {
    Html(render_community(PageChrome::new(viewer.nav(), None), search.term()))
}

pub async fn about_page(viewer: Viewer) -> impl IntoResponse {
    Html(render_about(PageChrome::new(viewer.nav(), None)))
}

pub async fn contact_page(viewer: Viewer, Query(nq): Query<NoticeQuery>) -> impl IntoResponse {
    Html(render_contact(
        PageChrome::new(viewer.nav(), nq.resolve()),
        ContactFormView::default(),
    ))
}

pub async fn contact_submit(
    viewer: Viewer,
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Form(message): Form<ContactMessage>,
) -> Response {
    match intake_contact(&state, addr.ip(), &message).await {
        Ok(_) => Redirect::to(&with_notice("/contact", NoticeKind::MessageSent, &[])).into_response(),
        Err(e) => {
            let (status, notice, msg) = form_failure(&e);
            let form = ContactFormView {
                name: message.name,
                email: message.email,
                subject: message.subject,
                message: message.message,
                error: Some(msg),
            };
            let chrome = PageChrome::new(viewer.nav(), Some(notice));
            (status, Html(render_contact(chrome, form))).into_response()
        }
    }
}

pub async fn emergency_contacts_page(
    viewer: Viewer,
    Query(search): Query<SearchQuery>,
) -> impl IntoResponse {
    Html(render_emergency_contacts(PageChrome::new(viewer.nav(), None), search.term()))
}

pub async fn resources_page(viewer: Viewer, Query(search): Query<SearchQuery>) -> impl IntoResponse {
    Html(render_resources(PageChrome::new(viewer.nav(), None), search.term()))
}

// --- Session ---

#[derive(serde::Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub async fn login_page() -> impl IntoResponse {
    Html(render_login(String::new(), None))
}

pub async fn login_submit(
    Viewer(mut ctx): Viewer,
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Form(form): Form<LoginForm>,
) -> Response {
    // Only failed attempts count against the budget.
    if state.login_limiter.is_exhausted(addr.ip()).await {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Html(render_login(form.email, Some("Too many attempts. Try again later.".to_string()))),
        )
            .into_response();
    }

    if form.email.trim().is_empty() || form.password.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Html(render_login(form.email, Some("Please enter your email and password".to_string()))),
        )
            .into_response();
    }

    if ctx.login(state.authenticator.as_ref(), &form.email, &form.password).await {
        let mut response = Redirect::to("/admin").into_response();
        ctx.store().apply_to(&mut response);
        response
    } else {
        state.login_limiter.record(addr.ip()).await;
        (
            StatusCode::UNAUTHORIZED,
            Html(render_login(form.email, Some("Invalid email or password".to_string()))),
        )
            .into_response()
    }
}

pub async fn logout(Viewer(mut ctx): Viewer) -> Response {
    ctx.logout();
    let mut response = Redirect::to(&with_notice("/", NoticeKind::LoggedOut, &[])).into_response();
    ctx.store().apply_to(&mut response);
    response
}

// --- Admin console (AdminSession required) ---

pub async fn admin_page(
    session: AdminSession,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
    Query(nq): Query<NoticeQuery>,
) -> impl IntoResponse {
    let filter = query.filter();
    let list = {
        let store = state.store.read().await;
        let reports = store.list(query.search(), filter);
        admin_list_view(query.search(), filter, store.stats(), &reports)
    };
    Html(render_admin(PageChrome::new(session.nav, nq.resolve()), list))
}

pub async fn report_detail_page(
    session: AdminSession,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(nq): Query<NoticeQuery>,
    uri: Uri,
) -> Response {
    let chrome = PageChrome::new(session.nav, nq.resolve());
    let view = state.store.read().await.get(&id).map(report_to_view);
    match view {
        Some(report) => Html(render_report_detail(
            chrome,
            report,
            state.config.map_tile_url.clone(),
        ))
        .into_response(),
        None => not_found_response(chrome, uri.path()),
    }
}

/// Hidden fields sent by the list view's action buttons so the redirect
/// lands back on the same search and tab.
#[derive(Debug, Default, Deserialize)]
pub struct ActionForm {
    pub from: Option<String>,
    pub q: Option<String>,
    pub status: Option<String>,
}

pub async fn report_action(
    session: AdminSession,
    State(state): State<Arc<AppState>>,
    Path((id, action)): Path<(String, String)>,
    uri: Uri,
    form: Result<Form<ActionForm>, FormRejection>,
) -> Response {
    // A bare POST with no body is the same as an action from the detail page.
    let form = form.map(|Form(f)| f).unwrap_or_default();

    let Ok(action) = action.parse::<TriageAction>() else {
        return not_found_response(PageChrome::new(session.nav, None), uri.path());
    };

    let updated = {
        let mut store = state.store.write().await;
        action.apply(&mut store, &id)
    };
    if updated.is_none() {
        return not_found_response(PageChrome::new(session.nav, None), uri.path());
    }

    info!(report_id = %id, action = %action, admin_id = %session.identity.id, "Triage action applied");

    let kind = NoticeKind::for_action(action);
    let location = if form.from.as_deref() == Some("list") {
        let search = form.q.unwrap_or_default();
        let filter = StatusFilter::parse(form.status.as_deref().unwrap_or("all"));
        let status_key = match filter {
            StatusFilter::All => "",
            StatusFilter::Only(status) => status.key(),
        };
        with_notice(
            "/admin",
            kind,
            &[("q", search.as_str()), ("status", status_key), ("report", id.as_str())],
        )
    } else {
        with_notice(&format!("/admin/reports/{id}"), kind, &[("report", id.as_str())])
    };
    Redirect::to(&location).into_response()
}

// --- Fallback ---

pub async fn not_found(viewer: Viewer, uri: Uri) -> Response {
    not_found_response(PageChrome::new(viewer.nav(), None), uri.path())
}
