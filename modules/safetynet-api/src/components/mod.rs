use chrono::{DateTime, Utc};

use safetynet_common::{Report, ReportStatus, SeverityBand, StatusFilter, TriageStats};
use safetynet_session::{IdentityStore, SessionContext};
use safetynet_triage::TriageAction;

use crate::notice::Notice;

pub mod admin;
pub mod dashboard;
pub mod directory;
pub mod layout;
pub mod login;
pub mod map;
pub mod not_found;
pub mod public;
pub mod report_detail;
pub mod report_form;

pub use admin::render_admin;
pub use dashboard::render_dashboard;
pub use directory::{render_emergency_contacts, render_resources};
pub use login::render_login;
pub use not_found::render_not_found;
pub use public::{render_about, render_community, render_contact, render_home};
pub use report_detail::render_report_detail;
pub use report_form::render_report_page;

// --- View Models ---

/// What the navbar needs to know about the viewer.
#[derive(Clone, PartialEq, Default)]
pub struct NavState {
    pub signed_in: bool,
    pub is_admin: bool,
    pub display_name: String,
}

impl NavState {
    pub fn from_session<S: IdentityStore>(ctx: &SessionContext<S>) -> Self {
        match ctx.identity() {
            Some(identity) => NavState {
                signed_in: true,
                is_admin: identity.is_admin(),
                display_name: identity.name.clone(),
            },
            None => NavState::default(),
        }
    }
}

/// Per-page chrome handed to the layout: navbar state plus any toasts.
#[derive(Clone, PartialEq, Default)]
pub struct PageChrome {
    pub nav: NavState,
    pub notices: Vec<Notice>,
}

impl PageChrome {
    pub fn new(nav: NavState, notice: Option<Notice>) -> Self {
        Self {
            nav,
            notices: notice.into_iter().collect(),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ActionView {
    pub slug: &'static str,
    pub label: &'static str,
    pub class: &'static str,
    pub disabled: bool,
}

#[derive(Clone, PartialEq)]
pub struct ReportView {
    pub id: String,
    pub description: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub severity_score: i32,
    /// Bar width in percent, clamped for display only.
    pub severity_width: i32,
    pub severity_class: &'static str,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub timestamp_label: String,
    pub is_anonymous: bool,
    pub contact: Option<String>,
    pub additional_details: String,
    pub images: Vec<String>,
    pub actions: Vec<ActionView>,
}

#[derive(Clone, PartialEq)]
pub struct TabView {
    pub key: &'static str,
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

#[derive(Clone, PartialEq)]
pub struct AdminListView {
    pub search: String,
    pub filter_key: &'static str,
    pub tabs: Vec<TabView>,
    pub stats: TriageStats,
    pub reports: Vec<ReportView>,
}

pub fn status_class(status: ReportStatus) -> &'static str {
    match status {
        ReportStatus::Pending => "bg-yellow-100 text-yellow-800",
        ReportStatus::Approved => "bg-green-100 text-green-800",
        ReportStatus::Rejected => "bg-red-100 text-red-800",
        ReportStatus::NeedsInfo => "bg-blue-100 text-blue-800",
        ReportStatus::Critical => "bg-red-500 text-white",
    }
}

pub fn severity_class(band: SeverityBand) -> &'static str {
    match band {
        SeverityBand::Severe => "bg-red-500",
        SeverityBand::High => "bg-orange-500",
        SeverityBand::Moderate => "bg-yellow-500",
        SeverityBand::Low => "bg-green-500",
    }
}

fn action_class(action: TriageAction) -> &'static str {
    match action {
        TriageAction::Approve => "bg-green-600 hover:bg-green-700 text-white",
        TriageAction::Reject => "bg-red-600 hover:bg-red-700 text-white",
        TriageAction::RequestInfo => "bg-blue-600 hover:bg-blue-700 text-white",
        TriageAction::MarkCritical => "bg-gray-900 hover:bg-black text-white",
    }
}

/// "Mar 15, 2025 14:30 UTC"; unparsable timestamps are shown as given.
pub fn format_timestamp(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| {
            dt.with_timezone(&Utc)
                .format("%b %-d, %Y %H:%M UTC")
                .to_string()
        })
        .unwrap_or_else(|_| timestamp.to_string())
}

pub fn report_to_view(report: &Report) -> ReportView {
    let actions = TriageAction::ALL
        .iter()
        .map(|action| ActionView {
            slug: action.slug(),
            label: action.label(),
            class: action_class(*action),
            disabled: action.is_redundant_for(report),
        })
        .collect();

    ReportView {
        id: report.id.clone(),
        description: report.description.clone(),
        address: report.location.address.clone(),
        lat: report.location.lat,
        lng: report.location.lng,
        severity_score: report.severity_score,
        severity_width: report.severity_score.clamp(0, 100),
        severity_class: severity_class(report.severity_band()),
        status_label: report.status.label(),
        status_class: status_class(report.status),
        timestamp_label: format_timestamp(&report.timestamp),
        is_anonymous: report.is_anonymous,
        contact: report.visible_contact().map(str::to_string),
        additional_details: report.additional_details.clone(),
        images: report.images.clone(),
        actions,
    }
}

const TABS: &[(&str, &str)] = &[
    ("all", "All Reports"),
    ("pending", "Pending"),
    ("approved", "Approved"),
    ("rejected", "Rejected"),
    ("needsInfo", "Needs Info"),
    ("critical", "Critical"),
];

pub fn admin_list_view(
    search: &str,
    filter: StatusFilter,
    stats: TriageStats,
    reports: &[Report],
) -> AdminListView {
    let filter_key = filter.key();
    AdminListView {
        search: search.to_string(),
        filter_key,
        tabs: TABS
            .iter()
            .map(|&(key, label)| TabView {
                key,
                label,
                href: admin_href(search, key),
                active: key == filter_key,
            })
            .collect(),
        stats,
        reports: reports.iter().map(report_to_view).collect(),
    }
}

/// Admin list URL for a search term and tab key.
pub fn admin_href(search: &str, filter_key: &str) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    if !search.is_empty() {
        query.append_pair("q", search);
    }
    if filter_key != "all" {
        query.append_pair("status", filter_key);
    }
    let query = query.finish();
    if query.is_empty() {
        "/admin".to_string()
    } else {
        format!("/admin?{query}")
    }
}

/// Case-insensitive substring match used by the public directory pages.
pub fn matches_search(haystack: &str, search: &str) -> bool {
    haystack.to_lowercase().contains(&search.trim().to_lowercase())
}
