use serde::Deserialize;

use safetynet_triage::TriageAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Default,
    Destructive,
}

/// A rendered toast.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub description: Option<String>,
    pub flavor: Flavor,
}

impl Notice {
    pub fn destructive(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            flavor: Flavor::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.flavor == Flavor::Destructive
    }
}

/// Notices that survive a POST→redirect→GET round trip as `?notice=<key>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Approved,
    Rejected,
    InfoRequested,
    Critical,
    ReportSubmitted,
    MessageSent,
    LoggedOut,
    SubmitFailed,
}

impl NoticeKind {
    pub const ALL: [NoticeKind; 8] = [
        NoticeKind::Approved,
        NoticeKind::Rejected,
        NoticeKind::InfoRequested,
        NoticeKind::Critical,
        NoticeKind::ReportSubmitted,
        NoticeKind::MessageSent,
        NoticeKind::LoggedOut,
        NoticeKind::SubmitFailed,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            NoticeKind::Approved => "approved",
            NoticeKind::Rejected => "rejected",
            NoticeKind::InfoRequested => "info_requested",
            NoticeKind::Critical => "critical",
            NoticeKind::ReportSubmitted => "report_submitted",
            NoticeKind::MessageSent => "message_sent",
            NoticeKind::LoggedOut => "logged_out",
            NoticeKind::SubmitFailed => "submit_failed",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        NoticeKind::ALL.iter().copied().find(|k| k.key() == key)
    }

    pub fn for_action(action: TriageAction) -> Self {
        match action {
            TriageAction::Approve => NoticeKind::Approved,
            TriageAction::Reject => NoticeKind::Rejected,
            TriageAction::RequestInfo => NoticeKind::InfoRequested,
            TriageAction::MarkCritical => NoticeKind::Critical,
        }
    }

    pub fn flavor(&self) -> Flavor {
        match self {
            NoticeKind::Rejected | NoticeKind::Critical | NoticeKind::SubmitFailed => {
                Flavor::Destructive
            }
            _ => Flavor::Default,
        }
    }

    /// Build the toast. Report notices mention `report_id` when present.
    pub fn notice(&self, report_id: Option<&str>) -> Notice {
        let title = match self {
            NoticeKind::Approved => "Report Approved",
            NoticeKind::Rejected => "Report Rejected",
            NoticeKind::InfoRequested => "More Information Requested",
            NoticeKind::Critical => "Report Marked as Critical",
            NoticeKind::ReportSubmitted => "Report submitted successfully!",
            NoticeKind::MessageSent => "Your message has been sent successfully!",
            NoticeKind::LoggedOut => "You have been logged out",
            NoticeKind::SubmitFailed => "Submission failed, please try again.",
        };
        let description = report_id.and_then(|id| match self {
            NoticeKind::Approved => Some(format!(
                "Report #{id} has been approved and sent to law enforcement."
            )),
            NoticeKind::Rejected => Some(format!("Report #{id} has been rejected and archived.")),
            NoticeKind::InfoRequested => Some(format!(
                "A request for more information has been sent to the reporter of #{id}."
            )),
            NoticeKind::Critical => Some(format!(
                "Report #{id} has been flagged as critical. Urgent alerts sent to nearby users."
            )),
            _ => None,
        });
        Notice {
            title: title.to_string(),
            description,
            flavor: self.flavor(),
        }
    }
}

/// Query parameters the layout reads to show a toast.
#[derive(Debug, Default, Deserialize)]
pub struct NoticeQuery {
    pub notice: Option<String>,
    pub report: Option<String>,
}

impl NoticeQuery {
    /// Unknown keys render nothing.
    pub fn resolve(&self) -> Option<Notice> {
        let kind = NoticeKind::from_key(self.notice.as_deref()?)?;
        Some(kind.notice(self.report.as_deref()))
    }
}

/// Append a notice (and any extra pairs) to `path` as a query string.
pub fn with_notice(path: &str, kind: NoticeKind, extra: &[(&str, &str)]) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in extra {
        if !value.is_empty() {
            query.append_pair(key, value);
        }
    }
    query.append_pair("notice", kind.key());
    format!("{path}?{}", query.finish())
}
