use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// --- Identity ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// The authenticated principal. At most one is active per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

// --- Report status ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportStatus {
    Pending,
    Approved,
    Rejected,
    #[serde(rename = "Needs Info")]
    NeedsInfo,
    Critical,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 5] = [
        ReportStatus::Pending,
        ReportStatus::Approved,
        ReportStatus::Rejected,
        ReportStatus::NeedsInfo,
        ReportStatus::Critical,
    ];

    /// Human-facing label, also the wire value.
    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "Pending",
            ReportStatus::Approved => "Approved",
            ReportStatus::Rejected => "Rejected",
            ReportStatus::NeedsInfo => "Needs Info",
            ReportStatus::Critical => "Critical",
        }
    }

    /// Tab key used by the admin list filter.
    pub fn key(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Approved => "approved",
            ReportStatus::Rejected => "rejected",
            ReportStatus::NeedsInfo => "needsInfo",
            ReportStatus::Critical => "critical",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "pending" => Some(ReportStatus::Pending),
            "approved" => Some(ReportStatus::Approved),
            "rejected" => Some(ReportStatus::Rejected),
            "needsInfo" | "needs_info" | "needs-info" => Some(ReportStatus::NeedsInfo),
            "critical" => Some(ReportStatus::Critical),
            _ => None,
        }
    }

    /// Approved and Rejected count as reviewed.
    pub fn is_resolved(&self) -> bool {
        matches!(self, ReportStatus::Approved | ReportStatus::Rejected)
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReportStatus {
    type Err = String;

    /// Accepts either the label ("Needs Info") or the tab key ("needsInfo").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ReportStatus::ALL
            .iter()
            .copied()
            .find(|st| st.label().eq_ignore_ascii_case(trimmed))
            .or_else(|| ReportStatus::from_key(trimmed))
            .ok_or_else(|| format!("unknown report status: {trimmed}"))
    }
}

/// Status restriction applied by the admin list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ReportStatus),
}

impl StatusFilter {
    /// Parse a tab key. Unknown keys fall back to `All`.
    pub fn parse(key: &str) -> Self {
        ReportStatus::from_key(key)
            .map(StatusFilter::Only)
            .unwrap_or(StatusFilter::All)
    }

    pub fn key(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.key(),
        }
    }

    pub fn matches(&self, status: ReportStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(target) => *target == status,
        }
    }
}

// --- Reports ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLocation {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

/// One submitted safety concern. Only `status` changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub description: String,
    pub location: ReportLocation,
    /// Caller-supplied and not range-checked.
    pub severity_score: i32,
    /// ISO 8601.
    pub timestamp: String,
    pub images: Vec<String>,
    pub status: ReportStatus,
    pub is_anonymous: bool,
    pub reporter_contact_info: String,
    pub additional_details: String,
}

impl Report {
    pub fn severity_band(&self) -> SeverityBand {
        SeverityBand::from_score(self.severity_score)
    }

    /// Contact line safe to show: anonymous reports never expose it.
    pub fn visible_contact(&self) -> Option<&str> {
        if self.is_anonymous || self.reporter_contact_info.is_empty() {
            None
        } else {
            Some(&self.reporter_contact_info)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityBand {
    Low,
    Moderate,
    High,
    Severe,
}

impl SeverityBand {
    pub fn from_score(score: i32) -> Self {
        if score >= 80 {
            SeverityBand::Severe
        } else if score >= 60 {
            SeverityBand::High
        } else if score >= 40 {
            SeverityBand::Moderate
        } else {
            SeverityBand::Low
        }
    }
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeverityBand::Low => write!(f, "low"),
            SeverityBand::Moderate => write!(f, "moderate"),
            SeverityBand::High => write!(f, "high"),
            SeverityBand::Severe => write!(f, "severe"),
        }
    }
}

/// Counts shown on the admin dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TriageStats {
    pub total: usize,
    pub pending: usize,
    pub critical: usize,
    pub resolved: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_with_display_labels() {
        let json = serde_json::to_string(&ReportStatus::NeedsInfo).unwrap();
        assert_eq!(json, "\"Needs Info\"");
        let back: ReportStatus = serde_json::from_str("\"Critical\"").unwrap();
        assert_eq!(back, ReportStatus::Critical);
    }

    #[test]
    fn status_parses_labels_and_keys() {
        assert_eq!("Needs Info".parse::<ReportStatus>(), Ok(ReportStatus::NeedsInfo));
        assert_eq!("needsInfo".parse::<ReportStatus>(), Ok(ReportStatus::NeedsInfo));
        assert_eq!("approved".parse::<ReportStatus>(), Ok(ReportStatus::Approved));
        assert!("Escalated".parse::<ReportStatus>().is_err());
    }

    #[test]
    fn filter_falls_back_to_all() {
        assert_eq!(StatusFilter::parse("all"), StatusFilter::All);
        assert_eq!(StatusFilter::parse("bogus"), StatusFilter::All);
        assert_eq!(
            StatusFilter::parse("critical"),
            StatusFilter::Only(ReportStatus::Critical)
        );
    }

    #[test]
    fn filter_key_round_trips_through_parse() {
        for status in ReportStatus::ALL {
            let filter = StatusFilter::Only(status);
            assert_eq!(StatusFilter::parse(filter.key()), filter);
        }
    }

    #[test]
    fn severity_bands_follow_thresholds() {
        assert_eq!(SeverityBand::from_score(-5), SeverityBand::Low);
        assert_eq!(SeverityBand::from_score(39), SeverityBand::Low);
        assert_eq!(SeverityBand::from_score(40), SeverityBand::Moderate);
        assert_eq!(SeverityBand::from_score(60), SeverityBand::High);
        assert_eq!(SeverityBand::from_score(80), SeverityBand::Severe);
        assert_eq!(SeverityBand::from_score(250), SeverityBand::Severe);
    }

    #[test]
    fn report_uses_camel_case_fields() {
        let report = Report {
            id: "REP-900".to_string(),
            description: "Test".to_string(),
            location: ReportLocation { lat: 1.0, lng: 2.0, address: "Somewhere".to_string() },
            severity_score: 10,
            timestamp: "2023-07-15T14:30:00Z".to_string(),
            images: vec![],
            status: ReportStatus::Pending,
            is_anonymous: true,
            reporter_contact_info: "hidden@example.com".to_string(),
            additional_details: String::new(),
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["severityScore"], 10);
        assert_eq!(value["isAnonymous"], true);
        assert_eq!(report.visible_contact(), None);
    }
}
