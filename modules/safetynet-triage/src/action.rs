use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use safetynet_common::{Report, ReportStatus};

use crate::store::TriageStore;

/// The four admin buttons. Each one sets a fixed status unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriageAction {
    Approve,
    Reject,
    RequestInfo,
    MarkCritical,
}

impl TriageAction {
    pub const ALL: [TriageAction; 4] = [
        TriageAction::Approve,
        TriageAction::Reject,
        TriageAction::RequestInfo,
        TriageAction::MarkCritical,
    ];

    pub fn target_status(&self) -> ReportStatus {
        match self {
            TriageAction::Approve => ReportStatus::Approved,
            TriageAction::Reject => ReportStatus::Rejected,
            TriageAction::RequestInfo => ReportStatus::NeedsInfo,
            TriageAction::MarkCritical => ReportStatus::Critical,
        }
    }

    /// Path segment used by the admin routes.
    pub fn slug(&self) -> &'static str {
        match self {
            TriageAction::Approve => "approve",
            TriageAction::Reject => "reject",
            TriageAction::RequestInfo => "request-info",
            TriageAction::MarkCritical => "mark-critical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TriageAction::Approve => "Approve",
            TriageAction::Reject => "Reject",
            TriageAction::RequestInfo => "Request Info",
            TriageAction::MarkCritical => "Mark Critical",
        }
    }

    /// The report already sits in this action's target status, so the
    /// button would be a redundant click.
    pub fn is_redundant_for(&self, report: &Report) -> bool {
        report.status == self.target_status()
    }

    pub fn apply(&self, store: &mut TriageStore, id: &str) -> Option<Report> {
        match self {
            TriageAction::Approve => store.approve(id),
            TriageAction::Reject => store.reject(id),
            TriageAction::RequestInfo => store.request_info(id),
            TriageAction::MarkCritical => store.mark_critical(id),
        }
    }
}

impl fmt::Display for TriageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for TriageAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TriageAction::ALL
            .iter()
            .copied()
            .find(|a| a.slug() == s.trim())
            .ok_or_else(|| format!("unknown triage action: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_parse_back() {
        for action in TriageAction::ALL {
            assert_eq!(action.slug().parse::<TriageAction>(), Ok(action));
        }
        assert!("delete".parse::<TriageAction>().is_err());
    }

    #[test]
    fn redundant_only_when_already_in_target() {
        let store = TriageStore::seeded();
        let critical = store.get("REP-003").unwrap();
        assert!(TriageAction::MarkCritical.is_redundant_for(critical));
        assert!(!TriageAction::Approve.is_redundant_for(critical));
    }

    #[test]
    fn apply_routes_to_the_matching_wrapper() {
        let mut store = TriageStore::seeded();
        for action in TriageAction::ALL {
            let updated = action.apply(&mut store, "REP-004").unwrap();
            assert_eq!(updated.status, action.target_status());
        }
        assert_eq!(TriageAction::Approve.apply(&mut store, "REP-404"), None);
    }
}
