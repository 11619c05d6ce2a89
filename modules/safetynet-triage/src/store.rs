use tracing::{info, warn};

use safetynet_common::{Report, ReportStatus, StatusFilter, TriageStats};

use crate::fixtures::seed_reports;

/// In-memory report collection. The single source of truth for the admin
/// views; list projections are recomputed on every call.
#[derive(Debug, Clone, Default)]
pub struct TriageStore {
    reports: Vec<Report>,
}

impl TriageStore {
    pub fn new(reports: Vec<Report>) -> Self {
        Self { reports }
    }

    /// Store initialised with the fixture reports.
    pub fn seeded() -> Self {
        Self::new(seed_reports())
    }

    pub fn all(&self) -> &[Report] {
        &self.reports
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Report> {
        self.reports.iter().find(|r| r.id == id)
    }

    /// Reports whose description, id or address contains `search_term`
    /// (case-insensitive) and whose status passes `filter`, in insertion order.
    pub fn list(&self, search_term: &str, filter: StatusFilter) -> Vec<Report> {
        let needle = search_term.to_lowercase();
        self.reports
            .iter()
            .filter(|r| matches_search(r, &needle) && filter.matches(r.status))
            .cloned()
            .collect()
    }

    /// Replace the matching report with a copy carrying `new_status`.
    /// An unknown id leaves the collection untouched.
    pub fn set_status(&mut self, id: &str, new_status: ReportStatus) -> Option<Report> {
        let Some(slot) = self.reports.iter_mut().find(|r| r.id == id) else {
            warn!(report_id = id, status = %new_status, "Status change for unknown report ignored");
            return None;
        };

        let previous = slot.status;
        let updated = Report {
            status: new_status,
            ..slot.clone()
        };
        *slot = updated.clone();

        info!(report_id = id, from = %previous, to = %new_status, "Report status updated");
        Some(updated)
    }

    pub fn approve(&mut self, id: &str) -> Option<Report> {
        self.set_status(id, ReportStatus::Approved)
    }

    pub fn reject(&mut self, id: &str) -> Option<Report> {
        self.set_status(id, ReportStatus::Rejected)
    }

    pub fn request_info(&mut self, id: &str) -> Option<Report> {
        self.set_status(id, ReportStatus::NeedsInfo)
    }

    pub fn mark_critical(&mut self, id: &str) -> Option<Report> {
        self.set_status(id, ReportStatus::Critical)
    }

    pub fn stats(&self) -> TriageStats {
        let count = |status: ReportStatus| self.reports.iter().filter(|r| r.status == status).count();
        TriageStats {
            total: self.reports.len(),
            pending: count(ReportStatus::Pending),
            critical: count(ReportStatus::Critical),
            resolved: self.reports.iter().filter(|r| r.status.is_resolved()).count(),
        }
    }
}

fn matches_search(report: &Report, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    report.description.to_lowercase().contains(needle)
        || report.id.to_lowercase().contains(needle)
        || report.location.address.to_lowercase().contains(needle)
}
