use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use safetynet_common::{
    detect_personal_details, ContactMessage, ReportSubmission, SafetyNetError, SubmissionReceipt,
};

/// Where public submissions are handed off. Implementations must not log
/// free text verbatim.
#[async_trait]
pub trait IntakeSink: Send + Sync {
    async fn submit_report(
        &self,
        submission: &ReportSubmission,
    ) -> Result<SubmissionReceipt, SafetyNetError>;

    async fn submit_contact(
        &self,
        message: &ContactMessage,
    ) -> Result<SubmissionReceipt, SafetyNetError>;
}

/// Waits the configured latency, logs a summary and discards the payload.
/// Nothing reaches the triage store.
#[derive(Debug, Clone)]
pub struct SimulatedIntake {
    latency: Duration,
}

impl SimulatedIntake {
    pub fn new(latency_ms: u64) -> Self {
        Self {
            latency: Duration::from_millis(latency_ms),
        }
    }
}

#[async_trait]
impl IntakeSink for SimulatedIntake {
    async fn submit_report(
        &self,
        submission: &ReportSubmission,
    ) -> Result<SubmissionReceipt, SafetyNetError> {
        tokio::time::sleep(self.latency).await;
        let receipt = SubmissionReceipt::new();
        let flags = detect_personal_details(&submission.description);
        info!(
            reference = %receipt.reference,
            anonymous = submission.is_anonymous,
            has_contact = submission.retained_contact().is_some(),
            pinned = submission.lat.is_some(),
            images = submission.images.len(),
            personal_details = ?flags,
            "Report intake accepted"
        );
        Ok(receipt)
    }

    async fn submit_contact(
        &self,
        message: &ContactMessage,
    ) -> Result<SubmissionReceipt, SafetyNetError> {
        tokio::time::sleep(self.latency).await;
        let receipt = SubmissionReceipt::new();
        info!(
            reference = %receipt.reference,
            has_subject = !message.subject.trim().is_empty(),
            message_chars = message.message.chars().count(),
            "Contact message accepted"
        );
        Ok(receipt)
    }
}
