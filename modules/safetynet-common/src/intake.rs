use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SafetyNetError;
use crate::safety::looks_like_email;

pub const MAX_DESCRIPTION_CHARS: usize = 5000;

/// Public incident report as submitted from the report form or JSON API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSubmission {
    /// Missing counts as blank so validation reports it.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub contact: Option<String>,
    /// Evidence filenames only; file contents are not uploaded.
    #[serde(default)]
    pub images: Vec<String>,
}

impl ReportSubmission {
    pub fn validate(&self) -> Result<(), SafetyNetError> {
        if self.description.trim().is_empty() {
            return Err(SafetyNetError::validation("Please describe the incident"));
        }
        if self.description.chars().count() > MAX_DESCRIPTION_CHARS {
            return Err(SafetyNetError::validation(format!(
                "Description is too long (max {MAX_DESCRIPTION_CHARS} characters)"
            )));
        }
        if self.lat.is_some() != self.lng.is_some() {
            return Err(SafetyNetError::validation(
                "Both latitude and longitude are required for a pinned location",
            ));
        }
        if let (Some(lat), Some(lng)) = (self.lat, self.lng) {
            if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
                return Err(SafetyNetError::validation("Location coordinates are out of range"));
            }
        }
        Ok(())
    }

    /// Contact detail to keep with the submission. Anonymous reports drop it.
    pub fn retained_contact(&self) -> Option<&str> {
        if self.is_anonymous {
            return None;
        }
        self.contact.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }
}

/// Message from the public contact page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), SafetyNetError> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err(SafetyNetError::validation("Please fill in all required fields"));
        }
        if !looks_like_email(&self.email) {
            return Err(SafetyNetError::validation("Please enter a valid email address"));
        }
        Ok(())
    }
}

/// Acknowledgement returned by an intake sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub reference: Uuid,
    pub received_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn new() -> Self {
        Self {
            reference: Uuid::new_v4(),
            received_at: Utc::now(),
        }
    }
}

impl Default for SubmissionReceipt {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(description: &str) -> ReportSubmission {
        ReportSubmission {
            description: description.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn blank_description_is_rejected() {
        let err = submission("   \n\t").validate().unwrap_err();
        assert!(matches!(err, SafetyNetError::Validation(msg) if msg == "Please describe the incident"));
    }

    #[test]
    fn missing_description_decodes_as_blank() {
        let s: ReportSubmission = serde_json::from_str(r#"{"address":"Oak St"}"#).unwrap();
        assert_eq!(s.description, "");
        assert!(matches!(s.validate(), Err(SafetyNetError::Validation(msg)) if msg == "Please describe the incident"));
    }

    #[test]
    fn description_only_is_enough() {
        assert!(submission("Broken streetlight").validate().is_ok());
    }

    #[test]
    fn overlong_description_is_rejected() {
        let long = "x".repeat(MAX_DESCRIPTION_CHARS + 1);
        assert!(submission(&long).validate().is_err());
    }

    #[test]
    fn half_a_coordinate_is_rejected() {
        let mut s = submission("Pothole");
        s.lat = Some(18.5);
        assert!(s.validate().is_err());
        s.lng = Some(73.8);
        assert!(s.validate().is_ok());
        s.lat = Some(123.0);
        assert!(s.validate().is_err());
    }

    #[test]
    fn anonymous_submissions_drop_contact() {
        let mut s = submission("Loud party");
        s.contact = Some("me@example.com".to_string());
        assert_eq!(s.retained_contact(), Some("me@example.com"));
        s.is_anonymous = true;
        assert_eq!(s.retained_contact(), None);
    }

    #[test]
    fn contact_requires_name_email_and_message() {
        let mut msg = ContactMessage {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            subject: String::new(),
            message: "Hello".to_string(),
        };
        assert!(msg.validate().is_ok());

        msg.message = " ".to_string();
        assert!(msg.validate().is_err());

        msg.message = "Hello".to_string();
        msg.email = "asha".to_string();
        let err = msg.validate().unwrap_err();
        assert!(err.to_string().contains("valid email"));
    }
}
