use regex::Regex;
use std::sync::LazyLock;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\b\d{3}[-.\s]?\d{3}[-.\s]?\d{4}\b").unwrap());
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());
static PLATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{2}[-\s]?\d{1,2}[-\s]?[A-Z]{1,2}[-\s]?\d{4}\b").unwrap());

/// Kinds of personal detail found in free text. Used to decide what may be
/// logged about a submission; the text itself is never logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalDetail {
    Phone,
    Email,
    VehiclePlate,
}

pub fn detect_personal_details(text: &str) -> Vec<PersonalDetail> {
    let mut found = Vec::new();
    if PHONE_RE.is_match(text) {
        found.push(PersonalDetail::Phone);
    }
    if EMAIL_RE.is_match(text) {
        found.push(PersonalDetail::Email);
    }
    if PLATE_RE.is_match(text) {
        found.push(PersonalDetail::VehiclePlate);
    }
    found
}

/// Loose `local@domain.tld` check for contact forms.
pub fn looks_like_email(text: &str) -> bool {
    let trimmed = text.trim();
    EMAIL_RE
        .find(trimmed)
        .is_some_and(|m| m.start() == 0 && m.end() == trimmed.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_phone_numbers() {
        let found = detect_personal_details("Call me on 612-555-1234 tonight");
        assert_eq!(found, vec![PersonalDetail::Phone]);
    }

    #[test]
    fn detects_email_addresses() {
        let found = detect_personal_details("reach me at jane.doe@example.org");
        assert_eq!(found, vec![PersonalDetail::Email]);
    }

    #[test]
    fn detects_vehicle_plates() {
        let found = detect_personal_details("white van MH 12 AB 1234 parked outside");
        assert_eq!(found, vec![PersonalDetail::VehiclePlate]);
    }

    #[test]
    fn plain_description_is_clean() {
        assert!(detect_personal_details("Broken streetlight near the park").is_empty());
    }

    #[test]
    fn email_shape_check() {
        assert!(looks_like_email("contact@safetynet.org"));
        assert!(looks_like_email("  someone@example.com "));
        assert!(!looks_like_email("not an email"));
        assert!(!looks_like_email("prefix someone@example.com"));
        assert!(!looks_like_email("someone@localhost"));
    }
}
