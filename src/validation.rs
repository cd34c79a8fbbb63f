// Contact and newsletter form validation. Checks run in a fixed order and
// stop at the first failure; the error's Display text is what the user sees.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    static ref PHONE_RE: Regex = Regex::new(r"^\+?[0-9\s\-()]+$").unwrap();
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Optional leading `+`, then digits, spaces, hyphens and parentheses only.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactFormError {
    #[error("Please fill in all required fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
}

/// Snapshot of the contact form taken at submit time. Not retained after
/// the submit handler finishes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
    pub terms: bool,
}

impl ContactSubmission {
    fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.phone.trim().is_empty()
            && !self.service.is_empty()
            && !self.message.trim().is_empty()
            && self.terms
    }

    /// Completeness first, then email shape, then phone shape. A missing
    /// field rejects before the email or phone is ever inspected.
    pub fn validate(&self) -> Result<(), ContactFormError> {
        if !self.is_complete() {
            return Err(ContactFormError::MissingFields);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ContactFormError::InvalidEmail);
        }
        if !is_valid_phone(self.phone.trim()) {
            return Err(ContactFormError::InvalidPhone);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactSubmission {
        ContactSubmission {
            name: "Ahmed".into(),
            email: "a@b.com".into(),
            phone: "+1234567".into(),
            service: "web-design".into(),
            message: "I would like a quote.".into(),
            terms: true,
        }
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("ab.co"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn phone_shapes() {
        assert!(is_valid_phone("+1 234-567-890"));
        assert!(is_valid_phone("234567890"));
        assert!(is_valid_phone("(02) 123 456"));
        assert!(!is_valid_phone("abc123"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn complete_submission_passes() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn missing_message_rejects_before_email_check() {
        // Bad email too, but the completeness check must win.
        let sub = ContactSubmission {
            message: String::new(),
            email: "not-an-email".into(),
            ..filled()
        };
        assert_eq!(sub.validate(), Err(ContactFormError::MissingFields));
    }

    #[test]
    fn unchecked_terms_reject() {
        let sub = ContactSubmission {
            terms: false,
            ..filled()
        };
        assert_eq!(sub.validate(), Err(ContactFormError::MissingFields));
    }

    #[test]
    fn bad_email_rejects_before_phone_check() {
        let sub = ContactSubmission {
            email: "a@b".into(),
            phone: "abc".into(),
            ..filled()
        };
        assert_eq!(sub.validate(), Err(ContactFormError::InvalidEmail));
    }

    #[test]
    fn bad_phone_rejects_last() {
        let sub = ContactSubmission {
            phone: "abc123".into(),
            ..filled()
        };
        assert_eq!(sub.validate(), Err(ContactFormError::InvalidPhone));
    }
}
