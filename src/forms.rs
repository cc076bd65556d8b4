//! Form payloads and client-side validation.
//!
//! Three forms reach the backend: the newsletter subscription, the contact
//! message, and the job application. Validation happens here, before any
//! network traffic; an invalid form never issues a request and the caller
//! surfaces the localized `FormError` message inline. Submission itself
//! lives on `ApiClient`, which borrows the payload so a rejected submission
//! leaves the form value with the caller for retry.

use std::path::PathBuf;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::error::FormError;

/// Application status the site always submits with.
pub const APPLICATION_STATUS_SUBMITTED: &str = "Submitted";

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern should compile")
    })
}

/// Validate an email address: required and minimally well-formed.
pub fn validate_email(email: &str) -> Result<(), FormError> {
    if email.trim().is_empty() {
        return Err(FormError::EmailRequired);
    }
    if !email_pattern().is_match(email.trim()) {
        return Err(FormError::EmailInvalid);
    }
    Ok(())
}

/// Newsletter subscription, POSTed as JSON to `email-lists/`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EmailSubscription {
    pub notes: String,
    pub email: String,
}

impl EmailSubscription {
    /// Build a validated subscription. `source` notes where on the site the
    /// form was submitted from ("Subscribed from footer form").
    pub fn new(email: &str, source: &str) -> Result<Self, FormError> {
        validate_email(email)?;
        Ok(Self {
            notes: source.to_string(),
            email: email.trim().to_string(),
        })
    }
}

/// Contact form message, POSTed as JSON to `messages/`.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ContactMessage {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub company: String,
    pub message: String,
    /// Selected service id, empty when none was chosen
    pub service: String,
}

impl ContactMessage {
    /// Check the fields the backend rejects when missing.
    pub fn validate(&self) -> Result<(), FormError> {
        validate_email(&self.email)?;
        if self.message.trim().is_empty() {
            return Err(FormError::MessageRequired);
        }
        Ok(())
    }
}

/// Job application, POSTed as multipart form data to
/// `careers/applications/` with an optional resume file part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobApplication {
    pub notes: String,
    pub full_name: String,
    pub description: String,
    pub phone_number: String,
    pub email: String,
    /// Id of the job posting being applied to
    pub job_posting: String,
    /// Path of the resume file to upload, if the applicant attached one
    pub resume: Option<PathBuf>,
}

impl JobApplication {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.full_name.trim().is_empty() {
            return Err(FormError::FullNameRequired);
        }
        validate_email(&self.email)?;
        Ok(())
    }
}
