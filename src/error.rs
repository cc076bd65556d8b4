//! Error types for the content client.
//!
//! Three failure classes, all local and recoverable: read fetches that fail
//! degrade to static content, validation failures never reach the network,
//! and rejected submissions keep the form value so the user can retry.

use crate::i18n::{strings_for, Locale};
use reqwest::StatusCode;
use thiserror::Error;

/// Failure of an API request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the response body not read.
    #[error("request to {endpoint} failed: {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("server rejected {endpoint} ({status}): {body}")]
    Status {
        endpoint: String,
        status: StatusCode,
        body: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("failed to parse response from {endpoint}: {source}")]
    Parse {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// A file referenced by a submission (resume upload) could not be read.
    #[error("failed to read attachment {path}: {source}")]
    Attachment {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Client-side form validation failure. No network call is made when one of
/// these is raised; the message is surfaced inline and the form keeps its
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("email is required")]
    EmailRequired,

    #[error("email address is not valid")]
    EmailInvalid,

    #[error("message text is required")]
    MessageRequired,

    #[error("full name is required")]
    FullNameRequired,
}

impl FormError {
    /// Localized message for inline display next to the offending field.
    pub fn message(&self, locale: Locale) -> &'static str {
        let strings = strings_for(locale);
        match self {
            FormError::EmailRequired => strings.email_required,
            FormError::EmailInvalid => strings.email_invalid,
            FormError::MessageRequired => strings.message_required,
            // No dedicated string for the name field in the original site;
            // the generic submit failure message is what users saw.
            FormError::FullNameRequired => strings.message_required,
        }
    }
}
