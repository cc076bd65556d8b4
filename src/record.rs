//! Localized API records and the locale resolver.
//!
//! Every content record the backend serves (services, fields, posts, faqs,
//! jobs, projects, members, feedbacks) follows the same convention: each
//! logical text field `F` exists as `F` (content in the fallback locale)
//! plus up to three locale variants `F_uz`, `F_en`, `F_ru`, any of which may
//! be null or absent. Rather than one struct per endpoint repeating that
//! four-way pattern for every field, records deserialize into an open map
//! and `resolve` implements the fallback policy once, for all of them.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::i18n::Locale;

/// Paginated list envelope every collection endpoint returns.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEnvelope<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// One content record with per-locale field variants.
///
/// Records are read-only once deserialized; nothing in this crate mutates
/// them.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct LocalizedRecord(Map<String, Value>);

impl LocalizedRecord {
    /// Resolve the best available text for `base` against a locale.
    ///
    /// Looks up `{base}_{locale}` first and falls back to `base`. The
    /// fallback rule is null/absent only: an empty string stored under the
    /// variant key is a deliberate value and is returned as-is. Non-string
    /// values are treated the same as absent keys.
    pub fn resolve(&self, locale: Locale, base: &str) -> Option<&str> {
        self.resolve_code(locale.code(), base)
    }

    /// Resolve against a raw locale code.
    ///
    /// Unknown codes never error: their variant key simply does not exist in
    /// the record, so resolution falls through to the `base` field.
    pub fn resolve_code(&self, code: &str, base: &str) -> Option<&str> {
        let variant_key = format!("{}_{}", base, code);
        self.text(&variant_key).or_else(|| self.text(base))
    }

    /// Get a string value by exact key. Null, absent and non-string values
    /// all yield `None`.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Record identifier, where the endpoint provides one.
    ///
    /// The backend serves ids as strings (UUIDs) on most endpoints and as
    /// integers on a few; both are accepted.
    pub fn id(&self) -> Option<String> {
        match self.0.get("id") {
            Some(Value::String(id)) => Some(id.clone()),
            Some(Value::Number(id)) => Some(id.to_string()),
            _ => None,
        }
    }

    /// Creation timestamp, parsed from the `created_at` field.
    ///
    /// Missing or unparseable timestamps yield `None`; the sort below orders
    /// those before any dated record.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp("created_at")
    }

    /// Last-update timestamp, parsed from the `updated_at` field.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp("updated_at")
    }

    fn timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        self.text(key)
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|parsed| parsed.with_timezone(&Utc))
    }

    /// Boolean flag by key (`featured`, `posted`).
    pub fn flag(&self, key: &str) -> bool {
        self.0
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Numeric value by key (`estimated_read_time`).
    pub fn number(&self, key: &str) -> Option<u64> {
        self.0.get(key).and_then(Value::as_u64)
    }

    /// Nested record array by key (`tags`, `skills`, `categories`,
    /// `technologies`, `employment`). Absent or non-array values yield an
    /// empty list.
    pub fn children(&self, key: &str) -> Vec<LocalizedRecord> {
        match self.0.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| match item {
                    Value::Object(map) => Some(LocalizedRecord(map.clone())),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Whether the record has any key at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for LocalizedRecord {
    fn from(map: Map<String, Value>) -> Self {
        LocalizedRecord(map)
    }
}

/// Stable-sort records ascending by creation time without touching the
/// caller's ordering assumptions elsewhere: the input is consumed and a
/// newly ordered vector returned.
///
/// Records without a parseable `created_at` sort before all dated ones,
/// keeping their relative order.
pub fn sort_by_created_at(mut records: Vec<LocalizedRecord>) -> Vec<LocalizedRecord> {
    records.sort_by_key(|record| record.created_at());
    records
}
