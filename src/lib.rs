//! Localized content client for the DevoSoft corporate site API.
//!
//! The backend serves every piece of site content (services, fields, posts,
//! faqs, jobs, projects, members, feedbacks) as records whose text fields
//! come in up to four per-locale variants. This crate owns the logic the
//! site's pages share: resolving the right variant for an active locale,
//! merging fetched records onto fixed card layouts, fetching and ordering
//! paginated collections, and validating/submitting the lead forms.

pub mod client;
pub mod config;
pub mod error;
pub mod forms;
pub mod i18n;
pub mod merge;
pub mod pages;
pub mod record;
pub mod view;
