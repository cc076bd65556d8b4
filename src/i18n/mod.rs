//! Internationalization (i18n) module for multi-locale support.
//!
//! The site serves content in Uzbek (fallback), English and Russian. This
//! module contains everything locale-related: the registry of supported
//! locales, the validated `Locale` type, and the static localized strings
//! that back pages before API content arrives.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales and their metadata
//! - `locale`: Type-safe Locale type passed explicitly through resolve/merge calls
//! - `strings`: Centralized localized strings and contact card defaults
//!
//! # Example
//!
//! ```rust,ignore
//! use devosoft_content::i18n::{Locale, LocaleRegistry};
//!
//! // Validate a user-supplied code, degrading to the fallback
//! let locale = Locale::from_code_or_fallback("ru");
//!
//! // List all enabled locales
//! let locales = LocaleRegistry::get().list_enabled();
//! ```

mod locale;
mod registry;
mod strings;

pub use locale::Locale;
pub use registry::{LocaleConfig, LocaleRegistry};
pub use strings::{strings_for, CardStrings, LocaleStrings};
