//! Locale type: flexible, validated locale representation.
//!
//! A `Locale` is always a code that exists in the registry, so code that
//! holds one never needs to re-validate it. Raw codes coming from the
//! outside (a URL segment, a stored preference) go through `from_code`,
//! which either validates them or, via `from_code_or_fallback`, degrades
//! gracefully to the site's fallback locale.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};

/// A validated locale.
///
/// Only supported, enabled locales can be constructed. The locale is passed
/// explicitly to every resolve/merge call; there is deliberately no
/// process-wide "current locale" anywhere in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// ISO 639-1 locale code (e.g., "uz", "en", "ru")
    code: &'static str,
}

impl Locale {
    /// Uzbek, the site's fallback locale.
    pub const UZBEK: Locale = Locale { code: "uz" };

    /// English.
    pub const ENGLISH: Locale = Locale { code: "en" };

    /// Russian.
    pub const RUSSIAN: Locale = Locale { code: "ru" };

    /// Create a Locale from a locale code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is valid and the locale is enabled
    /// * `Err` if the code is not found or the locale is disabled
    pub fn from_code(code: &str) -> Result<Locale> {
        let registry = LocaleRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Locale {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Locale '{}' is not enabled", code),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// Create a Locale from a code, degrading to the fallback locale when
    /// the code is unknown or disabled.
    ///
    /// This is the right entry point for codes of external origin, where an
    /// unrecognized value must never be an error.
    pub fn from_code_or_fallback(code: &str) -> Locale {
        Locale::from_code(code).unwrap_or_else(|_| Locale::fallback())
    }

    /// Get the site's fallback locale.
    ///
    /// Localized record fields without a locale suffix carry content in this
    /// locale, and resolution falls back to them.
    pub fn fallback() -> Locale {
        let config = LocaleRegistry::get().fallback();
        Locale { code: config.code }
    }

    /// Get the ISO 639-1 locale code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the locale code is not found in the registry. This should
    /// never happen if the Locale was constructed properly (via `from_code`
    /// or constants).
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    /// Get the English name of the locale.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the locale.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the fallback locale.
    pub fn is_fallback(&self) -> bool {
        self.config().is_fallback
    }
}
