//! Locale registry: single source of truth for all supported locales.
//!
//! The registry is the one place that knows which locale codes exist, which
//! one is the fallback, and which suffix each one contributes to localized
//! record fields (`title_uz`, `value_ru`, ...). It uses `OnceLock` for
//! thread-safe lazy initialization.

use std::sync::OnceLock;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// ISO 639-1 locale code (e.g., "uz", "en", "ru")
    pub code: &'static str,

    /// English name of the locale (e.g., "Uzbek", "English", "Russian")
    pub name: &'static str,

    /// Native name of the locale (e.g., "O'zbekcha", "English", "Русский")
    pub native_name: &'static str,

    /// Whether this is the fallback locale (only one should be true).
    /// The fallback locale is the one the site defaults to when no locale
    /// has been selected, and its content backs the unsuffixed record field.
    pub is_fallback: bool,

    /// Whether this locale is enabled for use
    pub enabled: bool,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Get all enabled locales.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales
            .iter()
            .filter(|locale| locale.enabled)
            .collect()
    }

    /// Get all locales (including disabled ones).
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Get the fallback locale configuration.
    ///
    /// # Panics
    /// Panics if no fallback locale is found or if multiple fallback locales
    /// are defined (this indicates a configuration error).
    pub fn fallback(&self) -> &LocaleConfig {
        let fallback_locales: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_fallback)
            .collect();

        match fallback_locales.len() {
            0 => panic!("No fallback locale found in registry"),
            1 => fallback_locales[0],
            _ => panic!("Multiple fallback locales found in registry"),
        }
    }

    /// Check if a locale code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|locale| locale.enabled)
            .unwrap_or(false)
    }
}

/// Default locale configurations.
///
/// The site serves Uzbek (fallback), English and Russian content.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "uz",
            name: "Uzbek",
            native_name: "O'zbekcha",
            is_fallback: true,
            enabled: true,
        },
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_fallback: false,
            enabled: true,
        },
        LocaleConfig {
            code: "ru",
            name: "Russian",
            native_name: "Русский",
            is_fallback: false,
            enabled: true,
        },
    ]
}
