//! Decimal separator and unit-name translation service.
//!
//! Parsing and human-readable formatting depend on two pieces of host
//! locale information: the radix character and, optionally, translated
//! unit abbreviations. Both are passed in explicitly through the
//! [`Locale`] trait so results never depend on hidden process state.

use std::collections::HashMap;

/// Source of locale-dependent number and unit conventions.
pub trait Locale: Send + Sync {
    /// Decimal separator, `"."` in the POSIX locale.
    fn radix(&self) -> &str;

    /// Translated abbreviation for a canonical unit name such as `"KiB"`.
    ///
    /// `None` means the catalog has no entry and the canonical name is used.
    fn translate_unit(&self, unit: &str) -> Option<&str> {
        let _ = unit;
        None
    }
}

/// The `C`/POSIX locale: `.` as radix and no translations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PosixLocale;

impl Locale for PosixLocale {
    fn radix(&self) -> &str {
        "."
    }
}

/// A locale with a fixed radix and an optional unit translation catalog.
///
/// ```
/// use bytesize::{FixedLocale, Locale};
///
/// let czech = FixedLocale::new(",").with_unit_name("B", "bajtů");
/// assert_eq!(czech.radix(), ",");
/// assert_eq!(czech.translate_unit("B"), Some("bajtů"));
/// assert_eq!(czech.translate_unit("KiB"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLocale {
    radix: String,
    units: HashMap<String, String>,
}

impl Default for FixedLocale {
    fn default() -> Self {
        Self::new(".")
    }
}

impl FixedLocale {
    /// Locale with the given decimal separator and an empty catalog.
    ///
    /// An empty separator falls back to `"."`.
    pub fn new(radix: impl Into<String>) -> Self {
        let radix = radix.into();
        Self {
            radix: if radix.is_empty() { ".".to_string() } else { radix },
            units: HashMap::new(),
        }
    }

    /// Add a translated name for a canonical unit abbreviation.
    #[must_use]
    pub fn with_unit_name(mut self, canonical: impl Into<String>, translated: impl Into<String>) -> Self {
        self.units.insert(canonical.into(), translated.into());
        self
    }

    /// Locale described by a POSIX locale name, e.g. `cs_CZ.UTF-8`.
    ///
    /// Only the radix is derived from the name; unit names stay canonical.
    pub fn from_name(name: &str) -> Self {
        Self::new(radix_for_locale_name(name))
    }

    /// Locale of the current process environment.
    ///
    /// Consults `LC_ALL`, `LC_NUMERIC` and `LANG` in that order, the same
    /// precedence the C library applies to numeric formatting.
    pub fn from_env() -> Self {
        let name = ["LC_ALL", "LC_NUMERIC", "LANG"]
            .into_iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty())
            .unwrap_or_else(|| "C".to_string());
        tracing::debug!(locale = %name, "resolved numeric locale from environment");
        Self::from_name(&name)
    }
}

impl Locale for FixedLocale {
    fn radix(&self) -> &str {
        &self.radix
    }

    fn translate_unit(&self, unit: &str) -> Option<&str> {
        self.units.get(unit).map(String::as_str)
    }
}

/// Radix for a `language[_TERRITORY][.codeset][@modifier]` locale name.
fn radix_for_locale_name(name: &str) -> &'static str {
    let base = name.split(['.', '@']).next().unwrap_or_default();
    let mut parts = base.split('_');
    let language = parts.next().unwrap_or_default();
    let territory = parts.next().unwrap_or_default();

    match (language, territory) {
        ("ps" | "fa", _) => "\u{066b}",
        // Swiss German and Italian keep the dot.
        ("de" | "it", "CH") => ".",
        (
            "bg" | "ca" | "cs" | "da" | "de" | "el" | "es" | "et" | "eu" | "fi" | "fr" | "gl"
            | "hr" | "hu" | "id" | "is" | "it" | "lt" | "lv" | "nb" | "nl" | "nn" | "no" | "pl"
            | "pt" | "ro" | "ru" | "sk" | "sl" | "sr" | "sv" | "tr" | "uk" | "vi",
            _,
        ) => ",",
        _ => ".",
    }
}
