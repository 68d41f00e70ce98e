//! Internationalization: localized UI strings for the portal pages.
//!
//! Uses a simple `t(key, lang)` function for static strings and
//! format helpers for strings with interpolation.
//! Supported languages: Russian (fallback), Kyrgyz, English.

mod format;
mod labels;


use campus_core::lang::Language;

pub use format::*;

/// Return a localized static string for `key` in the given `lang`.
/// Falls back to Russian for untranslated keys.
pub fn t(key: &str, lang: Language) -> &'static str {
    labels::lookup(key, lang)
        .or_else(|| labels::lookup(key, Language::Ru))
        .unwrap_or("???")
}
