//! Localized field resolution.
//!
//! Backend records carry translations in two forms: language-suffixed keys
//! (`title_ru`, `title_en`, `title_ky`) and nested per-language objects
//! (`"title": {"ru": "...", "en": "..."}`). Resolution walks a fixed chain:
//!
//! 1. `{field}_{backend_code}`
//! 2. `{field}_ru`
//! 3. bare `{field}` when it is a string
//! 4. bare `{field}` as an object, indexed by `backend_code`, `ru`, `en`, `kg`
//!
//! The first non-empty string wins; otherwise the result is empty. Nothing
//! here fails.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::lang::{Language, LanguageMap};
use crate::record::Record;

#[cfg(test)]
mod tests;

/// Fallback order used when indexing a nested per-language object.
const OBJECT_FALLBACKS: [&str; 3] = ["ru", "en", "kg"];

/// Resolve `field` of `record` for `lang`.
pub fn localized_field(record: &Record, field: &str, lang: Language, map: &LanguageMap) -> String {
    resolve_text(record.as_map(), field, map.backend_code(lang)).unwrap_or_default()
}

/// Resolve an array-valued `field` of `record` for `lang`.
pub fn localized_list(
    record: &Record,
    field: &str,
    lang: Language,
    map: &LanguageMap,
) -> Vec<String> {
    resolve_list(record.as_map(), field, map.backend_code(lang)).unwrap_or_default()
}

fn resolve_text(map: &Map<String, Value>, field: &str, code: &str) -> Option<String> {
    non_empty_str(map.get(&format!("{field}_{code}")))
        .or_else(|| non_empty_str(map.get(&format!("{field}_ru"))))
        .or_else(|| match map.get(field) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Object(obj)) => from_language_object(obj, code),
            _ => None,
        })
}

fn resolve_list(map: &Map<String, Value>, field: &str, code: &str) -> Option<Vec<String>> {
    non_empty_list(map.get(&format!("{field}_{code}")), code)
        .or_else(|| non_empty_list(map.get(&format!("{field}_ru")), code))
        .or_else(|| match map.get(field) {
            Some(Value::Object(obj)) => std::iter::once(code)
                .chain(OBJECT_FALLBACKS)
                .find_map(|key| non_empty_list(obj.get(key), code)),
            other => non_empty_list(other, code),
        })
}

/// Index a `{ru, en, kg}` object by `code`, then the fixed fallbacks.
pub fn from_language_object(obj: &Map<String, Value>, code: &str) -> Option<String> {
    std::iter::once(code)
        .chain(OBJECT_FALLBACKS)
        .find_map(|key| non_empty_str(obj.get(key)))
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn non_empty_list(value: Option<&Value>, code: &str) -> Option<Vec<String>> {
    let Some(Value::Array(items)) = value else {
        return None;
    };
    let out: Vec<String> = items
        .iter()
        .filter_map(|item| match item {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Object(obj) => from_language_object(obj, code),
            _ => None,
        })
        .collect();
    (!out.is_empty()).then_some(out)
}

/// A field resolved for every supported language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Localized {
    pub ru: String,
    pub kg: String,
    pub en: String,
}

impl Localized {
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::Ru => &self.ru,
            Language::Kg => &self.kg,
            Language::En => &self.en,
        }
    }
}

/// Resolver bound to one active language and mapping table.
///
/// Pages receive a `Localizer` explicitly instead of reading a global
/// "current language".
#[derive(Debug, Clone, Default)]
pub struct Localizer {
    lang: Language,
    map: LanguageMap,
}

impl Localizer {
    pub fn new(lang: Language, map: LanguageMap) -> Self {
        Self { lang, map }
    }

    pub fn lang(&self) -> Language {
        self.lang
    }

    pub fn map(&self) -> &LanguageMap {
        &self.map
    }

    /// Backend code of the active language.
    pub fn backend_code(&self) -> &str {
        self.map.backend_code(self.lang)
    }

    /// Same table, different language.
    pub fn with_lang(&self, lang: Language) -> Self {
        Self {
            lang,
            map: self.map.clone(),
        }
    }

    pub fn text(&self, record: &Record, field: &str) -> String {
        localized_field(record, field, self.lang, &self.map)
    }

    /// Like [`Localizer::text`], substituting `fallback` for an empty result.
    pub fn text_or(&self, record: &Record, field: &str, fallback: &str) -> String {
        let text = self.text(record, field);
        if text.is_empty() {
            fallback.to_string()
        } else {
            text
        }
    }

    /// First non-empty resolution among `fields`, tried in order.
    pub fn first_of(&self, record: &Record, fields: &[&str]) -> String {
        fields
            .iter()
            .map(|f| self.text(record, f))
            .find(|s| !s.is_empty())
            .unwrap_or_default()
    }

    pub fn list(&self, record: &Record, field: &str) -> Vec<String> {
        localized_list(record, field, self.lang, &self.map)
    }

    /// Resolve `field` once per supported language.
    pub fn all_languages(&self, record: &Record, field: &str) -> Localized {
        Localized {
            ru: localized_field(record, field, Language::Ru, &self.map),
            kg: localized_field(record, field, Language::Kg, &self.map),
            en: localized_field(record, field, Language::En, &self.map),
        }
    }
}
