//! Supported UI languages and their mapping to backend language codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CampusError;

/// A UI language of the portal. Deserializes through [`FromStr`], so config
/// files accept the same aliases as the command line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Language {
    #[default]
    Ru,
    Kg,
    En,
}

impl Language {
    /// Every supported language, in menu order.
    pub const ALL: [Language; 3] = [Language::Ru, Language::Kg, Language::En];

    /// The code the UI uses for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::Kg => "kg",
            Self::En => "en",
        }
    }

    /// Native name, as shown in the language switcher.
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::Ru => "Русский",
            Self::Kg => "Кыргызча",
            Self::En => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ru" | "rus" | "russian" => Ok(Self::Ru),
            "kg" | "ky" | "kir" | "kyrgyz" => Ok(Self::Kg),
            "en" | "eng" | "english" => Ok(Self::En),
            other => Err(CampusError::Language(other.to_string())),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = CampusError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// UI language → backend language code table.
///
/// The backend expects `ky` for Kyrgyz on some endpoints and `kg` on others,
/// so the Kyrgyz entry is configurable rather than hardcoded. The default
/// passes UI codes through unchanged; set `kg = "ky"` for deployments that
/// want the ISO code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageMap {
    #[serde(default = "default_ru")]
    pub ru: String,
    #[serde(default = "default_kg")]
    pub kg: String,
    #[serde(default = "default_en")]
    pub en: String,
}

fn default_ru() -> String {
    "ru".to_string()
}
fn default_kg() -> String {
    "kg".to_string()
}
fn default_en() -> String {
    "en".to_string()
}

impl Default for LanguageMap {
    fn default() -> Self {
        Self {
            ru: default_ru(),
            kg: default_kg(),
            en: default_en(),
        }
    }
}

impl LanguageMap {
    /// Table that sends the ISO code `ky` for Kyrgyz.
    pub fn iso() -> Self {
        Self {
            kg: "ky".to_string(),
            ..Self::default()
        }
    }

    /// Backend code for `lang`. Blank entries fall back to the UI code.
    pub fn backend_code(&self, lang: Language) -> &str {
        let code = match lang {
            Language::Ru => &self.ru,
            Language::Kg => &self.kg,
            Language::En => &self.en,
        };
        let code = code.trim();
        if code.is_empty() {
            lang.code()
        } else {
            code
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes_and_aliases() {
        assert_eq!("ru".parse::<Language>().unwrap(), Language::Ru);
        assert_eq!("KG".parse::<Language>().unwrap(), Language::Kg);
        assert_eq!("ky".parse::<Language>().unwrap(), Language::Kg);
        assert_eq!(" English ".parse::<Language>().unwrap(), Language::En);
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn test_deserialize_accepts_aliases() {
        #[derive(Deserialize)]
        struct Pick {
            lang: Language,
        }
        for (raw, want) in [("ky", Language::Kg), ("KG", Language::Kg), ("English", Language::En)] {
            let pick: Pick = toml::from_str(&format!("lang = \"{raw}\"")).unwrap();
            assert_eq!(pick.lang, want, "{raw}");
        }
        assert!(toml::from_str::<Pick>(r#"lang = "de""#).is_err());
    }

    #[test]
    fn test_serialize_uses_ui_code() {
        assert_eq!(serde_json::to_string(&Language::Kg).unwrap(), "\"kg\"");
    }

    #[test]
    fn test_default_language_is_russian() {
        assert_eq!(Language::default(), Language::Ru);
    }

    #[test]
    fn test_default_map_passes_ui_codes_through() {
        let map = LanguageMap::default();
        for lang in Language::ALL {
            assert_eq!(map.backend_code(lang), lang.code());
        }
    }

    #[test]
    fn test_iso_map_sends_ky_for_kyrgyz() {
        let map = LanguageMap::iso();
        assert_eq!(map.backend_code(Language::Kg), "ky");
        assert_eq!(map.backend_code(Language::Ru), "ru");
    }

    #[test]
    fn test_blank_entry_falls_back_to_ui_code() {
        let map = LanguageMap {
            kg: "  ".into(),
            ..LanguageMap::iso()
        };
        assert_eq!(map.backend_code(Language::Kg), "kg");
    }

    #[test]
    fn test_map_from_toml_partial() {
        let map: LanguageMap = toml::from_str(r#"kg = "ky""#).unwrap();
        assert_eq!(map.kg, "ky");
        assert_eq!(map.ru, "ru");
        assert_eq!(map.en, "en");
    }
}
