use super::*;
use serde_json::json;

fn rec(v: Value) -> Record {
    Record::from_value(v).unwrap()
}

fn resolve(record: &Record, field: &str, lang: Language) -> String {
    localized_field(record, field, lang, &LanguageMap::default())
}

#[test]
fn test_suffixed_active_language_wins() {
    let r = rec(json!({"title_en": "Hello", "title_ru": "Привет", "title": "bare"}));
    assert_eq!(resolve(&r, "title", Language::En), "Hello");
}

#[test]
fn test_missing_active_falls_back_to_russian() {
    let r = rec(json!({"title_ru": "Привет", "title": "bare"}));
    assert_eq!(resolve(&r, "title", Language::En), "Привет");
}

#[test]
fn test_bare_string_for_every_language() {
    let r = rec(json!({"title": "Campus"}));
    for lang in Language::ALL {
        assert_eq!(resolve(&r, "title", lang), "Campus");
    }
}

#[test]
fn test_object_form_kg_with_default_table() {
    let r = rec(json!({"title": {"ru": "Ру", "en": "En", "kg": "Кг"}}));
    assert_eq!(resolve(&r, "title", Language::Kg), "Кг");
}

#[test]
fn test_object_form_with_iso_table_prefers_ky_then_ru() {
    let map = LanguageMap::iso();
    let r = rec(json!({"title": {"ru": "Ру", "en": "En", "kg": "Кг"}}));
    assert_eq!(localized_field(&r, "title", Language::Kg, &map), "Ру");

    let with_ky = rec(json!({"title": {"ru": "Ру", "ky": "Ky"}}));
    assert_eq!(localized_field(&with_ky, "title", Language::Kg, &map), "Ky");

    let only_kg = rec(json!({"title": {"kg": "Кг"}}));
    assert_eq!(localized_field(&only_kg, "title", Language::Kg, &map), "Кг");
}

#[test]
fn test_object_form_missing_kg_falls_back_to_ru() {
    let r = rec(json!({"title": {"ru": "Ру", "en": "En"}}));
    assert_eq!(resolve(&r, "title", Language::Kg), "Ру");
}

#[test]
fn test_nothing_present_is_empty() {
    let r = rec(json!({"other": "x"}));
    for lang in Language::ALL {
        assert_eq!(resolve(&r, "title", lang), "");
    }
}

#[test]
fn test_hello_privet_scenario() {
    let r = rec(json!({"title_ru": "Привет", "title_en": "Hello"}));
    assert_eq!(resolve(&r, "title", Language::En), "Hello");
    assert_eq!(resolve(&r, "title", Language::Kg), "Привет");
    assert_eq!(resolve(&r, "title", Language::Ru), "Привет");
}

#[test]
fn test_ivan_scenario() {
    let r = rec(json!({"name": {"ru": "Иван", "en": "Ivan"}}));
    assert_eq!(resolve(&r, "name", Language::Kg), "Иван");
}

#[test]
fn test_kyrgyz_suffix_follows_mapping_table() {
    let r = rec(json!({"title_ky": "Салам", "title_kg": "Саламатсызбы", "title_ru": "Привет"}));
    assert_eq!(resolve(&r, "title", Language::Kg), "Саламатсызбы");
    assert_eq!(
        localized_field(&r, "title", Language::Kg, &LanguageMap::iso()),
        "Салам"
    );
}

#[test]
fn test_empty_strings_are_skipped() {
    let r = rec(json!({"title_en": "", "title_ru": "", "title": {"en": "", "ru": "Ру"}}));
    assert_eq!(resolve(&r, "title", Language::En), "Ру");
}

#[test]
fn test_non_string_values_degrade() {
    let r = rec(json!({"title_en": 42, "title_ru": null, "title": [1, 2]}));
    assert_eq!(resolve(&r, "title", Language::En), "");
}

#[test]
fn test_resolution_is_idempotent() {
    let r = rec(json!({"title_ru": "Привет", "title": {"en": "Hi"}}));
    let first = resolve(&r, "title", Language::En);
    let second = resolve(&r, "title", Language::En);
    assert_eq!(first, second);
}

#[test]
fn test_list_suffix_resolution() {
    let r = rec(json!({
        "benefits_en": ["Dorm", "Stipend"],
        "benefits": ["Общежитие"],
    }));
    assert_eq!(
        localized_list(&r, "benefits", Language::En, &LanguageMap::default()),
        vec!["Dorm", "Stipend"]
    );
    assert_eq!(
        localized_list(&r, "benefits", Language::Ru, &LanguageMap::default()),
        vec!["Общежитие"]
    );
}

#[test]
fn test_list_items_may_be_language_objects() {
    let r = rec(json!({"tags": [{"ru": "Спорт", "en": "Sport"}, "Music", 3, ""]}));
    assert_eq!(
        localized_list(&r, "tags", Language::En, &LanguageMap::default()),
        vec!["Sport", "Music"]
    );
}

#[test]
fn test_list_object_form() {
    let r = rec(json!({"tags": {"ru": ["а"], "en": ["a", "b"]}}));
    assert_eq!(
        localized_list(&r, "tags", Language::En, &LanguageMap::default()),
        vec!["a", "b"]
    );
    assert_eq!(
        localized_list(&r, "tags", Language::Kg, &LanguageMap::default()),
        vec!["а"]
    );
}

#[test]
fn test_list_nothing_resolves_to_empty() {
    let r = rec(json!({"benefits_en": [], "benefits": "not a list"}));
    assert!(localized_list(&r, "benefits", Language::En, &LanguageMap::default()).is_empty());
}

#[test]
fn test_localizer_helpers() {
    let loc = Localizer::new(Language::En, LanguageMap::default());
    let r = rec(json!({"name_ru": "Иван", "title_en": "Dean"}));
    assert_eq!(loc.first_of(&r, &["position", "title"]), "Dean");
    assert_eq!(loc.text_or(&r, "summary", "-"), "-");
    assert_eq!(loc.backend_code(), "en");
    assert_eq!(loc.with_lang(Language::Kg).backend_code(), "kg");
}

#[test]
fn test_all_languages_bundle() {
    let loc = Localizer::default();
    let r = rec(json!({"title_ru": "Привет", "title_en": "Hello", "title_kg": "Салам"}));
    let all = loc.all_languages(&r, "title");
    assert_eq!(all.ru, "Привет");
    assert_eq!(all.kg, "Салам");
    assert_eq!(all.en, "Hello");
    assert_eq!(all.get(Language::En), "Hello");
}
