use super::*;
use campus_api::forms::{AppealForm, GrantApplication};
use campus_api::Section;
use campus_core::config::{ApiConfig, Config};

fn offline_app() -> App {
    App::from_config(Config {
        api: ApiConfig {
            base_url: "http://127.0.0.1:9".into(),
            timeout_secs: 2,
            ..Default::default()
        },
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn test_page_context_uses_config() {
    let app = offline_app();
    let ctx = app.page_context(Language::Kg);
    assert_eq!(ctx.loc.backend_code(), "kg");
    assert_eq!(ctx.base_url, "http://127.0.0.1:9");
    assert_eq!(ctx.page, 1);
    assert_eq!(ctx.page_size, 10);
}

#[tokio::test]
async fn test_show_offline_renders_localized_error() {
    let app = offline_app();
    let text = show(&app, Section::News, Language::En, ShowOptions::default()).await;
    assert!(text.contains("Failed to load data."));
    let text = show(&app, Section::News, Language::Ru, ShowOptions::default()).await;
    assert!(text.contains("Не удалось загрузить данные."));
}

#[tokio::test]
async fn test_invalid_appeal_reports_field_in_user_language() {
    let app = offline_app();
    let form = AppealForm {
        full_name: "Test".into(),
        email: "nope".into(),
        subject: "s".into(),
        message: "m".into(),
        ..Default::default()
    };
    let err = appeal(&app, &form, Language::En).await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid field 'email': not an email address");
}

#[tokio::test]
async fn test_grant_network_failure_is_generic() {
    let app = offline_app();
    let application = GrantApplication {
        grant_id: "1".into(),
        applicant_name: "A".into(),
        email: "a@b.kg".into(),
        organization: "Org".into(),
        project_summary: "Sum".into(),
        requested_amount: None,
    };
    let err = grant(&app, &application, Language::Kg).await.unwrap_err();
    assert!(err.to_string().starts_with("Маалыматты жүктөөдө ката кетти."));
}

#[tokio::test]
async fn test_status_offline() {
    let app = offline_app();
    let text = status(&app, "campus.toml", Language::En).await;
    assert!(text.contains("Portal status"));
    assert!(text.contains("kg → kg"));
    assert!(text.contains("Backend: unavailable"));
}
