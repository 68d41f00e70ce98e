//! `campus appeal` and `campus grant`: the two write paths.

use campus_api::forms::{AppealForm, GrantApplication};
use campus_core::{error::CampusError, lang::Language};

use super::App;
use crate::i18n;

fn explain(err: CampusError, lang: Language) -> anyhow::Error {
    match err {
        CampusError::Validation { field, reason } => {
            anyhow::anyhow!(i18n::invalid_field(lang, &field, &reason))
        }
        other => anyhow::anyhow!(
            "{} {}\n({other})",
            i18n::t("error_generic", lang),
            i18n::t("retry_hint", lang)
        ),
    }
}

pub async fn appeal(app: &App, form: &AppealForm, lang: Language) -> anyhow::Result<String> {
    let backend_lang = app.cfg.languages.backend_code(lang);
    let stored = app
        .client()
        .submit_appeal(form, backend_lang)
        .await
        .map_err(|e| explain(e, lang))?;
    Ok(i18n::appeal_sent(lang, &stored.id().unwrap_or_else(|| "-".into())))
}

pub async fn grant(
    app: &App,
    application: &GrantApplication,
    lang: Language,
) -> anyhow::Result<String> {
    let backend_lang = app.cfg.languages.backend_code(lang);
    let stored = app
        .client()
        .submit_grant_application(application, backend_lang)
        .await
        .map_err(|e| explain(e, lang))?;
    Ok(i18n::grant_sent(lang, &stored.id().unwrap_or_else(|| "-".into())))
}
