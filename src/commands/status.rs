//! `campus status`: configuration summary and backend reachability.

use campus_api::{lifecycle::FetchTask, ApiClient, CachedSource, Section};
use campus_core::{
    lang::Language, request::ContentRequest, traits::ContentSource,
};
use std::sync::Arc;

use super::App;
use crate::i18n;

/// Probe every section's first endpoint concurrently.
async fn probe_sections(client: &ApiClient, backend_lang: &str) -> Vec<(Section, Result<usize, String>)> {
    let source: Arc<dyn ContentSource> = Arc::new(client.clone());
    let tasks: Vec<(Section, FetchTask)> = Section::ALL
        .into_iter()
        .map(|section| {
            let req = ContentRequest::new(section.endpoints()[0], backend_lang);
            (section, FetchTask::spawn(source.clone(), req))
        })
        .collect();

    let mut out = Vec::with_capacity(tasks.len());
    for (section, task) in tasks {
        let result = task.join().await.map(|l| l.len()).map_err(|e| e.to_string());
        out.push((section, result));
    }
    out
}

pub async fn status(app: &App, config_path: &str, lang: Language) -> String {
    let cfg = &app.cfg;
    let source: &CachedSource<ApiClient> = &app.source;
    let available = source.is_available().await;

    let mut lines = vec![
        i18n::t("status_header", lang).to_string(),
        format!("Config: {config_path}"),
        format!("{}: {}", cfg.campus.name, cfg.api.base_url),
        format!(
            "{} {} ({})",
            i18n::t("language_label", lang),
            lang.native_name(),
            cfg.languages.backend_code(lang)
        ),
        format!(
            "kg → {}, ru → {}, en → {}",
            cfg.languages.backend_code(Language::Kg),
            cfg.languages.backend_code(Language::Ru),
            cfg.languages.backend_code(Language::En),
        ),
        format!(
            "cache: {} (ttl {}s)",
            if cfg.cache.enabled { "on" } else { "off" },
            cfg.cache.ttl_secs
        ),
        format!(
            "{}: {}",
            i18n::t("backend", lang),
            i18n::t(if available { "available" } else { "unavailable" }, lang)
        ),
    ];

    if available {
        let backend_lang = cfg.languages.backend_code(lang);
        for (section, result) in probe_sections(app.client(), backend_lang).await {
            lines.push(match result {
                Ok(n) => format!("  {section}: {n}"),
                Err(e) => format!("  {section}: {e}"),
            });
        }
    }
    lines.join("\n")
}
