//! `campus show <section>`.

use campus_api::Section;
use campus_core::{filter::Query, lang::Language};
use tracing::info;

use super::App;
use crate::pages::PageState;
use crate::render;

/// Options of `campus show`.
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    pub search: Option<String>,
    pub category: Option<String>,
    pub all_languages: bool,
    pub page: usize,
}

/// Load and render one section. Ctrl-C while loading abandons the fetch; a
/// load overtaken by a newer `show` on the same app renders nothing.
pub async fn show(app: &App, section: Section, lang: Language, opts: ShowOptions) -> String {
    let mut ctx = app.page_context(lang);
    ctx.query = Query {
        search: opts.search,
        category: opts.category,
    };
    ctx.all_languages = opts.all_languages;
    ctx.page = opts.page.max(1);

    eprintln!("{}", render::state(&PageState::Loading, lang));
    let state = tokio::select! {
        state = app.slot.load(section, &app.source, &ctx) => state,
        _ = tokio::signal::ctrl_c() => {
            info!("{section}: load cancelled");
            return String::new();
        }
    };
    let Some(state) = state else {
        return String::new();
    };
    let (hits, misses) = app.source.stats();
    info!("{section}: rendered (cache hits {hits}, misses {misses})");
    render::state(&state, lang)
}
