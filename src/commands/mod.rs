//! CLI command handlers.

mod show;
mod status;
mod submit;

#[cfg(test)]
mod tests;

pub use show::{show, ShowOptions};
pub use status::status;
pub use submit::{appeal, grant};

use campus_api::{ApiClient, CachedSource};
use campus_core::{
    config::Config,
    lang::Language,
    localize::Localizer,
};

use crate::pages::{PageContext, PageSlot};

/// Everything a command needs: config, the cached backend client and the
/// page slot `show` renders into.
pub struct App {
    pub cfg: Config,
    pub source: CachedSource<ApiClient>,
    pub slot: PageSlot,
}

impl App {
    pub fn from_config(cfg: Config) -> anyhow::Result<Self> {
        let client = ApiClient::from_config(&cfg.api)?;
        let source = CachedSource::from_config(client, &cfg.cache);
        Ok(Self {
            cfg,
            source,
            slot: PageSlot::new(),
        })
    }

    pub fn client(&self) -> &ApiClient {
        self.source.inner()
    }

    pub fn localizer(&self, lang: Language) -> Localizer {
        Localizer::new(lang, self.cfg.languages.clone())
    }

    /// Page context for `lang` with no filters applied.
    pub fn page_context(&self, lang: Language) -> PageContext {
        PageContext {
            loc: self.localizer(lang),
            base_url: self.client().base_url().to_string(),
            page: 1,
            page_size: self.cfg.api.page_size,
            ..Default::default()
        }
    }
}
