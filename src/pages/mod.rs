//! Page view models, one builder per site section.
//!
//! A page fetches every endpoint its section reads (concurrently), then maps
//! the normalized records into localized cards. Any failure collapses into
//! a single [`PageState::Failed`] for the whole page.

mod about;
mod admissions;
mod gallery;
mod infrastructure;
mod navbar;
mod news;
mod research;
mod student_life;


use campus_api::endpoints::{self, Section};
use campus_api::lifecycle::LatestOnly;
use campus_core::{
    error::CampusError,
    filter::{self, Query},
    listing::Listing,
    localize::{Localized, Localizer},
    record::Record,
    request::ContentRequest,
    traits::ContentSource,
};
use tracing::{debug, warn};

use crate::i18n::t;

/// Date format used on cards.
const DATE_FORMAT: &str = "%d.%m.%Y";

/// One rendered item: a news entry, a program, a club, a photo...
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Card {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    /// (caption, value) pairs; empty values are never stored.
    pub meta: Vec<(String, String)>,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub link: Option<String>,
    pub children: Vec<Card>,
    pub translations: Option<Localized>,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn meta(mut self, caption: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.trim().is_empty() {
            self.meta.push((caption.to_string(), value));
        }
        self
    }

    pub fn list_meta(self, caption: &str, values: Vec<String>) -> Self {
        self.meta(caption, values.join("; "))
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    pub fn link(mut self, link: Option<String>) -> Self {
        self.link = link;
        self
    }

    pub fn children(mut self, children: Vec<Card>) -> Self {
        self.children = children;
        self
    }

    pub fn translations(mut self, translations: Option<Localized>) -> Self {
        self.translations = translations;
        self
    }

    /// Meta value by caption.
    pub fn meta_value(&self, caption: &str) -> Option<&str> {
        self.meta
            .iter()
            .find(|(c, _)| c == caption)
            .map(|(_, v)| v.as_str())
    }
}

/// A titled group of cards on a page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    pub heading: String,
    pub cards: Vec<Card>,
    /// Extra lines under the heading: counts, categories, pagination.
    pub notes: Vec<String>,
}

impl Block {
    pub fn new(heading: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            heading: heading.into(),
            cards,
            notes: Vec::new(),
        }
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

/// A fully built page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub title: String,
    pub intro: Option<Card>,
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.intro.is_none() && self.blocks.iter().all(|b| b.cards.is_empty())
    }
}

/// Page lifecycle as seen by the user.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Loading,
    Ready(Page),
    Empty,
    Failed(String),
}

/// Everything a page builder needs besides the data.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub loc: Localizer,
    pub base_url: String,
    pub query: Query,
    /// Attach every language's title to each card.
    pub all_languages: bool,
    /// 1-based page for paginated lists.
    pub page: usize,
    pub page_size: usize,
}

impl PageContext {
    pub fn label(&self, key: &str) -> &'static str {
        t(key, self.loc.lang())
    }

    /// Absolute URL of a media/document field, if present.
    pub fn media(&self, record: &Record, key: &str) -> Option<String> {
        let raw = record.scalar(key);
        if raw.trim().is_empty() {
            None
        } else {
            Some(endpoints::download_url(&self.base_url, &raw))
        }
    }

    /// First parseable date among `keys`, formatted for display.
    pub fn date(&self, record: &Record, keys: &[&str]) -> String {
        keys.iter()
            .find_map(|k| record.date(k))
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default()
    }

    pub fn translations(&self, record: &Record, field: &str) -> Option<Localized> {
        self.all_languages
            .then(|| self.loc.all_languages(record, field))
    }

    /// Apply the user's search and category on the client, for sections
    /// whose endpoints take no filter parameters.
    pub fn narrow(&self, items: &[Record], search_fields: &[&str], category_field: &str) -> Vec<Record> {
        filter::apply(items, &self.query, search_fields, category_field, &self.loc)
    }

    /// Requests for `section`, with server-side filters where supported.
    pub fn requests(&self, section: Section) -> Vec<ContentRequest> {
        let lang = self.loc.backend_code().to_string();
        section
            .endpoints()
            .iter()
            .map(|path| {
                let req = ContentRequest::new(*path, lang.clone());
                if section.accepts_filters() {
                    req.param("search", self.query.search.clone().unwrap_or_default())
                        .param("category", self.query.category.clone().unwrap_or_default())
                } else {
                    req
                }
            })
            .collect()
    }
}

/// Records of the `i`-th fetched listing.
pub(crate) fn items(listings: &[Listing], i: usize) -> &[Record] {
    listings
        .get(i)
        .map(|l| l.items.as_slice())
        .unwrap_or_default()
}

/// Fetch every request; the first failure fails the lot.
async fn fetch_every(
    source: &dyn ContentSource,
    requests: &[ContentRequest],
) -> Result<Vec<Listing>, CampusError> {
    match requests {
        [one] => Ok(vec![source.fetch(one).await?]),
        [a, b] => {
            let (a, b) = tokio::join!(source.fetch(a), source.fetch(b));
            Ok(vec![a?, b?])
        }
        many => {
            let mut out = Vec::with_capacity(many.len());
            for req in many {
                out.push(source.fetch(req).await?);
            }
            Ok(out)
        }
    }
}

/// Build the view model for `section` from already-fetched listings.
pub fn build(section: Section, listings: &[Listing], ctx: &PageContext) -> Page {
    match section {
        Section::About => about::build(listings, ctx),
        Section::Admissions => admissions::build(listings, ctx),
        Section::Infrastructure => infrastructure::build(listings, ctx),
        Section::StudentLife => student_life::build(listings, ctx),
        Section::Research => research::build(listings, ctx),
        Section::News => news::build(listings, ctx),
        Section::Navbar => navbar::build(listings, ctx),
        Section::Gallery => gallery::build(listings, ctx),
    }
}

/// One on-screen page. Every load takes a ticket; a load that finishes after
/// a newer one has started is discarded.
#[derive(Debug, Default)]
pub struct PageSlot {
    latest: LatestOnly,
}

impl PageSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// [`load`], or `None` if a newer load on this slot superseded it.
    pub async fn load(
        &self,
        section: Section,
        source: &dyn ContentSource,
        ctx: &PageContext,
    ) -> Option<PageState> {
        let ticket = self.latest.issue();
        let state = load(section, source, ctx).await;
        let accepted = self.latest.accept(ticket, state);
        if accepted.is_none() {
            debug!("{section}: superseded by a newer load");
        }
        accepted
    }
}

/// Fetch and build one page.
pub async fn load(section: Section, source: &dyn ContentSource, ctx: &PageContext) -> PageState {
    let requests = ctx.requests(section);
    match fetch_every(source, &requests).await {
        Ok(listings) => {
            let page = build(section, &listings, ctx);
            if page.is_empty() {
                PageState::Empty
            } else {
                PageState::Ready(page)
            }
        }
        Err(e) => {
            warn!("{section}: load failed (retryable: {}): {e}", e.is_retryable());
            PageState::Failed(e.to_string())
        }
    }
}
