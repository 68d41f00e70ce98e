use campus_api::endpoints;
use campus_core::{filter, listing::Listing};

use super::{items, Block, Card, Page, PageContext};
use crate::i18n;

pub(super) fn build(listings: &[Listing], ctx: &PageContext) -> Page {
    let loc = &ctx.loc;
    let lang = loc.lang();

    // Search and category were applied by the backend.
    let mut matching = items(listings, 0).to_vec();
    filter::sort_by_date_desc(&mut matching, "published_at");

    let per_page = ctx.page_size.max(1);
    let pages = matching.len().div_ceil(per_page).max(1);
    let page = ctx.page.clamp(1, pages);

    let cards = filter::paginate(&matching, page, per_page)
        .iter()
        .map(|r| {
            let slug = r.scalar("slug");
            let link = (!slug.is_empty())
                .then(|| endpoints::join(&ctx.base_url, &format!("{}{slug}/", endpoints::NEWS)));
            Card::new(loc.text(r, "title"))
                .subtitle(ctx.date(r, &["published_at", "date", "created_at"]))
                .body(loc.first_of(r, &["summary", "short_description", "content"]))
                .meta(ctx.label("category"), filter::category_label(r, "category", loc))
                .image(ctx.media(r, "image"))
                .link(link)
                .translations(ctx.translations(r, "title"))
        })
        .collect();

    let mut block = Block::new(ctx.label("news"), cards);
    if !ctx.query.is_empty() {
        block = block.note(i18n::items_found(lang, matching.len()));
    }
    if pages > 1 {
        block = block.note(i18n::page_of(lang, page, pages));
    }

    Page {
        title: ctx.label("news").to_string(),
        intro: None,
        blocks: vec![block],
    }
}
