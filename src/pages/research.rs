use campus_core::listing::Listing;

use super::{items, Block, Card, Page, PageContext};

pub(super) fn build(listings: &[Listing], ctx: &PageContext) -> Page {
    let loc = &ctx.loc;

    let grants = ctx
        .narrow(items(listings, 0), &["title", "description"], "category")
        .iter()
        .map(|r| {
            Card::new(loc.text(r, "title"))
                .subtitle(loc.text(r, "organization"))
                .body(loc.text(r, "description"))
                .meta(ctx.label("amount"), r.scalar("amount"))
                .meta(ctx.label("deadline"), ctx.date(r, &["deadline"]))
                .meta(ctx.label("status"), loc.text(r, "status"))
                .link(ctx.media(r, "document"))
                .translations(ctx.translations(r, "title"))
        })
        .collect();

    let mut publications = ctx.narrow(items(listings, 1), &["title", "authors"], "category");
    publications.sort_by(|a, b| {
        b.number("year")
            .unwrap_or_default()
            .total_cmp(&a.number("year").unwrap_or_default())
    });
    let publications = publications
        .iter()
        .map(|r| {
            Card::new(loc.text(r, "title"))
                .meta(ctx.label("authors"), loc.text(r, "authors"))
                .meta(ctx.label("journal"), loc.text(r, "journal"))
                .meta(ctx.label("year"), r.scalar("year"))
                .link(ctx.media(r, "file"))
                .translations(ctx.translations(r, "title"))
        })
        .collect();

    Page {
        title: ctx.label("research").to_string(),
        intro: None,
        blocks: vec![
            Block::new(ctx.label("grants"), grants),
            Block::new(ctx.label("publications"), publications),
        ],
    }
}
