use campus_core::listing::Listing;

use super::{items, Block, Card, Page, PageContext};

pub(super) fn build(listings: &[Listing], ctx: &PageContext) -> Page {
    let loc = &ctx.loc;

    let programs = ctx
        .narrow(items(listings, 0), &["title", "description"], "degree")
        .iter()
        .map(|r| {
            Card::new(loc.first_of(r, &["title", "name"]))
                .subtitle(loc.text(r, "degree"))
                .body(loc.text(r, "description"))
                .meta(ctx.label("duration"), loc.text(r, "duration"))
                .meta(ctx.label("tuition"), r.scalar("tuition"))
                .meta(ctx.label("deadline"), ctx.date(r, &["deadline"]))
                .list_meta(ctx.label("requirements"), loc.list(r, "requirements"))
                .tags(loc.list(r, "benefits"))
                .translations(ctx.translations(r, "title"))
        })
        .collect();

    // FAQ renders as an accordion: question as title, answer as body.
    let faq = items(listings, 1)
        .iter()
        .map(|r| Card::new(loc.text(r, "question")).body(loc.text(r, "answer")))
        .filter(|c| !c.title.is_empty())
        .collect();

    Page {
        title: ctx.label("admissions").to_string(),
        intro: None,
        blocks: vec![
            Block::new(ctx.label("programs"), programs),
            Block::new(ctx.label("faq"), faq),
        ],
    }
}
