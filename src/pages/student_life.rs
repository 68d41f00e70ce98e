use campus_core::{filter, listing::Listing};

use super::{items, Block, Card, Page, PageContext};

pub(super) fn build(listings: &[Listing], ctx: &PageContext) -> Page {
    let loc = &ctx.loc;

    let clubs = ctx
        .narrow(items(listings, 0), &["name", "title", "description"], "category")
        .iter()
        .map(|r| {
            Card::new(loc.first_of(r, &["name", "title"]))
                .body(loc.text(r, "description"))
                .meta(ctx.label("contact"), r.scalar("contact"))
                .tags(loc.list(r, "tags"))
                .image(ctx.media(r, "image"))
                .translations(ctx.translations(r, "name"))
        })
        .collect();

    let mut events = ctx.narrow(items(listings, 1), &["title", "description"], "category");
    filter::sort_by_date_desc(&mut events, "date");
    let events = events
        .iter()
        .map(|r| {
            Card::new(loc.first_of(r, &["title", "name"]))
                .body(loc.text(r, "description"))
                .meta(ctx.label("date"), ctx.date(r, &["date", "start_date"]))
                .meta(ctx.label("location"), loc.text(r, "location"))
                .image(ctx.media(r, "image"))
                .translations(ctx.translations(r, "title"))
        })
        .collect();

    Page {
        title: ctx.label("student_life").to_string(),
        intro: None,
        blocks: vec![
            Block::new(ctx.label("clubs"), clubs),
            Block::new(ctx.label("events"), events),
        ],
    }
}
