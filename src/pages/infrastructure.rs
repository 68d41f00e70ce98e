use campus_core::{filter, listing::Listing};

use super::{items, Block, Card, Page, PageContext};

pub(super) fn build(listings: &[Listing], ctx: &PageContext) -> Page {
    let loc = &ctx.loc;
    let all = items(listings, 0);

    let facilities = ctx
        .narrow(all, &["name", "title", "description"], "category")
        .iter()
        .map(|r| {
            Card::new(loc.first_of(r, &["name", "title"]))
                .subtitle(filter::category_label(r, "category", loc))
                .body(loc.text(r, "description"))
                .meta(ctx.label("address"), loc.text(r, "address"))
                .meta(ctx.label("capacity"), r.scalar("capacity"))
                .tags(loc.list(r, "features"))
                .image(ctx.media(r, "image"))
                .translations(ctx.translations(r, "name"))
        })
        .collect();

    let mut block = Block::new(ctx.label("facilities"), facilities);
    let categories = filter::categories(all, "category", loc);
    if !categories.is_empty() {
        block = block.note(format!("{}: {}", ctx.label("categories"), categories.join(", ")));
    }

    Page {
        title: ctx.label("infrastructure").to_string(),
        intro: None,
        blocks: vec![block],
    }
}
