use campus_core::listing::Listing;

use super::{items, Block, Card, Page, PageContext};

/// `/api/about/` holds the main description first, then extra sections
/// (mission, history...). `/api/leadership/` lists the rectorate.
pub(super) fn build(listings: &[Listing], ctx: &PageContext) -> Page {
    let loc = &ctx.loc;
    let about = items(listings, 0);

    let intro = about.first().map(|r| {
        Card::new(loc.text(r, "title"))
            .body(loc.first_of(r, &["description", "content"]))
            .meta(ctx.label("founded"), r.scalar("founded_year"))
            .image(ctx.media(r, "image"))
            .translations(ctx.translations(r, "title"))
    });

    let mut blocks: Vec<Block> = about
        .iter()
        .skip(1)
        .map(|r| {
            let card = Card::new(String::new())
                .body(loc.first_of(r, &["description", "content"]))
                .image(ctx.media(r, "image"));
            Block::new(loc.text(r, "title"), vec![card])
        })
        .collect();

    let leaders = items(listings, 1)
        .iter()
        .map(|r| {
            Card::new(loc.first_of(r, &["full_name", "name"]))
                .subtitle(loc.text(r, "position"))
                .body(loc.text(r, "bio"))
                .meta(ctx.label("email"), r.scalar("email"))
                .image(ctx.media(r, "photo"))
                .translations(ctx.translations(r, "full_name"))
        })
        .collect();
    blocks.push(Block::new(ctx.label("leadership"), leaders));

    Page {
        title: ctx.label("about").to_string(),
        intro,
        blocks,
    }
}
