use campus_core::{filter, listing::Listing};

use super::{items, Block, Card, Page, PageContext};

pub(super) fn build(listings: &[Listing], ctx: &PageContext) -> Page {
    let loc = &ctx.loc;
    let all = items(listings, 0);

    // Category was applied by the backend.
    let photos = all
        .iter()
        .filter_map(|r| {
            // A gallery entry without an image has nothing to show.
            let image = ctx.media(r, "image").or_else(|| ctx.media(r, "photo"))?;
            Some(
                Card::new(loc.text(r, "title"))
                    .subtitle(filter::category_label(r, "category", loc))
                    .body(loc.text(r, "description"))
                    .image(Some(image))
                    .translations(ctx.translations(r, "title")),
            )
        })
        .collect();

    let mut block = Block::new(ctx.label("photos"), photos);
    let categories = filter::categories(all, "category", loc);
    if !categories.is_empty() {
        block = block.note(format!("{}: {}", ctx.label("categories"), categories.join(", ")));
    }

    Page {
        title: ctx.label("gallery").to_string(),
        intro: None,
        blocks: vec![block],
    }
}
