use campus_core::{listing::Listing, record::Record};

use super::{items, Block, Card, Page, PageContext};

/// Menus nest at most this deep; deeper entries are dropped.
const MAX_DEPTH: usize = 3;

fn menu_item(record: &Record, ctx: &PageContext, depth: usize) -> Card {
    let url = ctx.loc.first_of(record, &["url", "link"]);
    let children = if depth < MAX_DEPTH {
        record
            .children("children")
            .iter()
            .map(|child| menu_item(child, ctx, depth + 1))
            .filter(|c| !c.title.is_empty())
            .collect()
    } else {
        Vec::new()
    };
    Card::new(ctx.loc.first_of(record, &["title", "name"]))
        .link((!url.is_empty()).then_some(url))
        .children(children)
}

pub(super) fn build(listings: &[Listing], ctx: &PageContext) -> Page {
    let mut entries: Vec<&Record> = items(listings, 0).iter().collect();
    entries.sort_by_key(|r| r.number("order").map(|o| o as i64).unwrap_or(i64::MAX));

    let cards = entries
        .into_iter()
        .map(|r| menu_item(r, ctx, 1))
        .filter(|c| !c.title.is_empty())
        .collect();

    Page {
        title: ctx.label("navbar").to_string(),
        intro: None,
        blocks: vec![Block::new(ctx.label("navbar"), cards)],
    }
}
