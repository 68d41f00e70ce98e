//! Plain-text rendering of page view models.

use campus_core::lang::Language;
use std::fmt::Write;

use crate::i18n::t;
use crate::pages::{Block, Card, Page, PageState};

/// Render any page state.
pub fn state(state: &PageState, lang: Language) -> String {
    match state {
        PageState::Loading => t("loading", lang).to_string(),
        PageState::Empty => t("no_data", lang).to_string(),
        PageState::Failed(_) => format!("{}\n{}", t("error_generic", lang), t("retry_hint", lang)),
        PageState::Ready(p) => page(p, lang),
    }
}

pub fn page(page: &Page, lang: Language) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", page.title);
    let _ = writeln!(out, "{}", "=".repeat(page.title.chars().count()));

    if let Some(ref intro) = page.intro {
        out.push('\n');
        card(&mut out, intro, 0);
    }
    for b in &page.blocks {
        out.push('\n');
        block(&mut out, b, lang);
    }
    out
}

fn block(out: &mut String, block: &Block, lang: Language) {
    if !block.heading.is_empty() {
        let _ = writeln!(out, "## {}", block.heading);
    }
    for note in &block.notes {
        let _ = writeln!(out, "   {note}");
    }
    if block.cards.is_empty() {
        let key = if block.notes.is_empty() {
            "no_data"
        } else {
            "nothing_found"
        };
        let _ = writeln!(out, "   {}", t(key, lang));
        return;
    }
    for c in &block.cards {
        card(out, c, 1);
    }
}

fn card(out: &mut String, c: &Card, depth: usize) {
    let pad = "   ".repeat(depth.saturating_sub(1));
    let bullet = if depth == 0 { "" } else { "- " };

    if !c.title.is_empty() {
        let _ = writeln!(out, "{pad}{bullet}{}", c.title);
    }
    let inner = format!("{pad}  ");
    if !c.subtitle.is_empty() {
        let _ = writeln!(out, "{inner}{}", c.subtitle);
    }
    if !c.body.is_empty() {
        for line in c.body.lines() {
            let _ = writeln!(out, "{inner}{line}");
        }
    }
    for (caption, value) in &c.meta {
        let _ = writeln!(out, "{inner}{caption}: {value}");
    }
    if !c.tags.is_empty() {
        let _ = writeln!(out, "{inner}[{}]", c.tags.join("] ["));
    }
    if let Some(ref image) = c.image {
        let _ = writeln!(out, "{inner}🖼 {image}");
    }
    if let Some(ref link) = c.link {
        let _ = writeln!(out, "{inner}→ {link}");
    }
    if let Some(ref tr) = c.translations {
        for lang in Language::ALL {
            let _ = writeln!(out, "{inner}{}: {}", lang.code(), tr.get(lang));
        }
    }
    for child in &c.children {
        card(out, child, depth + 1);
    }
}
