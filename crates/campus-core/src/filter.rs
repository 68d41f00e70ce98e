//! Client-side search and filtering over already-fetched records.

use serde_json::Value;

use crate::localize::{from_language_object, Localizer};
use crate::record::Record;

/// User-supplied narrowing of a list page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub search: Option<String>,
    pub category: Option<String>,
}

impl Query {
    pub fn is_empty(&self) -> bool {
        blank(&self.search) && blank(&self.category)
    }
}

fn blank(s: &Option<String>) -> bool {
    s.as_deref().map(str::trim).unwrap_or_default().is_empty()
}

/// Keep records where any of `fields` (resolved for the active language)
/// contains `needle`, case-insensitively. A blank needle keeps everything.
pub fn search(items: &[Record], needle: &str, fields: &[&str], loc: &Localizer) -> Vec<Record> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|r| {
            fields
                .iter()
                .any(|f| loc.text(r, f).to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Label of a record's category, whatever shape the backend used:
/// a plain string, a localized field, or a nested object with its own
/// `name`/`title`/`slug`.
pub fn category_label(record: &Record, field: &str, loc: &Localizer) -> String {
    match record.get(field) {
        Some(Value::Object(obj)) => {
            let nested = Record::new(obj.clone());
            let name = loc.first_of(&nested, &["name", "title"]);
            if !name.is_empty() {
                return name;
            }
            from_language_object(obj, loc.backend_code())
                .unwrap_or_else(|| nested.scalar("slug"))
        }
        _ => loc.text(record, field),
    }
}

fn category_keys(record: &Record, field: &str, loc: &Localizer) -> Vec<String> {
    let mut keys = vec![category_label(record, field, loc)];
    match record.get(field) {
        Some(Value::Object(obj)) => {
            let nested = Record::new(obj.clone());
            keys.push(nested.scalar("slug"));
            keys.push(nested.scalar("id"));
        }
        Some(Value::Number(n)) => keys.push(n.to_string()),
        _ => {}
    }
    keys.retain(|k| !k.is_empty());
    keys
}

/// Keep records whose category matches `category` by label, slug, or id.
pub fn by_category(items: &[Record], field: &str, category: &str, loc: &Localizer) -> Vec<Record> {
    let wanted = category.trim().to_lowercase();
    if wanted.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|r| {
            category_keys(r, field, loc)
                .iter()
                .any(|k| k.to_lowercase() == wanted)
        })
        .cloned()
        .collect()
}

/// Distinct category labels in first-seen order.
pub fn categories(items: &[Record], field: &str, loc: &Localizer) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for r in items {
        let label = category_label(r, field, loc);
        if !label.is_empty() && !out.contains(&label) {
            out.push(label);
        }
    }
    out
}

/// Apply a [`Query`] using `search_fields` for text and `category_field`
/// for the category filter.
pub fn apply(
    items: &[Record],
    query: &Query,
    search_fields: &[&str],
    category_field: &str,
    loc: &Localizer,
) -> Vec<Record> {
    let mut out = items.to_vec();
    if let Some(ref c) = query.category {
        out = by_category(&out, category_field, c, loc);
    }
    if let Some(ref s) = query.search {
        out = search(&out, s, search_fields, loc);
    }
    out
}

/// Newest first by `field`; undated records sink to the end in original order.
pub fn sort_by_date_desc(items: &mut [Record], field: &str) {
    items.sort_by(|a, b| b.date(field).cmp(&a.date(field)));
}

/// One page of `items` (pages are 1-based).
pub fn paginate(items: &[Record], page: usize, per_page: usize) -> &[Record] {
    if per_page == 0 {
        return items;
    }
    let start = page.saturating_sub(1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = (start + per_page).min(items.len());
    &items[start..end]
}
