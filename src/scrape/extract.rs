//! Record extraction from a rendered results snapshot
//!
//! Works on the HTML string captured from the live page rather than on live
//! element handles, so extraction is a pure read of one DOM snapshot: no
//! session state, no side effects, identical output for identical input.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::types::{
    IMAGE_SELECTOR, NOT_AVAILABLE, PRICE_SELECTOR, ProductRecord, RATING_SELECTOR,
    RESULT_SELECTOR, TITLE_SELECTOR,
};

static RESULT: Lazy<Selector> =
    Lazy::new(|| Selector::parse(RESULT_SELECTOR).expect("result selector is valid CSS"));
static IMAGE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(IMAGE_SELECTOR).expect("image selector is valid CSS"));
static TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(TITLE_SELECTOR).expect("title selector is valid CSS"));
static RATING: Lazy<Selector> =
    Lazy::new(|| Selector::parse(RATING_SELECTOR).expect("rating selector is valid CSS"));
static PRICE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(PRICE_SELECTOR).expect("price selector is valid CSS"));

/// Extract every product card present in the snapshot, in DOM order.
///
/// Each card resolves its four sub-elements independently: a missing
/// sub-element degrades only that field to the placeholder, never the whole
/// record, and a malformed card never short-circuits its siblings. A page
/// with no matching containers yields an empty vector, not an error.
pub fn extract_products(html: &str) -> Vec<ProductRecord> {
    let document = Html::parse_document(html);

    let records: Vec<ProductRecord> = document
        .select(&RESULT)
        .map(|card| ProductRecord {
            image_url: card
                .select(&IMAGE)
                .next()
                .and_then(|img| img.value().attr("src"))
                .map(str::to_string)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            name: text_or_placeholder(card, &TITLE),
            stars: text_or_placeholder(card, &RATING),
            price: text_or_placeholder(card, &PRICE),
        })
        .collect();

    debug!("Extracted {} product cards from snapshot", records.len());
    records
}

/// Trimmed text of the first match inside `card`, or the placeholder.
///
/// Trimming strips leading/trailing whitespace only; interior whitespace and
/// line structure survive untouched.
fn text_or_placeholder(card: ElementRef<'_>, selector: &Selector) -> String {
    card.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
