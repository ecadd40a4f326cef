//! Data structures and selector constants for the product scrape

use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// CSS selector for the storefront's header search input
pub const SEARCH_INPUT_SELECTOR: &str = "input.nav-input";

/// CSS selector for individual result containers on a search results page
pub const RESULT_SELECTOR: &str = "div.s-result-item";

/// CSS selector for the pagination-next marker, enabled or disabled.
/// Attachment of this element signals that the pagination strip has rendered.
pub const NEXT_MARKER_SELECTOR: &str = ".s-pagination-item.s-pagination-next";

/// CSS selector for the enabled next-page button (an anchor)
pub const NEXT_ENABLED_SELECTOR: &str =
    "a.s-pagination-item.s-pagination-next.s-pagination-button";

/// CSS selector for the disabled next-page terminator (a span, on the last page)
pub const NEXT_DISABLED_SELECTOR: &str =
    "span.s-pagination-item.s-pagination-next.s-pagination-disabled";

/// Container-scoped selector for the product thumbnail
pub const IMAGE_SELECTOR: &str = "img";

/// Container-scoped selector for the product title text
pub const TITLE_SELECTOR: &str = "h2 > a > span";

/// Container-scoped selector for the star-rating text
pub const RATING_SELECTOR: &str = "span.a-class-alt";

/// Container-scoped selector for the price text
pub const PRICE_SELECTOR: &str = "span.a-color-base";

/// Placeholder recorded for any field whose element is missing from a card
pub const NOT_AVAILABLE: &str = "not available";

// =============================================================================
// Data Structures
// =============================================================================

/// A single scraped product card
///
/// Every field always holds either extracted text or the literal
/// `"not available"` placeholder, never null, so consumers of the JSON
/// output don't need absence checks. Serialized key names are the file
/// format contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// `src` attribute of the product thumbnail
    #[serde(rename = "img_url")]
    pub image_url: String,

    /// Trimmed title text
    #[serde(rename = "productName")]
    pub name: String,

    /// Trimmed star-rating text
    pub stars: String,

    /// Trimmed price text
    pub price: String,
}
