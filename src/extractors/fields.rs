use lazy_regex::regex;
use scraper::Selector;

use crate::document::Node;
use crate::url::SITE_ORIGIN;

// Placeholder data URI shown while the real image is lazy-loaded
const LAZY_PLACEHOLDER: &str = "data:image";

/// Collapses a multi-line teaser into one line.
pub(crate) fn collapse(text: &str) -> String {
    text.trim_matches(|c| c == ' ' || c == '\n').replace('\n', " ")
}

/// First decimal number in `text`, e.g. "4.49 von 5 Sternen" -> "4.49".
/// No match yields an empty string, never an error.
pub(crate) fn decimal(text: &str) -> String {
    regex!(r"\d+\.\d*")
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Detail pages render the average rating as "Ø 4,49". The glyph and
/// the comma separator have to go before the number can be picked out.
pub(crate) fn normalized_rating(text: &str) -> String {
    let text = text.replace('Ø', "").replace(',', ".");
    decimal(&text)
}

/// Prefixes a site-relative link with the fixed origin. An empty href
/// stays empty rather than turning into the bare origin.
pub(crate) fn absolutize(href: &str) -> String {
    if href.is_empty() {
        return String::new();
    }
    format!("{SITE_ORIGIN}{href}")
}

/// The real thumbnail lives in `srcset`, except while the image is
/// still lazy-loading, where `srcset` holds a placeholder data URI and
/// `data-srcset` the real URL.
pub(crate) fn image_source(node: &Node) -> String {
    let srcset = node.attr_or("srcset", "");
    if srcset.starts_with(LAZY_PLACEHOLDER) {
        node.attr_or("data-srcset", "")
    } else {
        srcset
    }
}

/// Trimmed text of the first match under `node`, empty when absent.
pub(crate) fn text_of(node: &Node, selector: &Selector) -> String {
    node.first(selector)
        .map(|n| n.text().trim().to_string())
        .unwrap_or_default()
}

/// Attribute of the first match under `node`, empty when absent.
pub(crate) fn attr_of(node: &Node, selector: &Selector, name: &str) -> String {
    node.first(selector)
        .map(|n| n.attr_or(name, ""))
        .unwrap_or_default()
}
