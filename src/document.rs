use scraper::{ElementRef, Html, Selector};

/// A parsed page plus the query operations the extractors rely on.
///
/// Extractor code goes through this wrapper rather than the parsing
/// library directly, so the library's API shape stays out of the
/// extraction rules.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(raw: &str) -> Self {
        Document {
            html: Html::parse_document(raw),
        }
    }

    /// All nodes matching `selector`, in document order.
    pub fn find(&self, selector: &Selector) -> Vec<Node<'_>> {
        self.html.select(selector).map(Node::new).collect()
    }

    /// First node matching `selector`, if any.
    pub fn first(&self, selector: &Selector) -> Option<Node<'_>> {
        self.html.select(selector).next().map(Node::new)
    }
}

/// One element of a parsed document.
#[derive(Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl<'a> Node<'a> {
    fn new(element: ElementRef<'a>) -> Self {
        Node { element }
    }

    /// Nodes below this one matching `selector`, in document order.
    pub fn find(&self, selector: &Selector) -> Vec<Node<'a>> {
        self.element.select(selector).map(Node::new).collect()
    }

    /// First node below this one matching `selector`, if any.
    pub fn first(&self, selector: &Selector) -> Option<Node<'a>> {
        self.element.select(selector).next().map(Node::new)
    }

    /// Concatenated text content with markup stripped. Source newlines
    /// inside the element are kept as-is.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Attribute value, or `default` when the attribute is missing.
    pub fn attr_or(&self, name: &str, default: &str) -> String {
        self.element
            .value()
            .attr(name)
            .unwrap_or(default)
            .to_string()
    }
}
