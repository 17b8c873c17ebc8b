//! Immutable node tree the Markdown renderer walks
//!
//! The HTML parser's DOM is copied into this small tagged enum once, so the
//! renderer never touches parser internals and tests can build trees by hand.

use scraper::ElementRef;

/// A parsed HTML node: either an element with ordered children or raw text.
///
/// Comments, doctypes and processing instructions are dropped during
/// conversion and never appear in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element { name: String, children: Vec<Node> },
    Text(String),
}

impl Node {
    /// Create an element node; the name is lowercased to match parser output
    pub fn element(name: &str, children: Vec<Node>) -> Self {
        Node::Element {
            name: name.to_ascii_lowercase(),
            children,
        }
    }

    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Copy a parsed element and all of its descendants
    pub fn from_element(element: ElementRef<'_>) -> Self {
        let children = element
            .children()
            .filter_map(|child| match child.value() {
                scraper::Node::Text(text) => Some(Node::text(&**text)),
                scraper::Node::Element(_) => ElementRef::wrap(child).map(Node::from_element),
                _ => None,
            })
            .collect();

        Node::Element {
            name: element.value().name().to_string(),
            children,
        }
    }

    /// Parse an HTML fragment and return its root as a node tree
    pub fn parse_fragment(html: &str) -> Self {
        let fragment = scraper::Html::parse_fragment(html);
        Node::from_element(fragment.root_element())
    }

    /// Tag name for elements, `None` for text
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Element { name, .. } => Some(name),
            Node::Text(_) => None,
        }
    }

    /// Child nodes; text nodes have none
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text(_) => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_name_is_lowercased() {
        let node = Node::element("STRONG", vec![Node::text("x")]);
        assert_eq!(node.name(), Some("strong"));
    }

    #[test]
    fn test_parse_fragment_keeps_document_order() {
        let root = Node::parse_fragment("<p>a<b>b</b>c</p>");
        let p = &root.children()[0];
        assert_eq!(p.name(), Some("p"));
        assert_eq!(
            p.children(),
            &[
                Node::text("a"),
                Node::element("b", vec![Node::text("b")]),
                Node::text("c"),
            ]
        );
    }

    #[test]
    fn test_parse_fragment_drops_comments() {
        let root = Node::parse_fragment("<p>keep<!-- drop --></p>");
        assert_eq!(root.children()[0].children(), &[Node::text("keep")]);
    }

    #[test]
    fn test_text_has_no_children() {
        assert!(Node::text("plain").children().is_empty());
        assert_eq!(Node::text("plain").name(), None);
    }
}
