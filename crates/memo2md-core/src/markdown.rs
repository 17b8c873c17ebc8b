//! HTML-to-Markdown rendering over a [`Node`] tree
//!
//! Only a fixed set of inline and list elements produce markup; every other
//! element (including the document root) renders its children unchanged.

use crate::node::Node;

/// Render a node and all its descendants as Markdown.
///
/// Rendering is pure: a subtree renders to exactly the text it contributes
/// to its parent's rendering.
pub fn render(node: &Node) -> String {
    match node {
        Node::Text(text) => text.replace('\u{a0}', " "),
        Node::Element { name, children } => render_element(name, children),
    }
}

fn render_element(name: &str, children: &[Node]) -> String {
    match name {
        "p" => render_children(children) + "\n\n",
        "br" => "\n".to_string(),
        "b" | "strong" => wrap(children, "**"),
        "i" | "em" => wrap(children, "*"),
        "mark" => wrap(children, "=="),
        "ul" => list_items(children)
            .map(|item| format!("- {}\n", render(item).trim()))
            .collect(),
        "ol" => list_items(children)
            .enumerate()
            .map(|(i, item)| format!("{}. {}\n", i + 1, render(item).trim()))
            .collect(),
        _ => render_children(children),
    }
}

fn render_children(children: &[Node]) -> String {
    children.iter().map(render).collect()
}

fn wrap(children: &[Node], marker: &str) -> String {
    format!("{marker}{}{marker}", render_children(children))
}

/// Direct `li` children only; text and other elements between items are skipped
fn list_items(children: &[Node]) -> impl Iterator<Item = &Node> {
    children.iter().filter(|child| child.name() == Some("li"))
}

/// Parse an HTML fragment and render it
pub fn html_to_markdown(html: &str) -> String {
    render(&Node::parse_fragment(html))
}
