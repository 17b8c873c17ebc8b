//! Locating memo entries in an exported page
//!
//! Each memo is a `div` of the memo class holding a time `div` and a content
//! `div`. Both sub-elements are optional at this stage; a memo missing one of
//! them fails later, on its own, without affecting its neighbours.

use scraper::{ElementRef, Html, Selector};

use crate::config::ConvertConfig;
use crate::error::{Memo2mdError, Result};
use crate::node::Node;

/// One memo as found in the document, before conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMemo {
    /// 1-based position in document order
    pub index: usize,
    /// Trimmed text of the time element
    pub time: Option<String>,
    /// Content element as a node tree
    pub content: Option<Node>,
    /// Content element markup, kept for diagnostics
    pub content_html: Option<String>,
}

impl RawMemo {
    /// Time string for diagnostics, empty when absent
    pub fn raw_time(&self) -> &str {
        self.time.as_deref().unwrap_or_default()
    }

    /// Content markup for diagnostics, empty when absent
    pub fn raw_content(&self) -> &str {
        self.content_html.as_deref().unwrap_or_default()
    }
}

struct MemoSelectors {
    memo: Selector,
    time: Selector,
    content: Selector,
}

fn class_selector(class: &str) -> Result<Selector> {
    let css = format!("div.{class}");
    Selector::parse(&css)
        .map_err(|e| Memo2mdError::invalid_config(format!("bad class selector {css:?}: {e}")))
}

impl MemoSelectors {
    fn new(config: &ConvertConfig) -> Result<Self> {
        Ok(Self {
            memo: class_selector(&config.memo_class)?,
            time: class_selector(&config.time_class)?,
            content: class_selector(&config.content_class)?,
        })
    }
}

fn first_match<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

/// Parse a document and collect every memo container in document order.
///
/// Only invalid class names in `config` make this fail; malformed HTML is
/// repaired by the parser.
pub fn locate_memos(html: &str, config: &ConvertConfig) -> Result<Vec<RawMemo>> {
    let selectors = MemoSelectors::new(config)?;
    let document = Html::parse_document(html);

    let memos = document
        .select(&selectors.memo)
        .enumerate()
        .map(|(i, memo)| {
            let time = first_match(memo, &selectors.time)
                .map(|el| el.text().collect::<String>().trim().to_string());
            let content = first_match(memo, &selectors.content);

            RawMemo {
                index: i + 1,
                time,
                content: content.map(Node::from_element),
                content_html: content.map(|el| el.html()),
            }
        })
        .collect();

    Ok(memos)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
        <div class="memo">
            <div class="time"> 2024-01-15 10:30:00 </div>
            <div class="content"><p>First</p></div>
        </div>
        <div class="memo">
            <div class="content"><p>No time</p></div>
        </div>
        <div class="memo other">
            <div class="time">2024-01-16 08:00:00</div>
        </div>
    </body></html>"#;

    #[test]
    fn test_locates_memos_in_order() {
        let memos = locate_memos(PAGE, &ConvertConfig::default()).unwrap();
        assert_eq!(memos.len(), 3);
        assert_eq!(
            memos.iter().map(|m| m.index).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_time_is_trimmed() {
        let memos = locate_memos(PAGE, &ConvertConfig::default()).unwrap();
        assert_eq!(memos[0].time.as_deref(), Some("2024-01-15 10:30:00"));
    }

    #[test]
    fn test_missing_parts_are_none() {
        let memos = locate_memos(PAGE, &ConvertConfig::default()).unwrap();
        assert!(memos[1].time.is_none());
        assert!(memos[1].content.is_some());
        assert!(memos[2].content.is_none());
        assert_eq!(memos[2].raw_content(), "");
        assert_eq!(memos[1].raw_time(), "");
    }

    #[test]
    fn test_content_html_is_kept_for_diagnostics() {
        let memos = locate_memos(PAGE, &ConvertConfig::default()).unwrap();
        assert_eq!(
            memos[0].raw_content(),
            r#"<div class="content"><p>First</p></div>"#
        );
    }

    #[test]
    fn test_custom_class_names() {
        let html = r#"<div class="entry"><div class="when">2024-01-01 00:00:00</div>
            <div class="body">x</div></div>"#;
        let config = ConvertConfig {
            memo_class: "entry".to_string(),
            time_class: "when".to_string(),
            content_class: "body".to_string(),
            ..ConvertConfig::default()
        };
        let memos = locate_memos(html, &config).unwrap();
        assert_eq!(memos.len(), 1);
        assert_eq!(memos[0].time.as_deref(), Some("2024-01-01 00:00:00"));
    }

    #[test]
    fn test_invalid_class_is_config_error() {
        let config = ConvertConfig {
            memo_class: "[oops".to_string(),
            ..ConvertConfig::default()
        };
        assert!(matches!(
            locate_memos("<p></p>", &config),
            Err(Memo2mdError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_no_memos() {
        let memos = locate_memos("<p>nothing here</p>", &ConvertConfig::default()).unwrap();
        assert!(memos.is_empty());
    }
}
