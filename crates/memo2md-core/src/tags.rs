//! Inline `#tag` extraction
//!
//! A tag is `#` followed by one or more characters that are neither
//! whitespace nor `#`, and it only counts when a whitespace character follows
//! it. A tag at the very end of the text is therefore left in place.

use regex::Regex;
use std::sync::OnceLock;
use tracing::warn;

static TAG_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

fn tag_pattern() -> Option<&'static Regex> {
    TAG_PATTERN
        .get_or_init(|| match Regex::new(r"(#[^\s#]+)\s") {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(error = %e, "Failed to compile tag regex");
                None
            }
        })
        .as_ref()
}

/// Remove every tag (plus the whitespace character after it) from `text`.
///
/// Returns the cleaned text and the tags in left-to-right order, without
/// their trailing whitespace.
pub fn extract_tags(text: &str) -> (String, Vec<String>) {
    let Some(pattern) = tag_pattern() else {
        return (text.to_string(), Vec::new());
    };

    let mut cleaned = String::with_capacity(text.len());
    let mut tags = Vec::new();
    let mut last = 0;

    for caps in pattern.captures_iter(text) {
        let (Some(whole), Some(tag)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        cleaned.push_str(&text[last..whole.start()]);
        tags.push(tag.as_str().to_string());
        last = whole.end();
    }
    cleaned.push_str(&text[last..]);

    (cleaned, tags)
}

/// Join tags into the trailing tag line, or `None` when there are no tags
pub fn tag_line(tags: &[String]) -> Option<String> {
    if tags.is_empty() {
        None
    } else {
        Some(tags.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_tag_and_trailing_space() {
        let (cleaned, tags) = extract_tags("Hello **world** #greeting \n\n");
        assert_eq!(cleaned, "Hello **world** \n\n");
        assert_eq!(tags, vec!["#greeting"]);
    }

    #[test]
    fn test_preserves_left_to_right_order() {
        let (cleaned, tags) = extract_tags("#b first #a\nsecond #c done");
        assert_eq!(cleaned, "first second done");
        assert_eq!(tags, vec!["#b", "#a", "#c"]);
    }

    #[test]
    fn test_tag_at_end_without_whitespace_is_kept() {
        let (cleaned, tags) = extract_tags("note #last");
        assert_eq!(cleaned, "note #last");
        assert!(tags.is_empty());
    }

    #[test]
    fn test_lone_hash_and_headings_are_untouched() {
        let (cleaned, tags) = extract_tags("# Heading\nissue ## two\n");
        assert_eq!(cleaned, "# Heading\nissue ## two\n");
        assert!(tags.is_empty());
    }

    #[test]
    fn test_hash_inside_token_splits_at_hash() {
        // `#a#b ` only matches from the second hash
        let (cleaned, tags) = extract_tags("#a#b rest");
        assert_eq!(cleaned, "#arest");
        assert_eq!(tags, vec!["#b"]);
    }

    #[test]
    fn test_unicode_tags() {
        let (cleaned, tags) = extract_tags("讀書 #閱讀 筆記\t#日常 ");
        assert_eq!(cleaned, "讀書 筆記\t");
        assert_eq!(tags, vec!["#閱讀", "#日常"]);
    }

    #[test]
    fn test_second_pass_on_cleaned_text_is_noop() {
        let (cleaned, _) = extract_tags("a #one b #two\nc #tail");
        let (again, tags) = extract_tags(&cleaned);
        assert_eq!(again, cleaned);
        assert!(tags.is_empty());
    }

    #[test]
    fn test_tag_line() {
        assert_eq!(tag_line(&[]), None);
        assert_eq!(
            tag_line(&["#a".to_string(), "#b".to_string()]),
            Some("#a #b".to_string())
        );
    }
}
