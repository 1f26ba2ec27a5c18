//! Cursor context detection for hover
//!
//! Finds the word under the cursor and the icon classes of the first
//! `class="..."` attribute on the cursor's line.

use regex::Regex;
use std::sync::LazyLock;

/// Class prefix marking an icon; the remainder is the catalog key.
pub const ICON_CLASS_PREFIX: &str = "my-icons-";

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_-]+").expect("word pattern is valid"));

static CLASS_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bclass\b").expect("keyword pattern is valid"));

static CLASS_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bclass\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("class pattern is valid")
});

/// Character span `(start, end)` of the word under a 1-based column.
///
/// `end` is exclusive. A cursor right after the last character of a word
/// is still on that word.
pub fn word_range_in_line(line_text: &str, column: u32) -> Option<(u32, u32)> {
    match_range_in_line(&WORD, line_text, column)
}

/// Character span of a `\bclass\b` match under a 1-based column.
///
/// Matches inside compound words such as `my-class` or `class-name`; same
/// inclusive-end rule as [`word_range_in_line`].
pub fn keyword_range_in_line(line_text: &str, column: u32) -> Option<(u32, u32)> {
    match_range_in_line(&CLASS_KEYWORD, line_text, column)
}

fn match_range_in_line(pattern: &Regex, line_text: &str, column: u32) -> Option<(u32, u32)> {
    let cursor = column.checked_sub(1)? as usize;

    pattern.find_iter(line_text).find_map(|m| {
        let start = line_text[..m.start()].chars().count();
        let end = start + m.as_str().chars().count();
        (start <= cursor && cursor <= end).then_some((start as u32, end as u32))
    })
}

/// Value of the first `class` attribute on the line, without quotes.
pub fn class_attribute_value(line_text: &str) -> Option<&str> {
    let caps = CLASS_ATTRIBUTE.captures(line_text)?;
    caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str())
}

/// Icon classes on the line, in order, when the cursor is on a word.
///
/// Every icon class of the line's first `class` attribute is returned, not
/// only the one under the cursor. Duplicates are kept.
pub fn extract_icon_classes(line_text: &str, column: u32) -> Vec<String> {
    if word_range_in_line(line_text, column).is_none() {
        return Vec::new();
    }

    let Some(value) = class_attribute_value(line_text) else {
        return Vec::new();
    };

    value
        .split_whitespace()
        .filter(|token| token.starts_with(ICON_CLASS_PREFIX))
        .map(str::to_string)
        .collect()
}

/// Catalog key for an icon class (`my-icons-home` -> `home`).
pub fn icon_key(class: &str) -> &str {
    class.strip_prefix(ICON_CLASS_PREFIX).unwrap_or(class)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = r#"<div class="my-icons-foo bar my-icons-baz"></div>"#;

    #[test]
    fn test_extract_from_any_word_on_line() {
        // "div", "class", "bar" and the closing tag all trigger resolution
        for column in [2, 6, 27, 46] {
            assert_eq!(
                extract_icon_classes(LINE, column),
                vec!["my-icons-foo", "my-icons-baz"],
                "column {}",
                column
            );
        }
    }

    #[test]
    fn test_extract_requires_word_under_cursor() {
        // column 2 is the whitespace between '<' and `div`
        let line = r#"<  div class="my-icons-foo">"#;
        assert!(extract_icon_classes(line, 2).is_empty());
        assert!(!extract_icon_classes(line, 4).is_empty());
    }

    #[test]
    fn test_extract_no_class_attribute() {
        assert!(extract_icon_classes(r#"<div id="my-icons-foo"></div>"#, 3).is_empty());
    }

    #[test]
    fn test_extract_no_icon_classes() {
        assert!(extract_icon_classes(r#"<div class="card big"></div>"#, 3).is_empty());
    }

    #[test]
    fn test_extract_single_quotes_and_spacing() {
        let line = "<i class = 'my-icons-home\tmy-icons-user'></i>";
        assert_eq!(
            extract_icon_classes(line, 2),
            vec!["my-icons-home", "my-icons-user"]
        );
    }

    #[test]
    fn test_extract_keeps_duplicates() {
        let line = r#"<i class="my-icons-a my-icons-a"></i>"#;
        assert_eq!(extract_icon_classes(line, 2), vec!["my-icons-a", "my-icons-a"]);
    }

    #[test]
    fn test_extract_first_attribute_only() {
        let line = r#"<i class="my-icons-a"></i><i class="my-icons-b"></i>"#;
        assert_eq!(extract_icon_classes(line, 2), vec!["my-icons-a"]);
    }

    #[test]
    fn test_prefix_must_match_at_start() {
        let line = r#"<i class="x-my-icons-a my-icons-"></i>"#;
        assert_eq!(extract_icon_classes(line, 2), vec!["my-icons-"]);
    }

    #[test]
    fn test_mismatched_quotes_do_not_match() {
        assert_eq!(class_attribute_value(r#"<i class="my-icons-a'>"#), None);
    }

    #[test]
    fn test_class_attribute_value() {
        assert_eq!(class_attribute_value(LINE), Some("my-icons-foo bar my-icons-baz"));
        assert_eq!(class_attribute_value(r#"<i class="">"#), Some(""));
    }

    #[test]
    fn test_word_range() {
        assert_eq!(word_range_in_line("<div class", 2), Some((1, 4)));
        // right after the word
        assert_eq!(word_range_in_line("<div class", 5), Some((1, 4)));
        assert_eq!(word_range_in_line("<div class", 1), None);
        assert_eq!(word_range_in_line("ab", 0), None);
        assert_eq!(word_range_in_line("ab", 10), None);
    }

    #[test]
    fn test_word_range_counts_characters() {
        assert_eq!(word_range_in_line("<p>图标 my-icons-x", 7), Some((6, 16)));
    }

    #[test]
    fn test_keyword_range() {
        let line = r#"<div my-class="x" class-name class_x></div>"#;
        // `class` inside `my-class`
        assert_eq!(keyword_range_in_line(line, 10), Some((8, 13)));
        // right after `class` in `class-name`
        assert_eq!(keyword_range_in_line(line, 24), Some((18, 23)));
        // `my-` part and `class_x` (no boundary before `_`)
        assert_eq!(keyword_range_in_line(line, 6), None);
        assert_eq!(keyword_range_in_line(line, 31), None);
    }

    #[test]
    fn test_icon_key() {
        assert_eq!(icon_key("my-icons-home"), "home");
        assert_eq!(icon_key("home"), "home");
    }
}
