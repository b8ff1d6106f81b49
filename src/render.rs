//! Markdown-lite rendering
//!
//! A tiny renderer for the restricted markdown subset the planning
//! backend emits: `#`/`##`/`###` headings, `**bold**`, and blank-line
//! paragraph breaks. Rules run as ordered global substitutions over the
//! whole text; heading rules must run before the inline rules so that a
//! heading line is consumed exactly once. This is deliberately not a
//! general markdown engine — no lists, links, code blocks, or HTML
//! escaping (input is trusted to come from the paired backend).

use regex::Regex;
use std::sync::LazyLock;

/// Ordered substitution rules; order is load-bearing
static RULES: LazyLock<[(Regex, &'static str); 5]> = LazyLock::new(|| {
    [
        (Regex::new(r"(?im)^### (.*)$").unwrap(), "<h4>$1</h4>"),
        (Regex::new(r"(?im)^## (.*)$").unwrap(), "<h3>$1</h3>"),
        (Regex::new(r"(?im)^# (.*)$").unwrap(), "<h2>$1</h2>"),
        (Regex::new(r"\*\*(.*?)\*\*").unwrap(), "<strong>$1</strong>"),
        (Regex::new(r"\n\n").unwrap(), "<br/><br/>"),
    ]
});

/// Transform markdown-lite text into its HTML rendering.
///
/// Pure function; the input is never mutated and each rule sees the
/// output of the previous one.
#[must_use]
pub fn render_markdown_lite(markdown: &str) -> String {
    RULES
        .iter()
        .fold(markdown.to_string(), |text, (pattern, replacement)| {
            pattern.replace_all(&text, *replacement).into_owned()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Day 1", "<h2>Day 1</h2>")]
    #[case("## Morning", "<h3>Morning</h3>")]
    #[case("### Louvre", "<h4>Louvre</h4>")]
    #[case("**Eiffel Tower**", "<strong>Eiffel Tower</strong>")]
    #[case("one\n\ntwo", "one<br/><br/>two")]
    fn test_single_rule(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(render_markdown_lite(input), expected);
    }

    #[test]
    fn test_combined_document() {
        let input = "# Day 1\n\nVisit **Louvre**";
        assert_eq!(
            render_markdown_lite(input),
            "<h2>Day 1</h2><br/><br/>Visit <strong>Louvre</strong>"
        );
    }

    #[test]
    fn test_plain_text_is_untouched() {
        // Idempotent modulo paragraph breaks: plain text maps to itself
        let input = "A quiet day with no plans.";
        assert_eq!(render_markdown_lite(input), input);
        assert_eq!(
            render_markdown_lite(&render_markdown_lite(input)),
            render_markdown_lite(input)
        );
    }

    #[test]
    fn test_heading_only_at_line_start() {
        let input = "see # note inline";
        assert_eq!(render_markdown_lite(input), input);
    }

    #[test]
    fn test_deeper_heading_wins_over_shallower() {
        // The ### rule runs first, so the line never matches ## or #
        let input = "### Detail\n## Section\n# Title";
        assert_eq!(
            render_markdown_lite(input),
            "<h4>Detail</h4>\n<h3>Section</h3>\n<h2>Title</h2>"
        );
    }

    #[test]
    fn test_bold_is_non_greedy() {
        let input = "**a** and **b**";
        assert_eq!(
            render_markdown_lite(input),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn test_single_newline_is_preserved() {
        let input = "line one\nline two";
        assert_eq!(render_markdown_lite(input), input);
    }

    #[test]
    fn test_html_passes_through_unescaped() {
        // Behavioral parity with the original renderer: no escaping
        let input = "<em>kept</em>";
        assert_eq!(render_markdown_lite(input), input);
    }
}
