//! Compiled regex patterns for the markup pipeline.
//!
//! Patterns are compiled once on first use.

use regex::Regex;
use std::sync::LazyLock;

/// Heading patterns, longest marker first.
///
/// `#` must come last: matching it earlier would split `####` lines into
/// nested single-marker headings.
pub static HEADING_RES: LazyLock<[(Regex, &'static str); 4]> = LazyLock::new(|| {
    [
        (heading(4), "h4"),
        (heading(3), "h3"),
        (heading(2), "h2"),
        (heading(1), "h1"),
    ]
});

fn heading(level: usize) -> Regex {
    Regex::new(&format!(r"(?m)^#{{{level}}} (.*)$")).expect("valid heading regex")
}

/// `**text**`, non-empty, within one line.
pub static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^\n]+?)\*\*").expect("valid bold regex"));

/// `*text*`, non-empty, no inner asterisk, within one line.
pub static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*\n]+)\*").expect("valid italic regex"));

/// Single-pass scanner for links, bare URLs and mentions.
///
/// Alternatives are tried in order at each position:
/// 1. an existing anchor element (kept verbatim, contents included)
/// 2. any other tag (kept verbatim, attributes are never scanned)
/// 3. `[label](url)`
/// 4. bare `http://` or `https://` URL
/// 5. `@handle`
pub static LINK_SCAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?P<anchor>(?i:<a\b)[^>]*>(?s:.*?)(?i:</a\s*>))",
        r"|(?P<tag></?[A-Za-z][^<>]*>)",
        r"|\[(?P<label>[^\]\n]*)\]\((?P<href>[^)\s<>\x22]+)\)",
        r"|(?P<url>https?://[^\s<>\x22]+)",
        r"|@(?P<handle>\w+)",
    ))
    .expect("valid link scan regex")
});
