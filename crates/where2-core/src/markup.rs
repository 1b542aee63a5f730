//! Markdown-subset to HTML rewriting.
//!
//! Supported dialect:
//! - Headings (`#` to `####` at line start)
//! - Bold (`**text**`) and italics (`*text*`)
//! - Links (`[label](url)`), bare `http(s)://` URLs and `@handle` mentions
//! - `&nbsp;` entities and newlines
//!
//! The output of [`to_markup`] is NOT safe to render; it must go through
//! the [`Sanitizer`](crate::Sanitizer) first.

use std::borrow::Cow;

use regex::Captures;

use crate::config::LINK_STYLE;
use crate::options::RenderOptions;
use crate::patterns::{BOLD_RE, HEADING_RES, ITALIC_RE, LINK_SCAN_RE};

/// Characters never kept at the end of a bare URL.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ':', ';', '!', '?', '\''];

/// Rewrite `text` into unsanitized HTML.
///
/// Stages run in a fixed order, each on the output of the previous one.
/// Malformed markup is left as literal text; this never fails.
pub(crate) fn to_markup(text: &str, options: &RenderOptions) -> String {
    let text = normalize_line_endings(text);
    let text = apply_headings(&text);
    let text = apply_emphasis(&text);
    let text = apply_links(&text, options);
    let text = text.replace("&nbsp;", " ");
    text.replace('\n', "<br>")
}

fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

fn apply_headings(text: &str) -> String {
    let mut out = text.to_string();
    for (re, tag) in HEADING_RES.iter() {
        out = re
            .replace_all(&out, format!("<{tag}>${{1}}</{tag}>"))
            .into_owned();
    }
    out
}

fn apply_emphasis(text: &str) -> String {
    let bold = BOLD_RE.replace_all(text, "<strong>$1</strong>");
    ITALIC_RE.replace_all(&bold, "<em>$1</em>").into_owned()
}

/// Links, bare URLs and mentions in one left-to-right pass.
///
/// Emitted anchors are never re-scanned, so a URL is linked at most once.
fn apply_links(text: &str, options: &RenderOptions) -> String {
    LINK_SCAN_RE
        .replace_all(text, |caps: &Captures| {
            if let Some(label) = caps.name("label") {
                return anchor(&caps["href"], label.as_str());
            }
            if let Some(url) = caps.name("url") {
                return bare_url(url.as_str(), options.trim_url_punctuation);
            }
            if let Some(handle) = caps.name("handle") {
                let start = caps.get(0).map_or(0, |m| m.start());
                // Part of a word (e-mail address): not a mention.
                if ends_with_word_char(&text[..start]) {
                    return caps[0].to_string();
                }
                let handle = handle.as_str();
                return anchor(&options.mention_url(handle), &format!("@{handle}"));
            }
            // Existing tag or anchor element, kept as is.
            caps[0].to_string()
        })
        .into_owned()
}

fn bare_url(url: &str, trim_punctuation: bool) -> String {
    let (link, rest) = if trim_punctuation {
        split_trailing_punctuation(url)
    } else {
        (url, "")
    };
    format!("{}{}", anchor(link, link), rest)
}

/// Split a URL into the linked part and trailing sentence punctuation.
///
/// A closing parenthesis is trailing only when unbalanced, so
/// `https://en.wikipedia.org/wiki/Rust_(language)` stays whole.
fn split_trailing_punctuation(url: &str) -> (&str, &str) {
    // '(' is never trimmed, so only the ')' count changes while scanning.
    let opens = url.matches('(').count();
    let mut closes = url.matches(')').count();
    let mut end = url.len();
    for c in url.chars().rev() {
        if c == ')' && closes > opens {
            closes -= 1;
        } else if !TRAILING_PUNCTUATION.contains(&c) {
            break;
        }
        end -= c.len_utf8();
    }
    url.split_at(end)
}

fn anchor(href: &str, label: &str) -> String {
    format!(r#"<a href="{href}" style="{LINK_STYLE}">{label}</a>"#)
}

fn ends_with_word_char(text: &str) -> bool {
    text.chars()
        .next_back()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}
