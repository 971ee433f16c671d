//! Turns a free-form model response into a minimal HTML5 document.
//!
//! Every step runs unconditionally, so sanitizing an already sanitized
//! document returns it unchanged.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::markers::Marker;

static LEADING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*```(?i:html)?\s*").unwrap());
static TRAILING_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*```\s*$").unwrap());
/// A fence on a line of its own, wherever it sits (e.g. after a preamble).
static FENCE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*```(?i:html)?[ \t\r]*$").unwrap());
/// Non-greedy: stops at the first `</html>`, even if the model echoed a second document.
static DOCUMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(?:<!DOCTYPE html>|<html).*?</html>").unwrap());
static DOCUMENT_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!DOCTYPE html>|<html").unwrap());
static MARKDOWN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*|__|[*_#]").unwrap());

/// HTML text that starts with `<!DOCTYPE html>` and carries no fence or
/// markdown emphasis markers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SanitizedDocument(String);

impl SanitizedDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for SanitizedDocument {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SanitizedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sanitize a raw model response. Total: any input yields a document.
pub fn sanitize(raw: &str) -> SanitizedDocument {
    let unfenced = strip_fences(raw);
    let unfenced = unfenced.trim();

    let document = match extract_document(unfenced) {
        Some(found) => found.to_string(),
        None => wrap_in_document(unfenced),
    };

    // Dropping markdown markers can join a new fence together (```ht_ml).
    let plain = strip_fence_lines(&strip_markdown(&document));
    let text = strip_preamble(&plain);
    let text = strip_trailing(text);
    let text = ensure_doctype(text);

    SanitizedDocument(text.trim().to_string())
}

fn strip_fences(raw: &str) -> String {
    let opened = LEADING_FENCE.replace(raw, "");
    let closed = TRAILING_FENCE.replace(&opened, "");
    strip_fence_lines(&closed)
}

fn strip_fence_lines(text: &str) -> String {
    FENCE_LINE.replace_all(text, "").into_owned()
}

fn extract_document(text: &str) -> Option<&str> {
    DOCUMENT.find(text).map(|m| m.as_str())
}

fn wrap_in_document(body: &str) -> String {
    format!(
        "{doctype}\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n<title>Generated Page</title>\n</head>\n<body>\n{body}\n</body>\n</html>",
        doctype = Marker::Doctype.literal(),
    )
}

/// Removes bold, italic, underscore and heading markers everywhere,
/// including inside the document.
fn strip_markdown(text: &str) -> String {
    MARKDOWN.replace_all(text, "").into_owned()
}

fn strip_preamble(text: &str) -> &str {
    match DOCUMENT_START.find(text) {
        Some(m) => &text[m.start()..],
        None => text,
    }
}

fn strip_trailing(text: &str) -> &str {
    let close = Marker::HtmlClose.literal();
    match text.find(close) {
        Some(idx) => &text[..idx + close.len()],
        None => text,
    }
}

fn ensure_doctype(text: &str) -> String {
    let doctype = Marker::Doctype.literal();
    if text.starts_with(doctype) {
        text.to_string()
    } else {
        format!("{doctype}\n{text}")
    }
}
