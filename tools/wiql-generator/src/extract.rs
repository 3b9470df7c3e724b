//! Pulls the query out of a model reply.

use std::sync::LazyLock;

use regex::Regex;

// Literal patterns.
#[allow(clippy::unwrap_used)]
static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").unwrap());

#[allow(clippy::unwrap_used)]
static LANGUAGE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A[a-z][a-z0-9_+-]*\r?\n").unwrap());

/// Returns the interior of the first triple-backtick block in `reply`.
///
/// A lowercase language tag alone on the opening line (` ```wiql `) is
/// dropped, then leading and trailing line breaks (`\n`, `\r\n`) are trimmed. Replies without a
/// fence yield an empty string.
pub fn first_fenced_block(reply: &str) -> String {
    let Some(body) = FENCED_BLOCK
        .captures(reply)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
    else {
        return String::new();
    };

    let body = match LANGUAGE_TAG.find(body) {
        Some(tag) => &body[tag.end()..],
        None => body,
    };

    body.trim_matches(['\r', '\n']).to_string()
}
