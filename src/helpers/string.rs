//! Text helpers used when re-serializing parsed cells.

use std::borrow::Cow;

/// The only quote character recognised by the parser.
pub(crate) const QUOTE: char = '"';

/// Wraps text in quote characters without escaping its content.
#[inline]
pub(crate) fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push(QUOTE);
    quoted.push_str(text);
    quoted.push(QUOTE);
    quoted
}

/// Replaces raw tabs with the two characters `\t`.
/// Borrows when the text holds no tabs.
pub(crate) fn escape_tabs(text: &str) -> Cow<'_, str> {
    if text.contains('\t') {
        Cow::Owned(text.replace('\t', "\\t"))
    } else {
        Cow::Borrowed(text)
    }
}
