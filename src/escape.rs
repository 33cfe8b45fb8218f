use std::borrow::Cow;

/// Characters that carry meaning in the host pattern grammar. Text containing
/// any of these cannot be embedded verbatim.
const METACHARACTERS: &[char] = &[
    '\\', '^', '$', '.', '|', '?', '*', '+', '(', ')', '[', ']', '{', '}',
];

/// Returns `text` in a form that matches it literally.
///
/// Text free of metacharacters is returned unchanged, byte for byte, so
/// rendered patterns stay readable. Anything else is wrapped in a
/// `\Q...\E` quoted span.
///
/// Text that itself contains the `\E` terminator is not handled; the
/// resulting span ends early and the remainder is interpreted as pattern
/// syntax.
pub fn quote(text: &str) -> Cow<'_, str> {
    if text.contains(METACHARACTERS) {
        Cow::Owned(format!("\\Q{text}\\E"))
    } else {
        Cow::Borrowed(text)
    }
}
