//! Whitespace tokenizer for inbound message bodies.

/// Split a raw body into non-empty tokens.
///
/// Any run of whitespace (spaces, tabs, newlines) is one separator, so
/// leading, trailing or repeated whitespace never yields empty tokens. An
/// empty body yields an empty sequence.
pub fn tokenize(body: &str) -> Vec<&str> {
    body.split_whitespace().collect()
}
