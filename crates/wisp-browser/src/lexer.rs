//! Markup stripping.
//!
//! A naive, total tag stripper: one left-to-right scan with a single
//! `in_tag` flag. It knows nothing about attribute-value strings,
//! entities (`&amp;` passes through literally), or malformed tags --
//! those are accepted limits of the model, not bugs. It never panics
//! on any input.

/// Remove bracketed tag sequences, yielding plain text.
///
/// `<` starts a tag and `>` ends one; neither is ever emitted, so the
/// output contains no angle brackets and the function is idempotent.
pub fn strip_tags(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut in_tag = false;
    for ch in body.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {},
        }
    }
    out
}
