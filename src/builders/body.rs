//! Substitution of a body snippet into a method skeleton.

/// Default placeholder marking where the body goes in a skeleton
pub const BODY_TAG: &str = "BODY";

/// Replace every occurrence of `placeholder` in `skeleton` with `body`.
///
/// The body is inserted verbatim. A skeleton without the placeholder is
/// returned unchanged, with a warning, and the body is dropped.
pub fn merge_body(skeleton: &str, placeholder: &str, body: &str) -> String {
    if placeholder.is_empty() || !skeleton.contains(placeholder) {
        log::warn!(
            "Full method doesn't contain body tag (body tag={:?})",
            placeholder
        );
        return skeleton.to_string();
    }
    skeleton.replace(placeholder, body)
}
