/// Normalize a food name for matching: trim, lowercase, and strip a
/// single trailing "s" as a crude singularizer.
///
/// Known limitation: words that genuinely end in "s" lose the final
/// letter too ("hummus" becomes "hummu"). Tests pin this behavior; do
/// not replace it with a real stemmer.
pub fn normalize(s: &str) -> String {
    let lowered = s.trim().to_lowercase();
    match lowered.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => lowered,
    }
}

/// Two strings denote the same food iff they normalize equal.
pub fn matches(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
