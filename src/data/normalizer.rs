// ---------------------------------------------------------------------------
// Text normalizer
// ---------------------------------------------------------------------------

/// Human-readable description of the transform, one entry per step.
/// Served verbatim by the `/dataset/normalize` endpoint; not derived from
/// the code, so keep the two in sync when the transform changes.
pub const NORMALIZATION_STEPS: [&str; 4] = [
    "Converted to lowercase",
    "Removed punctuation and special characters",
    "Removed extra whitespace",
    "Standardized format",
];

/// Normalize a single line of text.
///
/// Steps, applied in order:
/// 1. Lowercase (Unicode simple mapping).
/// 2. Drop every ASCII punctuation character (the 32-character
///    [`char::is_ascii_punctuation`] set); non-ASCII punctuation stays.
/// 3. Collapse each run of whitespace into a single space.
/// 4. Trim leading/trailing whitespace.
///
/// Pure and idempotent. Empty or whitespace-only input yields `""`.
pub fn normalize(line: &str) -> String {
    let lowered = line.to_lowercase();

    // Punctuation removal can expose new leading/trailing whitespace
    // ("- x -" → "  x  "), so trimming has to happen after this pass.
    let stripped: String = lowered
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    // split_whitespace collapses internal runs and drops the edges in one go.
    let mut out = String::with_capacity(stripped.len());
    for word in stripped.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
