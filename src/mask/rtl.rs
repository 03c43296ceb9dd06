//!
//! Format mirroring for right-to-left masks.
//!

/// Mirror a format string.
///
/// Reverses the format char-wise and swaps the bracket pairs.
/// Reversing puts each escaping backslash *behind* its bracket;
/// those pairs are patched back in front before the swap, so escaped
/// brackets stay literals instead of becoming delimiters.
pub(crate) fn mirror_format(format: &str) -> String {
    let reversed: String = format.chars().rev().collect();
    reversed
        .replace("[\\", "\\]")
        .replace("]\\", "\\[")
        .replace("{\\", "\\}")
        .replace("}\\", "\\{")
        .chars()
        .map(|c| match c {
            '[' => ']',
            ']' => '[',
            '{' => '}',
            '}' => '{',
            c => c,
        })
        .collect()
}
