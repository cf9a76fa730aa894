// Fingerprint derivation
//
// A fingerprint is a display-oriented alternate key, not a cryptographic hash:
//
//   HASH-<digits of id>-<digits of content, or content length if none>
//
// The content part is capped at MAX_FINGERPRINT_DIGITS characters.

/// Prefix shared by every fingerprint
pub const FINGERPRINT_PREFIX: &str = "HASH";

/// Longest content part kept in a fingerprint
pub const MAX_FINGERPRINT_DIGITS: usize = 15;

/// Derive the fingerprint for a message id and its content.
///
/// The sequence part is taken verbatim from the id's digits, so `MSG001`
/// contributes `001`, not `1`. Only ASCII digits count on either side.
pub fn derive_fingerprint(id: &str, content: &str) -> String {
    let seq = ascii_digits(id);

    let mut digits = ascii_digits(content);
    if digits.is_empty() {
        digits = content.chars().count().to_string();
    }
    // Digits are ASCII, so byte truncation lands on a char boundary
    digits.truncate(MAX_FINGERPRINT_DIGITS);

    format!("{}-{}-{}", FINGERPRINT_PREFIX, seq, digits)
}

fn ascii_digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}
