//! ASCII sanitization for user-supplied text.
//!
//! QR scanners and the payload formats handled by this crate are far more
//! reliable with plain ASCII, so every free-text field is normalized before
//! it reaches an encoder.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Reduces arbitrary text to printable ASCII plus `\n`, `\r` and `\t`.
///
/// # Rules
///
/// 1. Turkish dotless `ı` becomes `i`, dotted capital `İ` becomes `I`
/// 2. Text is decomposed (NFD) and combining marks are dropped, so
///    `é` becomes `e` and `ş` becomes `s`
/// 3. Anything outside `0x20..=0x7E`, `\n`, `\r`, `\t` is removed
///
/// The function is total and idempotent: its output is pure ASCII, which
/// every rule above leaves untouched.
///
/// # Examples
///
/// ```
/// use qrlink::utils::sanitize::sanitize;
///
/// assert_eq!(sanitize("Şişli İstanbul"), "Sisli Istanbul");
/// assert_eq!(sanitize("café ☕"), "cafe ");
/// ```
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            'ı' => 'i',
            'İ' => 'I',
            other => other,
        })
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| is_allowed(*c))
        .collect()
}

fn is_allowed(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\t' | '\x20'..='\x7E')
}
