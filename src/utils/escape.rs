//! Field escaping dialects used by the payload encoders.

/// Escapes a free-text value for a vCard or iCalendar content line.
///
/// Backslash is handled first so the escapes inserted for `\n`, `,` and `;`
/// are not doubled.
///
/// ```
/// use qrlink::utils::escape::escape_text;
///
/// assert_eq!(escape_text("Acme, Inc; R&D\nFloor 2"), "Acme\\, Inc\\; R&D\\nFloor 2");
/// ```
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            other => out.push(other),
        }
    }
    out
}

/// Escapes an SSID or password for a `WIFI:` payload.
///
/// Each of `\`, `;`, `,`, `:` and `"` is prefixed with a backslash.
pub fn escape_wifi(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | ';' | ',' | ':' | '"') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
