//! vCard contact cards (versions 2.1, 3.0 and 4.0).

use super::EncodeContext;
use crate::domain::fields::FieldMap;
use crate::utils::escape::escape_text;

const SUPPORTED_VERSIONS: [&str; 3] = ["2.1", "3.0", "4.0"];
const DEFAULT_VERSION: &str = "3.0";

/// Optional single-value properties emitted before `ADR`: (field, property).
const CONTACT_PROPERTIES: [(&str, &str); 7] = [
    ("org", "ORG"),
    ("role", "TITLE"),
    ("email", "EMAIL;TYPE=INTERNET"),
    ("website", "URL"),
    ("mobile", "TEL;TYPE=CELL"),
    ("phone", "TEL;TYPE=WORK,VOICE"),
    ("fax", "TEL;TYPE=FAX"),
];

/// Encodes a contact card.
///
/// `N:` is always present; `FN:` and every other property only when its
/// source field is non-empty. An unsupported `version` falls back to 3.0.
pub fn encode_vcard(fields: &FieldMap, _ctx: &EncodeContext) -> String {
    let version = match fields.text("version") {
        v if SUPPORTED_VERSIONS.contains(&v) => v,
        _ => DEFAULT_VERSION,
    };

    let first = fields.text("firstName");
    let last = fields.text("lastName");

    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        format!("VERSION:{version}"),
        format!("N:{};{};;;", escape_text(last), escape_text(first)),
    ];

    let full_name = [fields.text("title"), first, last]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if !full_name.is_empty() {
        lines.push(format!("FN:{}", escape_text(&full_name)));
    }

    for (field, property) in CONTACT_PROPERTIES {
        push_property(&mut lines, property, fields.text(field));
    }
    if let Some(adr) = address_line(fields) {
        lines.push(adr);
    }
    push_property(&mut lines, "NOTE", fields.text("status"));

    lines.push("END:VCARD".to_string());
    lines.join("\n")
}

fn push_property(lines: &mut Vec<String>, property: &str, value: &str) {
    if !value.is_empty() {
        lines.push(format!("{property}:{}", escape_text(value)));
    }
}

/// `ADR;TYPE=WORK:;;<street>;<city>;;<postal>;<country>` when any part is set.
fn address_line(fields: &FieldMap) -> Option<String> {
    let street = fields.text("addr");
    let city = fields.text("city");
    let postal = fields.text("postal");
    let country = fields.text("country");

    if [street, city, postal, country].iter().all(|s| s.is_empty()) {
        return None;
    }

    Some(format!(
        "ADR;TYPE=WORK:;;{};{};;{};{}",
        escape_text(street),
        escape_text(city),
        escape_text(postal),
        escape_text(country)
    ))
}
