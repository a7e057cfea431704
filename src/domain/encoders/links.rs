//! URL passthrough, plain text and the multi-platform redirect link.

use super::EncodeContext;
use crate::domain::fields::FieldMap;
use url::form_urlencoded;

/// Path of the multi-platform dispatcher relative to the service origin.
pub const MULTIPLATFORM_PATH: &str = "/multiplatform";

/// Encodes `url`, `pdf`, `image`, `video`, `app` and `social` kinds.
///
/// The URL is used verbatim; scheme and host are the caller's concern.
pub fn encode_url(fields: &FieldMap, _ctx: &EncodeContext) -> String {
    fields.text("url").to_string()
}

pub fn encode_text(fields: &FieldMap, _ctx: &EncodeContext) -> String {
    fields.text("text").to_string()
}

/// Builds the dispatcher link for a multi-platform QR code.
///
/// Only non-empty targets become query parameters; the fallback travels as
/// `u`. With no targets at all the link has no query and the dispatcher
/// answers 400 when scanned.
pub fn encode_multi(fields: &FieldMap, ctx: &EncodeContext) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    for (field, param) in [
        ("ios", "ios"),
        ("android", "android"),
        ("desktop", "desktop"),
        ("fallback", "u"),
    ] {
        let value = fields.text(field);
        if !value.is_empty() {
            query.append_pair(param, value);
        }
    }
    let query = query.finish();

    if query.is_empty() {
        format!("{}{}", ctx.origin, MULTIPLATFORM_PATH)
    } else {
        format!("{}{}?{}", ctx.origin, MULTIPLATFORM_PATH, query)
    }
}
