//! Payload encoders, one per [`ContentKind`].
//!
//! Every encoder is a plain function `fn(&FieldMap, &EncodeContext) -> String`.
//! Encoders never fail: absent fields read as empty values and produce a
//! structurally valid (possibly empty) payload.
//!
//! # Registry
//!
//! [`encoder_for`] maps each kind to its function. Adding a kind to
//! [`ContentKind`] is a compile error until it is registered here.
//!
//! # Example
//!
//! ```
//! use qrlink::domain::encoders::{EncodeContext, encode};
//! use qrlink::domain::{ContentKind, FieldMap};
//!
//! let fields = FieldMap::new().with_text("number", "+90 555 111 22 33");
//! let ctx = EncodeContext::new("https://qr.example.com");
//!
//! assert_eq!(encode(ContentKind::Phone, &fields, &ctx), "tel:+905551112233");
//! ```

pub mod contact;
pub mod event;
pub mod links;
pub mod location;
pub mod messaging;
pub mod payment;
pub mod wifi;

use crate::domain::content_kind::ContentKind;
use crate::domain::fields::FieldMap;
use chrono::{DateTime, Local};

/// Signature shared by all encoders.
pub type EncodeFn = fn(&FieldMap, &EncodeContext) -> String;

/// Request-independent inputs some encoders need.
#[derive(Debug, Clone)]
pub struct EncodeContext {
    /// Public origin of this service, without trailing slash.
    pub origin: String,
    /// Clock reading used for generated identifiers.
    pub now: DateTime<Local>,
}

impl EncodeContext {
    /// Creates a context reading the clock now.
    pub fn new(origin: impl Into<String>) -> Self {
        Self::at(origin, Local::now())
    }

    /// Creates a context with a fixed clock.
    pub fn at(origin: impl Into<String>, now: DateTime<Local>) -> Self {
        Self {
            origin: origin.into().trim_end_matches('/').to_string(),
            now,
        }
    }
}

/// Returns the encoder registered for `kind`.
pub fn encoder_for(kind: ContentKind) -> EncodeFn {
    match kind {
        ContentKind::Url
        | ContentKind::Pdf
        | ContentKind::Image
        | ContentKind::Video
        | ContentKind::App
        | ContentKind::Social => links::encode_url,
        ContentKind::Text => links::encode_text,
        ContentKind::Multi => links::encode_multi,
        ContentKind::Email => messaging::encode_email,
        ContentKind::Phone => messaging::encode_phone,
        ContentKind::Sms => messaging::encode_sms,
        ContentKind::Whatsapp => messaging::encode_whatsapp,
        ContentKind::Skype => messaging::encode_skype,
        ContentKind::Zoom => messaging::encode_zoom,
        ContentKind::Wifi => wifi::encode_wifi,
        ContentKind::Vcard => contact::encode_vcard,
        ContentKind::Event => event::encode_event,
        ContentKind::Crypto => payment::encode_crypto,
        ContentKind::Location => location::encode_location,
    }
}

/// Encodes `fields` with the encoder registered for `kind`.
pub fn encode(kind: ContentKind, fields: &FieldMap, ctx: &EncodeContext) -> String {
    encoder_for(kind)(fields, ctx)
}

/// Sub-delimiters left bare by URI component encoding.
const COMPONENT_KEEP: [char; 5] = ['!', '*', '\'', '(', ')'];

/// Percent-encodes a URI component.
///
/// Unreserved characters and `! * ' ( )` pass through unescaped.
pub(crate) fn pct(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut buf = [0u8; 4];

    for c in value.chars() {
        if COMPONENT_KEEP.contains(&c) {
            out.push(c);
        } else {
            out.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }

    out
}

/// Formats `?name=value` or `&name=value` depending on whether a query has
/// already been started.
pub(crate) fn query_param(started: bool, name: &str, value: &str) -> String {
    format!("{}{}={}", if started { '&' } else { '?' }, name, pct(value))
}
