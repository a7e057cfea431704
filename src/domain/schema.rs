//! Per-kind field schemas.
//!
//! Each [`ContentKind`] declares the keys it reads and their value type.
//! Requests are checked against the schema at the HTTP boundary so that a
//! misspelled key is reported instead of silently encoding an empty value.
//! Missing keys are always allowed.

use crate::domain::content_kind::ContentKind;
use crate::domain::fields::{FieldMap, FieldValue};
use serde::Serialize;

/// Expected type of a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Flag,
}

/// A single declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub key: &'static str,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

const fn text(key: &'static str) -> FieldSpec {
    FieldSpec {
        key,
        field_type: FieldType::Text,
    }
}

const fn flag(key: &'static str) -> FieldSpec {
    FieldSpec {
        key,
        field_type: FieldType::Flag,
    }
}

const URL_FIELDS: &[FieldSpec] = &[text("url")];
const TEXT_FIELDS: &[FieldSpec] = &[text("text")];
const EMAIL_FIELDS: &[FieldSpec] = &[text("to"), text("subject"), text("body")];
const PHONE_FIELDS: &[FieldSpec] = &[text("number")];
const MESSAGE_FIELDS: &[FieldSpec] = &[text("number"), text("text")];
const SKYPE_FIELDS: &[FieldSpec] = &[text("username")];
const ZOOM_FIELDS: &[FieldSpec] = &[text("meeting")];
const WIFI_FIELDS: &[FieldSpec] = &[
    text("auth"),
    text("ssid"),
    text("password"),
    flag("hidden"),
];
const VCARD_FIELDS: &[FieldSpec] = &[
    text("version"),
    text("title"),
    text("firstName"),
    text("lastName"),
    text("mobile"),
    text("phone"),
    text("fax"),
    text("email"),
    text("website"),
    text("org"),
    text("role"),
    text("addr"),
    text("postal"),
    text("city"),
    text("country"),
    text("status"),
];
const EVENT_FIELDS: &[FieldSpec] = &[
    text("summary"),
    text("location"),
    text("description"),
    text("start"),
    text("end"),
];
const CRYPTO_FIELDS: &[FieldSpec] = &[text("coin"), text("address"), text("amount")];
const LOCATION_FIELDS: &[FieldSpec] = &[text("lat"), text("lng"), text("label"), flag("maps")];
const MULTI_FIELDS: &[FieldSpec] = &[
    text("ios"),
    text("android"),
    text("desktop"),
    text("fallback"),
];

/// Returns the declared fields for `kind`.
pub fn fields_for(kind: ContentKind) -> &'static [FieldSpec] {
    match kind {
        ContentKind::Url
        | ContentKind::Pdf
        | ContentKind::Image
        | ContentKind::Video
        | ContentKind::App
        | ContentKind::Social => URL_FIELDS,
        ContentKind::Text => TEXT_FIELDS,
        ContentKind::Email => EMAIL_FIELDS,
        ContentKind::Phone => PHONE_FIELDS,
        ContentKind::Sms | ContentKind::Whatsapp => MESSAGE_FIELDS,
        ContentKind::Skype => SKYPE_FIELDS,
        ContentKind::Zoom => ZOOM_FIELDS,
        ContentKind::Wifi => WIFI_FIELDS,
        ContentKind::Vcard => VCARD_FIELDS,
        ContentKind::Event => EVENT_FIELDS,
        ContentKind::Crypto => CRYPTO_FIELDS,
        ContentKind::Location => LOCATION_FIELDS,
        ContentKind::Multi => MULTI_FIELDS,
    }
}

/// Schema violations detected before encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("Unknown field '{key}' for kind '{kind}'")]
    UnknownField { kind: ContentKind, key: String },

    #[error("Field '{key}' for kind '{kind}' must be {expected:?}")]
    WrongType {
        kind: ContentKind,
        key: String,
        expected: FieldType,
    },
}

/// Checks every present key of `fields` against the schema of `kind`.
///
/// # Errors
///
/// Returns the first [`SchemaError`] found, in key order.
pub fn validate(kind: ContentKind, fields: &FieldMap) -> Result<(), SchemaError> {
    let specs = fields_for(kind);

    for (key, value) in fields.iter() {
        let spec = specs
            .iter()
            .find(|spec| spec.key == key)
            .ok_or_else(|| SchemaError::UnknownField {
                kind,
                key: key.clone(),
            })?;

        let matches = matches!(
            (spec.field_type, value),
            (FieldType::Text, FieldValue::Text(_)) | (FieldType::Flag, FieldValue::Flag(_))
        );
        if !matches {
            return Err(SchemaError::WrongType {
                kind,
                key: key.clone(),
                expected: spec.field_type,
            });
        }
    }

    Ok(())
}
