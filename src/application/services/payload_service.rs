//! Payload encoding pipeline.

use crate::domain::encoders::{self, EncodeContext};
use crate::domain::schema;
use crate::domain::tracking::{UtmParams, wrap_payload};
use crate::domain::{ContentKind, FieldMap};
use crate::error::AppError;
use crate::utils::sanitize::sanitize;
use tracing::debug;

/// Result of encoding one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOutcome {
    pub kind: ContentKind,
    pub payload: String,
    /// Whether the payload has content a renderer can use.
    pub ready: bool,
}

/// Turns form fields into the text embedded in a QR code.
///
/// # Pipeline
///
/// 1. Check the fields against the kind's schema
/// 2. Sanitize every text value to ASCII
/// 3. Encode with the registered encoder
/// 4. Optionally wrap the payload into a tracking redirect link
pub struct PayloadService {
    origin: String,
}

impl PayloadService {
    /// Creates a service producing links under `origin`.
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Encodes `fields` for `kind` with the current clock.
    ///
    /// When `tracking` is given and the payload is ready, the result points at
    /// this service's `/redirect` endpoint with the payload as `to`. An empty
    /// payload is never wrapped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `fields` does not match the
    /// schema of `kind`.
    pub fn encode(
        &self,
        kind: ContentKind,
        fields: FieldMap,
        tracking: Option<UtmParams>,
    ) -> Result<EncodeOutcome, AppError> {
        self.encode_with(kind, fields, tracking, &EncodeContext::new(&self.origin))
    }

    /// Same as [`PayloadService::encode`] with an explicit context.
    pub fn encode_with(
        &self,
        kind: ContentKind,
        fields: FieldMap,
        tracking: Option<UtmParams>,
        ctx: &EncodeContext,
    ) -> Result<EncodeOutcome, AppError> {
        schema::validate(kind, &fields)?;

        let fields = fields.map_text(sanitize);
        let raw = encoders::encode(kind, &fields, ctx);
        let ready = !raw.trim().is_empty();

        let payload = match tracking {
            Some(utm) if ready => wrap_payload(&self.origin, &raw, &utm.map_values(sanitize)),
            _ => raw,
        };

        debug!(%kind, ready, len = payload.len(), "Payload encoded");
        metrics::counter!("qr_payloads_encoded_total", "kind" => kind.as_str()).increment(1);

        Ok(EncodeOutcome {
            kind,
            payload,
            ready,
        })
    }
}
